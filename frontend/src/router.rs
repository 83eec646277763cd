use leptos::*;
use leptos_router::*;

use crate::{
    api::Role,
    components::{guard::RequireRole, layout::Layout},
    pages::{
        AdminDashboardPage, AdminLoginPage, DashboardDispatcher, EditOrganizationPage,
        LandingPage, ManagerDashboardPage, ManagerLoginPage, PortalPage, RegisterPage,
        SettingsPage, UserDashboardPage, UserLoginPage,
    },
    state::auth::AuthProvider,
};

/// Roles admitted by each protected path; empty admits any signed-in role.
pub fn roles_for(path: &str) -> Vec<Role> {
    match path {
        "/admin/dashboard" => vec![Role::Admin, Role::Owner],
        "/manager/dashboard" | "/manager/edit-organization" => vec![Role::Manager],
        "/user/dashboard" => vec![Role::User],
        "/settings" => vec![Role::User, Role::Manager, Role::Admin, Role::Owner],
        _ => Vec::new(),
    }
}

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=LandingPage/>
                    <Route path="/portal" view=|| view! { <PortalPage/> }/>
                    <Route path="/admin-login" view=AdminLoginPage/>
                    <Route path="/manager/login" view=ManagerLoginPage/>
                    <Route path="/user/login" view=UserLoginPage/>
                    <Route path="/register" view=RegisterPage/>
                    <Route path="/login" view=|| view! { <Redirect path="/"/> }/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/admin/dashboard" view=ProtectedAdmin/>
                    <Route path="/manager/dashboard" view=ProtectedManager/>
                    <Route path="/manager/edit-organization" view=ProtectedEditOrganization/>
                    <Route path="/user/dashboard" view=ProtectedUser/>
                    <Route path="/settings" view=ProtectedSettings/>
                    <Route path="/*any" view=|| view! { <Redirect path="/"/> }/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn Protected(path: &'static str, children: ChildrenFn) -> impl IntoView {
    view! {
        <Layout>
            <RequireRole allowed=roles_for(path)>{children()}</RequireRole>
        </Layout>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <Protected path="/dashboard"><DashboardDispatcher/></Protected> }
}

#[component]
fn ProtectedAdmin() -> impl IntoView {
    view! { <Protected path="/admin/dashboard"><AdminDashboardPage/></Protected> }
}

#[component]
fn ProtectedManager() -> impl IntoView {
    view! { <Protected path="/manager/dashboard"><ManagerDashboardPage/></Protected> }
}

#[component]
fn ProtectedEditOrganization() -> impl IntoView {
    view! { <Protected path="/manager/edit-organization"><EditOrganizationPage/></Protected> }
}

#[component]
fn ProtectedUser() -> impl IntoView {
    view! { <Protected path="/user/dashboard"><UserDashboardPage/></Protected> }
}

#[component]
fn ProtectedSettings() -> impl IntoView {
    view! { <Protected path="/settings"><SettingsPage/></Protected> }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{
        helpers::{manager_user, regular_user},
        ssr::render_as,
    };

    #[test]
    fn protected_page_renders_inside_layout_for_allowed_role() {
        let html = render_as(Some(regular_user()), || view! { <ProtectedUser/> });
        assert!(html.contains("TeamSync"));
        assert!(html.contains("Tasks assigned to you"));
    }

    #[test]
    fn outside_role_never_renders_the_page() {
        let html = render_as(Some(manager_user()), || view! { <ProtectedUser/> });
        assert!(!html.contains("Tasks assigned to you"));
    }
}
