use leptos::{ev::SubmitEvent, *};

use super::{
    portal::{LoginPortalConfig, ADMIN_PORTAL, MANAGER_PORTAL, USER_PORTAL},
    view_model::use_login_view_model,
};
use crate::components::{
    common::Button,
    forms::TextField,
    layout::ErrorMessage,
};

#[component]
pub fn LoginPortal(config: LoginPortalConfig) -> impl IntoView {
    let vm = use_login_view_model(config);
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4">
            <div class="max-w-md w-full space-y-8">
                <div class="text-center">
                    <h2 class="text-3xl font-extrabold text-fg">{config.title}</h2>
                    <p class="mt-2 text-sm text-fg-muted">{config.subtitle}</p>
                </div>
                {move || vm.error.get().map(|msg| view! { <ErrorMessage message=msg /> })}
                <form class="space-y-4" on:submit=on_submit>
                    <TextField label="Username" value=vm.username required=true />
                    <TextField label="Password" value=vm.password input_type="password" required=true />
                    <Button button_type="submit" class="w-full" loading=vm.pending()>
                        "Sign in"
                    </Button>
                </form>
                <p class="text-center text-sm">
                    <a href="/portal" class="text-action-primary-bg hover:underline">"Back to portal selection"</a>
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    view! { <LoginPortal config=ADMIN_PORTAL /> }
}

#[component]
pub fn ManagerLoginPage() -> impl IntoView {
    view! { <LoginPortal config=MANAGER_PORTAL /> }
}

#[component]
pub fn UserLoginPage() -> impl IntoView {
    view! { <LoginPortal config=USER_PORTAL /> }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_as;

    #[test]
    fn each_portal_renders_its_title() {
        let admin = render_as(None, || view! { <AdminLoginPage /> });
        assert!(admin.contains("Administrator sign in"));
        let manager = render_as(None, || view! { <ManagerLoginPage /> });
        assert!(manager.contains("Manager sign in"));
        let user = render_as(None, || view! { <UserLoginPage /> });
        assert!(user.contains("Team member sign in"));
        assert!(user.contains("type=\"password\""));
    }
}
