use crate::{
    api::Role,
    components::{guard::HOME, notifications::NotificationBell},
    state::auth::use_auth,
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

const fn link(href: &'static str, label: &'static str) -> NavLink {
    NavLink { href, label }
}

/// Navigation entries for a signed-in role; settings is always last.
pub fn nav_links(role: &Role) -> Vec<NavLink> {
    let mut links = match role {
        Role::Admin | Role::Owner => vec![link("/admin/dashboard", "Dashboard")],
        Role::Manager => vec![
            link("/manager/dashboard", "Dashboard"),
            link("/manager/edit-organization", "Organization"),
        ],
        Role::User => vec![link("/user/dashboard", "My tasks")],
        Role::Other(_) => Vec::new(),
    };
    links.push(link("/settings", "Settings"));
    links
}

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);
    let links = move || auth.user_role().map(|role| nav_links(&role)).unwrap_or_default();
    let display_name = move || auth.user().map(|u| u.display_name()).unwrap_or_default();

    let on_logout = move |_| {
        set_menu_open.set(false);
        auth.logout();
        log::info!("Signed out");
        auth.api().navigator().redirect(HOME);
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="text-xl font-semibold text-fg">"TeamSync"</a>
                    <Show when=move || auth.is_authenticated()>
                        <div class="flex items-center gap-2">
                            <nav class="hidden lg:flex space-x-2">
                                {move || links().into_iter().map(|l| view! {
                                    <a href=l.href class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                        {l.label}
                                    </a>
                                }).collect_view()}
                            </nav>
                            <NotificationBell />
                            <span class="hidden lg:inline text-sm text-fg-muted">{display_name}</span>
                            <button
                                on:click=on_logout
                                class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                            >
                                "Log out"
                            </button>
                            <button
                                type="button"
                                class="lg:hidden p-2 rounded-md text-fg-muted hover:text-fg"
                                on:click=toggle_menu
                                aria-expanded=move || menu_open.get()
                                aria-controls="mobile-nav"
                            >
                                <span class="sr-only">
                                    {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                                </span>
                                <i class="fas fa-bars"></i>
                            </button>
                        </div>
                    </Show>
                </div>
                <Show when=move || menu_open.get()>
                    <nav id="mobile-nav" class="lg:hidden border-t border-border px-4 py-3 space-y-2">
                        {move || links().into_iter().map(|l| view! {
                            <a
                                href=l.href
                                class="block text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium"
                                on:click=move |_| set_menu_open.set(false)
                            >
                                {l.label}
                            </a>
                        }).collect_view()}
                    </nav>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4" role="alert">
            <i class="fas fa-exclamation-circle mr-2"></i>
            <span class="text-sm">{message}</span>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4" role="status">
            <i class="fas fa-check-circle mr-2"></i>
            <span class="text-sm">{message}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_follow_role() {
        let hrefs = |role: Role| nav_links(&role).iter().map(|l| l.href).collect::<Vec<_>>();
        assert_eq!(hrefs(Role::Owner), vec!["/admin/dashboard", "/settings"]);
        assert_eq!(
            hrefs(Role::Manager),
            vec!["/manager/dashboard", "/manager/edit-organization", "/settings"]
        );
        assert_eq!(hrefs(Role::User), vec!["/user/dashboard", "/settings"]);
        assert_eq!(hrefs(Role::Other("AUDITOR".into())), vec!["/settings"]);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{manager_user, regular_user};
    use crate::test_support::ssr::{render_as, render_to_string};

    #[test]
    fn header_renders_manager_links_and_bell() {
        let html = render_as(Some(manager_user()), || view! { <Header /> });
        assert!(html.contains("/manager/edit-organization"));
        assert!(html.contains("Log out"));
        assert!(html.contains("Notifications"));
    }

    #[test]
    fn header_hides_navigation_when_signed_out() {
        let html = render_as(None, || view! { <Header /> });
        assert!(html.contains("TeamSync"));
        assert!(!html.contains("Log out"));
    }

    #[test]
    fn layout_renders_children() {
        let html = render_as(Some(regular_user()), || {
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
        assert!(html.contains("/user/dashboard"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(|| {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="Could not load tasks" />
                    <SuccessMessage message="Saved" />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("Could not load tasks"));
        assert!(html.contains("Saved"));
    }
}
