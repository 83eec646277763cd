use leptos::*;

use crate::{components::layout::SuccessMessage, utils::navigation::query_param};

/// (href, title, blurb) per sign-in portal.
pub const PORTALS: [(&str, &str, &str); 3] = [
    ("/admin-login", "Administrator", "Platform owners and administrators"),
    ("/manager/login", "Manager", "Run your organization, clients and team"),
    ("/user/login", "Team member", "See and complete the tasks assigned to you"),
];

/// `registered` overrides the `?registered=1` query flag.
#[component]
pub fn PortalPage(#[prop(optional)] registered: Option<bool>) -> impl IntoView {
    let registered = registered.unwrap_or_else(|| query_param("registered").as_deref() == Some("1"));
    view! {
        <div class="min-h-screen bg-surface flex items-center justify-center px-4">
            <div class="max-w-4xl w-full space-y-8">
                {registered.then(|| view! {
                    <SuccessMessage message="Your organization is registered. Sign in through the manager portal." />
                })}
                <h1 class="text-3xl font-extrabold text-fg text-center">"Choose your portal"</h1>
                <div class="grid gap-6 md:grid-cols-3">
                    {PORTALS.iter().map(|(href, title, blurb)| view! {
                        <a href=*href class="block bg-surface-elevated rounded-lg shadow p-6 hover:shadow-lg">
                            <h2 class="text-lg font-semibold text-fg">{*title}</h2>
                            <p class="mt-2 text-sm text-fg-muted">{*blurb}</p>
                        </a>
                    }).collect_view()}
                </div>
                <p class="text-center text-sm text-fg-muted">
                    "New here? "
                    <a href="/register" class="text-action-primary-bg hover:underline">"Register your organization"</a>
                </p>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn portal_lists_each_login() {
        let html = render_to_string(|| view! { <PortalPage /> });
        for (href, _, _) in PORTALS {
            assert!(html.contains(href));
        }
        assert!(!html.contains("is registered"));
    }

    #[test]
    fn registered_flag_shows_banner() {
        let html = render_to_string(|| view! { <PortalPage registered=true /> });
        assert!(html.contains("Your organization is registered"));
    }
}
