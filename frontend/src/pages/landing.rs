use leptos::*;

struct Feature {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "fa-building",
        title: "Organizations",
        body: "Run several teams from one account, each with its own clients and members.",
    },
    Feature {
        icon: "fa-list-check",
        title: "Tasks",
        body: "Assign work, set priorities and due dates, and follow progress in one place.",
    },
    Feature {
        icon: "fa-bell",
        title: "Notifications",
        body: "Everyone sees new assignments and comments as soon as they land.",
    },
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <header class="max-w-7xl mx-auto flex justify-between items-center py-6 px-4 sm:px-6 lg:px-8">
                <span class="text-2xl font-bold text-fg">"TeamSync"</span>
                <nav class="space-x-4">
                    <a href="/portal" class="text-sm font-medium text-fg-muted hover:text-fg">"Sign in"</a>
                    <a href="/register" class="text-sm font-medium text-action-primary-bg hover:underline">"Register organization"</a>
                </nav>
            </header>
            <section class="max-w-7xl mx-auto py-16 px-4 text-center">
                <h1 class="text-4xl font-extrabold text-fg sm:text-5xl">"Keep every team in sync"</h1>
                <p class="mt-4 max-w-2xl mx-auto text-lg text-fg-muted">
                    "Organizations, clients, tasks and comments for managers and their teams."
                </p>
                <div class="mt-8 flex justify-center gap-4">
                    <a href="/register" class="px-8 py-3 rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover font-medium">
                        "Get started"
                    </a>
                    <a href="/portal" class="px-8 py-3 rounded-md border border-border text-fg font-medium">
                        "Sign in"
                    </a>
                </div>
            </section>
            <section class="max-w-7xl mx-auto grid gap-6 md:grid-cols-3 px-4 pb-16">
                {FEATURES.iter().map(|f| view! {
                    <div class="bg-surface-elevated rounded-lg shadow p-6">
                        <i class=format!("fas {} text-2xl text-action-primary-bg", f.icon)></i>
                        <h3 class="mt-3 text-lg font-semibold text-fg">{f.title}</h3>
                        <p class="mt-2 text-sm text-fg-muted">{f.body}</p>
                    </div>
                }).collect_view()}
            </section>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn landing_links_to_portal_and_registration() {
        let html = render_to_string(|| view! { <LandingPage /> });
        assert!(html.contains("href=\"/portal\""));
        assert!(html.contains("href=\"/register\""));
        assert!(html.contains("Notifications"));
    }
}
