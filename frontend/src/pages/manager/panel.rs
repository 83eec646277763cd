use leptos::*;

use super::{
    components::{BillingSection, ClientsSection, MembersSection, TasksSection},
    view_model::use_manager_view_model,
};
use crate::components::{
    cards::TaskStatsCards, empty_state::EmptyState, error::InlineErrorMessage,
    layout::LoadingSpinner,
};

#[component]
pub fn ManagerDashboardPage() -> impl IntoView {
    let vm = use_manager_view_model();
    let orgs = vm.organizations.state();
    let organization = Signal::derive(move || vm.selected.get());
    let clients = Signal::derive(move || vm.clients.state().with(|s| s.items()));
    let members = Signal::derive(move || vm.members.state().with(|s| s.items()));
    let current_plan = Signal::derive(move || {
        vm.selected_organization()
            .and_then(|org| org.subscription_plan_name)
    });
    let orgs_error = Signal::derive(move || orgs.with(|s| s.error().cloned()));

    view! {
        <div class="space-y-8">
            <div class="flex flex-wrap items-center justify-between gap-4">
                <div>
                    <h1 class="text-2xl font-bold text-fg">
                        {move || vm.selected_organization().map(|o| o.name).unwrap_or_else(|| "Manager dashboard".into())}
                    </h1>
                    <p class="text-sm text-fg-muted">"Clients, tasks and people of your organization."</p>
                </div>
                <div class="flex items-center gap-3">
                    <Show when=move || orgs.with(|s| s.items().len() > 1)>
                        <select
                            aria-label="Organization"
                            class="rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm"
                            on:change=move |ev| vm.selected.set(event_target_value(&ev).parse().ok())
                        >
                            {move || orgs.get().items().into_iter().map(|org| {
                                let id = org.id;
                                view! {
                                    <option value=id.to_string() selected=move || vm.selected.get() == Some(id)>{org.name}</option>
                                }
                            }).collect_view()}
                        </select>
                    </Show>
                    <a href="/manager/edit-organization" class="text-sm text-action-primary-bg hover:underline">
                        "Edit organization"
                    </a>
                </div>
            </div>
            <InlineErrorMessage error=orgs_error />
            {move || {
                let current = orgs.get();
                if current.is_loading() {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                if current.data().is_some_and(Vec::is_empty) {
                    return view! {
                        <EmptyState
                            title="No organization yet"
                            description="Ask an administrator to link your account to an organization."
                            icon="fa-building"
                        />
                    }.into_view();
                }
                ().into_view()
            }}

            <TaskStatsCards state=vm.stats.state() />
            <TasksSection hook=vm.tasks organization=organization clients=clients members=members />
            <div class="grid gap-8 lg:grid-cols-2">
                <ClientsSection hook=vm.clients organization=organization />
                <MembersSection hook=vm.members organization=organization />
            </div>
            <BillingSection billing=vm.billing current_plan=current_plan />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::manager_user, ssr::render_as};

    #[test]
    fn dashboard_renders_every_section() {
        let html = render_as(Some(manager_user()), || view! { <ManagerDashboardPage /> });
        assert!(html.contains("Manager dashboard"));
        assert!(html.contains("Create task"));
        assert!(html.contains("Add client"));
        assert!(html.contains("Team members"));
        assert!(html.contains("Subscription"));
        assert!(html.contains("/manager/edit-organization"));
    }
}
