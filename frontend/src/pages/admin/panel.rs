use leptos::*;

use super::{
    components::{OrganizationForm, OrganizationTable, UsersSection},
    view_model::use_admin_view_model,
};
use crate::components::{
    cards::TaskStatsCards,
    common::Button,
    confirm_dialog::ConfirmDialog,
    error::InlineErrorMessage,
    layout::SuccessMessage,
};

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let vm = use_admin_view_model();
    let saving = vm.save_action.pending();
    let deleting = vm.delete_action.pending();
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .with(|org| org.as_ref().map(|o| format!("Delete {}? This cannot be undone.", o.name)))
            .unwrap_or_default()
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-2xl font-bold text-fg">"Administration"</h1>
                <p class="text-sm text-fg-muted">"Every organization and account on the platform."</p>
            </div>

            <TaskStatsCards state=vm.stats.state() />

            {move || vm.message.get().map(|msg| view! { <SuccessMessage message=msg /> })}
            <InlineErrorMessage error=vm.action_error />

            <section class="bg-surface-elevated rounded-lg shadow p-6 space-y-4">
                <div class="flex items-center justify-between">
                    <h2 class="text-lg font-semibold text-fg">"Organizations"</h2>
                    <Button on_click=Callback::new(move |_| vm.open_create())>"New organization"</Button>
                </div>
                <Show when=move || vm.form_open.get()>
                    <OrganizationForm
                        fields=vm.form
                        submit_label={if vm.editing.get_untracked().is_some() { "Save changes" } else { "Create" }}
                        on_submit=Callback::new(move |payload| vm.save(payload))
                        on_cancel=Callback::new(move |_| vm.close_form())
                        pending=saving
                    />
                </Show>
                <OrganizationTable
                    hook=vm.organizations
                    on_edit=Callback::new(move |org| vm.open_edit(&org))
                    on_delete=Callback::new(move |org| vm.pending_delete.set(Some(org)))
                />
            </section>

            <section class="bg-surface-elevated rounded-lg shadow p-6 space-y-4">
                <h2 class="text-lg font-semibold text-fg">"Users"</h2>
                <UsersSection hook=vm.users />
            </section>

            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.with(Option::is_some))
                title="Delete organization".to_string()
                message=delete_message
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.pending_delete.set(None))
                pending=deleting
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::admin_user, ssr::render_as};

    #[test]
    fn dashboard_renders_sections_without_fetching() {
        let html = render_as(Some(admin_user()), || view! { <AdminDashboardPage /> });
        assert!(html.contains("Administration"));
        assert!(html.contains("Organizations"));
        assert!(html.contains("All users"));
        assert!(html.contains("New organization"));
        assert!(!html.contains("Delete organization"));
    }
}
