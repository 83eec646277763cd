use leptos::*;

use crate::{
    api::Organization,
    components::{empty_state::EmptyState, error::InlineErrorMessage, layout::LoadingSpinner},
    state::organizations::OrganizationsHook,
    utils::format::format_price,
};

#[component]
pub fn OrganizationTable(
    hook: OrganizationsHook,
    on_edit: Callback<Organization>,
    on_delete: Callback<Organization>,
) -> impl IntoView {
    let state = hook.state();
    view! {
        {move || {
            let current = state.get();
            if current.is_loading() {
                return view! { <LoadingSpinner /> }.into_view();
            }
            if let Some(err) = current.error().cloned() {
                return view! { <InlineErrorMessage error=Signal::derive(move || Some(err.clone())) /> }.into_view();
            }
            let orgs = current.items();
            if orgs.is_empty() {
                return view! { <EmptyState title="No organizations yet" icon="fa-building" /> }.into_view();
            }
            view! {
                <table class="min-w-full divide-y divide-border text-sm">
                    <thead>
                        <tr class="text-left text-fg-muted">
                            <th class="py-2">"Name"</th>
                            <th>"Contact"</th>
                            <th>"Plan"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {orgs.into_iter().map(|org| {
                            let for_edit = org.clone();
                            let for_delete = org.clone();
                            let plan = match (&org.subscription_plan_name, org.subscription_plan_price) {
                                (Some(name), price) => format!("{} ({})", name, format_price(price)),
                                (None, _) => "-".into(),
                            };
                            view! {
                                <tr class="border-t border-border">
                                    <td class="py-2 font-medium text-fg">{org.name.clone()}</td>
                                    <td class="text-fg-muted">{org.contact_email.clone().unwrap_or_default()}</td>
                                    <td class="text-fg-muted">{plan}</td>
                                    <td class="text-right space-x-2">
                                        <button class="text-action-primary-bg hover:underline" on:click=move |_| on_edit.call(for_edit.clone())>"Edit"</button>
                                        <button class="text-status-error-text hover:underline" on:click=move |_| on_delete.call(for_delete.clone())>"Delete"</button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            }.into_view()
        }}
    }
}
