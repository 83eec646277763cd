use leptos::*;

use super::view_model::pick_organization;
use crate::{
    api::{ApiError, Organization, OrganizationPayload},
    components::{
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::{LoadingSpinner, SuccessMessage},
    },
    pages::admin::components::{OrganizationFields, OrganizationForm},
    state::organizations::{use_organizations, OrganizationScope},
    utils::{format::display_timestamp, navigation::query_param},
};

/// `/manager/edit-organization`: edits one of the manager's organizations,
/// `?id=` when given, otherwise the first.
#[component]
pub fn EditOrganizationPage(#[prop(optional)] organization_id: Option<i64>) -> impl IntoView {
    let organizations = use_organizations();
    let requested = organization_id.or_else(|| query_param("id").and_then(|raw| raw.parse().ok()));
    let fields = OrganizationFields::default();
    let editing = create_rw_signal(None::<i64>);
    let saved = create_rw_signal(None::<String>);
    let error = create_rw_signal(None::<ApiError>);

    create_effect(move |prev: Option<()>| {
        if prev.is_none() {
            organizations.spawn_fetch(OrganizationScope::Mine);
        }
    });

    create_effect(move |_| {
        let orgs = organizations.state().with(|s| s.items());
        if editing.get_untracked().is_some() {
            return;
        }
        let target = pick_organization(&orgs, requested)
            .and_then(|id| orgs.iter().find(|org| org.id == id));
        if let Some(org) = target {
            fields.load(org);
            editing.set(Some(org.id));
        }
    });

    let save = create_action(move |payload: &OrganizationPayload| {
        let payload = payload.clone();
        async move {
            let id = editing
                .get_untracked()
                .ok_or_else(|| ApiError::validation("No organization selected"))?;
            organizations.edit(id, payload).await
        }
    });
    create_effect(move |_| match save.value().get() {
        Some(Ok(org)) => {
            error.set(None);
            saved.set(Some(format!("{} updated", org.name)));
        }
        Some(Err(err)) => {
            saved.set(None);
            error.set(Some(err));
        }
        None => {}
    });

    let state = organizations.state();

    view! {
        <div class="max-w-3xl mx-auto space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-fg">"Edit organization"</h1>
                <a href="/manager/dashboard" class="text-sm text-action-primary-bg hover:underline">"Back to dashboard"</a>
            </div>
            {move || saved.get().map(|msg| view! { <SuccessMessage message=msg /> })}
            <InlineErrorMessage error=error />
            {move || {
                let current = state.get();
                if current.is_loading() {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                if let Some(err) = current.error() {
                    return view! { <p class="text-sm text-status-error-text">{err.error.clone()}</p> }.into_view();
                }
                if current.data().is_some_and(Vec::is_empty) {
                    return view! { <EmptyState title="No organization to edit" icon="fa-building" /> }.into_view();
                }
                ().into_view()
            }}
            <Show when=move || editing.get().is_some()>
                <p class="text-sm text-fg-muted">
                    "Plan: "
                    {move || {
                        let id = editing.get();
                        state.with(|s| s.items().into_iter().find(|org| Some(org.id) == id))
                            .map(|org| plan_summary(&org))
                            .unwrap_or_else(|| "-".into())
                    }}
                </p>
                <section class="bg-surface-elevated rounded-lg shadow p-6">
                    <OrganizationForm
                        fields=fields
                        submit_label="Save changes"
                        on_submit=Callback::new(move |payload| {
                            saved.set(None);
                            save.dispatch(payload);
                        })
                        pending=save.pending()
                    />
                </section>
            </Show>
        </div>
    }
}

/// Current plan line for an organization, `-` when it has none.
pub fn plan_summary(org: &Organization) -> String {
    match (&org.subscription_plan_name, &org.subscription_start_date) {
        (Some(plan), Some(since)) => format!("{} since {}", plan, display_timestamp(since)),
        (Some(plan), None) => plan.clone(),
        _ => "-".into(),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::manager_user, ssr::render_as};

    #[test]
    fn form_waits_for_an_organization() {
        let html = render_as(Some(manager_user()), || view! { <EditOrganizationPage organization_id=4 /> });
        assert!(html.contains("Edit organization"));
        assert!(!html.contains("Save changes"));
    }

    #[test]
    fn plan_summary_formats_start_date() {
        let org = Organization {
            id: 1,
            subscription_plan_name: Some("PRO".into()),
            subscription_start_date: Some("2024-03-01T09:30:00".into()),
            ..Default::default()
        };
        assert_eq!(plan_summary(&org), "PRO since 2024-03-01 09:30");
        assert_eq!(plan_summary(&Organization::default()), "-");
    }
}
