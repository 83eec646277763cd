use leptos::{ev::SubmitEvent, *};

use crate::{
    api::{ApiError, RecordPayload},
    components::{error::InlineErrorMessage, layout::LoadingSpinner},
    state::records::{use_records, RecordQuery},
};

/// Profile records kept for one client. Mounted while the client row is open.
#[component]
pub fn ClientRecords(client_id: i64) -> impl IntoView {
    let records = use_records();
    let profile_type = create_rw_signal(String::new());
    let json_data = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);

    create_effect(move |prev: Option<()>| {
        if prev.is_none() {
            records.spawn_fetch(RecordQuery::ByClient(client_id));
        }
    });

    let add = create_action(move |payload: &RecordPayload| {
        let payload = payload.clone();
        async move { records.add(payload).await }
    });
    let remove = create_action(move |id: &i64| {
        let id = *id;
        async move { records.remove(id).await }
    });
    create_effect(move |_| match add.value().get() {
        Some(Ok(_)) => {
            profile_type.set(String::new());
            json_data.set(String::new());
            error.set(None);
        }
        Some(Err(err)) => error.set(Some(err)),
        None => {}
    });
    create_effect(move |_| {
        if let Some(Err(err)) = remove.value().get() {
            error.set(Some(err));
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        add.dispatch(RecordPayload {
            client_id,
            profile_type: profile_type.get_untracked().trim().to_string(),
            json_data: json_data.get_untracked(),
        });
    };
    let state = records.state();

    view! {
        <div class="mt-2 space-y-2 border-l-2 border-border pl-4">
            {move || {
                let current = state.get();
                if current.is_loading() {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                let items = current.items();
                if items.is_empty() {
                    return view! { <p class="text-xs text-fg-muted">"No records for this client."</p> }.into_view();
                }
                items.into_iter().map(|record| {
                    let id = record.id;
                    view! {
                        <div class="flex items-start justify-between text-xs">
                            <div>
                                <p class="font-medium text-fg">{record.profile_type.clone().unwrap_or_else(|| "Record".into())}</p>
                                <pre class="text-fg-muted whitespace-pre-wrap">{record.json_data.clone().unwrap_or_default()}</pre>
                            </div>
                            <button class="text-status-error-text hover:underline" on:click=move |_| remove.dispatch(id)>
                                "Remove"
                            </button>
                        </div>
                    }
                }).collect_view()
            }}
            <form class="flex flex-wrap gap-2" on:submit=on_submit>
                <input
                    type="text"
                    aria-label="Profile type"
                    placeholder="Profile type"
                    class="rounded-md border border-form-control-border bg-form-control-bg px-2 py-1 text-xs"
                    prop:value=move || profile_type.get()
                    on:input=move |ev| profile_type.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    aria-label="Record data"
                    placeholder=r#"{"allergies": []}"#.to_string()
                    class="flex-1 rounded-md border border-form-control-border bg-form-control-bg px-2 py-1 text-xs font-mono"
                    prop:value=move || json_data.get()
                    on:input=move |ev| json_data.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="rounded-md bg-action-primary-bg px-2 py-1 text-xs text-action-primary-text disabled:opacity-50"
                    disabled=move || add.pending().get()
                >
                    "Add record"
                </button>
            </form>
            <InlineErrorMessage error=error />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::manager_user, ssr::render_as};

    #[test]
    fn record_panel_renders_empty_state_and_form() {
        let html = render_as(Some(manager_user()), || view! { <ClientRecords client_id=4 /> });
        assert!(html.contains("Add record"));
        assert!(html.contains("No records for this client."));
        assert!(html.contains("allergies"));
    }
}
