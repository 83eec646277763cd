use leptos::*;

use crate::{
    api::{TaskPriority, TaskStatus},
    utils::filter::{TaskFilter, TaskSort, ALL},
};

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let id = format!("field-{}", label.to_lowercase().replace(' ', "-"));
    view! {
        <div>
            <label for=id.clone() class="block text-sm font-medium text-fg-muted">{label}</label>
            <input
                id=id
                type=input_type
                placeholder=placeholder
                required=required
                class="mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg text-fg px-3 py-2 text-sm"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn TextAreaField(#[prop(into)] label: String, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label class="block text-sm font-medium text-fg-muted">
            {label}
            <textarea
                rows="3"
                class="mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg text-fg px-3 py-2 text-sm"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

/// Search box, status/priority selects and sort order over a [`TaskFilter`].
#[component]
pub fn TaskFilterBar(filter: RwSignal<TaskFilter>) -> impl IntoView {
    let active = move || filter.with(TaskFilter::active_count);
    view! {
        <div class="flex flex-wrap items-end gap-3 mb-4">
            <input
                type="search"
                placeholder="Search tasks"
                class="rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm"
                prop:value=move || filter.with(|f| f.search.clone())
                on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
            />
            <select
                class="rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm"
                on:change=move |ev| filter.update(|f| f.set_status(&event_target_value(&ev)))
            >
                <option value=ALL selected=move || filter.with(|f| f.status.is_none())>"All statuses"</option>
                {TaskStatus::ALL.into_iter().map(|s| view! {
                    <option value=s.as_str() selected=move || filter.with(|f| f.status == Some(s))>{s.label()}</option>
                }).collect_view()}
            </select>
            <select
                class="rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm"
                on:change=move |ev| filter.update(|f| f.set_priority(&event_target_value(&ev)))
            >
                <option value=ALL selected=move || filter.with(|f| f.priority.is_none())>"All priorities"</option>
                {TaskPriority::ALL.into_iter().map(|p| view! {
                    <option value=p.as_str() selected=move || filter.with(|f| f.priority == Some(p))>{p.label()}</option>
                }).collect_view()}
            </select>
            <select
                class="rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm"
                on:change=move |ev| filter.update(|f| f.sort = TaskSort::parse(&event_target_value(&ev)))
            >
                {TaskSort::ALL.into_iter().map(|s| view! {
                    <option value=s.as_str() selected=move || filter.with(|f| f.sort == s)>{s.label()}</option>
                }).collect_view()}
            </select>
            <Show when=move || { active() > 0 }>
                <button
                    type="button"
                    class="text-sm text-action-primary-bg hover:underline"
                    on:click=move |_| filter.update(TaskFilter::reset)
                >
                    {move || format!("Clear filters ({})", active())}
                </button>
            </Show>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn filter_bar_shows_active_count() {
        let html = render_to_string(|| {
            let filter = create_rw_signal(TaskFilter {
                search: "audit".into(),
                status: Some(TaskStatus::Pending),
                ..Default::default()
            });
            view! { <TaskFilterBar filter=filter /> }
        });
        assert!(html.contains("Clear filters (2)"));
        assert!(html.contains("PRIORITY_DESC"));
    }

    #[test]
    fn text_field_links_label() {
        let html = render_to_string(|| {
            let value = create_rw_signal(String::from("mila"));
            view! { <TextField label="User name" value=value required=true /> }
        });
        assert!(html.contains("for=\"field-user-name\""));
        assert!(html.contains("User name"));
    }
}
