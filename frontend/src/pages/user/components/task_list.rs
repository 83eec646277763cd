use leptos::*;

use super::comments::CommentThread;
use crate::{
    api::{ApiError, Task},
    components::{empty_state::EmptyState, error::InlineErrorMessage, layout::LoadingSpinner},
    state::tasks::MyTasksHook,
    utils::{filter::TaskFilter, format::display_optional},
};

fn priority_badge(task: &Task) -> &'static str {
    use crate::api::TaskPriority::*;
    match task.priority.unwrap_or_default() {
        Urgent => "bg-status-error-bg text-status-error-text",
        High => "bg-status-warning-bg text-status-warning-text",
        Medium => "bg-status-info-bg text-status-info-text",
        Low => "bg-surface-muted text-fg-muted",
    }
}

#[component]
pub fn MyTaskList(hook: MyTasksHook, filter: RwSignal<TaskFilter>) -> impl IntoView {
    let expanded = create_rw_signal(None::<i64>);
    let error = create_rw_signal(None::<ApiError>);
    let toggle = create_action(move |id: &i64| {
        let id = *id;
        async move { hook.toggle_finish(id).await }
    });
    create_effect(move |_| {
        if let Some(result) = toggle.value().get() {
            error.set(result.err());
        }
    });

    let state = hook.state();
    let visible = create_memo(move |_| {
        let tasks = state.with(|s| s.items());
        filter.with(|f| f.apply(&tasks))
    });

    view! {
        <InlineErrorMessage error=error />
        {move || {
            let current = state.get();
            if current.is_loading() {
                return view! { <LoadingSpinner /> }.into_view();
            }
            if let Some(err) = current.error() {
                return view! { <p class="text-sm text-status-error-text">{err.error.clone()}</p> }.into_view();
            }
            let tasks = visible.get();
            if tasks.is_empty() {
                return view! {
                    <EmptyState title="Nothing assigned to you" description="New tasks from your manager show up here." icon="fa-mug-hot" />
                }.into_view();
            }
            view! {
                <ul class="space-y-3">
                    {tasks.into_iter().map(|task| {
                        let id = task.id;
                        let is_open = move || expanded.get() == Some(id);
                        view! {
                            <li class="bg-surface-elevated rounded-lg shadow p-4">
                                <div class="flex items-start gap-3">
                                    <input
                                        type="checkbox"
                                        aria-label="Finished"
                                        class="mt-1"
                                        checked=task.finished
                                        disabled=move || toggle.pending().get()
                                        on:change=move |_| toggle.dispatch(id)
                                    />
                                    <div class="flex-1">
                                        <p class={if task.finished { "font-medium text-fg-muted line-through" } else { "font-medium text-fg" }}>
                                            {task.title.clone()}
                                        </p>
                                        <p class="text-sm text-fg-muted">{task.description.clone().unwrap_or_default()}</p>
                                        <p class="text-xs text-fg-muted mt-1">
                                            {task.status.unwrap_or_default().label()}" · due "{display_optional(task.due_date.as_deref())}
                                        </p>
                                    </div>
                                    <span class=format!("text-xs rounded px-2 py-0.5 {}", priority_badge(&task))>
                                        {task.priority.unwrap_or_default().label()}
                                    </span>
                                    <button
                                        class="text-sm text-action-primary-bg hover:underline"
                                        on:click=move |_| expanded.update(|open| {
                                            *open = if *open == Some(id) { None } else { Some(id) };
                                        })
                                    >
                                        {move || if is_open() { "Hide comments" } else { "Comments" }}
                                    </button>
                                </div>
                                <Show when=is_open>
                                    <CommentThread task_id=id />
                                </Show>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            }.into_view()
        }}
    }
}
