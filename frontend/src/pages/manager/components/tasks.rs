use leptos::{ev::SubmitEvent, *};

use crate::{
    api::{ApiError, ClientProfile, Task, TaskPayload, TaskPriority, UserSummary},
    components::{
        common::{Button, ButtonVariant},
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        error::InlineErrorMessage,
        forms::{TaskFilterBar, TextAreaField, TextField},
        layout::LoadingSpinner,
    },
    state::tasks::TasksHook,
    utils::{filter::TaskFilter, format::display_optional},
};

/// Tasks with no organization are shown to every organization.
pub fn tasks_for_organization(tasks: Vec<Task>, organization: Option<i64>) -> Vec<Task> {
    match organization {
        Some(id) => tasks
            .into_iter()
            .filter(|t| t.organization_id.map_or(true, |org| org == id))
            .collect(),
        None => tasks,
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

#[derive(Clone, Copy)]
struct TaskForm {
    title: RwSignal<String>,
    description: RwSignal<String>,
    priority: RwSignal<TaskPriority>,
    due_date: RwSignal<String>,
    client_id: RwSignal<String>,
    assignee: RwSignal<String>,
}

impl TaskForm {
    fn new() -> Self {
        Self {
            title: create_rw_signal(String::new()),
            description: create_rw_signal(String::new()),
            priority: create_rw_signal(TaskPriority::default()),
            due_date: create_rw_signal(String::new()),
            client_id: create_rw_signal(String::new()),
            assignee: create_rw_signal(String::new()),
        }
    }

    fn payload(&self, organization_id: Option<i64>) -> TaskPayload {
        let due = self.due_date.get_untracked();
        let assignee = self.assignee.get_untracked();
        TaskPayload {
            title: self.title.get_untracked().trim().to_string(),
            description: self.description.get_untracked(),
            priority: self.priority.get_untracked(),
            due_date: (!due.is_empty()).then(|| format!("{}T00:00:00", due)),
            client_id: parse_id(&self.client_id.get_untracked()),
            assigned_to_user_id: (!assignee.is_empty()).then_some(assignee),
            organization_id,
            ..Default::default()
        }
    }

    fn clear(&self) {
        self.title.set(String::new());
        self.description.set(String::new());
        self.priority.set(TaskPriority::default());
        self.due_date.set(String::new());
        self.client_id.set(String::new());
        self.assignee.set(String::new());
    }
}

#[derive(Clone)]
enum TaskCommand {
    Create(TaskPayload),
    Toggle(i64),
    Delete(i64),
}

#[component]
pub fn TasksSection(
    hook: TasksHook,
    organization: Signal<Option<i64>>,
    #[prop(into)] clients: Signal<Vec<ClientProfile>>,
    #[prop(into)] members: Signal<Vec<UserSummary>>,
) -> impl IntoView {
    let form = TaskForm::new();
    let filter = create_rw_signal(TaskFilter::default());
    let error = create_rw_signal(None::<ApiError>);
    let pending_delete = create_rw_signal(None::<Task>);

    // The task list never re-fetches on its own after a mutation.
    let command = create_action(move |cmd: &TaskCommand| {
        let cmd = cmd.clone();
        async move {
            match &cmd {
                TaskCommand::Create(payload) => hook.add(payload.clone()).await.map(|_| ()),
                TaskCommand::Toggle(id) => hook.toggle_finish(*id).await,
                TaskCommand::Delete(id) => hook.remove(*id).await,
            }?;
            let _ = hook.refresh().await;
            Ok::<_, ApiError>(cmd)
        }
    });
    create_effect(move |_| match command.value().get() {
        Some(Ok(TaskCommand::Create(_))) => {
            form.clear();
            error.set(None);
        }
        Some(Ok(TaskCommand::Delete(_))) => pending_delete.set(None),
        Some(Ok(TaskCommand::Toggle(_))) => error.set(None),
        Some(Err(err)) => {
            pending_delete.set(None);
            error.set(Some(err));
        }
        None => {}
    });

    let visible = create_memo(move |_| {
        let tasks = tasks_for_organization(hook.state().with(|s| s.items()), organization.get());
        filter.with(|f| f.apply(&tasks))
    });
    let state = hook.state();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        command.dispatch(TaskCommand::Create(form.payload(organization.get_untracked())));
    };

    view! {
        <section class="bg-surface-elevated rounded-lg shadow p-6 space-y-4">
            <h2 class="text-lg font-semibold text-fg">"Tasks"</h2>
            <form class="grid gap-3 md:grid-cols-3" on:submit=on_submit>
                <TextField label="Task title" value=form.title required=true />
                <label class="block text-sm font-medium text-fg-muted">
                    "Priority"
                    <select
                        class="mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm"
                        on:change=move |ev| {
                            if let Some(p) = TaskPriority::parse(&event_target_value(&ev)) {
                                form.priority.set(p);
                            }
                        }
                    >
                        {TaskPriority::ALL.into_iter().map(|p| view! {
                            <option value=p.as_str() selected=move || form.priority.get() == p>{p.label()}</option>
                        }).collect_view()}
                    </select>
                </label>
                <TextField label="Due date" value=form.due_date input_type="date" />
                <label class="block text-sm font-medium text-fg-muted">
                    "Client"
                    <select
                        class="mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm"
                        on:change=move |ev| form.client_id.set(event_target_value(&ev))
                    >
                        <option value="">"No client"</option>
                        {move || clients.get().into_iter().map(|c| view! {
                            <option value=c.id.to_string()>{c.full_name()}</option>
                        }).collect_view()}
                    </select>
                </label>
                <label class="block text-sm font-medium text-fg-muted">
                    "Assignee"
                    <select
                        class="mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm"
                        on:change=move |ev| form.assignee.set(event_target_value(&ev))
                    >
                        <option value="">"Unassigned"</option>
                        {move || members.get().into_iter().map(|m| view! {
                            <option value=m.username.clone()>{m.display_name()}</option>
                        }).collect_view()}
                    </select>
                </label>
                <TextAreaField label="Task description" value=form.description />
                <div class="md:col-span-3 flex justify-end">
                    <Button button_type="submit" loading=command.pending()>"Create task"</Button>
                </div>
            </form>
            <InlineErrorMessage error=error />

            <TaskFilterBar filter=filter />
            {move || {
                if state.with(|s| s.is_loading()) {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                let tasks = visible.get();
                if tasks.is_empty() {
                    return view! { <EmptyState title="No tasks match" icon="fa-list-check" /> }.into_view();
                }
                view! {
                    <table class="min-w-full text-sm">
                        <thead>
                            <tr class="text-left text-fg-muted">
                                <th class="py-2">"Done"</th>
                                <th>"Title"</th>
                                <th>"Status"</th>
                                <th>"Priority"</th>
                                <th>"Assignee"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {tasks.into_iter().map(|task| {
                                let id = task.id;
                                let target = task.clone();
                                view! {
                                    <tr class="border-t border-border">
                                        <td class="py-2">
                                            <input
                                                type="checkbox"
                                                checked=task.finished
                                                on:change=move |_| command.dispatch(TaskCommand::Toggle(id))
                                            />
                                        </td>
                                        <td class="text-fg">{task.title.clone()}</td>
                                        <td class="text-fg-muted">{task.status.unwrap_or_default().label()}</td>
                                        <td class="text-fg-muted">{task.priority.unwrap_or_default().label()}</td>
                                        <td class="text-fg-muted">{display_optional(task.assigned_to_user_id.as_deref())}</td>
                                        <td class="text-right">
                                            <Button
                                                variant=ButtonVariant::Danger
                                                on_click=Callback::new(move |_| pending_delete.set(Some(target.clone())))
                                            >
                                                "Delete"
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_view()
            }}
            <ConfirmDialog
                is_open=Signal::derive(move || pending_delete.with(Option::is_some))
                title="Delete task".to_string()
                message=Signal::derive(move || {
                    pending_delete
                        .with(|t| t.as_ref().map(|t| format!("Delete \"{}\"?", t.title)))
                        .unwrap_or_default()
                })
                on_confirm=Callback::new(move |_| {
                    if let Some(task) = pending_delete.get_untracked() {
                        command.dispatch(TaskCommand::Delete(task.id));
                    }
                })
                on_cancel=Callback::new(move |_| pending_delete.set(None))
                pending=command.pending()
            />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i64, org: Option<i64>) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            organization_id: org,
            ..Default::default()
        }
    }

    #[test]
    fn organization_filter_keeps_unscoped_tasks() {
        let tasks = vec![task(1, Some(3)), task(2, Some(4)), task(3, None)];
        let ids: Vec<i64> = tasks_for_organization(tasks.clone(), Some(3))
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(tasks_for_organization(tasks, None).len(), 3);
    }

    #[test]
    fn blank_ids_are_ignored() {
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id(" 12 "), Some(12));
    }
}
