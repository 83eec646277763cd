use leptos::{ev::SubmitEvent, *};

use crate::{
    api::{ApiError, CreateUserRequest},
    components::{
        common::Button, empty_state::EmptyState, error::InlineErrorMessage, forms::TextField,
        layout::{LoadingSpinner, SuccessMessage},
    },
    state::users::UsersHook,
};

/// Team members of the selected organization and the form that adds one.
#[component]
pub fn MembersSection(hook: UsersHook, organization: Signal<Option<i64>>) -> impl IntoView {
    let username = create_rw_signal(String::new());
    let name = create_rw_signal(String::new());
    let surname = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let repeat_password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let created = create_rw_signal(None::<String>);

    let create = create_action(move |request: &CreateUserRequest| {
        let request = request.clone();
        async move { hook.create_user(request).await }
    });
    create_effect(move |_| match create.value().get() {
        Some(Ok(user)) => {
            created.set(Some(format!("{} can now sign in", user.username)));
            error.set(None);
            for field in [username, name, surname, password, repeat_password] {
                field.set(String::new());
            }
        }
        Some(Err(err)) => {
            created.set(None);
            error.set(Some(err));
        }
        None => {}
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        create.dispatch(CreateUserRequest {
            username: username.get_untracked(),
            password: password.get_untracked(),
            repeat_password: repeat_password.get_untracked(),
            name: name.get_untracked().trim().to_string(),
            surname: surname.get_untracked().trim().to_string(),
            role: None,
            organization_id: organization.get_untracked(),
        });
    };
    let state = hook.state();

    view! {
        <section class="bg-surface-elevated rounded-lg shadow p-6 space-y-4">
            <h2 class="text-lg font-semibold text-fg">"Team members"</h2>
            {move || {
                let current = state.get();
                if current.is_loading() {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                let members = current.items();
                if members.is_empty() {
                    return view! { <EmptyState title="No team members yet" icon="fa-user-plus" /> }.into_view();
                }
                view! {
                    <ul class="divide-y divide-border text-sm">
                        {members.into_iter().map(|m| view! {
                            <li class="py-2 flex justify-between">
                                <span class="text-fg">{m.display_name()}</span>
                                <span class="text-fg-muted">{format!("@{}", m.username)}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                }.into_view()
            }}
            <form class="grid gap-3 md:grid-cols-2" on:submit=on_submit>
                <TextField label="Member username" value=username required=true />
                <TextField label="Member first name" value=name required=true />
                <TextField label="Member last name" value=surname required=true />
                <TextField label="Member password" value=password input_type="password" required=true />
                <TextField label="Repeat password" value=repeat_password input_type="password" required=true />
                <div class="flex items-end">
                    <Button button_type="submit" loading=create.pending()>"Add member"</Button>
                </div>
            </form>
            {move || created.get().map(|msg| view! { <SuccessMessage message=msg /> })}
            <InlineErrorMessage error=error />
        </section>
    }
}
