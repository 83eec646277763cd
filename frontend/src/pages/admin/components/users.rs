use leptos::*;

use crate::{
    components::{empty_state::EmptyState, layout::LoadingSpinner},
    state::users::{UserQuery, UsersHook},
};

#[component]
pub fn UsersSection(hook: UsersHook) -> impl IntoView {
    let state = hook.state();
    let scope = create_rw_signal(hook.current_query().unwrap_or(UserQuery::All));
    let select = move |q: UserQuery| {
        scope.set(q);
        hook.spawn_fetch(q);
    };
    let tab_class = move |q: UserQuery| {
        if scope.get() == q {
            "px-3 py-1 rounded-md bg-action-primary-bg text-action-primary-text text-sm"
        } else {
            "px-3 py-1 rounded-md text-fg-muted hover:text-fg text-sm"
        }
    };

    view! {
        <div class="space-y-3">
            <div class="flex gap-2">
                <button class=move || tab_class(UserQuery::All) on:click=move |_| select(UserQuery::All)>"All users"</button>
                <button class=move || tab_class(UserQuery::Managers) on:click=move |_| select(UserQuery::Managers)>"Managers"</button>
            </div>
            {move || {
                let current = state.get();
                if current.is_loading() {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                if let Some(err) = current.error() {
                    return view! { <p class="text-sm text-status-error-text">{err.error.clone()}</p> }.into_view();
                }
                let users = current.items();
                if users.is_empty() {
                    return view! { <EmptyState title="No users found" icon="fa-users" /> }.into_view();
                }
                view! {
                    <ul class="divide-y divide-border">
                        {users.into_iter().map(|u| view! {
                            <li class="py-2 flex justify-between text-sm">
                                <span class="text-fg">{u.display_name()}" "<span class="text-fg-muted">{format!("@{}", u.username)}</span></span>
                                <span class="text-fg-muted">{u.role.label().to_string()}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                }.into_view()
            }}
        </div>
    }
}
