use leptos::*;

use crate::{
    api::Notification,
    state::notifications::{use_notifications, use_unread_notifications, NotificationQuery},
    utils::format::display_optional,
};

/// Badge text; large counts are capped.
pub fn badge_label(count: u32) -> Option<String> {
    match count {
        0 => None,
        1..=99 => Some(count.to_string()),
        _ => Some("99+".into()),
    }
}

#[component]
pub fn NotificationBell() -> impl IntoView {
    let unread = use_unread_notifications();
    let list = use_notifications();
    let (open, set_open) = create_signal(false);

    let toggle = move |_| {
        let opening = !open.get_untracked();
        set_open.set(opening);
        if opening {
            list.spawn_fetch(NotificationQuery::All);
        }
    };

    let toggle_read = move |note: Notification| {
        spawn_local(async move {
            let result = if note.is_read {
                list.mark_unread(note.id).await
            } else {
                list.mark_read(note.id).await
            };
            if result.is_ok() {
                let _ = unread.refresh().await;
            }
        });
    };

    view! {
        <div class="relative">
            <button
                type="button"
                class="relative p-2 rounded-full text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                aria-label="Notifications"
                on:click=toggle
            >
                <i class="fas fa-bell"></i>
                {move || badge_label(unread.count.get()).map(|label| view! {
                    <span class="absolute -top-1 -right-1 rounded-full bg-action-danger-bg text-action-danger-text text-xs px-1.5">
                        {label}
                    </span>
                })}
            </button>
            <Show when=move || open.get()>
                <div class="absolute right-0 mt-2 w-80 max-h-96 overflow-y-auto rounded-lg bg-surface-elevated shadow-xl border border-border z-50">
                    {move || {
                        let state = list.state().get();
                        if state.is_loading() {
                            return view! { <p class="p-4 text-sm text-fg-muted">"Loading..."</p> }.into_view();
                        }
                        if let Some(err) = state.error() {
                            return view! { <p class="p-4 text-sm text-status-error-text">{err.error.clone()}</p> }.into_view();
                        }
                        let items = state.items();
                        if items.is_empty() {
                            return view! { <p class="p-4 text-sm text-fg-muted">"No notifications"</p> }.into_view();
                        }
                        items.into_iter().map(|note| {
                            let label = if note.is_read { "Mark unread" } else { "Mark read" };
                            let row_class = if note.is_read { "p-3 border-b border-border" } else { "p-3 border-b border-border bg-surface-muted" };
                            let target = note.clone();
                            view! {
                                <div class=row_class>
                                    <p class="text-sm text-fg">{note.message.clone()}</p>
                                    <div class="flex justify-between items-center mt-1">
                                        <span class="text-xs text-fg-muted">{display_optional(note.created_at.as_deref())}</span>
                                        <button
                                            class="text-xs text-action-primary-bg hover:underline"
                                            on:click=move |_| toggle_read(target.clone())
                                        >
                                            {label}
                                        </button>
                                    </div>
                                </div>
                            }
                        }).collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}
