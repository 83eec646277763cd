use leptos::{ev::SubmitEvent, *};

use crate::{
    api::{ApiError, CommentPayload},
    components::{error::InlineErrorMessage, layout::LoadingSpinner},
    state::comments::{use_comments, CommentQuery},
    utils::format::display_optional,
};

/// Discussion under one task. Mounted only while the task is expanded, so the
/// thread loads on open and its requests die on close.
#[component]
pub fn CommentThread(task_id: i64) -> impl IntoView {
    let comments = use_comments();
    let text = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);

    create_effect(move |prev: Option<()>| {
        if prev.is_none() {
            comments.spawn_fetch(CommentQuery::ForTask(task_id));
        }
    });

    let post = create_action(move |payload: &CommentPayload| {
        let payload = payload.clone();
        async move { comments.add(payload).await }
    });
    create_effect(move |_| match post.value().get() {
        Some(Ok(_)) => {
            text.set(String::new());
            error.set(None);
        }
        Some(Err(err)) => error.set(Some(err)),
        None => {}
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        post.dispatch(CommentPayload {
            text: text.get_untracked(),
            task_id,
        });
    };
    let state = comments.state();

    view! {
        <div class="mt-3 space-y-3 border-l-2 border-border pl-4">
            {move || {
                let current = state.get();
                if current.is_loading() {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                let items = current.items();
                if items.is_empty() {
                    return view! { <p class="text-xs text-fg-muted">"No comments yet."</p> }.into_view();
                }
                items.into_iter().map(|c| view! {
                    <div class="text-sm">
                        <p class="text-fg">{c.text.clone()}</p>
                        <p class="text-xs text-fg-muted">
                            {c.username.clone().unwrap_or_default()}" · "{display_optional(c.created_at.as_deref())}
                            {c.is_edited.then_some(" (edited)")}
                        </p>
                    </div>
                }).collect_view()
            }}
            <form class="flex gap-2" on:submit=on_submit>
                <input
                    type="text"
                    aria-label="Add a comment"
                    placeholder="Add a comment"
                    class="flex-1 rounded-md border border-form-control-border bg-form-control-bg px-3 py-1.5 text-sm"
                    prop:value=move || text.get()
                    on:input=move |ev| text.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="rounded-md bg-action-primary-bg px-3 py-1.5 text-sm text-action-primary-text disabled:opacity-50"
                    disabled=move || post.pending().get()
                >
                    "Post"
                </button>
            </form>
            <InlineErrorMessage error=error />
        </div>
    }
}
