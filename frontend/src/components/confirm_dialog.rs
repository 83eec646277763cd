use leptos::ev::KeyboardEvent;
use leptos::*;

use crate::components::common::{Button, ButtonVariant};

/// Modal yes/no prompt, used before deletes.
#[component]
pub fn ConfirmDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(default = "Delete".into(), into)] confirm_label: String,
    #[prop(optional, into)] pending: MaybeSignal<bool>,
) -> impl IntoView {
    let confirm_label = store_value(confirm_label);
    let title = store_value(title);
    let message = store_value(message);
    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_cancel.call(())
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_cancel.call(());
                        }
                    }
                >
                    <h2 class="text-lg font-semibold text-fg">{move || title.with_value(|t| t.get())}</h2>
                    <p class="text-sm text-fg-muted">{move || message.with_value(|m| m.get())}</p>
                    <div class="flex justify-end gap-2">
                        <Button variant=ButtonVariant::Secondary on_click=on_cancel>"Cancel"</Button>
                        <Button variant=ButtonVariant::Danger loading=pending on_click=on_confirm>
                            {confirm_label.get_value()}
                        </Button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn open_dialog_renders_prompt() {
        let html = render_to_string(|| {
            view! {
                <ConfirmDialog
                    is_open=Signal::derive(|| true)
                    title="Delete organization"
                    message="Northwind will be removed."
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("Delete organization"));
        assert!(html.contains("Northwind will be removed."));
        assert!(html.contains("Delete"));
        assert!(html.contains("Cancel"));
    }

    #[test]
    fn open_dialog_follows_signal_title_and_message() {
        let html = render_to_string(|| {
            let title = create_rw_signal("Remove member".to_string());
            let message = create_rw_signal("ana leaves the organization.".to_string());
            view! {
                <ConfirmDialog
                    is_open=Signal::derive(|| true)
                    title=title
                    message=message
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                    confirm_label="Remove"
                />
            }
        });
        assert!(html.contains("Remove member"));
        assert!(html.contains("ana leaves the organization."));
        assert!(html.contains("Remove"));
    }

    #[test]
    fn closed_dialog_renders_nothing() {
        let html = render_to_string(|| {
            view! {
                <ConfirmDialog
                    is_open=Signal::derive(|| false)
                    title="t"
                    message="hidden body"
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(!html.contains("hidden body"));
    }
}
