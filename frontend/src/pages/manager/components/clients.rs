use leptos::{ev::SubmitEvent, *};

use super::records::ClientRecords;
use crate::{
    api::{ApiError, ClientPayload, ClientProfile},
    components::{
        common::Button,
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        error::InlineErrorMessage,
        forms::TextField,
        layout::LoadingSpinner,
    },
    state::clients::ClientsHook,
    utils::format::display_optional,
};

#[derive(Clone, Copy)]
struct ClientForm {
    first_name: RwSignal<String>,
    last_name: RwSignal<String>,
    email: RwSignal<String>,
    phone_number: RwSignal<String>,
    address: RwSignal<String>,
}

impl ClientForm {
    fn new() -> Self {
        let field = || create_rw_signal(String::new());
        Self {
            first_name: field(),
            last_name: field(),
            email: field(),
            phone_number: field(),
            address: field(),
        }
    }

    fn payload(&self, organization_id: Option<i64>) -> ClientPayload {
        ClientPayload {
            first_name: self.first_name.get_untracked().trim().to_string(),
            last_name: self.last_name.get_untracked().trim().to_string(),
            email: self.email.get_untracked().trim().to_string(),
            phone_number: self.phone_number.get_untracked().trim().to_string(),
            address: self.address.get_untracked(),
            organization_id,
            ..Default::default()
        }
    }

    fn clear(&self) {
        for field in [self.first_name, self.last_name, self.email, self.phone_number, self.address] {
            field.set(String::new());
        }
    }
}

#[component]
pub fn ClientsSection(hook: ClientsHook, organization: Signal<Option<i64>>) -> impl IntoView {
    let form = ClientForm::new();
    let error = create_rw_signal(None::<ApiError>);
    let pending_delete = create_rw_signal(None::<ClientProfile>);
    let expanded = create_rw_signal(None::<i64>);

    let add_action = create_action(move |payload: &ClientPayload| {
        let payload = payload.clone();
        async move { hook.add(payload).await }
    });
    let delete_action = create_action(move |id: &i64| {
        let id = *id;
        async move { hook.remove(id).await }
    });

    create_effect(move |_| match add_action.value().get() {
        Some(Ok(_)) => {
            form.clear();
            error.set(None);
        }
        Some(Err(err)) => error.set(Some(err)),
        None => {}
    });
    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            pending_delete.set(None);
            if let Err(err) = result {
                error.set(Some(err));
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        add_action.dispatch(form.payload(organization.get_untracked()));
    };
    let state = hook.state();

    view! {
        <section class="bg-surface-elevated rounded-lg shadow p-6 space-y-4">
            <h2 class="text-lg font-semibold text-fg">"Clients"</h2>
            <form class="grid gap-3 md:grid-cols-3" on:submit=on_submit>
                <TextField label="First name" value=form.first_name required=true />
                <TextField label="Last name" value=form.last_name required=true />
                <TextField label="Client email" value=form.email input_type="email" />
                <TextField label="Phone" value=form.phone_number input_type="tel" />
                <TextField label="Client address" value=form.address />
                <div class="flex items-end">
                    <Button button_type="submit" loading=add_action.pending()>"Add client"</Button>
                </div>
            </form>
            <InlineErrorMessage error=error />
            {move || {
                let current = state.get();
                if current.is_loading() {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                let clients = current.items();
                if clients.is_empty() {
                    return view! { <EmptyState title="No clients yet" icon="fa-address-book" /> }.into_view();
                }
                view! {
                    <ul class="divide-y divide-border">
                        {clients.into_iter().map(|client| {
                            let id = client.id;
                            let name = client.full_name();
                            let target = client.clone();
                            let is_open = move || expanded.get() == Some(id);
                            view! {
                                <li class="py-2 text-sm">
                                    <div class="flex items-center justify-between">
                                        <div>
                                            <p class="font-medium text-fg">{name}</p>
                                            <p class="text-fg-muted">
                                                {display_optional(client.email.as_deref())}" · "{display_optional(client.phone_number.as_deref())}
                                            </p>
                                        </div>
                                        <div class="space-x-3">
                                            <button
                                                class="text-action-primary-bg hover:underline"
                                                on:click=move |_| expanded.update(|open| {
                                                    *open = if *open == Some(id) { None } else { Some(id) };
                                                })
                                            >
                                                {move || if is_open() { "Hide records" } else { "Records" }}
                                            </button>
                                            <button
                                                class="text-status-error-text hover:underline"
                                                on:click=move |_| pending_delete.set(Some(target.clone()))
                                            >
                                                "Delete"
                                            </button>
                                        </div>
                                    </div>
                                    <Show when=is_open>
                                        <ClientRecords client_id=id />
                                    </Show>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                }.into_view()
            }}
            <ConfirmDialog
                is_open=Signal::derive(move || pending_delete.with(Option::is_some))
                title="Delete client".to_string()
                message=Signal::derive(move || {
                    pending_delete
                        .with(|c| c.as_ref().map(|c| format!("Remove {} from this organization?", c.full_name())))
                        .unwrap_or_default()
                })
                on_confirm=Callback::new(move |_| {
                    if let Some(client) = pending_delete.get_untracked() {
                        delete_action.dispatch(client.id);
                    }
                })
                on_cancel=Callback::new(move |_| pending_delete.set(None))
                pending=delete_action.pending()
            />
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::clients::use_clients;
    use crate::test_support::{helpers::manager_user, ssr::render_as};

    #[test]
    fn empty_client_list_shows_placeholder_and_form() {
        let html = render_as(Some(manager_user()), || {
            let hook = use_clients();
            view! { <ClientsSection hook=hook organization=Signal::derive(|| Some(3)) /> }
        });
        assert!(html.contains("Add client"));
        assert!(html.contains("No clients yet"));
    }
}
