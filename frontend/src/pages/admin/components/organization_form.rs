use leptos::{ev::SubmitEvent, *};

use crate::{
    api::{Organization, OrganizationPayload},
    components::{
        common::{Button, ButtonVariant},
        forms::{TextAreaField, TextField},
    },
};

/// Editable copy of an organization; shared by the admin table and the
/// manager's organization editor.
#[derive(Clone, Copy)]
pub struct OrganizationFields {
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub organization_type: RwSignal<String>,
    pub contact_email: RwSignal<String>,
    pub contact_phone: RwSignal<String>,
    pub address: RwSignal<String>,
}

impl Default for OrganizationFields {
    fn default() -> Self {
        let field = || create_rw_signal(String::new());
        Self {
            name: field(),
            description: field(),
            organization_type: field(),
            contact_email: field(),
            contact_phone: field(),
            address: field(),
        }
    }
}

impl OrganizationFields {
    pub fn load(&self, org: &Organization) {
        let payload = OrganizationPayload::from(org);
        self.name.set(payload.name);
        self.description.set(payload.description);
        self.organization_type.set(payload.organization_type);
        self.contact_email.set(payload.contact_email);
        self.contact_phone.set(payload.contact_phone);
        self.address.set(payload.address);
    }

    pub fn clear(&self) {
        for field in [
            self.name,
            self.description,
            self.organization_type,
            self.contact_email,
            self.contact_phone,
            self.address,
        ] {
            field.set(String::new());
        }
    }

    pub fn payload(&self) -> OrganizationPayload {
        OrganizationPayload {
            name: self.name.get_untracked().trim().to_string(),
            description: self.description.get_untracked(),
            organization_type: self.organization_type.get_untracked(),
            contact_email: self.contact_email.get_untracked().trim().to_string(),
            contact_phone: self.contact_phone.get_untracked().trim().to_string(),
            address: self.address.get_untracked(),
        }
    }
}

#[component]
pub fn OrganizationForm(
    fields: OrganizationFields,
    #[prop(into)] submit_label: String,
    on_submit: Callback<OrganizationPayload>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
    #[prop(optional, into)] pending: MaybeSignal<bool>,
) -> impl IntoView {
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(fields.payload());
    };
    view! {
        <form class="grid gap-4 md:grid-cols-2" on:submit=handle_submit>
            <TextField label="Name" value=fields.name required=true />
            <TextField label="Type" value=fields.organization_type placeholder="e.g. Agency" />
            <TextField label="Contact email" value=fields.contact_email input_type="email" />
            <TextField label="Contact phone" value=fields.contact_phone input_type="tel" />
            <TextField label="Address" value=fields.address />
            <TextAreaField label="Description" value=fields.description />
            <div class="md:col-span-2 flex gap-2 justify-end">
                {on_cancel.map(|cancel| view! {
                    <Button variant=ButtonVariant::Secondary on_click=cancel>"Cancel"</Button>
                })}
                <Button button_type="submit" loading=pending>{submit_label}</Button>
            </div>
        </form>
    }
}
