use leptos::*;

use crate::{
    api::RegisterOrganizationRequest,
    state::registration::{use_registration, RegistrationHook},
};

/// Backing signals for the organization sign-up form.
#[derive(Clone, Copy)]
pub struct RegisterForm {
    pub organization_name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub address: RwSignal<String>,
    pub contact_phone: RwSignal<String>,
    pub name: RwSignal<String>,
    pub surname: RwSignal<String>,
    pub username: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub repeat_password: RwSignal<String>,
}

impl Default for RegisterForm {
    fn default() -> Self {
        let field = || create_rw_signal(String::new());
        Self {
            organization_name: field(),
            description: field(),
            address: field(),
            contact_phone: field(),
            name: field(),
            surname: field(),
            username: field(),
            email: field(),
            password: field(),
            repeat_password: field(),
        }
    }
}

impl RegisterForm {
    pub fn to_request(&self) -> RegisterOrganizationRequest {
        RegisterOrganizationRequest {
            organization_name: self.organization_name.get_untracked(),
            username: self.username.get_untracked(),
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
            repeat_password: self.repeat_password.get_untracked(),
            name: self.name.get_untracked(),
            surname: self.surname.get_untracked(),
            contact_phone: self.contact_phone.get_untracked(),
            address: self.address.get_untracked(),
            description: self.description.get_untracked(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct RegisterViewModel {
    pub form: RegisterForm,
    pub registration: RegistrationHook,
}

impl RegisterViewModel {
    pub fn submit(&self) {
        if self.registration.state().get_untracked().is_loading() {
            return;
        }
        let request = self.form.to_request();
        let registration = self.registration;
        spawn_local(async move {
            let _ = registration.submit(request).await;
        });
    }
}

pub fn use_register_view_model() -> RegisterViewModel {
    RegisterViewModel {
        form: RegisterForm::default(),
        registration: use_registration(),
    }
}
