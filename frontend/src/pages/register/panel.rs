use leptos::{ev::SubmitEvent, *};

use super::view_model::use_register_view_model;
use crate::components::{
    common::Button,
    error::InlineErrorMessage,
    forms::{TextAreaField, TextField},
};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let vm = use_register_view_model();
    let form = vm.form;
    let state = vm.registration.state();
    let error = Signal::derive(move || state.with(|s| s.error().cloned()));
    let pending = Signal::derive(move || state.with(|s| s.is_loading()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen bg-surface py-12 px-4">
            <div class="max-w-2xl mx-auto bg-surface-elevated rounded-lg shadow p-8 space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"Register your organization"</h1>
                    <p class="text-sm text-fg-muted">"You will be the first manager of the new organization."</p>
                </div>
                <InlineErrorMessage error=error />
                <form class="space-y-6" on:submit=on_submit>
                    <fieldset class="grid gap-4 md:grid-cols-2">
                        <legend class="text-sm font-semibold text-fg mb-2">"Organization"</legend>
                        <TextField label="Organization name" value=form.organization_name required=true />
                        <TextField label="Contact phone" value=form.contact_phone input_type="tel" placeholder="+386 40 123 456" />
                        <TextField label="Address" value=form.address />
                        <TextAreaField label="Description" value=form.description />
                    </fieldset>
                    <fieldset class="grid gap-4 md:grid-cols-2">
                        <legend class="text-sm font-semibold text-fg mb-2">"Manager account"</legend>
                        <TextField label="First name" value=form.name required=true />
                        <TextField label="Last name" value=form.surname required=true />
                        <TextField label="Username" value=form.username required=true />
                        <TextField label="Email" value=form.email input_type="email" required=true />
                        <TextField label="Password" value=form.password input_type="password" required=true />
                        <TextField label="Confirm password" value=form.repeat_password input_type="password" required=true />
                    </fieldset>
                    <Button button_type="submit" class="w-full" loading=pending>"Create organization"</Button>
                </form>
                <p class="text-center text-sm text-fg-muted">
                    "Already registered? "
                    <a href="/portal" class="text-action-primary-bg hover:underline">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
