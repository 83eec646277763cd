use leptos::{ev::SubmitEvent, *};

use crate::{
    api::{ChangePasswordRequest, UpdateProfileRequest},
    components::{
        common::Button,
        error::InlineErrorMessage,
        forms::TextField,
        layout::SuccessMessage,
    },
    state::{
        auth::use_auth,
        resource::LoadState,
        settings::use_settings,
    },
};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = use_auth();
    let settings = use_settings();
    let user = auth.user();

    let name = create_rw_signal(user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let surname = create_rw_signal(user.as_ref().map(|u| u.surname.clone()).unwrap_or_default());
    let email = create_rw_signal(String::new());

    let current_password = create_rw_signal(String::new());
    let new_password = create_rw_signal(String::new());
    let confirm_password = create_rw_signal(String::new());

    let profile_state = settings.profile.state;
    let password_state = settings.password.state;
    let profile_error = Signal::derive(move || profile_state.with(|s| s.error().cloned()));
    let password_error = Signal::derive(move || password_state.with(|s| s.error().cloned()));

    let save_profile = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = UpdateProfileRequest {
            name: name.get_untracked(),
            surname: surname.get_untracked(),
            email: email.get_untracked().trim().to_string(),
        };
        spawn_local(async move {
            let _ = settings.save_profile(request).await;
        });
    };

    let change_password = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = ChangePasswordRequest {
            current_password: current_password.get_untracked(),
            new_password: new_password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        spawn_local(async move {
            if settings.change_password(request).await.is_ok() {
                for field in [current_password, new_password, confirm_password] {
                    field.try_set(String::new());
                }
            }
        });
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-8">
            <h1 class="text-2xl font-bold text-fg">"Settings"</h1>
            <p class="text-sm text-fg-muted">
                {move || auth.user().map(|u| format!("Signed in as {} ({})", u.username, u.role.label())).unwrap_or_default()}
            </p>

            <section class="bg-surface-elevated rounded-lg shadow p-6 space-y-4">
                <h2 class="text-lg font-semibold text-fg">"Profile"</h2>
                <Show when=move || matches!(profile_state.get(), LoadState::Ready(_))>
                    <SuccessMessage message="Profile saved" />
                </Show>
                <InlineErrorMessage error=profile_error />
                <form class="grid gap-4 md:grid-cols-2" on:submit=save_profile>
                    <TextField label="First name" value=name required=true />
                    <TextField label="Last name" value=surname required=true />
                    <TextField label="Email" value=email input_type="email" placeholder="Leave empty to keep the current one" />
                    <div class="md:col-span-2 flex justify-end">
                        <Button button_type="submit" loading=Signal::derive(move || profile_state.with(LoadState::is_loading))>
                            "Save profile"
                        </Button>
                    </div>
                </form>
            </section>

            <section class="bg-surface-elevated rounded-lg shadow p-6 space-y-4">
                <h2 class="text-lg font-semibold text-fg">"Password"</h2>
                <Show when=move || matches!(password_state.get(), LoadState::Ready(_))>
                    <SuccessMessage message="Password changed" />
                </Show>
                <InlineErrorMessage error=password_error />
                <form class="grid gap-4" on:submit=change_password>
                    <TextField label="Current password" value=current_password input_type="password" required=true />
                    <TextField label="New password" value=new_password input_type="password" required=true />
                    <TextField label="Confirm new password" value=confirm_password input_type="password" required=true />
                    <div class="flex justify-end">
                        <Button button_type="submit" loading=Signal::derive(move || password_state.with(LoadState::is_loading))>
                            "Change password"
                        </Button>
                    </div>
                </form>
            </section>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::manager_user, ssr::render_as};

    #[test]
    fn profile_form_is_prefilled_from_the_session() {
        let html = render_as(Some(manager_user()), || view! { <SettingsPage /> });
        assert!(html.contains("Signed in as mila (Manager)"));
        assert!(html.contains("Change password"));
        assert!(!html.contains("Profile saved"));
    }
}
