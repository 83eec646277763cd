use leptos::*;

use crate::api::{ApiClient, ApiError, ChangePasswordRequest, UpdateProfileRequest};
use crate::state::auth::{use_auth, AuthContext};
use crate::state::resource::{LoadState, Loader};
use crate::utils::validation;

pub fn validate_profile(request: &UpdateProfileRequest) -> Result<(), String> {
    if request.name.trim().is_empty() || request.surname.trim().is_empty() {
        return Err("Name and surname are required".into());
    }
    if !request.email.trim().is_empty() {
        validation::validate_email(&request.email)?;
    }
    Ok(())
}

pub fn validate_password_change(request: &ChangePasswordRequest) -> Result<(), String> {
    if request.current_password.is_empty() {
        return Err("Please enter your current password".into());
    }
    validation::validate_password_pair(&request.new_password, &request.confirm_password)?;
    if request.new_password == request.current_password {
        return Err("New password must differ from the current one".into());
    }
    Ok(())
}

/// Profile and password forms of the settings page, each with its own state.
#[derive(Clone, Copy)]
pub struct SettingsHook {
    pub profile: Loader<()>,
    pub password: Loader<()>,
    auth: AuthContext,
}

impl SettingsHook {
    pub fn new(auth: AuthContext) -> Self {
        Self {
            profile: Loader::new(),
            password: Loader::new(),
            auth,
        }
    }

    fn api(&self) -> ApiClient {
        self.auth.api()
    }

    pub async fn update_profile(&self, request: UpdateProfileRequest) -> Result<(), ApiError> {
        if let Err(msg) = validate_profile(&request) {
            let err = ApiError::validation(msg);
            self.profile.state.set(LoadState::Failed(err.clone()));
            return Err(err);
        }
        let api = self.api();
        self.profile
            .load(async move { api.update_profile(&request).await.map(|_| ()) })
            .await?;
        Ok(())
    }

    /// Like [`SettingsHook::update_profile`], then mirrors the new names into
    /// the session.
    pub async fn save_profile(&self, request: UpdateProfileRequest) -> Result<(), ApiError> {
        let (name, surname) = (request.name.clone(), request.surname.clone());
        self.update_profile(request).await?;
        self.auth.apply_profile(&name, &surname);
        log::info!("Profile updated");
        Ok(())
    }

    pub async fn change_password(&self, request: ChangePasswordRequest) -> Result<(), ApiError> {
        if let Err(msg) = validate_password_change(&request) {
            let err = ApiError::validation(msg);
            self.password.state.set(LoadState::Failed(err.clone()));
            return Err(err);
        }
        let api = self.api();
        self.password
            .load(async move { api.change_password(&request).await })
            .await
    }
}

pub fn use_settings() -> SettingsHook {
    SettingsHook::new(use_auth())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_change_rules() {
        let ok = ChangePasswordRequest {
            current_password: "old-secret".into(),
            new_password: "new-secret".into(),
            confirm_password: "new-secret".into(),
        };
        assert!(validate_password_change(&ok).is_ok());
        let mismatch = ChangePasswordRequest {
            confirm_password: "other-secret".into(),
            ..ok.clone()
        };
        assert_eq!(
            validate_password_change(&mismatch).unwrap_err(),
            "Passwords do not match"
        );
        let same = ChangePasswordRequest {
            new_password: "old-secret".into(),
            confirm_password: "old-secret".into(),
            ..ok.clone()
        };
        assert!(validate_password_change(&same).is_err());
        let missing = ChangePasswordRequest {
            current_password: String::new(),
            ..ok
        };
        assert!(validate_password_change(&missing).is_err());
    }

    #[test]
    fn profile_requires_names_and_valid_email() {
        let mut request = UpdateProfileRequest {
            name: "Mila".into(),
            surname: "Ivanova".into(),
            email: String::new(),
        };
        assert!(validate_profile(&request).is_ok());
        request.email = "mila@".into();
        assert!(validate_profile(&request).is_err());
        request.email = "mila@northwind.io".into();
        request.surname = " ".into();
        assert!(validate_profile(&request).is_err());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::TestClient;
    use crate::state::session::{restore_session, USER_KEY};
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn saved_profile_updates_session_user() {
        let server = MockServer::start_async().await;
        let update = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/users/update-profile")
                .json_body(json!({ "name": "Mila", "surname": "Novak", "email": "mila@northwind.io" }));
            then.status(200).body("Profile updated");
        });
        let client = TestClient::signed_in(&server);

        let runtime = create_runtime();
        let auth = AuthContext::new(client.api.clone());
        auth.restore();
        let settings = SettingsHook::new(auth);
        settings
            .save_profile(UpdateProfileRequest {
                name: "Mila".into(),
                surname: "Novak".into(),
                email: "mila@northwind.io".into(),
            })
            .await
            .unwrap();

        update.assert();
        assert_eq!(auth.user().map(|u| u.surname), Some("Novak".to_string()));
        let stored = restore_session(&client.store).unwrap();
        assert_eq!(stored.user.surname, "Novak");
        assert!(client.store.contains(USER_KEY));
        runtime.dispose();
    }

    #[tokio::test]
    async fn mismatched_passwords_stay_local() {
        let server = MockServer::start_async().await;
        let change = server.mock(|when, then| {
            when.method(PUT).path("/api/users/change-password");
            then.status(200);
        });
        let client = TestClient::signed_in(&server);

        let runtime = create_runtime();
        let auth = AuthContext::new(client.api.clone());
        auth.restore();
        let settings = SettingsHook::new(auth);
        let err = settings
            .change_password(ChangePasswordRequest {
                current_password: "old-secret".into(),
                new_password: "new-secret".into(),
                confirm_password: "new-secreT".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(
            settings.password.state.get_untracked().error().map(|e| e.error.clone()),
            Some("Passwords do not match".to_string())
        );
        assert_eq!(change.hits(), 0);
        runtime.dispose();
    }
}
