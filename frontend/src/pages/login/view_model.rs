use leptos::*;

use super::portal::LoginPortalConfig;
use crate::{
    api::{LoginRequest, UserSummary},
    state::auth::{use_auth, use_login_action},
    utils::validation::validate_credentials,
};

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub login_action: Action<LoginRequest, Result<UserSummary, crate::api::ApiError>>,
}

impl LoginViewModel {
    pub fn pending(&self) -> Signal<bool> {
        self.login_action.pending().into()
    }

    /// Checks the form locally and dispatches the login; returns whether a
    /// request went out.
    pub fn submit(&self) -> bool {
        if self.login_action.pending().get_untracked() {
            return false;
        }
        let username = self.username.get_untracked();
        let password = self.password.get_untracked();
        if let Err(msg) = validate_credentials(&username, &password) {
            self.error.set(Some(msg));
            return false;
        }
        self.error.set(None);
        self.login_action.dispatch(LoginRequest { username, password });
        true
    }
}

pub fn use_login_view_model(config: LoginPortalConfig) -> LoginViewModel {
    let auth = use_auth();
    let vm = LoginViewModel {
        username: create_rw_signal(String::new()),
        password: create_rw_signal(String::new()),
        error: create_rw_signal(None),
        login_action: use_login_action(),
    };

    create_effect(move |_| {
        let Some(result) = vm.login_action.value().get() else {
            return;
        };
        match result {
            Ok(user) => match config.outcome(&user) {
                Ok(target) => {
                    vm.password.set(String::new());
                    auth.api().navigator().redirect(target);
                }
                Err(denied) => {
                    log::warn!("{} tried the {} portal", user.username, config.audience);
                    vm.error.set(Some(denied));
                }
            },
            Err(err) => vm.error.set(Some(err.error)),
        }
    });

    vm
}
