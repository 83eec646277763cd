use crate::{
    api::{ApiClient, ApiError, LoginRequest, RegisterUserRequest, Role, UserSummary},
    components::layout::LoadingSpinner,
    state::session,
};
use leptos::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserSummary>,
    pub token: Option<String>,
    pub loading: bool,
}

impl AuthState {
    pub fn signed_in(user: UserSummary, token: impl Into<String>) -> Self {
        Self {
            user: Some(user),
            token: Some(token.into()),
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role.clone())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationOutcome {
    Success(UserSummary),
    Failure(String),
}

/// Process-wide session state. Built around an injected [`ApiClient`], whose
/// store also holds the persisted session.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
    api: StoredValue<ApiClient>,
}

impl AuthContext {
    /// Starts in the loading state; call [`AuthContext::restore`] to finish.
    pub fn new(api: ApiClient) -> Self {
        session::ensure_session_id(&*api.store());
        Self {
            state: create_rw_signal(AuthState {
                loading: true,
                ..AuthState::default()
            }),
            api: store_value(api),
        }
    }

    pub fn with_state(api: ApiClient, state: AuthState) -> Self {
        Self {
            state: create_rw_signal(state),
            api: store_value(api),
        }
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn restore(&self) {
        let restored = self.api.with_value(|api| session::restore_session(&*api.store()));
        self.state.set(match restored {
            Some(stored) => AuthState::signed_in(stored.user, stored.token),
            None => AuthState::default(),
        });
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<UserSummary, ApiError> {
        let api = self.api();
        let request = LoginRequest {
            username: username.trim().to_string(),
            password: password.to_string(),
        };
        let response = api.login(&request).await?;
        session::persist_session(&*api.store(), &response).map_err(|err| {
            log::error!("Session not persisted: {}", err);
            ApiError::unknown(err.to_string())
        })?;
        log::info!("Signed in as {} ({})", response.user.username, response.user.role);
        self.state
            .set(AuthState::signed_in(response.user.clone(), response.token));
        Ok(response.user)
    }

    /// Never fails: backend errors come back as [`RegistrationOutcome::Failure`].
    pub async fn register(&self, request: RegisterUserRequest) -> RegistrationOutcome {
        match self.api().register(&request).await {
            Ok(user) => RegistrationOutcome::Success(user),
            Err(err) => {
                log::error!("Registration failed: {}", err);
                let message = if err.error.trim().is_empty() {
                    "Registration failed".to_string()
                } else {
                    err.error
                };
                RegistrationOutcome::Failure(message)
            }
        }
    }

    /// Applies a saved profile to the signed-in user and its stored snapshot.
    pub fn apply_profile(&self, name: &str, surname: &str) {
        let Some(mut user) = self.user() else {
            return;
        };
        user.name = name.trim().to_string();
        user.surname = surname.trim().to_string();
        self.api.with_value(|api| {
            if let Err(err) = session::persist_user(&*api.store(), &user) {
                log::warn!("Updated profile not persisted: {}", err);
            }
        });
        self.state.update(|state| state.user = Some(user));
    }

    pub fn logout(&self) {
        self.api.with_value(|api| session::clear_session(&*api.store()));
        self.state.set(AuthState::default());
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    pub fn user(&self) -> Option<UserSummary> {
        self.state.with(|state| state.user.clone())
    }

    pub fn user_role(&self) -> Option<Role> {
        self.state.with(AuthState::role)
    }

    pub fn has_role(&self, role: &Role) -> bool {
        self.state
            .with(|state| state.user.as_ref().map(|u| &u.role == role).unwrap_or(false))
    }
}

#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let ctx = AuthContext::new(api);
    ctx.restore();
    provide_context(ctx);
    view! {
        <Show when=move || !ctx.state.get().loading fallback=|| view! { <LoadingSpinner /> }>
            {children()}
        </Show>
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        AuthContext::with_state(api, AuthState::default())
    })
}

pub fn use_login_action() -> Action<LoginRequest, Result<UserSummary, ApiError>> {
    let auth = use_auth();
    create_action(move |request: &LoginRequest| {
        let request = request.clone();
        async move { auth.login(&request.username, &request.password).await }
    })
}

pub fn use_register_action() -> Action<RegisterUserRequest, RegistrationOutcome> {
    let auth = use_auth();
    create_action(move |request: &RegisterUserRequest| {
        let request = request.clone();
        async move { auth.register(request).await }
    })
}
