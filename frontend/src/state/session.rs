//! Persisted session: the bearer token, the user snapshot and the per-profile
//! session id, all kept in a [`KeyValueStore`].

use uuid::Uuid;

use crate::{
    api::{LoginResponse, UserSummary},
    utils::storage::{KeyValueStore, StorageError},
};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const SESSION_ID_KEY: &str = "sessionId";

#[derive(Debug, Clone, PartialEq)]
pub struct StoredSession {
    pub token: String,
    pub user: UserSummary,
}

pub fn stored_token(store: &dyn KeyValueStore) -> Option<String> {
    store.get(TOKEN_KEY).filter(|token| !token.is_empty())
}

pub fn stored_session_id(store: &dyn KeyValueStore) -> Option<String> {
    store.get(SESSION_ID_KEY).filter(|id| !id.is_empty())
}

pub fn persist_session(
    store: &dyn KeyValueStore,
    response: &LoginResponse,
) -> Result<(), StorageError> {
    let user_json = serde_json::to_string(&response.user)
        .map_err(|_| StorageError::WriteFailed(USER_KEY.to_string()))?;
    store.set(TOKEN_KEY, &response.token)?;
    if let Err(err) = store.set(USER_KEY, &user_json) {
        store.remove(TOKEN_KEY);
        return Err(err);
    }
    Ok(())
}

/// Rewrites the user snapshot after a profile change. The token is untouched.
pub fn persist_user(store: &dyn KeyValueStore, user: &UserSummary) -> Result<(), StorageError> {
    let user_json = serde_json::to_string(user)
        .map_err(|_| StorageError::WriteFailed(USER_KEY.to_string()))?;
    store.set(USER_KEY, &user_json)
}

/// Reads the session back. A missing, `"undefined"` or unparsable user
/// snapshot wipes both keys so a token never survives without its user.
pub fn restore_session(store: &dyn KeyValueStore) -> Option<StoredSession> {
    let token = stored_token(store);
    let raw_user = store.get(USER_KEY);

    let (token, raw_user) = match (token, raw_user) {
        (Some(token), Some(raw)) if raw != "undefined" && !raw.is_empty() => (token, raw),
        (None, None) => return None,
        _ => {
            log::warn!("Discarding incomplete stored session");
            clear_session(store);
            return None;
        }
    };

    match serde_json::from_str::<UserSummary>(&raw_user) {
        Ok(user) => Some(StoredSession { token, user }),
        Err(err) => {
            log::error!("Stored user could not be parsed: {}", err);
            clear_session(store);
            None
        }
    }
}

pub fn clear_session(store: &dyn KeyValueStore) {
    store.remove(TOKEN_KEY);
    store.remove(USER_KEY);
}

/// Returns the profile's session id, generating it on first use. The id is
/// independent of login state and is never cleared here.
pub fn ensure_session_id(store: &dyn KeyValueStore) -> String {
    if let Some(existing) = stored_session_id(store) {
        return existing;
    }
    let generated = Uuid::new_v4().to_string();
    if let Err(err) = store.set(SESSION_ID_KEY, &generated) {
        log::warn!("Session id not persisted: {}", err);
    }
    generated
}
