use reqwest::{
    header::{CACHE_CONTROL, CONTENT_TYPE, EXPIRES, PRAGMA},
    Client, Method, RequestBuilder, Response, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    api::types::ApiError,
    config,
    state::session,
    utils::{
        navigation::{BrowserNavigator, SharedNavigator, LOGIN_PATH},
        storage::{BrowserStorage, SharedStore},
    },
};

pub const SESSION_ID_HEADER: &str = "X-Session-ID";

/// HTTP client shared by every repository. Each request carries the JSON and
/// no-cache headers plus the bearer token and session id found in storage.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    store: SharedStore,
    navigator: SharedNavigator,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_parts(None, BrowserStorage::shared(), BrowserNavigator::shared())
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_parts(
            Some(base_url.into()),
            BrowserStorage::shared(),
            BrowserNavigator::shared(),
        )
    }

    pub fn with_parts(
        base_url: Option<String>,
        store: SharedStore,
        navigator: SharedNavigator,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url,
            store,
            navigator,
        }
    }

    pub fn store(&self) -> SharedStore {
        self.store.clone()
    }

    pub fn navigator(&self) -> SharedNavigator {
        self.navigator.clone()
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let base_url = self.resolved_base_url().await;
        let mut builder = self
            .client
            .request(method, format!("{}{}", base_url.trim_end_matches('/'), path))
            .header(CONTENT_TYPE, "application/json")
            .header(CACHE_CONTROL, "no-cache, no-store, must-revalidate")
            .header(PRAGMA, "no-cache")
            .header(EXPIRES, "0");
        if let Some(token) = session::stored_token(&*self.store) {
            builder = builder.bearer_auth(token);
        }
        if let Some(session_id) = session::stored_session_id(&*self.store) {
            builder = builder.header(SESSION_ID_HEADER, session_id);
        }
        builder
    }

    /// Any 401/403, whatever the endpoint, ends the stored session and leaves
    /// for the login route before the error reaches the caller.
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            self.handle_auth_rejection(status);
            let body = response.text().await.unwrap_or_default();
            let mut error = ApiError::unauthorized(status.as_u16());
            if !body.trim().is_empty() {
                error.error = error_message(status, &body);
            }
            return Err(error);
        }
        if !status.is_success() {
            return Err(error_from_response(status, response).await);
        }
        Ok(response)
    }

    fn handle_auth_rejection(&self, status: StatusCode) {
        log::warn!("Request rejected with {}; ending session", status.as_u16());
        session::clear_session(&*self.store);
        self.navigator.redirect(LOGIN_PATH);
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let builder = self.request(Method::GET, path).await;
        let response = self.send(builder).await?;
        decode_json(response).await
    }

    pub(crate) async fn get_json_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let builder = self.request(Method::GET, path).await.query(query);
        let response = self.send(builder).await?;
        decode_json(response).await
    }

    pub(crate) async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(method, path).await.json(body);
        let response = self.send(builder).await?;
        decode_json(response).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::POST, path, body).await
    }

    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(Method::PUT, path, body).await
    }

    /// Requests whose response body is irrelevant (deletes, toggles, marks).
    pub(crate) async fn send_without_body(&self, method: Method, path: &str) -> Result<(), ApiError> {
        let builder = self.request(method, path).await;
        self.send(builder).await.map(|_| ())
    }

    pub(crate) async fn send_text<B>(&self, method: Method, path: &str, body: &B) -> Result<String, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let builder = self.request(method, path).await.json(body);
        let response = self.send(builder).await?;
        response
            .text()
            .await
            .map_err(|e| ApiError::decode_failed(format!("Failed to read response: {}", e)))
    }
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::decode_failed(format!("Failed to parse response: {}", e)))
}

async fn error_from_response(status: StatusCode, response: Response) -> ApiError {
    let body = response.text().await.unwrap_or_default();
    let mut error = ApiError::http(status.as_u16(), error_message(status, &body));
    if let Ok(value @ Value::Object(_)) = serde_json::from_str::<Value>(&body) {
        error.details = Some(value);
    }
    error
}

/// Backend message from `message`/`error`, a bare JSON string, raw text, or a
/// status-based fallback, in that order.
pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => {
            let from_field = ["message", "error"]
                .iter()
                .filter_map(|key| map.get(*key).and_then(Value::as_str))
                .find(|msg| !msg.trim().is_empty());
            if let Some(msg) = from_field {
                return msg.to_string();
            }
        }
        Ok(Value::String(msg)) if !msg.trim().is_empty() => return msg,
        _ => {
            let trimmed = body.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }
    format!("Request failed with status {}", status.as_u16())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_message_field() {
        let msg = error_message(
            StatusCode::BAD_REQUEST,
            r#"{"message":"Title is required","error":"Bad Request"}"#,
        );
        assert_eq!(msg, "Title is required");
    }

    #[test]
    fn error_message_uses_error_field_and_plain_text() {
        assert_eq!(
            error_message(StatusCode::CONFLICT, r#"{"error":"Username taken"}"#),
            "Username taken"
        );
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, "Organization not found"),
            "Organization not found"
        );
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, r#""Passwords do not match""#),
            "Passwords do not match"
        );
    }

    #[test]
    fn error_message_falls_back_to_status() {
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, ""),
            "Request failed with status 500"
        );
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, r#"{"status":502}"#),
            "Request failed with status 502"
        );
    }
}
