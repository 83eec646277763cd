use httpmock::MockServer;

use crate::{
    api::ApiClient,
    state::session::{SESSION_ID_KEY, TOKEN_KEY, USER_KEY},
    utils::{navigation::RecordingNavigator, storage::MemoryStorage},
};

/// Client wired to a mock server with in-memory storage and a navigator that
/// records redirects instead of performing them.
pub struct TestClient {
    pub api: ApiClient,
    pub store: MemoryStorage,
    pub navigator: RecordingNavigator,
}

impl TestClient {
    pub fn new(server: &MockServer) -> Self {
        Self::with_store(server, MemoryStorage::new())
    }

    pub fn signed_in(server: &MockServer) -> Self {
        Self::with_store(
            server,
            MemoryStorage::with_entries([
                (TOKEN_KEY, "jwt-token"),
                (
                    USER_KEY,
                    r#"{"username":"mila","name":"Mila","surname":"Ivanova","role":"MANAGER"}"#,
                ),
                (SESSION_ID_KEY, "session-123"),
            ]),
        )
    }

    pub fn with_store(server: &MockServer, store: MemoryStorage) -> Self {
        let navigator = RecordingNavigator::new();
        let api = ApiClient::with_parts(
            Some(server.url("/api")),
            store.shared(),
            navigator.shared(),
        );
        Self {
            api,
            store,
            navigator,
        }
    }
}
