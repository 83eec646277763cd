//! Shared fetch lifecycle for every data hook: one [`LoadState`] machine, the
//! latest request wins, and in-flight work dies with the owning component.

use std::future::Future;

use futures::future::{abortable, AbortHandle};
use leptos::*;

use crate::api::{ApiClient, ApiError};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(ApiError),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl<T: Clone> LoadState<Vec<T>> {
    pub fn items(&self) -> Vec<T> {
        self.data().cloned().unwrap_or_default()
    }
}

/// Whether a successful mutation re-fetches the hook's current query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshPolicy {
    AfterMutation,
    Manual,
}

pub struct Loader<T: 'static> {
    pub state: RwSignal<LoadState<T>>,
    generation: StoredValue<u64>,
    in_flight: StoredValue<Option<AbortHandle>>,
}

impl<T: 'static> Clone for Loader<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Loader<T> {}

impl<T: Clone + 'static> Default for Loader<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static> Loader<T> {
    /// Must be called inside a reactive owner; disposing the owner aborts any
    /// request still in flight.
    pub fn new() -> Self {
        let loader = Self {
            state: create_rw_signal(LoadState::Idle),
            generation: store_value(0),
            in_flight: store_value(None),
        };
        on_cleanup(move || loader.cancel());
        loader
    }

    /// Runs `request`, superseding whatever this loader was still waiting on.
    /// Only the newest request may write the state.
    pub async fn load<F>(&self, request: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        self.abort_in_flight();
        let generation = self
            .generation
            .try_update_value(|g| {
                *g += 1;
                *g
            })
            .ok_or_else(ApiError::cancelled)?;
        let (request, handle) = abortable(request);
        self.in_flight.set_value(Some(handle));
        self.state.set(LoadState::Loading);

        let result = request.await.map_err(|_| ApiError::cancelled())?;

        if self.generation.try_get_value() != Some(generation) {
            return result;
        }
        self.in_flight.try_set_value(None);
        match &result {
            Ok(value) => {
                self.state.try_set(LoadState::Ready(value.clone()));
            }
            Err(err) => {
                log::error!("Fetch failed: {}", err);
                self.state.try_set(LoadState::Failed(err.clone()));
            }
        }
        result
    }

    pub fn spawn_load<F>(&self, request: F)
    where
        F: Future<Output = Result<T, ApiError>> + 'static,
    {
        let loader = *self;
        spawn_local(async move {
            let _ = loader.load(request).await;
        });
    }

    /// Drops the in-flight request, if any, without touching the state.
    pub fn cancel(&self) {
        self.abort_in_flight();
        self.generation.try_update_value(|g| *g += 1);
    }

    fn abort_in_flight(&self) {
        if let Some(Some(handle)) = self.in_flight.try_update_value(Option::take) {
            handle.abort();
        }
    }
}

/// A backend collection reachable through a query.
#[allow(async_fn_in_trait)]
pub trait ListResource: 'static {
    type Item: Clone + 'static;
    type Query: Clone + 'static;
    const REFRESH: RefreshPolicy;
    const NAME: &'static str;

    async fn fetch(api: &ApiClient, query: &Self::Query) -> Result<Vec<Self::Item>, ApiError>;
}

#[allow(async_fn_in_trait)]
pub trait CrudResource: ListResource {
    type Payload: Clone + 'static;

    /// Client-side checks; a failure never reaches the network.
    fn validate(_payload: &Self::Payload) -> Result<(), ApiError> {
        Ok(())
    }

    async fn create(api: &ApiClient, payload: &Self::Payload) -> Result<Self::Item, ApiError>;
    async fn update(api: &ApiClient, id: i64, payload: &Self::Payload)
        -> Result<Self::Item, ApiError>;
    async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError>;
}

/// List state plus the query it was last fetched with, so a refresh repeats it.
pub struct ResourceHook<R: ListResource> {
    pub loader: Loader<Vec<R::Item>>,
    query: RwSignal<Option<R::Query>>,
    api: StoredValue<ApiClient>,
}

impl<R: ListResource> Clone for ResourceHook<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ListResource> Copy for ResourceHook<R> {}

impl<R: ListResource> ResourceHook<R> {
    pub fn new(api: ApiClient) -> Self {
        Self {
            loader: Loader::new(),
            query: create_rw_signal(None),
            api: store_value(api),
        }
    }

    pub fn state(&self) -> Signal<LoadState<Vec<R::Item>>> {
        self.loader.state.into()
    }

    pub fn items(&self) -> Vec<R::Item> {
        self.loader.state.with(LoadState::items)
    }

    pub fn current_query(&self) -> Option<R::Query> {
        self.query.get_untracked()
    }

    pub(crate) fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub async fn fetch(&self, query: R::Query) -> Result<Vec<R::Item>, ApiError> {
        self.query.set(Some(query.clone()));
        let api = self.api();
        self.loader.load(R::fetch(&api, &query)).await
    }

    /// Repeats the last query; a hook that never fetched stays idle.
    pub async fn refresh(&self) -> Result<Vec<R::Item>, ApiError> {
        match self.query.try_get_untracked().flatten() {
            Some(query) => self.fetch(query).await,
            None => Ok(Vec::new()),
        }
    }

    pub fn spawn_fetch(&self, query: R::Query) {
        let hook = *self;
        spawn_local(async move {
            let _ = hook.fetch(query).await;
        });
    }

    pub fn spawn_refresh(&self) {
        let hook = *self;
        spawn_local(async move {
            let _ = hook.refresh().await;
        });
    }

    pub(crate) async fn after_mutation<T>(
        &self,
        action: &str,
        result: Result<T, ApiError>,
        policy: RefreshPolicy,
    ) -> Result<T, ApiError> {
        match result {
            Ok(value) => {
                log::debug!("{} {} succeeded", R::NAME, action);
                if policy == RefreshPolicy::AfterMutation {
                    let _ = self.refresh().await;
                }
                Ok(value)
            }
            Err(err) => {
                log::error!("{} {} failed: {}", R::NAME, action, err);
                Err(err)
            }
        }
    }
}

impl<R: CrudResource> ResourceHook<R> {
    pub async fn add(&self, payload: R::Payload) -> Result<R::Item, ApiError> {
        R::validate(&payload)?;
        let api = self.api();
        let result = R::create(&api, &payload).await;
        self.after_mutation("add", result, R::REFRESH).await
    }

    pub async fn edit(&self, id: i64, payload: R::Payload) -> Result<R::Item, ApiError> {
        R::validate(&payload)?;
        let api = self.api();
        let result = R::update(&api, id, &payload).await;
        self.after_mutation("edit", result, R::REFRESH).await
    }

    pub async fn remove(&self, id: i64) -> Result<(), ApiError> {
        let api = self.api();
        let result = R::delete(&api, id).await;
        self.after_mutation("delete", result, R::REFRESH).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_state_accessors() {
        let ready: LoadState<Vec<u8>> = LoadState::Ready(vec![1, 2]);
        assert_eq!(ready.items(), vec![1, 2]);
        assert!(ready.error().is_none());

        let failed: LoadState<Vec<u8>> = LoadState::Failed(ApiError::unknown("x"));
        assert!(failed.items().is_empty());
        assert_eq!(failed.error().map(|e| e.error.as_str()), Some("x"));
        assert!(LoadState::<u8>::Loading.is_loading());
        assert_eq!(LoadState::<u8>::default(), LoadState::Idle);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use futures::channel::oneshot;

    #[tokio::test]
    async fn load_moves_through_loading_to_ready() {
        let runtime = create_runtime();
        let loader = Loader::<Vec<i32>>::new();
        assert_eq!(loader.state.get_untracked(), LoadState::Idle);

        let (tx, rx) = oneshot::channel::<Vec<i32>>();
        let observed_loading = async {
            assert!(loader.state.get_untracked().is_loading());
            tx.send(vec![7]).unwrap();
        };
        let load = loader.load(async { Ok(rx.await.unwrap_or_default()) });
        let (result, _) = futures::join!(load, observed_loading);

        assert_eq!(result.unwrap(), vec![7]);
        assert_eq!(loader.state.get_untracked(), LoadState::Ready(vec![7]));
        runtime.dispose();
    }

    #[tokio::test]
    async fn failure_lands_in_failed_state() {
        let runtime = create_runtime();
        let loader = Loader::<Vec<i32>>::new();
        let err = loader
            .load(async { Err(ApiError::http(500, "boom")) })
            .await
            .unwrap_err();
        assert_eq!(err.error, "boom");
        assert_eq!(
            loader.state.get_untracked().error().map(|e| e.status),
            Some(Some(500))
        );
        runtime.dispose();
    }

    #[tokio::test]
    async fn later_request_wins_over_slow_earlier_one() {
        let runtime = create_runtime();
        let loader = Loader::<Vec<i32>>::new();
        let (slow_tx, slow_rx) = oneshot::channel::<Vec<i32>>();

        let first = loader.load(async { Ok(slow_rx.await.unwrap_or_default()) });
        let second = async {
            let fresh = loader.load(async { Ok(vec![2]) }).await;
            let _ = slow_tx.send(vec![1]);
            fresh
        };
        let (first, second) = futures::join!(first, second);

        assert!(first.unwrap_err().is_cancelled());
        assert_eq!(second.unwrap(), vec![2]);
        assert_eq!(loader.state.get_untracked(), LoadState::Ready(vec![2]));
        runtime.dispose();
    }

    #[tokio::test]
    async fn cancel_leaves_state_untouched() {
        let runtime = create_runtime();
        let loader = Loader::<Vec<i32>>::new();
        let (tx, rx) = oneshot::channel::<Vec<i32>>();

        let pending = loader.load(async { Ok(rx.await.unwrap_or_default()) });
        let cancel = async {
            loader.cancel();
            let _ = tx.send(vec![9]);
        };
        let (result, _) = futures::join!(pending, cancel);

        assert!(result.unwrap_err().is_cancelled());
        assert!(loader.state.get_untracked().is_loading());
        runtime.dispose();
    }
}
