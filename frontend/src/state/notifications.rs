use std::time::Duration;

use leptos::*;

use crate::api::{ApiClient, ApiError, Notification};
use crate::config;
use crate::state::polling::PollingTask;
use crate::state::resource::{ListResource, RefreshPolicy, ResourceHook};
use crate::state::use_api;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationQuery {
    All,
    Unread,
}

pub struct Notifications;

impl ListResource for Notifications {
    type Item = Notification;
    type Query = NotificationQuery;
    const REFRESH: RefreshPolicy = RefreshPolicy::AfterMutation;
    const NAME: &'static str = "notification";

    async fn fetch(api: &ApiClient, query: &NotificationQuery) -> Result<Vec<Notification>, ApiError> {
        match query {
            NotificationQuery::All => api.list_my_notifications().await,
            NotificationQuery::Unread => api.list_unread_notifications().await,
        }
    }
}

impl ResourceHook<Notifications> {
    /// No optimistic flip: the list shows the new flag once the refetch lands.
    pub async fn mark_read(&self, id: i64) -> Result<(), ApiError> {
        let result = self.api().mark_notification_read(id).await;
        self.after_mutation("mark read", result, RefreshPolicy::AfterMutation)
            .await
    }

    pub async fn mark_unread(&self, id: i64) -> Result<(), ApiError> {
        let result = self.api().mark_notification_unread(id).await;
        self.after_mutation("mark unread", result, RefreshPolicy::AfterMutation)
            .await
    }
}

pub type NotificationsHook = ResourceHook<Notifications>;

pub fn use_notifications() -> NotificationsHook {
    ResourceHook::new(use_api())
}

/// Unread badge counter, optionally kept fresh by a [`PollingTask`] owned by
/// the same reactive scope.
#[derive(Clone, Copy)]
pub struct UnreadCount {
    pub count: RwSignal<u32>,
    api: StoredValue<ApiClient>,
    poller: StoredValue<Option<PollingTask>>,
}

impl UnreadCount {
    pub fn new(api: ApiClient) -> Self {
        let unread = Self {
            count: create_rw_signal(0),
            api: store_value(api),
            poller: store_value(None),
        };
        on_cleanup(move || unread.stop());
        unread
    }

    pub async fn refresh(&self) -> Result<u32, ApiError> {
        let api = self.api.try_get_value().ok_or_else(ApiError::cancelled)?;
        match api.count_my_notifications().await {
            Ok(count) => {
                self.count.try_set(count);
                Ok(count)
            }
            Err(err) => {
                log::warn!("Unread notification count failed: {}", err);
                Err(err)
            }
        }
    }

    pub fn spawn_refresh(&self) {
        let unread = *self;
        spawn_local(async move {
            let _ = unread.refresh().await;
        });
    }

    /// Replaces any running poller.
    pub fn start(&self, interval: Duration) {
        let unread = *self;
        let task = PollingTask::start(interval, move || async move {
            let _ = unread.refresh().await;
        });
        self.poller.try_set_value(Some(task));
    }

    pub fn stop(&self) {
        self.poller.try_update_value(|poller| {
            if let Some(mut task) = poller.take() {
                task.stop();
            }
        });
    }

    pub fn is_polling(&self) -> bool {
        self.poller
            .try_with_value(|p| p.as_ref().map(PollingTask::is_running).unwrap_or(false))
            .unwrap_or(false)
    }
}

/// Counter polling at the configured interval from mount until the caller's
/// scope is disposed.
pub fn use_unread_notifications() -> UnreadCount {
    let unread = UnreadCount::new(use_api());
    create_effect(move |started: Option<()>| {
        if started.is_none() {
            unread.start(Duration::from_millis(u64::from(config::notification_poll_ms())));
        }
    });
    unread
}
