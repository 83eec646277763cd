//! Cancellable fixed-interval background work.

use std::{future::Future, time::Duration};

use futures::future::{abortable, AbortHandle};
use leptos::spawn_local;

use crate::utils::navigation::page_is_visible;

/// A spawned tick loop with an explicit start/stop contract. Dropping the
/// task stops it too.
#[derive(Debug, Default)]
pub struct PollingTask {
    handle: Option<AbortHandle>,
}

impl PollingTask {
    /// Ticks once right away, then every `interval` while the page is
    /// visible. Ticks that fall on a hidden page are skipped, not queued.
    pub fn start<T, Fut>(interval: Duration, tick: T) -> Self
    where
        T: FnMut() -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        Self::start_with(tick, move || sleep(interval), page_is_visible)
    }

    pub fn start_with<T, Fut, S, SFut, V>(tick: T, sleep: S, visible: V) -> Self
    where
        T: FnMut() -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
        S: FnMut() -> SFut + 'static,
        SFut: Future<Output = ()> + 'static,
        V: Fn() -> bool + 'static,
    {
        let (task, handle) = abortable(poll_loop(tick, sleep, visible));
        spawn_local(async move {
            let _ = task.await;
        });
        Self {
            handle: Some(handle),
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .map(|h| !h.is_aborted())
            .unwrap_or(false)
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            log::debug!("Polling stopped");
        }
    }
}

impl Drop for PollingTask {
    fn drop(&mut self) {
        self.stop();
    }
}

pub async fn poll_loop<T, Fut, S, SFut, V>(mut tick: T, mut sleep: S, visible: V)
where
    T: FnMut() -> Fut,
    Fut: Future<Output = ()>,
    S: FnMut() -> SFut,
    SFut: Future<Output = ()>,
    V: Fn() -> bool,
{
    loop {
        if visible() {
            tick().await;
        }
        sleep().await;
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(interval: Duration) {
    gloo_timers::future::sleep(interval).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(interval: Duration) {
    tokio::time::sleep(interval).await;
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use std::{cell::Cell, rc::Rc};

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() -> futures::future::Ready<()>) {
        let hits = Rc::new(Cell::new(0));
        let seen = hits.clone();
        (hits, move || {
            seen.set(seen.get() + 1);
            futures::future::ready(())
        })
    }

    #[tokio::test]
    async fn stop_ends_ticks() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let (hits, tick) = counter();
                let mut task = PollingTask::start(Duration::from_millis(10), tick);
                tokio::time::sleep(Duration::from_millis(45)).await;
                assert!(hits.get() >= 2);
                assert!(task.is_running());

                task.stop();
                let after_stop = hits.get();
                tokio::time::sleep(Duration::from_millis(50)).await;
                assert_eq!(hits.get(), after_stop);
                assert!(!task.is_running());
            })
            .await;
    }

    #[tokio::test]
    async fn drop_stops_like_stop() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let (hits, tick) = counter();
                let task = PollingTask::start(Duration::from_millis(10), tick);
                tokio::time::sleep(Duration::from_millis(25)).await;
                drop(task);
                let after_drop = hits.get();
                tokio::time::sleep(Duration::from_millis(40)).await;
                assert_eq!(hits.get(), after_drop);
            })
            .await;
    }

    #[tokio::test]
    async fn hidden_page_skips_ticks() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let (hits, tick) = counter();
                let visible = Rc::new(Cell::new(false));
                let flag = visible.clone();
                let _task = PollingTask::start_with(
                    tick,
                    || tokio::time::sleep(Duration::from_millis(5)),
                    move || flag.get(),
                );
                tokio::time::sleep(Duration::from_millis(30)).await;
                assert_eq!(hits.get(), 0);

                visible.set(true);
                tokio::time::sleep(Duration::from_millis(30)).await;
                assert!(hits.get() > 0);
            })
            .await;
    }
}
