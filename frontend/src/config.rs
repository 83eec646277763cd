use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_NOTIFICATION_POLL_MS: u32 = 5_000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub notification_poll_ms: Option<u32>,
}

impl RuntimeConfig {
    fn merge(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(fallback.api_base_url),
            notification_poll_ms: self.notification_poll_ms.or(fallback.notification_poll_ms),
        }
    }

    fn is_complete(&self) -> bool {
        self.api_base_url.is_some() && self.notification_poll_ms.is_some()
    }
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static NOTIFICATION_POLL_MS: OnceLock<u32> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
mod globals {
    use super::RuntimeConfig;
    use wasm_bindgen::JsValue;

    fn read_key(obj: &JsValue, keys: &[&str]) -> Option<JsValue> {
        keys.iter()
            .filter_map(|key| js_sys::Reflect::get(obj, &(*key).into()).ok())
            .find(|v| !v.is_undefined() && !v.is_null())
    }

    fn read_object(name: &str) -> Option<RuntimeConfig> {
        let w = web_sys::window()?;
        let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let api_base_url =
            read_key(&any, &["API_BASE_URL", "api_base_url"]).and_then(|v| v.as_string());
        let notification_poll_ms = read_key(&any, &["NOTIFICATION_POLL_MS", "notification_poll_ms"])
            .and_then(|v| v.as_f64())
            .filter(|ms| *ms > 0.0)
            .map(|ms| ms as u32);
        Some(RuntimeConfig {
            api_base_url,
            notification_poll_ms,
        })
    }

    // window.__TEAMSYNC_ENV (env.js) wins over window.__TEAMSYNC_CONFIG.
    pub fn snapshot() -> RuntimeConfig {
        let env = read_object("__TEAMSYNC_ENV").unwrap_or_default();
        let cfg = read_object("__TEAMSYNC_CONFIG").unwrap_or_default();
        env.merge(cfg)
    }

    pub fn write(cfg: &RuntimeConfig) {
        let Some(w) = web_sys::window() else {
            return;
        };
        let obj = js_sys::Object::new();
        if let Some(url) = &cfg.api_base_url {
            let _ = js_sys::Reflect::set(&obj, &"api_base_url".into(), &JsValue::from_str(url));
        }
        if let Some(ms) = cfg.notification_poll_ms {
            let _ = js_sys::Reflect::set(
                &obj,
                &"notification_poll_ms".into(),
                &JsValue::from_f64(ms as f64),
            );
        }
        let _ = js_sys::Reflect::set(&w, &"__TEAMSYNC_CONFIG".into(), &obj);
    }

    pub fn config_json_url() -> Option<String> {
        let origin = web_sys::window()?.location().origin().ok()?;
        Some(format!("{}/config.json", origin))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod globals {
    use super::RuntimeConfig;

    pub fn snapshot() -> RuntimeConfig {
        RuntimeConfig::default()
    }

    pub fn write(_cfg: &RuntimeConfig) {}

    pub fn config_json_url() -> Option<String> {
        None
    }
}

fn cache(cfg: RuntimeConfig) -> RuntimeConfig {
    let url = cfg
        .api_base_url
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    let poll = cfg
        .notification_poll_ms
        .unwrap_or(DEFAULT_NOTIFICATION_POLL_MS);
    let _ = API_BASE_URL.set(url);
    let _ = NOTIFICATION_POLL_MS.set(poll);
    RuntimeConfig {
        api_base_url: API_BASE_URL.get().cloned(),
        notification_poll_ms: NOTIFICATION_POLL_MS.get().copied(),
    }
}

async fn fetch_runtime_config() -> anyhow::Result<Option<RuntimeConfig>> {
    let Some(url) = globals::config_json_url() else {
        return Ok(None);
    };
    let resp = reqwest::get(&url)
        .await
        .with_context(|| format!("GET {}", url))?;
    if !resp.status().is_success() {
        anyhow::bail!("{} answered {}", url, resp.status());
    }
    let cfg = resp
        .json::<RuntimeConfig>()
        .await
        .context("config.json is not a runtime config")?;
    Ok(Some(cfg))
}

pub async fn load() -> RuntimeConfig {
    if let (Some(url), Some(poll)) = (API_BASE_URL.get(), NOTIFICATION_POLL_MS.get()) {
        return RuntimeConfig {
            api_base_url: Some(url.clone()),
            notification_poll_ms: Some(*poll),
        };
    }
    let snapshot = globals::snapshot();
    if snapshot.is_complete() {
        return cache(snapshot);
    }
    match fetch_runtime_config().await {
        Ok(Some(file_cfg)) => {
            let merged = snapshot.merge(file_cfg);
            globals::write(&merged);
            cache(merged)
        }
        Ok(None) => cache(snapshot),
        Err(err) => {
            log::warn!("Runtime config file unavailable: {:#}", err);
            cache(snapshot)
        }
    }
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    load()
        .await
        .api_base_url
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

/// Poll interval for the unread-notification counter. Falls back to the
/// default until [`init`] has resolved the runtime config.
pub fn notification_poll_ms() -> u32 {
    NOTIFICATION_POLL_MS
        .get()
        .copied()
        .unwrap_or(DEFAULT_NOTIFICATION_POLL_MS)
}

pub async fn init() {
    let cfg = load().await;
    log::info!(
        "Runtime config resolved (api: {})",
        cfg.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    );
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[tokio::test]
    async fn load_falls_back_to_defaults_without_browser() {
        let url = await_api_base_url().await;
        assert_eq!(url, DEFAULT_API_BASE_URL);
        assert_eq!(notification_poll_ms(), DEFAULT_NOTIFICATION_POLL_MS);
    }
}
