use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://hrms-backend-pqxp.onrender.com";

/// Applied to every outbound API request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value).unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    API_BASE_URL.get_or_init(|| value).clone()
}

fn compile_time_base_url() -> Option<String> {
    option_env!("HRMS_API_BASE").and_then(normalize_base_url)
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;

    fn read_string(obj: &js_sys::Object, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(obj, &(*key).into())
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
                .and_then(|v| v.as_string())
        })
    }

    fn read_global(name: &str, keys: &[&str]) -> Option<String> {
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &name.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        read_string(&js_sys::Object::from(any), keys)
    }

    // window.__HRMS_ENV = { API_BASE: "..." } is injected by env.js at deploy time.
    pub fn snapshot_from_globals() -> Option<String> {
        read_global("__HRMS_ENV", &["API_BASE", "api_base"])
            .or_else(|| read_global("__HRMS_CONFIG", &["api_base_url", "API_BASE_URL"]))
    }

    pub fn write_window_config(cfg: &RuntimeConfig) {
        let Some(url) = &cfg.api_base_url else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &obj,
            &"api_base_url".into(),
            &wasm_bindgen::JsValue::from_str(url),
        );
        let _ = js_sys::Reflect::set(&window, &"__HRMS_CONFIG".into(), &obj);
    }

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let origin = web_sys::window()?.location().origin().ok()?;
        let resp = reqwest::Client::new()
            .get(format!("{}/config.json", origin))
            .send()
            .await
            .ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = browser::snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(cfg) = browser::fetch_runtime_config().await {
        browser::write_window_config(&cfg);
        if let Some(url) = cfg.api_base_url.as_deref().and_then(normalize_base_url) {
            return cache_base_url(&url);
        }
    }
    cache_base_url(&compile_time_base_url().unwrap_or_else(|| DEFAULT_API_BASE_URL.into()))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    let from_env = std::env::var("HRMS_API_BASE")
        .ok()
        .and_then(|v| normalize_base_url(&v))
        .or_else(compile_time_base_url);
    cache_base_url(&from_env.unwrap_or_else(|| DEFAULT_API_BASE_URL.into()))
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::info!("API base URL resolved to {}", base);
}
