use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

const DEFAULT_API_BASE_URL: &str = "http://localhost:3500/api";

static API_BASE_URL: OnceLock<String> = OnceLock::new();

pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value);
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;
    use wasm_bindgen::JsValue;

    fn read_global(object_name: &str, keys: &[&str]) -> Option<String> {
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &object_name.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(&any, &JsValue::from_str(key))
                .ok()
                .and_then(|value| value.as_string())
                .filter(|value| !value.trim().is_empty())
        })
    }

    // window.__KOLLEGE_ENV = { API_BASE_URL: "..." } (env.js) wins over
    // window.__KOLLEGE_CONFIG = { api_base_url: "..." }.
    pub fn snapshot_from_globals() -> Option<String> {
        read_global("__KOLLEGE_ENV", &["API_BASE_URL", "api_base_url"])
            .or_else(|| read_global("__KOLLEGE_CONFIG", &["api_base_url", "API_BASE_URL"]))
    }

    pub fn origin() -> Option<String> {
        web_sys::window()?.location().origin().ok()
    }

    pub fn write_window_config(cfg: &RuntimeConfig) {
        let (Some(window), Some(url)) = (web_sys::window(), cfg.api_base_url.as_ref()) else {
            return;
        };
        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&obj, &"api_base_url".into(), &JsValue::from_str(url));
        let _ = js_sys::Reflect::set(&window, &"__KOLLEGE_CONFIG".into(), &obj);
    }

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let url = format!("{}/config.json", origin()?);
        let resp = reqwest::get(url).await.ok()?;
        if !resp.status().is_success() {
            log::debug!("no runtime config.json (status {})", resp.status());
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
        if let Some(url) = cfg.api_base_url {
            return cache_base_url(&url);
        }
    }
    match browser::origin() {
        Some(origin) => cache_base_url(&format!("{}/api", origin)),
        None => cache_base_url(DEFAULT_API_BASE_URL),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn await_api_base_url() -> String {
    match API_BASE_URL.get() {
        Some(cached) => cached.clone(),
        None => cache_base_url(DEFAULT_API_BASE_URL),
    }
}

pub async fn init() {
    let base_url = await_api_base_url().await;
    log::info!("API base URL resolved to {}", base_url);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_base_url_trims_whitespace_and_trailing_slashes() {
        assert_eq!(
            normalize_base_url(" https://school.example/api// "),
            "https://school.example/api"
        );
        assert_eq!(normalize_base_url("/api"), "/api");
    }

    #[test]
    fn runtime_config_parses_optional_base_url() {
        let cfg: RuntimeConfig =
            serde_json::from_str(r#"{"api_base_url":"https://school.example/api"}"#).unwrap();
        assert_eq!(cfg.api_base_url.as_deref(), Some("https://school.example/api"));

        let empty: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert!(empty.api_base_url.is_none());
    }
}
