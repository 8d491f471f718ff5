//! Загрузка конфигурации при старте
//!
//! `config.toml` next to `index.html` wins; anything missing or broken falls
//! back to the defaults compiled into `contracts`.

use contracts::shared::config::AppConfig;
use gloo_net::http::Request;
use leptos::prelude::*;

const CONFIG_PATH: &str = "config.toml";

pub async fn load_config() -> AppConfig {
    let response = match Request::get(CONFIG_PATH).send().await {
        Ok(response) => response,
        Err(e) => {
            log::warn!("config.toml unavailable ({}), using built-in defaults", e);
            return AppConfig::default();
        }
    };
    if !response.ok() {
        log::info!(
            "config.toml not served (HTTP {}), using built-in defaults",
            response.status()
        );
        return AppConfig::default();
    }
    let text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            log::warn!("config.toml could not be read ({}), using built-in defaults", e);
            return AppConfig::default();
        }
    };
    match AppConfig::from_toml(&text) {
        Ok(config) => {
            log::info!("Loaded config.toml (store: {})", config.store_base());
            config
        }
        Err(e) => {
            log::error!("config.toml is invalid: {}; using built-in defaults", e);
            AppConfig::default()
        }
    }
}

/// Конфигурация, предоставленная корневым компонентом
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig context not provided")
}
