//! Build-time client configuration.
//!
//! The browser has no process environment, so overrides are captured with
//! `option_env!` when the WASM bundle is compiled and fed through
//! [`ClientConfig::from_lookup`]. A malformed override is logged and the
//! defaults are used instead.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::sync::OnceLock;

use adoptocare::config::{API_BASE_URL_VAR, ClientConfig, REDIRECT_DELAY_MS_VAR, TOAST_MS_VAR};

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Process-wide config, loaded on first use.
pub fn client_config() -> &'static ClientConfig {
    CONFIG.get_or_init(|| load(build_time_value))
}

fn load(lookup: impl Fn(&str) -> Option<String>) -> ClientConfig {
    ClientConfig::from_lookup(lookup).unwrap_or_else(|e| {
        leptos::logging::warn!("config: {e}; using defaults");
        ClientConfig::default()
    })
}

fn build_time_value(key: &str) -> Option<String> {
    let value = match key {
        API_BASE_URL_VAR => option_env!("ADOPTOCARE_API_BASE_URL"),
        TOAST_MS_VAR => option_env!("ADOPTOCARE_TOAST_MS"),
        REDIRECT_DELAY_MS_VAR => option_env!("ADOPTOCARE_REDIRECT_DELAY_MS"),
        _ => None,
    };
    value.map(str::to_owned)
}
