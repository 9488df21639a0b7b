//! Dark mode preference and toggle.
//!
//! The preference lives under the `darkMode` key as a JSON boolean so it
//! survives reloads and is shared by every tab. It is not part of the session
//! identity, so logging in or out through another tab does not repaint the
//! theme, but a logout's storage clear resets it on the next load.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; native builds no-op so
//! the helpers stay testable without a DOM.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use adoptocare::storage::Storage;

use super::storage::BrowserStorage;

pub const DARK_MODE_KEY: &str = "darkMode";

const BODY_CLASS: &str = "dark-mode";

/// Decode a stored preference; anything but JSON `true` means light.
pub fn parse_preference(raw: Option<&str>) -> bool {
    raw.and_then(|v| serde_json::from_str::<bool>(v).ok()).unwrap_or(false)
}

/// Read the stored preference.
pub fn read_preference() -> bool {
    parse_preference(BrowserStorage.get(DARK_MODE_KEY).as_deref())
}

/// Add or remove the `dark-mode` class on `<body>`.
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let classes = body.class_list();
            let _ = if enabled { classes.add_1(BODY_CLASS) } else { classes.remove_1(BODY_CLASS) };
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (enabled, BODY_CLASS);
    }
}

/// Flip the preference, apply it and persist it.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    BrowserStorage.set(DARK_MODE_KEY, if next { "true" } else { "false" });
    next
}
