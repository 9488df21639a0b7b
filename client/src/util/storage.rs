//! `localStorage` adapter and cross-tab `storage` event wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`BrowserStorage`] implements the core [`Storage`] trait on top of
//! `window.localStorage`, so the shared `SessionStore` logic runs unchanged in
//! the browser. [`listen_for_changes`] forwards `storage` events raised by
//! other tabs of the same origin as [`StorageChange`] values.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort: a missing window, disabled storage or a quota error
//! is logged and treated as an empty store. Native builds read nothing and write
//! nothing.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use adoptocare::storage::{Storage, StorageChange};

/// Handle to the origin's `localStorage`. Looked up on every call, so the
/// handle itself is `Copy` and safe to move into closures and contexts.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl Storage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if let Err(e) = storage.set_item(key, value) {
                leptos::logging::warn!("storage: write {key} failed: {e:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&mut self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }

    fn clear(&mut self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.clear();
            }
        }
    }
}

/// Convert the fields of a browser `storage` event. A `None` key means the
/// other tab cleared the whole store.
pub fn change_from_event(key: Option<String>, new_value: Option<String>) -> StorageChange {
    StorageChange { key, new_value }
}

/// Invoke `on_change` for every `storage` event delivered to this tab.
///
/// Events fire only for writes made by other tabs; this tab's own writes are
/// applied synchronously by whoever made them.
pub fn listen_for_changes<F>(on_change: F)
where
    F: Fn(StorageChange) + 'static,
{
    #[cfg(feature = "csr")]
    {
        let handle = leptos::prelude::window_event_listener(leptos::ev::storage, move |ev| {
            on_change(change_from_event(ev.key(), ev.new_value()));
        });
        leptos::prelude::on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = on_change;
    }
}
