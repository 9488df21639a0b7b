//! Reactive session mirror for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and the navbar read `RwSignal<SessionRecord>` from context. Every
//! mutation goes through the one [`SessionStore`] held by [`SessionMirror`];
//! the signal is a subscriber of that store, so it only ever shows records
//! the store published. Another tab's writes arrive through
//! [`install_cross_tab_sync`] and are fed to the same store.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use adoptocare::auth::{goodbye_message, store_user_id, stored_user_id};
use adoptocare::session::{SessionRecord, SessionStore, SessionUpdate};
use adoptocare::storage::{Storage, StorageChange};
use leptos::prelude::*;

use crate::state::notify::Notifier;
use crate::util::storage::{BrowserStorage, listen_for_changes};

/// Shown in the banner when another tab ends this session.
pub const SIGNED_OUT_ELSEWHERE: &str = "You were logged out in another tab.";

/// The tab's session store plus the signal it publishes into.
///
/// The store keeps non-`Send` listeners, so it lives in local arena storage;
/// the handle itself is `Copy` and can be provided as context.
pub struct SessionMirror<S: 'static = BrowserStorage> {
    record: RwSignal<SessionRecord>,
    store: StoredValue<SessionStore<S>, LocalStorage>,
}

impl<S: 'static> Clone for SessionMirror<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: 'static> Copy for SessionMirror<S> {}

impl<S: Storage + 'static> SessionMirror<S> {
    /// Open the store over `storage`, subscribe the signal and publish the
    /// stored record.
    pub fn open(storage: S) -> Self {
        let mut store = SessionStore::open(storage);
        let record = RwSignal::new(store.record().clone());
        let _ = store.subscribe(move |next| record.set(next.clone()));
        Self { record, store: StoredValue::new_local(store) }
    }

    /// Published record, for rendering.
    pub fn record(&self) -> RwSignal<SessionRecord> {
        self.record
    }

    /// Re-read the identity keys.
    pub fn refresh(&self) {
        self.store.update_value(|store| {
            store.refresh_from_storage();
        });
    }

    /// Persist a successful login.
    pub fn login(&self, update: SessionUpdate, user_id: Option<i64>) {
        self.store.update_value(|store| {
            if let Some(id) = user_id {
                store_user_id(store.storage_mut(), id);
            }
            store.login(update);
        });
    }

    /// Clear everything stored for the origin.
    ///
    /// Returns the goodbye message for the session that just ended.
    pub fn logout(&self) -> String {
        let name = self.record.get_untracked().display_label().to_owned();
        self.store.update_value(SessionStore::logout);
        goodbye_message(&name)
    }

    /// Apply a change made by another tab.
    ///
    /// Returns `true` when the change touched the session.
    pub fn apply_change(&self, change: &StorageChange) -> bool {
        self.store.try_update_value(|store| store.handle_storage_change(change)).unwrap_or(false)
    }

    /// Numeric id of the signed-in user, written at login.
    pub fn user_id(&self) -> Option<i64> {
        self.store.try_with_value(|store| stored_user_id(store.storage())).flatten()
    }
}

/// Context accessor.
pub fn use_session() -> SessionMirror {
    expect_context::<SessionMirror>()
}

/// What the banner should say about a cross-tab transition, if anything.
pub fn cross_tab_notice(before: &SessionRecord, after: &SessionRecord) -> Option<&'static str> {
    (before.is_logged_in() && !after.is_logged_in()).then_some(SIGNED_OUT_ELSEWHERE)
}

/// Feed one cross-tab change to the store and announce a remote logout.
pub fn on_remote_change<S: Storage + 'static>(session: SessionMirror<S>, notifier: Notifier, change: &StorageChange) {
    let before = session.record().get_untracked();
    if session.apply_change(change) {
        if let Some(text) = cross_tab_notice(&before, &session.record().get_untracked()) {
            notifier.alert_info(text);
        }
    }
}

/// Keep the session in step with logins and logouts made in other tabs.
pub fn install_cross_tab_sync(session: SessionMirror, notifier: Notifier) {
    listen_for_changes(move |change| on_remote_change(session, notifier, &change));
}
