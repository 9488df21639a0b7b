#![cfg(not(feature = "csr"))]

use adoptocare::auth::USER_ID_KEY;
use adoptocare::config::ClientConfig;
use adoptocare::session::{ROLE_KEY, TOKEN_KEY, USER_NAME_KEY};
use adoptocare::storage::MemoryStorage;

use super::*;

fn record(token: &str) -> SessionRecord {
    SessionRecord { token: token.to_owned(), user_name: "Ana".to_owned(), ..SessionRecord::default() }
}

fn signed_in_storage() -> MemoryStorage {
    MemoryStorage::with_entries([(TOKEN_KEY, "t1"), (USER_NAME_KEY, "Ana"), (ROLE_KEY, "user")])
}

// =============================================================
// Cross-tab notice
// =============================================================

#[test]
fn signing_out_elsewhere_is_announced() {
    assert_eq!(cross_tab_notice(&record("t"), &record("")), Some(SIGNED_OUT_ELSEWHERE));
}

#[test]
fn other_transitions_are_silent() {
    assert_eq!(cross_tab_notice(&record(""), &record("t")), None);
    assert_eq!(cross_tab_notice(&record("a"), &record("b")), None);
    assert_eq!(cross_tab_notice(&record(""), &record("")), None);
}

// =============================================================
// SessionMirror
// =============================================================

#[test]
fn open_publishes_the_stored_record() {
    let session = SessionMirror::open(signed_in_storage());
    let current = session.record().get_untracked();
    assert!(current.is_logged_in());
    assert_eq!(current.user_name, "Ana");
}

#[test]
fn login_reaches_the_signal_through_the_subscription() {
    let session = SessionMirror::open(MemoryStorage::new());
    assert!(!session.record().get_untracked().is_logged_in());

    session.login(SessionUpdate::default().token("t2").user_name("Bo").role("vet"), Some(12));
    let current = session.record().get_untracked();
    assert_eq!(current.token, "t2");
    assert_eq!(current.user_name, "Bo");
    assert_eq!(session.user_id(), Some(12));
}

#[test]
fn logout_resets_signal_and_says_goodbye() {
    let session = SessionMirror::open(signed_in_storage());
    let message = session.logout();
    assert!(!session.record().get_untracked().is_logged_in());
    assert_eq!(message, "Goodbye, Ana! You have been logged out successfully.");
}

#[test]
fn unrelated_change_leaves_signal_untouched() {
    let session = SessionMirror::open(signed_in_storage());
    assert!(!session.apply_change(&StorageChange::set("darkMode", "true")));
    assert!(session.record().get_untracked().is_logged_in());
}

#[test]
fn other_tab_logout_reaches_the_signal_and_the_banner() {
    let storage = signed_in_storage();
    let mut other_tab = storage.open_context();
    let session = SessionMirror::open(storage.clone());
    let notifier = Notifier::new(&ClientConfig::default());

    other_tab.clear();
    for change in storage.take_changes() {
        on_remote_change(session, notifier, &change);
    }

    assert!(!session.record().get_untracked().is_logged_in());
    let banner = notifier.banner.with_untracked(|c| c.current().map(|m| m.text.clone()));
    assert_eq!(banner.as_deref(), Some(SIGNED_OUT_ELSEWHERE));
}

#[test]
fn other_tab_login_is_picked_up_silently() {
    let storage = MemoryStorage::new();
    let mut other_tab = storage.open_context();
    let session = SessionMirror::open(storage.clone());
    let notifier = Notifier::new(&ClientConfig::default());

    other_tab.set(TOKEN_KEY, "t9");
    other_tab.set(USER_ID_KEY, "3");
    for change in storage.take_changes() {
        on_remote_change(session, notifier, &change);
    }

    assert_eq!(session.record().get_untracked().token, "t9");
    assert_eq!(session.user_id(), Some(3));
    assert!(notifier.banner.with_untracked(|c| c.current().is_none()));
}
