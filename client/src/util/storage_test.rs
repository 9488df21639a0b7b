#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn event_with_null_key_is_a_clear() {
    let change = change_from_event(None, None);
    assert!(change.affects("token"));
    assert!(change.affects("role"));
}

#[test]
fn event_with_key_affects_only_that_key() {
    let change = change_from_event(Some("role".to_owned()), Some("vet".to_owned()));
    assert!(change.affects("role"));
    assert!(!change.affects("token"));
}

#[test]
fn browser_storage_is_empty_outside_the_browser() {
    let mut storage = BrowserStorage;
    storage.set("token", "abc");
    assert_eq!(storage.get("token"), None);
    storage.remove("token");
    storage.clear();
}
