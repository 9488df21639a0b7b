#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn only_json_true_enables_dark_mode() {
    assert!(parse_preference(Some("true")));
    assert!(!parse_preference(Some("false")));
    assert!(!parse_preference(Some("yes")));
    assert!(!parse_preference(None));
}

#[test]
fn read_preference_is_false_without_a_browser() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}
