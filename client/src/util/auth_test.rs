use super::*;

fn record(token: &str, role: &str) -> SessionRecord {
    SessionRecord { token: token.to_owned(), role: role.to_owned(), ..SessionRecord::default() }
}

#[test]
fn anonymous_visitor_is_sent_to_login() {
    assert_eq!(redirect_target(&record("", ""), None), Some("/login"));
}

#[test]
fn logged_in_visitor_passes_open_routes() {
    assert_eq!(redirect_target(&record("t", "vet"), None), None);
}

#[test]
fn wrong_role_is_sent_to_login() {
    assert_eq!(redirect_target(&record("t", "user"), Some(&Role::Admin)), Some("/login"));
    assert_eq!(redirect_target(&record("t", "admin"), Some(&Role::Admin)), None);
}
