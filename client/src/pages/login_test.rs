use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  ana@shelter.org ", "pw"),
        Ok(("ana@shelter.org".to_owned(), "pw".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err("Please enter your email and password."));
    assert_eq!(validate_login_input("a@b.c", ""), Err("Please enter your email and password."));
}

#[test]
fn sanitize_redirect_keeps_in_app_paths_only() {
    assert_eq!(sanitize_redirect(Some("/pets".to_owned())), Some("/pets".to_owned()));
    assert_eq!(sanitize_redirect(Some("//evil.example".to_owned())), None);
    assert_eq!(sanitize_redirect(Some("https://evil.example".to_owned())), None);
    assert_eq!(sanitize_redirect(None), None);
}
