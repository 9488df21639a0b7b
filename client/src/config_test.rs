use super::*;

#[test]
fn load_applies_overrides() {
    let config = load(|key| (key == TOAST_MS_VAR).then(|| "2500".to_owned()));
    assert_eq!(config.toast.error_ms, 2500);
    assert_eq!(config.api_base_url, adoptocare::config::DEFAULT_API_BASE_URL);
}

#[test]
fn load_falls_back_to_defaults_on_bad_value() {
    let config = load(|key| (key == REDIRECT_DELAY_MS_VAR).then(|| "soon".to_owned()));
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn unknown_keys_have_no_build_time_value() {
    assert_eq!(build_time_value("HOME"), None);
}
