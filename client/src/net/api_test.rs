use super::*;

#[test]
fn request_url_joins_configured_base() {
    let url = request_url("/pets/available");
    assert!(url.ends_with("/api/pets/available") || url.ends_with("/pets/available"));
    assert!(!url.contains("//pets"));
}

#[test]
fn authorization_attaches_stored_token() {
    assert_eq!(authorization("/announcements", Some("abc".to_owned())), Some("Bearer abc".to_owned()));
}

#[test]
fn authorization_skips_login_and_missing_token() {
    assert_eq!(authorization("/auth/login", Some("abc".to_owned())), None);
    assert_eq!(authorization("/announcements", None), None);
}

#[test]
fn calls_fail_cleanly_outside_the_browser() {
    let result = block_on(fetch_available_pets());
    assert!(matches!(result, Err(ApiError::Transport(_))));
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut future = pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = future.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
