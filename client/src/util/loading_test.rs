use super::*;

#[test]
fn guard_raises_and_releases_flag() {
    let flag = RwSignal::new(false);
    {
        let _guard = LoadingGuard::start(flag).unwrap();
        assert!(flag.get_untracked());
    }
    assert!(!flag.get_untracked());
}

#[test]
fn second_start_is_refused_while_busy() {
    let flag = RwSignal::new(false);
    let first = LoadingGuard::start(flag);
    assert!(first.is_some());
    assert!(LoadingGuard::start(flag).is_none());
    drop(first);
    assert!(LoadingGuard::start(flag).is_some());
}
