#![cfg(not(feature = "csr"))]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::*;

fn notifier() -> Notifier {
    Notifier::new(&ClientConfig::default())
}

#[test]
fn toasts_stack_and_banner_preempts() {
    let n = notifier();
    n.success("Saved");
    n.error("Failed");
    assert_eq!(n.toasts.with_untracked(|c| c.views().len()), 2);

    n.alert_info("first");
    let _ = n.alert(NoticeKind::Warning, "second");
    let current = n.banner.with_untracked(|c| c.current().map(|m| m.text.clone()));
    assert_eq!(current.as_deref(), Some("second"));
}

#[test]
fn accepted_confirmation_runs_continuation() {
    let n = notifier();
    let ran = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&ran);
    let id = n.confirm("Delete this pet?", move || flag.store(true, Ordering::SeqCst)).unwrap();
    n.answer(id, Choice::Confirm);
    assert!(ran.load(Ordering::SeqCst));
    assert!(n.toasts.with_untracked(NotificationCenter::is_empty));
}

#[test]
fn rejected_confirmation_skips_continuation() {
    let n = notifier();
    let ran = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&ran);
    let id = n.confirm("Delete this pet?", move || flag.store(true, Ordering::SeqCst)).unwrap();
    n.answer(id, Choice::Reject);
    assert!(!ran.load(Ordering::SeqCst));
}

#[test]
fn hide_alert_keeps_text_but_hides_banner() {
    let n = notifier();
    n.alert_info("Heads up");
    n.hide_alert();
    n.banner.with_untracked(|c| {
        assert!(c.is_empty());
        assert_eq!(c.current().map(|m| m.text.as_str()), Some("Heads up"));
    });
}
