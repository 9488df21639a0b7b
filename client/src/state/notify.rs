//! Notification service shared by every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`Notifier`] is provided at the app root. It owns two
//! [`NotificationCenter`]s: the single-slot alert banner and the stacked
//! toast list. Components render them through `AlertBanner` and `ToastStack`;
//! everything else only calls the methods here.
//!
//! DESIGN
//! ======
//! The centers hold no clock. Every notice with a lifetime gets a one-shot
//! browser timer that dismisses exactly that id, so a notice that was
//! preempted or dismissed early makes its timer a no-op.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use adoptocare::config::ClientConfig;
use adoptocare::notify::{Choice, NoticeId, NoticeKind, NotificationCenter};
use leptos::prelude::*;

use crate::util::timer;

#[derive(Clone, Copy, Debug)]
pub struct Notifier {
    pub banner: RwSignal<NotificationCenter>,
    pub toasts: RwSignal<NotificationCenter>,
}

impl Notifier {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            banner: RwSignal::new(NotificationCenter::banner(config.banner)),
            toasts: RwSignal::new(NotificationCenter::toasts(config.toast)),
        }
    }

    // =========================================================================
    // TOASTS
    // =========================================================================

    pub fn toast(&self, kind: NoticeKind, text: impl Into<String>) -> Option<NoticeId> {
        push(self.toasts, kind, text.into())
    }

    pub fn success(&self, text: impl Into<String>) {
        let _ = self.toast(NoticeKind::Success, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        let _ = self.toast(NoticeKind::Error, text);
    }

    pub fn warning(&self, text: impl Into<String>) {
        let _ = self.toast(NoticeKind::Warning, text);
    }

    pub fn info(&self, text: impl Into<String>) {
        let _ = self.toast(NoticeKind::Info, text);
    }

    /// Ask a yes/no question; `on_confirm` runs only on "Yes".
    pub fn confirm<F>(&self, text: impl Into<String>, on_confirm: F) -> Option<NoticeId>
    where
        F: FnOnce() + Send + Sync + 'static,
    {
        let text = text.into();
        self.toasts.try_update(move |center| center.confirm(text, on_confirm))
    }

    /// Answer a confirmation. The continuation runs after the center has been
    /// released, so it may push new notices itself.
    pub fn answer(&self, id: NoticeId, choice: Choice) {
        let continuation = self.toasts.try_update(|center| center.respond(id, choice)).flatten();
        if let Some(run) = continuation {
            run();
        }
    }

    pub fn dismiss(&self, id: NoticeId) {
        dismiss(self.toasts, id);
    }

    // =========================================================================
    // BANNER
    // =========================================================================

    pub fn alert(&self, kind: NoticeKind, text: impl Into<String>) -> Option<NoticeId> {
        push(self.banner, kind, text.into())
    }

    pub fn alert_info(&self, text: impl Into<String>) {
        let _ = self.alert(NoticeKind::Info, text);
    }

    pub fn hide_alert(&self) {
        self.banner.update(NotificationCenter::hide);
    }
}

/// Context accessor.
pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}

fn push(center: RwSignal<NotificationCenter>, kind: NoticeKind, text: String) -> Option<NoticeId> {
    let (id, lifetime) = center.try_update(|c| {
        let id = c.notify(kind, text);
        (id, c.lifetimes().for_kind(kind))
    })?;
    if let Some(ms) = lifetime {
        timer::after(ms, move || dismiss(center, id));
    }
    Some(id)
}

fn dismiss(center: RwSignal<NotificationCenter>, id: NoticeId) {
    let _ = center.try_update(|c| c.dismiss(id));
}
