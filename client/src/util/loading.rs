//! Scoped busy flags for forms and lists.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

use leptos::prelude::*;

/// Sets a busy flag on creation and clears it when dropped, so every exit of
/// an async handler (success, error, early return) releases the form.
#[derive(Debug)]
pub struct LoadingGuard(RwSignal<bool>);

impl LoadingGuard {
    /// Raise `flag`, or return `None` when it is already raised.
    pub fn start(flag: RwSignal<bool>) -> Option<Self> {
        if flag.get_untracked() {
            return None;
        }
        flag.set(true);
        Some(Self(flag))
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        let _ = self.0.try_set(false);
    }
}
