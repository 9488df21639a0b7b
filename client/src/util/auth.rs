//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same redirect: no token, or a role other
//! than the one the route requires, sends the visitor to `/login`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use adoptocare::role::{Access, LOGIN_PATH, Role, guard};
use adoptocare::session::SessionRecord;
use leptos::prelude::*;
use leptos_router::NavigateOptions;

/// Where a visitor must be sent instead of the protected page, if anywhere.
pub fn redirect_target(record: &SessionRecord, required: Option<&Role>) -> Option<&'static str> {
    match guard(record, required) {
        Access::Allow => None,
        Access::RedirectToLogin => Some(LOGIN_PATH),
    }
}

/// Redirect to `/login` whenever the session stops satisfying the guard,
/// including when another tab logs out while the page is open.
pub fn install_guard_redirect<F>(session: RwSignal<SessionRecord>, required: Option<Role>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = redirect_target(&session.get(), required.as_ref()) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
