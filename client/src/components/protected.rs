//! Route guard wrapper.

use adoptocare::role::Role;
use adoptocare::session::SessionRecord;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::util::auth::{install_guard_redirect, redirect_target};

/// Render `children` only while the session passes the guard; otherwise send
/// the visitor to `/login`.
#[component]
pub fn Protected(#[prop(optional)] role: Option<Role>, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionRecord>>();
    install_guard_redirect(session, role.clone(), use_navigate());

    let allowed = move || session.with(|r| redirect_target(r, role.as_ref()).is_none());

    view! {
        <Show when=allowed>
            {children()}
        </Show>
    }
}
