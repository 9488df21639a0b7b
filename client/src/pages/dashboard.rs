//! Dashboard routes: the `/dashboard` redirect and the per-role home pages.
//!
//! ARCHITECTURE
//! ============
//! Every role page renders inside [`DashboardShell`], which pairs the role's
//! sidebar with the page body. Role homes list the same entries as the
//! sidebar as quick-action cards.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use adoptocare::role::{NavLink, Role, dashboard_redirect, sidebar_links};
use adoptocare::session::SessionRecord;
use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::sidebar::Sidebar;

/// Quick actions shown on a role home: every sidebar entry except the home
/// itself.
pub(crate) fn quick_actions(role: &Role) -> &'static [NavLink] {
    let links = sidebar_links(role);
    links.split_first().map_or(links, |(_, rest)| rest)
}

pub(crate) fn greeting(record: &SessionRecord) -> String {
    format!("Welcome back, {}", record.display_label())
}

/// `/dashboard`: forward to the role's home, or to `/login` when the stored
/// role is missing or unknown.
#[component]
pub fn DashboardRedirect() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionRecord>>();
    let target = move || session.with(|r| dashboard_redirect(r.role().as_ref()));

    view! { {move || view! { <Redirect path=target()/> }} }
}

/// Sidebar + content layout shared by every role page.
#[component]
pub fn DashboardShell(role: Role, children: Children) -> impl IntoView {
    view! {
        <div class="dashboard">
            <Sidebar role=role/>
            <section class="dashboard__content">{children()}</section>
        </div>
    }
}

/// Home page of a role dashboard.
#[component]
pub fn RoleDashboard(role: Role) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionRecord>>();
    let title = format!("{} Dashboard", role.display_name());
    let actions = quick_actions(&role);

    view! {
        <DashboardShell role=role>
            <header class="dashboard__header">
                <h1>{title}</h1>
                <p class="dashboard__subtitle">{move || session.with(greeting)}</p>
            </header>
            <div class="dashboard__actions">
                {actions
                    .iter()
                    .map(|link| {
                        view! {
                            <a class="dashboard__action" href=link.path>
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </DashboardShell>
    }
}
