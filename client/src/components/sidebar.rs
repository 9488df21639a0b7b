//! Dashboard sidebar listing the role's navigation entries.

use adoptocare::role::{Role, sidebar_links};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn Sidebar(role: Role) -> impl IntoView {
    let pathname = use_location().pathname;
    let links = sidebar_links(&role);

    view! {
        <aside class="sidebar">
            <div class="sidebar__title">{role.display_name()}</div>
            <ul class="sidebar__links">
                {links
                    .iter()
                    .map(|link| {
                        let path = link.path;
                        let active = move || pathname.get() == path;
                        view! {
                            <li>
                                <a href=path class="sidebar__link" class:sidebar__link--active=active>
                                    {link.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </aside>
    }
}
