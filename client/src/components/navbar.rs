//! Top navigation bar: brand, public links, dashboard shortcut, session
//! controls and the dark mode toggle.

use adoptocare::role::{HOME_PATH, LOGIN_PATH, dashboard_path, shows_public_links};
use adoptocare::session::SessionRecord;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::client_config;
use crate::state::notify::use_notifier;
use crate::state::session::use_session;
use crate::util::{dark_mode, timer};

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let session_record = session.record();
    let notifier = use_notifier();
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);
    let dark = RwSignal::new(false);

    Effect::new(move || {
        let enabled = dark_mode::read_preference();
        dark_mode::apply(enabled);
        dark.set(enabled);
    });

    let on_toggle_dark = move |_| dark.set(dark_mode::toggle(dark.get_untracked()));

    let on_logout = move |_| {
        let goodbye = session.logout();
        notifier.info(goodbye);
        let navigate = navigate.clone();
        timer::after(client_config().redirect_delay_ms, move || {
            navigate(LOGIN_PATH, NavigateOptions::default());
        });
    };
    let close_menu = move |_: leptos::ev::MouseEvent| menu_open.set(false);

    let logged_in = move || session_record.with(SessionRecord::is_logged_in);
    let public_links = move || session_record.with(shows_public_links);
    let dashboard_href = move || session_record.with(|r| dashboard_path(r.role().as_ref()).to_owned());
    let user_label = move || session_record.with(|r| r.display_label().to_owned());

    view! {
        <nav class="navbar">
            <div class="navbar__brand">
                <span class="navbar__logo" aria-hidden="true">"🐾"</span>
                <span class="navbar__title">"AdoptoCare"</span>
            </div>
            <button
                class="navbar__menu-btn"
                aria-label="Toggle menu"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>
            <div class="navbar__links" class:navbar__links--open=move || menu_open.get() on:click=close_menu>
                <Show when=public_links>
                    <a href=HOME_PATH class="navbar__link">"Home"</a>
                    <a href="/pets" class="navbar__link">"Browse Pets"</a>
                </Show>
                <Show
                    when=logged_in
                    fallback=move || {
                        view! {
                            <a href=LOGIN_PATH class="navbar__auth-btn">"Login"</a>
                        }
                    }
                >
                    <a href=dashboard_href class="navbar__link">"Dashboard"</a>
                    <span class="navbar__user">{user_label}</span>
                    <button class="navbar__logout" title="Logout" on:click=on_logout.clone()>"Logout"</button>
                </Show>
                <button
                    class="navbar__theme-btn"
                    aria-label="Toggle dark mode"
                    on:click=on_toggle_dark
                >
                    {move || if dark.get() { "☀" } else { "☾" }}
                </button>
            </div>
        </nav>
    }
}
