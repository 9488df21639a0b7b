//! Login page: email + password sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two requests run in sequence: credentials, then the user's profile for a
//! display name. The token, role and user id are stored as soon as the first
//! request succeeds so the profile request is authorized. A failed profile
//! fetch is not fatal; the typed address is used instead. The redirect waits
//! long enough for the welcome toast to be read.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::state::notify::use_notifier;
use crate::state::session::use_session;
use crate::util::loading::LoadingGuard;

/// Trim both fields and require them to be present.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Please enter your email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// A `redirect` query value is only honored for in-app paths.
pub(crate) fn sanitize_redirect(raw: Option<String>) -> Option<String> {
    raw.filter(|path| path.starts_with('/') && !path.starts_with("//"))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let notifier = use_notifier();
    let navigate = leptos_router::hooks::use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(fields) => fields,
            Err(msg) => {
                notifier.warning(msg);
                return;
            }
        };
        let Some(guard) = LoadingGuard::start(loading) else {
            return;
        };
        let redirect_to = sanitize_redirect(query.with_untracked(|q| q.get("redirect")));

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let _guard = guard;
                sign_in(session, notifier, &email_value, &password_value, redirect_to.as_deref(), navigate).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (guard, email_value, password_value, redirect_to, &navigate, session);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Welcome Back"</h1>
                <p class="login-card__subtitle">"Sign in to your Pet Adoption Portal"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">
                        "Email Address"
                        <input
                            class="login-input"
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-label">
                        "Password"
                        <div class="login-password">
                            <input
                                class="login-input"
                                type=move || if show_password.get() { "text" } else { "password" }
                                placeholder="Enter your password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="login-password__toggle"
                                aria-label="Show password"
                                on:click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </label>
                    <button class="login-btn" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(feature = "csr")]
async fn sign_in<F>(
    session: crate::state::session::SessionMirror,
    notifier: crate::state::notify::Notifier,
    email: &str,
    password: &str,
    redirect_to: Option<&str>,
    navigate: F,
) where
    F: Fn(&str, leptos_router::NavigateOptions) + 'static,
{
    use adoptocare::auth::{LOGIN_FAILED_MESSAGE, complete_login, credentials_update};

    use crate::net::api;

    let creds = match api::login(email, password).await {
        Ok(creds) => creds,
        Err(e) => {
            leptos::logging::warn!("login failed: {e}");
            notifier.error(LOGIN_FAILED_MESSAGE);
            return;
        }
    };
    // The profile request needs the bearer token, so it is stored first.
    session.login(credentials_update(&creds), creds.user_id);
    let details = match creds.user_id {
        Some(id) => api::fetch_user_details(id).await.ok(),
        None => None,
    };
    let outcome = complete_login(&creds, details.as_ref(), email, redirect_to);
    session.login(outcome.update, outcome.user_id);
    notifier.success(outcome.welcome);

    let landing = outcome.landing;
    crate::util::timer::after(crate::config::client_config().redirect_delay_ms, move || {
        navigate(&landing, leptos_router::NavigateOptions { replace: true, ..Default::default() });
    });
}
