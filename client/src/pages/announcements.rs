//! Admin announcement pages: create, then manage (toggle and delete).

#[cfg(test)]
#[path = "announcements_test.rs"]
mod announcements_test;

use adoptocare::api::ApiError;
use adoptocare::api::types::{Announcement, NewAnnouncement};
use adoptocare::role::Role;
use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::pages::dashboard::DashboardShell;
use crate::state::notify::{Notifier, use_notifier};
use crate::util::loading::LoadingGuard;

#[cfg(feature = "csr")]
const MANAGE_PATH: &str = "/dashboard/admin/manage-announcements";

/// Severity choices offered by the form, as `(value, label)`.
pub(crate) static ANNOUNCEMENT_KINDS: [(&str, &str); 4] =
    [("info", "Info"), ("success", "Success"), ("warning", "Warning"), ("danger", "Danger")];

/// Totals shown above the management table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct AnnouncementStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

pub(crate) fn announcement_stats(list: &[Announcement]) -> AnnouncementStats {
    let active = list.iter().filter(|a| a.active).count();
    AnnouncementStats { total: list.len(), active, inactive: list.len() - active }
}

/// Unknown severities render as `info`.
pub(crate) fn badge_class(kind: &str) -> String {
    let known = ANNOUNCEMENT_KINDS.iter().any(|(value, _)| *value == kind);
    format!("badge badge--{}", if known { kind } else { "info" })
}

/// `/dashboard/admin/create-announcement`.
#[component]
pub fn CreateAnnouncementPage() -> impl IntoView {
    let notifier = use_notifier();
    let navigate = use_navigate();
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let kind = RwSignal::new("info".to_owned());
    let active = RwSignal::new(true);
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let body = NewAnnouncement { title: title.get(), content: content.get(), kind: kind.get(), active: active.get() };
        if let Err(msg) = body.validate() {
            notifier.warning(msg);
            return;
        }
        let Some(guard) = LoadingGuard::start(loading) else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let _guard = guard;
                match api::create_announcement(&body).await {
                    Ok(()) => {
                        notifier.success("Announcement created successfully!");
                        navigate(MANAGE_PATH, NavigateOptions::default());
                    }
                    Err(e) => notifier.error(e.user_message("Failed to create announcement. Please try again.")),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (guard, body, &navigate);
        }
    };

    view! {
        <DashboardShell role=Role::Admin>
            <header class="page__header">
                <h1>"Create Announcement"</h1>
                <p class="page__subtitle">"Shown on the home page and the user dashboard."</p>
            </header>
            <form class="form" on:submit=on_submit>
                <label class="form__label">
                    "Title"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Content"
                    <textarea
                        class="form__input"
                        rows="5"
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="form__label">
                    "Type"
                    <select class="form__input" on:change=move |ev| kind.set(event_target_value(&ev))>
                        {ANNOUNCEMENT_KINDS
                            .iter()
                            .map(|&(value, label)| {
                                view! {
                                    <option value=value selected=move || kind.get() == value>
                                        {label}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <label class="form__check">
                    <input
                        type="checkbox"
                        prop:checked=move || active.get()
                        on:change=move |ev| active.set(event_target_checked(&ev))
                    />
                    "Active"
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Creating..." } else { "Create Announcement" }}
                </button>
            </form>
        </DashboardShell>
    }
}

/// `/dashboard/admin/manage-announcements`.
#[component]
pub fn ManageAnnouncementsPage() -> impl IntoView {
    let notifier = use_notifier();
    let announcements = LocalResource::new(api::fetch_announcements);

    view! {
        <DashboardShell role=Role::Admin>
            <header class="page__header">
                <h1>"Manage Announcements"</h1>
                <a class="btn btn--primary" href="/dashboard/admin/create-announcement">"New Announcement"</a>
            </header>
            <Suspense fallback=move || view! { <p>"Loading announcements..."</p> }>
                {move || {
                    announcements
                        .get()
                        .map(|result| match result {
                            Ok(list) => announcement_table(notifier, announcements, &list).into_any(),
                            Err(e) => {
                                let text = e.user_message("Failed to load announcements. Please try again.");
                                view! { <p class="page__error">{text}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </DashboardShell>
    }
}

type AnnouncementsResource = LocalResource<Result<Vec<Announcement>, ApiError>>;

fn announcement_table(notifier: Notifier, resource: AnnouncementsResource, list: &[Announcement]) -> impl IntoView + use<> {
    let stats = announcement_stats(list);
    let rows = list
        .iter()
        .map(|a| {
            let id = a.id;
            let on_toggle = move |_| toggle(notifier, resource, id);
            let on_delete = move |_| {
                let _ = notifier.confirm("Are you sure you want to delete this announcement?", move || {
                    delete(notifier, resource, id);
                });
            };
            let status = if a.active { "Active" } else { "Inactive" };
            let toggle_label = if a.active { "Deactivate" } else { "Activate" };
            view! {
                <tr>
                    <td>{a.title.clone()}</td>
                    <td><span class=badge_class(&a.kind)>{a.kind.to_uppercase()}</span></td>
                    <td>{status}</td>
                    <td>{a.created_at.clone().unwrap_or_default()}</td>
                    <td class="table__actions">
                        <button class="btn" on:click=on_toggle>{toggle_label}</button>
                        <button class="btn btn--danger" on:click=on_delete>"Delete"</button>
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="stats">
            <div class="stats__item">"Total: "{stats.total}</div>
            <div class="stats__item">"Active: "{stats.active}</div>
            <div class="stats__item">"Inactive: "{stats.inactive}</div>
        </div>
        <table class="table">
            <thead>
                <tr>
                    <th>"Title"</th>
                    <th>"Type"</th>
                    <th>"Status"</th>
                    <th>"Created"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}

fn toggle(notifier: Notifier, resource: AnnouncementsResource, id: i64) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match api::toggle_announcement(id).await {
            Ok(()) => {
                notifier.success("Announcement status updated successfully!");
                resource.refetch();
            }
            Err(e) => notifier.error(e.user_message("Failed to update announcement status. Please try again.")),
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (notifier, resource, id);
    }
}

fn delete(notifier: Notifier, resource: AnnouncementsResource, id: i64) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match api::delete_announcement(id).await {
            Ok(()) => {
                notifier.success("Announcement deleted successfully!");
                resource.refetch();
            }
            Err(e) => notifier.error(e.user_message("Failed to delete announcement. Please try again.")),
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (notifier, resource, id);
    }
}
