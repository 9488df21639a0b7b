//! Vet appointment pages: the user's request form and list, and the vet's
//! review queue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Users may only book visits for pets from their approved adoption requests,
//! so the form loads those first. Vets answer pending requests with a
//! mandatory note; answered requests are read-only.

#[cfg(test)]
#[path = "appointments_test.rs"]
mod appointments_test;

use adoptocare::api::ApiError;
use adoptocare::api::types::{AppointmentDecision, AppointmentRequest, NewAppointmentRequest};
use adoptocare::role::Role;
#[cfg(feature = "csr")]
use adoptocare::role::USER_DASHBOARD_PATH;
use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::pages::dashboard::DashboardShell;
use crate::state::notify::{Notifier, use_notifier};
use crate::state::session::use_session;
use crate::util::loading::LoadingGuard;

pub(crate) static APPOINTMENT_TYPES: [(&str, &str); 6] = [
    ("checkup", "Regular Checkup"),
    ("vaccination", "Vaccination"),
    ("surgery", "Surgery"),
    ("emergency", "Emergency"),
    ("consultation", "Consultation"),
    ("followup", "Follow-up"),
];

pub(crate) static TIME_SLOTS: [(&str, &str); 8] = [
    ("09:00", "9:00 AM"),
    ("10:00", "10:00 AM"),
    ("11:00", "11:00 AM"),
    ("12:00", "12:00 PM"),
    ("14:00", "2:00 PM"),
    ("15:00", "3:00 PM"),
    ("16:00", "4:00 PM"),
    ("17:00", "5:00 PM"),
];

pub(crate) static URGENCY_LEVELS: [(&str, &str); 4] = [
    ("low", "Low - Routine checkup"),
    ("medium", "Medium - Standard appointment"),
    ("high", "High - Urgent care needed"),
    ("emergency", "Emergency - Immediate attention required"),
];

const MISSING_USER: &str = "Authentication required. Please log in again.";

/// Raw form values before validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct AppointmentDraft {
    pub pet_id: String,
    pub appointment_type: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub reason: String,
    pub notes: String,
    pub urgency: String,
    pub is_emergency: bool,
}

impl Default for AppointmentDraft {
    fn default() -> Self {
        Self {
            pet_id: String::new(),
            appointment_type: "checkup".to_owned(),
            preferred_date: String::new(),
            preferred_time: String::new(),
            reason: String::new(),
            notes: String::new(),
            urgency: "medium".to_owned(),
            is_emergency: false,
        }
    }
}

impl AppointmentDraft {
    /// Parse the pet selection and validate the request body.
    pub(crate) fn into_request(self, user_id: i64) -> Result<NewAppointmentRequest, &'static str> {
        let request = NewAppointmentRequest {
            user_id,
            pet_id: self.pet_id.trim().parse().unwrap_or(0),
            appointment_type: self.appointment_type,
            preferred_date: self.preferred_date,
            preferred_time: self.preferred_time,
            reason: self.reason,
            notes: self.notes,
            urgency: self.urgency,
            is_emergency: self.is_emergency,
        };
        request.validate()?;
        Ok(request)
    }
}

/// A vet's answer needs a note; the status comes from the button pressed.
pub(crate) fn build_decision(approve: bool, note: &str) -> Result<AppointmentDecision, &'static str> {
    let note = note.trim();
    if note.is_empty() {
        return Err("Please fill in all required fields");
    }
    Ok(if approve { AppointmentDecision::approve(note) } else { AppointmentDecision::reject(note) })
}

pub(crate) fn status_class(status: &str) -> String {
    let status = if status.is_empty() { "pending" } else { status };
    format!("status status--{}", status.to_lowercase())
}

fn options(
    choices: &'static [(&'static str, &'static str)],
    current: impl Fn() -> String + Copy + Send + Sync + 'static,
) -> impl IntoView {
    choices
        .iter()
        .map(move |&(value, label)| {
            view! {
                <option value=value selected=move || current() == value>
                    {label}
                </option>
            }
        })
        .collect_view()
}

fn request_row(request: &AppointmentRequest) -> impl IntoView + use<> {
    let pet = request.pet_name.clone().unwrap_or_else(|| "Unknown pet".to_owned());
    let when = format!("{} {}", request.preferred_date, request.preferred_time);
    let status = if request.status.is_empty() { "pending".to_owned() } else { request.status.clone() };
    view! {
        <td>{pet}</td>
        <td>{request.appointment_type.clone()}</td>
        <td>{when}</td>
        <td>{request.reason.clone()}</td>
        <td><span class=status_class(&request.status)>{status}</span></td>
        <td>{request.vet_response.clone().unwrap_or_default()}</td>
    }
}

fn list_error(e: &ApiError) -> AnyView {
    let text = e.user_message("Failed to load appointment requests. Please try again.");
    view! { <p class="page__error">{text}</p> }.into_any()
}

/// `/dashboard/user/appointment-request`.
#[component]
pub fn AppointmentRequestPage() -> impl IntoView {
    let session = use_session();
    let notifier = use_notifier();
    let navigate = use_navigate();
    let pets = LocalResource::new(move || async move {
        match session.user_id() {
            Some(id) => api::fetch_adopted_pets(id).await,
            None => Err(ApiError::Malformed(MISSING_USER.to_owned())),
        }
    });
    let draft = RwSignal::new(AppointmentDraft::default());
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(user_id) = session.user_id() else {
            notifier.error(MISSING_USER);
            return;
        };
        let body = match draft.get().into_request(user_id) {
            Ok(body) => body,
            Err(msg) => {
                notifier.warning(msg);
                return;
            }
        };
        let Some(guard) = LoadingGuard::start(loading) else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let _guard = guard;
                match api::create_appointment_request(&body).await {
                    Ok(()) => {
                        notifier.success("Appointment request submitted successfully!");
                        navigate(USER_DASHBOARD_PATH, NavigateOptions::default());
                    }
                    Err(e) => notifier.error(format!(
                        "Failed to submit appointment request: {}",
                        e.user_message("Please try again.")
                    )),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (guard, body, &navigate);
        }
    };

    let field = move |f: fn(&AppointmentDraft) -> &String| move || draft.with(|d| f(d).clone());

    view! {
        <DashboardShell role=Role::User>
            <header class="page__header">
                <h1>"Request a Vet Appointment"</h1>
            </header>
            <form class="form" on:submit=on_submit>
                <label class="form__label">
                    "Pet"
                    <select class="form__input" on:change=move |ev| draft.update(|d| d.pet_id = event_target_value(&ev))>
                        <option value="">"Select your pet..."</option>
                        <Suspense fallback=|| ()>
                            {move || {
                                pets.get()
                                    .map(|result| {
                                        result
                                            .unwrap_or_default()
                                            .into_iter()
                                            .map(|pet| {
                                                view! { <option value=pet.id.to_string()>{pet.pet_name}</option> }
                                            })
                                            .collect_view()
                                    })
                            }}
                        </Suspense>
                    </select>
                </label>
                <label class="form__label">
                    "Appointment Type"
                    <select
                        class="form__input"
                        on:change=move |ev| draft.update(|d| d.appointment_type = event_target_value(&ev))
                    >
                        {options(&APPOINTMENT_TYPES, field(|d| &d.appointment_type))}
                    </select>
                </label>
                <label class="form__label">
                    "Preferred Date"
                    <input
                        class="form__input"
                        type="date"
                        prop:value=field(|d| &d.preferred_date)
                        on:input=move |ev| draft.update(|d| d.preferred_date = event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Preferred Time"
                    <select
                        class="form__input"
                        on:change=move |ev| draft.update(|d| d.preferred_time = event_target_value(&ev))
                    >
                        <option value="">"Select time..."</option>
                        {options(&TIME_SLOTS, field(|d| &d.preferred_time))}
                    </select>
                </label>
                <label class="form__label">
                    "Reason"
                    <textarea
                        class="form__input"
                        rows="3"
                        prop:value=field(|d| &d.reason)
                        on:input=move |ev| draft.update(|d| d.reason = event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="form__label">
                    "Notes"
                    <textarea
                        class="form__input"
                        rows="2"
                        prop:value=field(|d| &d.notes)
                        on:input=move |ev| draft.update(|d| d.notes = event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="form__label">
                    "Urgency"
                    <select class="form__input" on:change=move |ev| draft.update(|d| d.urgency = event_target_value(&ev))>
                        {options(&URGENCY_LEVELS, field(|d| &d.urgency))}
                    </select>
                </label>
                <label class="form__check">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|d| d.is_emergency)
                        on:change=move |ev| draft.update(|d| d.is_emergency = event_target_checked(&ev))
                    />
                    "This is an emergency"
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Submitting..." } else { "Submit Request" }}
                </button>
            </form>
        </DashboardShell>
    }
}

/// `/dashboard/user/appointment-requests`.
#[component]
pub fn UserAppointmentRequestsPage() -> impl IntoView {
    let session = use_session();
    let requests = LocalResource::new(move || async move {
        match session.user_id() {
            Some(id) => api::fetch_user_appointment_requests(id).await,
            None => Err(ApiError::Malformed(MISSING_USER.to_owned())),
        }
    });

    view! {
        <DashboardShell role=Role::User>
            <header class="page__header">
                <h1>"My Appointment Requests"</h1>
                <a class="btn btn--primary" href="/dashboard/user/appointment-request">"New Request"</a>
            </header>
            <Suspense fallback=move || view! { <p>"Loading requests..."</p> }>
                {move || {
                    requests
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p class="page__empty">"You have not requested any appointments yet."</p> }
                                    .into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <table class="table">
                                        <thead>
                                            <tr>
                                                <th>"Pet"</th>
                                                <th>"Type"</th>
                                                <th>"When"</th>
                                                <th>"Reason"</th>
                                                <th>"Status"</th>
                                                <th>"Vet Response"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list.iter().map(|r| view! { <tr>{request_row(r)}</tr> }).collect_view()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                            Err(e) => list_error(&e),
                        })
                }}
            </Suspense>
        </DashboardShell>
    }
}

type RequestsResource = LocalResource<Result<Vec<AppointmentRequest>, ApiError>>;

/// `/dashboard/vet/appointment-requests`.
#[component]
pub fn VetAppointmentRequestsPage() -> impl IntoView {
    let notifier = use_notifier();
    let requests = LocalResource::new(api::fetch_appointment_requests);
    let notes = RwSignal::new(std::collections::HashMap::<i64, String>::new());

    view! {
        <DashboardShell role=Role::Vet>
            <header class="page__header">
                <h1>"Appointment Requests"</h1>
            </header>
            <Suspense fallback=move || view! { <p>"Loading requests..."</p> }>
                {move || {
                    requests
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p class="page__empty">"No appointment requests."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <table class="table">
                                        <tbody>
                                            {list
                                                .iter()
                                                .map(|r| vet_row(notifier, requests, notes, r))
                                                .collect_view()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                            Err(e) => list_error(&e),
                        })
                }}
            </Suspense>
        </DashboardShell>
    }
}

fn vet_row(
    notifier: Notifier,
    requests: RequestsResource,
    notes: RwSignal<std::collections::HashMap<i64, String>>,
    request: &AppointmentRequest,
) -> impl IntoView + use<> {
    let id = request.id;
    let pending = request.is_pending();
    let answer = move |approve: bool| {
        let note = notes.with_untracked(|n| n.get(&id).cloned().unwrap_or_default());
        match build_decision(approve, &note) {
            Ok(decision) => respond(notifier, requests, id, decision),
            Err(msg) => notifier.warning(msg),
        }
    };

    view! {
        <tr>
            {request_row(request)}
            <td class="table__actions">
                <Show when=move || pending>
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Response to the owner"
                        on:input=move |ev| notes.update(|n| {
                            n.insert(id, event_target_value(&ev));
                        })
                    />
                    <button class="btn btn--primary" on:click=move |_| answer(true)>"Approve"</button>
                    <button class="btn btn--danger" on:click=move |_| answer(false)>"Reject"</button>
                </Show>
            </td>
        </tr>
    }
}

fn respond(notifier: Notifier, requests: RequestsResource, id: i64, decision: AppointmentDecision) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match api::respond_to_appointment(id, &decision).await {
            Ok(()) => {
                notifier.success("Response submitted successfully!");
                requests.refetch();
            }
            Err(e) => notifier.error(e.user_message("Failed to submit response. Please try again.")),
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (notifier, requests, id, decision);
    }
}
