//! REST API calls for the adoption portal.
//!
//! With the `csr` feature: real HTTP calls via `gloo-net`.
//! Native builds (tests): every call fails with a transport error since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics; pages turn errors into
//! toasts with [`ApiError::user_message`] and keep rendering.
//!
//! Every request except login/register carries `Authorization: Bearer` with
//! the token currently in storage, read at send time so a login in another
//! tab is picked up immediately.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use adoptocare::api::types::{
    AdoptionRequest, Announcement, AppointmentDecision, AppointmentRequest, Credentials, LoginRequest, LoginResponse,
    NewAnnouncement, NewAppointmentRequest, Pet, UserDetails, adopted_pets,
};
use adoptocare::api::{
    self, ANNOUNCEMENTS_PATH, APPOINTMENT_REQUESTS_PATH, AVAILABLE_PETS_PATH, ApiError, PUBLIC_ANNOUNCEMENTS_PATH,
    check_status, classify,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

#[cfg(any(test, feature = "csr"))]
fn request_url(path: &str) -> String {
    api::endpoint(&crate::config::client_config().api_base_url, path)
}

#[cfg(any(test, feature = "csr"))]
fn authorization(path: &str, stored_token: Option<String>) -> Option<String> {
    api::bearer_header(path, stored_token.as_deref().unwrap_or_default())
}

/// Send one request and return the raw status and body.
async fn send<B: Serialize>(verb: Verb, path: &str, body: Option<&B>) -> Result<(u16, String), ApiError> {
    #[cfg(feature = "csr")]
    {
        use adoptocare::session::TOKEN_KEY;
        use adoptocare::storage::Storage;
        use gloo_net::http::Request;

        let url = request_url(path);
        let builder = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Put => Request::put(&url),
            Verb::Delete => Request::delete(&url),
        };
        let builder = match authorization(path, crate::util::storage::BrowserStorage.get(TOKEN_KEY)) {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        };
        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let resp = request.send().await.map_err(|e| {
            leptos::logging::warn!("api: {verb:?} {path} failed: {e}");
            ApiError::Transport(e.to_string())
        })?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| ApiError::Malformed(e.to_string()))?;
        Ok((status, text))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (verb, path, body);
        Err(ApiError::Transport("not available outside the browser".to_owned()))
    }
}

async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let (status, body) = send::<()>(Verb::Get, path, None).await?;
    classify(status, &body)
}

async fn post<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let (status, text) = send(Verb::Post, path, Some(body)).await?;
    check_status(status, &text)
}

async fn put<B: Serialize>(path: &str, body: Option<&B>) -> Result<(), ApiError> {
    let (status, text) = send(Verb::Put, path, body).await?;
    check_status(status, &text)
}

async fn delete(path: &str) -> Result<(), ApiError> {
    let (status, text) = send::<()>(Verb::Delete, path, None).await?;
    check_status(status, &text)
}

// =============================================================================
// AUTH
// =============================================================================

/// `POST /auth/login`, validated into [`Credentials`].
///
/// # Errors
///
/// Returns the transport, status or shape error of the login call.
pub async fn login(email: &str, password: &str) -> Result<Credentials, ApiError> {
    let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
    let (status, text) = send(Verb::Post, api::LOGIN_PATH, Some(&body)).await?;
    classify::<LoginResponse>(status, &text)?.into_credentials()
}

/// `GET /users/{id}`.
///
/// # Errors
///
/// Returns the transport, status or shape error of the call.
pub async fn fetch_user_details(user_id: i64) -> Result<UserDetails, ApiError> {
    get(&api::user_path(user_id)).await
}

// =============================================================================
// PETS
// =============================================================================

/// `GET /pets/available`.
///
/// # Errors
///
/// Returns the transport, status or shape error of the call.
pub async fn fetch_available_pets() -> Result<Vec<Pet>, ApiError> {
    get(AVAILABLE_PETS_PATH).await
}

/// Pets listed by the signed-in shelter.
///
/// # Errors
///
/// Returns the transport, status or shape error of the call.
pub async fn fetch_shelter_pets(user_id: i64) -> Result<Vec<Pet>, ApiError> {
    get(&api::shelter_pets_path(user_id)).await
}

/// `DELETE /pets/{id}`.
///
/// # Errors
///
/// Returns the transport or status error of the call.
pub async fn delete_pet(pet_id: i64) -> Result<(), ApiError> {
    delete(&api::pet_path(pet_id)).await
}

/// Pets from the user's approved adoption requests.
///
/// # Errors
///
/// Returns the transport, status or shape error of the call.
pub async fn fetch_adopted_pets(user_id: i64) -> Result<Vec<Pet>, ApiError> {
    let requests: Vec<AdoptionRequest> = get(&api::user_adoption_requests_path(user_id)).await?;
    Ok(adopted_pets(requests))
}

// =============================================================================
// ANNOUNCEMENTS
// =============================================================================

/// `GET /announcements`.
///
/// # Errors
///
/// Returns the transport, status or shape error of the call.
pub async fn fetch_announcements() -> Result<Vec<Announcement>, ApiError> {
    get(ANNOUNCEMENTS_PATH).await
}

/// Active announcements for the home page.
///
/// # Errors
///
/// Returns the transport, status or shape error of the call.
pub async fn fetch_public_announcements() -> Result<Vec<Announcement>, ApiError> {
    get(PUBLIC_ANNOUNCEMENTS_PATH).await
}

/// `POST /announcements`.
///
/// # Errors
///
/// Returns the transport or status error of the call.
pub async fn create_announcement(body: &NewAnnouncement) -> Result<(), ApiError> {
    post(ANNOUNCEMENTS_PATH, body).await
}

/// `PUT /announcements/{id}/toggle`.
///
/// # Errors
///
/// Returns the transport or status error of the call.
pub async fn toggle_announcement(announcement_id: i64) -> Result<(), ApiError> {
    put::<()>(&api::announcement_toggle_path(announcement_id), None).await
}

/// `DELETE /announcements/{id}`.
///
/// # Errors
///
/// Returns the transport or status error of the call.
pub async fn delete_announcement(announcement_id: i64) -> Result<(), ApiError> {
    delete(&api::announcement_path(announcement_id)).await
}

// =============================================================================
// APPOINTMENTS
// =============================================================================

/// `POST /appointment-requests`.
///
/// # Errors
///
/// Returns the transport or status error of the call.
pub async fn create_appointment_request(body: &NewAppointmentRequest) -> Result<(), ApiError> {
    post(APPOINTMENT_REQUESTS_PATH, body).await
}

/// Requests filed by one user.
///
/// # Errors
///
/// Returns the transport, status or shape error of the call.
pub async fn fetch_user_appointment_requests(user_id: i64) -> Result<Vec<AppointmentRequest>, ApiError> {
    get(&api::user_appointment_requests_path(user_id)).await
}

/// Every request, for the vet queue.
///
/// # Errors
///
/// Returns the transport, status or shape error of the call.
pub async fn fetch_appointment_requests() -> Result<Vec<AppointmentRequest>, ApiError> {
    get(APPOINTMENT_REQUESTS_PATH).await
}

/// `PUT /appointment-requests/{id}/respond`.
///
/// # Errors
///
/// Returns the transport or status error of the call.
pub async fn respond_to_appointment(request_id: i64, decision: &AppointmentDecision) -> Result<(), ApiError> {
    put(&api::appointment_respond_path(request_id), Some(decision)).await
}
