//! Pet listings: the public adoption gallery and the shelter's own pets.

#[cfg(test)]
#[path = "pets_test.rs"]
mod pets_test;

use adoptocare::api::ApiError;
use adoptocare::api::types::Pet;
use adoptocare::role::Role;
use leptos::prelude::*;

use crate::net::api;
use crate::pages::dashboard::DashboardShell;
use crate::state::notify::{Notifier, use_notifier};
use crate::state::session::use_session;

const DELETE_PET_PROMPT: &str =
    "Are you sure you want to delete this pet? This action cannot be undone and will also delete all related records.";

/// Adoption status filter on the shelter list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum StatusFilter {
    #[default]
    All,
    Available,
    Adopted,
}

impl StatusFilter {
    pub(crate) fn parse(raw: &str) -> Self {
        match raw {
            "available" => Self::Available,
            "adopted" => Self::Adopted,
            _ => Self::All,
        }
    }

    fn matches(self, pet: &Pet) -> bool {
        match self {
            Self::All => true,
            Self::Available => !pet.adopted,
            Self::Adopted => pet.adopted,
        }
    }
}

/// Case-insensitive search over name, breed and description plus a status
/// filter.
pub(crate) fn filter_pets(pets: &[Pet], search: &str, status: StatusFilter) -> Vec<Pet> {
    let needle = search.trim().to_lowercase();
    pets.iter()
        .filter(|pet| status.matches(pet))
        .filter(|pet| {
            needle.is_empty()
                || pet.pet_name.to_lowercase().contains(&needle)
                || pet.breed.to_lowercase().contains(&needle)
                || pet.description.as_deref().is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// User-facing text for a failed delete.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn delete_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Rejected { message: Some(message), .. } if message.contains("foreign key constraint") => {
            "Cannot delete this pet because it has related records (appointments, adoption requests, etc.).".to_owned()
        }
        ApiError::Rejected { message: Some(message), .. } => format!("Error: {message}"),
        other => other.user_message("Failed to delete pet. Please try again."),
    }
}

fn pet_card(pet: &Pet) -> impl IntoView + use<> {
    let photo = pet.cover_photo().map(str::to_owned);
    let name = pet.pet_name.clone();
    let alt = name.clone();
    let summary = pet.summary();
    let adopted = pet.adopted;
    let status = if adopted { "Adopted" } else { "Available" };
    view! {
        <div class="pet-card__media">
            {photo.map(|src| view! { <img class="pet-card__photo" src=src alt=alt/> })}
        </div>
        <div class="pet-card__body">
            <h3 class="pet-card__name">{name}</h3>
            <p class="pet-card__summary">{summary}</p>
            <span class="pet-card__status" class:pet-card__status--adopted=adopted>
                {status}
            </span>
        </div>
    }
}

fn load_error_view(err: &ApiError) -> AnyView {
    let text = err.user_message("Failed to load pets.");
    view! { <p class="page__error">{text}</p> }.into_any()
}

/// `/pets`: every pet still available for adoption.
#[component]
pub fn PetsPage() -> impl IntoView {
    let pets = LocalResource::new(api::fetch_available_pets);

    view! {
        <div class="page pets-page">
            <h1>"Find Your New Best Friend"</h1>
            <Suspense fallback=move || view! { <p>"Loading pets..."</p> }>
                {move || {
                    pets.get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p class="page__empty">"No pets are available right now."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <div class="pet-grid">
                                        {list
                                            .iter()
                                            .map(|pet| view! { <article class="pet-card">{pet_card(pet)}</article> })
                                            .collect_view()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(e) => load_error_view(&e),
                        })
                }}
            </Suspense>
        </div>
    }
}

/// `/dashboard/shelter/pets`: the signed-in shelter's listings with search,
/// status filter and confirm-to-delete.
#[component]
pub fn ShelterPetsPage() -> impl IntoView {
    let session = use_session();
    let notifier = use_notifier();
    let pets = LocalResource::new(move || async move {
        match session.user_id() {
            Some(id) => api::fetch_shelter_pets(id).await,
            None => Err(ApiError::Malformed("Authentication required. Please log in again.".to_owned())),
        }
    });
    let search = RwSignal::new(String::new());
    let status = RwSignal::new(StatusFilter::All);

    let on_delete = move |pet_id: i64| {
        let _ = notifier.confirm(DELETE_PET_PROMPT, move || delete_pet(notifier, pets, pet_id));
    };

    view! {
        <DashboardShell role=Role::Shelter>
            <header class="page__header">
                <h1>"My Pets"</h1>
            </header>
            <div class="page__filters">
                <input
                    class="page__search"
                    type="search"
                    placeholder="Search by name, breed or description"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    class="page__select"
                    on:change=move |ev| status.set(StatusFilter::parse(&event_target_value(&ev)))
                >
                    <option value="all">"All"</option>
                    <option value="available">"Available"</option>
                    <option value="adopted">"Adopted"</option>
                </select>
            </div>
            <Suspense fallback=move || view! { <p>"Loading pets..."</p> }>
                {move || {
                    pets.get()
                        .map(|result| match result {
                            Ok(list) => {
                                let shown = filter_pets(&list, &search.get(), status.get());
                                if shown.is_empty() {
                                    return view! { <p class="page__empty">"No pets match your filters."</p> }
                                        .into_any();
                                }
                                view! {
                                    <div class="pet-grid">
                                        {shown
                                            .iter()
                                            .map(|pet| {
                                                let id = pet.id;
                                                view! {
                                                    <article class="pet-card">
                                                        {pet_card(pet)}
                                                        <button class="btn btn--danger" on:click=move |_| on_delete(id)>
                                                            "Delete"
                                                        </button>
                                                    </article>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(e) => load_error_view(&e),
                        })
                }}
            </Suspense>
        </DashboardShell>
    }
}

fn delete_pet(notifier: Notifier, pets: LocalResource<Result<Vec<Pet>, ApiError>>, pet_id: i64) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match api::delete_pet(pet_id).await {
            Ok(()) => {
                notifier.success("Pet deleted successfully!");
                pets.refetch();
            }
            Err(e) => notifier.error(delete_failure_message(&e)),
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (notifier, pets, pet_id);
    }
}
