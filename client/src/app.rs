//! Root application component with routing and context providers.

use adoptocare::role::Role;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::alert_banner::AlertBanner;
use crate::components::navbar::Navbar;
use crate::components::protected::Protected;
use crate::components::toast_stack::ToastStack;
use crate::config::client_config;
use crate::pages::announcements::{CreateAnnouncementPage, ManageAnnouncementsPage};
use crate::pages::appointments::{AppointmentRequestPage, UserAppointmentRequestsPage, VetAppointmentRequestsPage};
use crate::pages::dashboard::{DashboardRedirect, RoleDashboard};
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::pets::{PetsPage, ShelterPetsPage};
use crate::state::notify::Notifier;
use crate::state::session::{SessionMirror, install_cross_tab_sync};
use crate::util::storage::BrowserStorage;

/// Root application component.
///
/// Provides the session signal and the notifier, then sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionMirror::open(BrowserStorage);
    let notifier = Notifier::new(client_config());
    provide_context(session);
    provide_context(session.record());
    provide_context(notifier);
    install_cross_tab_sync(session, notifier);

    view! {
        <Title text="AdoptoCare"/>

        <Router>
            <Navbar/>
            <AlertBanner/>
            <ToastStack/>
            <main class="app__main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("pets") view=PetsPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardRedirect/>

                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("admin"))
                        view=|| view! { <Protected role=Role::Admin><RoleDashboard role=Role::Admin/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("admin"), StaticSegment("create-announcement"))
                        view=|| view! { <Protected role=Role::Admin><CreateAnnouncementPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("admin"), StaticSegment("manage-announcements"))
                        view=|| view! { <Protected role=Role::Admin><ManageAnnouncementsPage/></Protected> }
                    />

                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("user"))
                        view=|| view! { <Protected role=Role::User><RoleDashboard role=Role::User/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("user"), StaticSegment("appointment-request"))
                        view=|| view! { <Protected role=Role::User><AppointmentRequestPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("user"), StaticSegment("appointment-requests"))
                        view=|| view! { <Protected role=Role::User><UserAppointmentRequestsPage/></Protected> }
                    />

                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("shelter"))
                        view=|| view! { <Protected role=Role::Shelter><RoleDashboard role=Role::Shelter/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("shelter"), StaticSegment("pets"))
                        view=|| view! { <Protected role=Role::Shelter><ShelterPetsPage/></Protected> }
                    />

                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("vet"))
                        view=|| view! { <Protected role=Role::Vet><RoleDashboard role=Role::Vet/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("vet"), StaticSegment("appointment-requests"))
                        view=|| view! { <Protected role=Role::Vet><VetAppointmentRequestsPage/></Protected> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
