//! Public landing page with the active announcements.

use adoptocare::api::types::Announcement;
use adoptocare::role::dashboard_path;
use adoptocare::session::SessionRecord;
use leptos::prelude::*;

use crate::net::api;

fn announcement_card(a: &Announcement) -> impl IntoView + use<> {
    let class = format!("announcement announcement--{}", if a.kind.is_empty() { "info" } else { a.kind.as_str() });
    view! {
        <article class=class>
            <h3 class="announcement__title">{a.title.clone()}</h3>
            <p class="announcement__content">{a.content.clone()}</p>
        </article>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionRecord>>();
    let announcements = LocalResource::new(api::fetch_public_announcements);

    let cta_href = move || session.with(|r| if r.is_logged_in() { dashboard_path(r.role().as_ref()) } else { "/pets" });
    let cta_label = move || session.with(|r| if r.is_logged_in() { "Go to Dashboard" } else { "Meet Our Pets" });

    view! {
        <div class="page home-page">
            <section class="hero">
                <h1 class="hero__title">"Every Pet Deserves a Loving Home"</h1>
                <p class="hero__subtitle">"Adopt, care and connect with shelters and vets in one place."</p>
                <a class="btn btn--primary" href=cta_href>{cta_label}</a>
            </section>
            <Suspense fallback=|| ()>
                {move || {
                    announcements
                        .get()
                        .and_then(Result::ok)
                        .filter(|list| !list.is_empty())
                        .map(|list| {
                            view! {
                                <section class="announcements">
                                    <h2>"Announcements"</h2>
                                    {list.iter().map(announcement_card).collect_view()}
                                </section>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
