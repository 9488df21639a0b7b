//! Single-slot alert banner.
//!
//! A hidden alert keeps its text so the slide-out transition has something to
//! show; only the `alert--visible` class changes.

use adoptocare::notify::NoticeView;
use leptos::prelude::*;

use crate::state::notify::use_notifier;

#[component]
pub fn AlertBanner() -> impl IntoView {
    let notifier = use_notifier();
    let current = move || notifier.banner.with(|c| c.current().map(NoticeView::from));

    view! {
        {move || {
            current()
                .map(|alert| {
                    let class = format!("alert alert--{}", alert.kind.as_str());
                    view! {
                        <div class=class class:alert--visible=alert.visible role="alert">
                            <span class="alert__text">{alert.text}</span>
                            <button class="alert__close" aria-label="Close" on:click=move |_| notifier.hide_alert()>
                                "×"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
