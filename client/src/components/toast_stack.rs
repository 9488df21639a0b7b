//! Stacked toast surface, including yes/no confirmations.

use adoptocare::notify::{Choice, NoticeKind, NoticeView, NotificationCenter};
use leptos::prelude::*;

use crate::state::notify::{Notifier, use_notifier};

#[component]
pub fn ToastStack() -> impl IntoView {
    let notifier = use_notifier();
    let toasts = move || notifier.toasts.with(NotificationCenter::views);

    view! {
        <div class="toast-stack" aria-live="polite">
            {move || toasts().into_iter().map(|toast| toast_view(notifier, toast)).collect_view()}
        </div>
    }
}

fn toast_view(notifier: Notifier, toast: NoticeView) -> impl IntoView {
    let id = toast.id;
    let class = format!("toast toast--{}", toast.kind.as_str());
    let actions = if toast.kind == NoticeKind::Confirm {
        view! {
            <div class="toast__actions">
                <button class="toast__btn toast__btn--yes" on:click=move |_| notifier.answer(id, Choice::Confirm)>
                    "Yes"
                </button>
                <button class="toast__btn toast__btn--no" on:click=move |_| notifier.answer(id, Choice::Reject)>
                    "No"
                </button>
            </div>
        }
            .into_any()
    } else {
        view! {
            <button class="toast__close" aria-label="Close" on:click=move |_| notifier.dismiss(id)>
                "×"
            </button>
        }
            .into_any()
    };

    view! {
        <div class=class role="status">
            <span class="toast__text">{toast.text}</span>
            {actions}
        </div>
    }
}
