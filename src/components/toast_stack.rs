//! Toast Stack Component
//!
//! Renders pending notices; click to dismiss early.

use leptos::prelude::*;
use matjip_core::NoticeKind;

use crate::store::{store_dismiss_toast, use_app_store, AppStateStoreFields};

#[component]
pub fn ToastStack() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-stack">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.notice.kind {
                        NoticeKind::Success => "toast",
                        NoticeKind::Failure => "toast destructive",
                    };
                    view! {
                        <div class=class on:click=move |_| store_dismiss_toast(&store, id)>
                            <div class="toast-title">{toast.notice.title}</div>
                            <div class="toast-description">{toast.notice.description}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
