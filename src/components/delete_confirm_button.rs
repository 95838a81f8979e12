//! Delete Confirm Button Component
//!
//! Trash button that asks "삭제?" inline before running the delete.

use leptos::prelude::*;

/// Inline delete confirmation
///
/// # Arguments
/// * `label` - accessible label of the trash button
/// * `on_confirm` - runs once the user confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let confirming = RwSignal::new(false);

    let ask = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        confirming.set(true);
    };
    let confirm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        confirming.set(false);
        on_confirm.run(());
    };
    let cancel = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        confirming.set(false);
    };

    move || {
        if confirming.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">"삭제?"</span>
                    <button class="confirm-btn" aria-label="삭제 확인" on:click=confirm>"✓"</button>
                    <button class="cancel-btn" aria-label="취소" on:click=cancel>"✗"</button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button class="delete-btn" aria-label=label.clone() on:click=ask>"🗑️"</button>
            }
            .into_any()
        }
    }
}
