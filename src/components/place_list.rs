//! Place List Component
//!
//! Loading spinner, empty state, or one card per place.

use leptos::prelude::*;

use crate::components::PlaceCard;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn PlaceList() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let count = move || store.places().read().len();
    let has_places = move || count() > 0;

    view! {
        <section class="card list-card">
            <header class="card-header list-header">
                <h2 class="card-title">"맛집 목록"</h2>
                <div class="list-actions">
                    <span class="badge count-badge">{move || format!("{}개", count())}</span>
                    <button
                        class="reload-btn"
                        title="다시 불러오기"
                        disabled=move || store.loading().get()
                        on:click=move |_| ctx.refresh()
                    >
                        "⟳"
                    </button>
                </div>
            </header>

            <Show
                when=move || !store.loading().get()
                fallback=|| view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        <p>"로딩 중..."</p>
                    </div>
                }
            >
                <Show
                    when=has_places
                    fallback=|| view! {
                        <div class="empty-state">
                            <div class="empty-icon">"🍽️"</div>
                            <p>"등록된 맛집이 없습니다"</p>
                            <p class="empty-hint">"왼쪽 폼에서 맛집을 등록해보세요!"</p>
                        </div>
                    }
                >
                    <div class="place-list">
                        <For
                            each=move || store.places().get()
                            key=|place| place.id
                            children=|place| view! { <PlaceCard place=place /> }
                        />
                    </div>
                </Show>
            </Show>
        </section>
    }
}
