//! Matjip Frontend App
//!
//! Header plus a two-column layout: form on the left, list on the right.

use leptos::prelude::*;
use matjip_core::HttpPlacesApi;
use reactive_stores::Store;

use crate::components::{PlaceFormCard, PlaceList, ToastStack};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    let ctx = AppContext::new(store, HttpPlacesApi::default());

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load places on mount
    Effect::new(move |_| {
        log::debug!("[APP] activating place list");
        ctx.activate();
    });

    view! {
        <div class="app">
            <header class="app-header">
                <div class="app-header-inner">
                    <div>
                        <h1>"🍽️ 맛집 관리"</h1>
                        <p class="subtitle">"나만의 맛집 리스트를 만들고 관리하세요"</p>
                    </div>
                    <span class="total-count">
                        {move || format!("총 {}개", store.places().read().len())}
                    </span>
                </div>
            </header>

            <main class="app-main">
                <div class="form-column">
                    <PlaceFormCard />
                </div>
                <div class="list-column">
                    <PlaceList />
                </div>
            </main>

            <ToastStack />
        </div>
    }
}
