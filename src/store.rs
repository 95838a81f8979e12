//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is the
//! backing for the sync controller's `PlaceStore` and `Notifier`.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use matjip_core::{Notice, Notifier, Place, PlaceId, PlaceStore};
use reactive_stores::Store;

/// How long a toast stays up
const TOAST_MS: u32 = 4_000;

/// A notice on screen
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Places in session order
    pub places: Vec<Place>,
    /// A listing request is in flight
    pub loading: bool,
    /// Visible notices, oldest first
    pub toasts: Vec<Toast>,
    pub next_toast_id: u64,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a toast with a fresh ID, returning the ID
pub fn store_add_toast(store: &AppStore, notice: Notice) -> u64 {
    store.next_toast_id().update(|next| *next += 1);
    let id = store.next_toast_id().get_untracked();
    store.toasts().write().push(Toast { id, notice });
    id
}

/// Push a toast and schedule its dismissal
pub fn store_push_toast(store: &AppStore, notice: Notice) {
    let id = store_add_toast(store, notice);

    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(TOAST_MS).await;
        store_dismiss_toast(&store, id);
    });
}

/// Remove a toast by ID
pub fn store_dismiss_toast(store: &AppStore, toast_id: u64) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}

// ========================
// Controller Adapters
// ========================

/// The store's place collection seen as a `PlaceStore`
#[derive(Clone, Copy)]
pub struct StorePlaces(pub AppStore);

impl PlaceStore for StorePlaces {
    fn snapshot(&self) -> Vec<Place> {
        self.0.places().get_untracked()
    }

    fn replace_all(&self, places: Vec<Place>) {
        self.0.places().set(places);
    }

    fn append(&self, place: Place) {
        self.0.places().write().push(place);
    }

    fn remove(&self, id: PlaceId) {
        self.0.places().write().retain(|place| place.id != id);
    }

    fn is_loading(&self) -> bool {
        self.0.loading().get_untracked()
    }

    fn set_loading(&self, loading: bool) {
        self.0.loading().set(loading);
    }
}

/// Notices become toasts
#[derive(Clone, Copy)]
pub struct StoreNotifier(pub AppStore);

impl Notifier for StoreNotifier {
    fn notify(&self, notice: Notice) {
        store_push_toast(&self.0, notice);
    }
}
