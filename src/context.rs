//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use matjip_core::{HttpPlacesApi, Notice, Notifier, PlaceId, PlaceSync};

use crate::store::{AppStore, StoreNotifier, StorePlaces};

pub type AppSync = PlaceSync<HttpPlacesApi, StorePlaces, StoreNotifier>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    /// The controller is `!Send`, so it lives in local storage
    sync: StoredValue<Rc<AppSync>, LocalStorage>,
}

impl AppContext {
    pub fn new(store: AppStore, api: HttpPlacesApi) -> Self {
        let sync = PlaceSync::new(api, StorePlaces(store), StoreNotifier(store));
        Self {
            store,
            sync: StoredValue::new_local(Rc::new(sync)),
        }
    }

    pub fn sync(&self) -> Rc<AppSync> {
        self.sync.get_value()
    }

    /// Initial load, once per session
    pub fn activate(&self) {
        let sync = self.sync();
        spawn_local(async move {
            sync.activate().await;
        });
    }

    /// Reload the list
    pub fn refresh(&self) {
        let sync = self.sync();
        spawn_local(async move {
            let _ = sync.refresh().await;
        });
    }

    /// Delete a place
    pub fn remove(&self, id: PlaceId) {
        let sync = self.sync();
        spawn_local(async move {
            let _ = sync.remove(id).await;
        });
    }

    pub fn notify(&self, notice: Notice) {
        StoreNotifier(self.store).notify(notice);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
