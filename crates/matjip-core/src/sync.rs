//! List Synchronization Controller
//!
//! Owns the in-session place collection protocol. Local state changes only
//! after the remote call has succeeded; failures leave it untouched and
//! surface a notice instead.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{info, warn};

use crate::api::PlacesApi;
use crate::domain::{Place, PlaceDraft, PlaceId};
use crate::error::RemoteRequestError;
use crate::notice::{Notice, Notifier};

/// Where the collection and loading flag live
pub trait PlaceStore {
    /// Read-only copy of the collection
    fn snapshot(&self) -> Vec<Place>;
    fn replace_all(&self, places: Vec<Place>);
    fn append(&self, place: Place);
    /// Drop every place with `id`
    fn remove(&self, id: PlaceId);
    fn is_loading(&self) -> bool;
    fn set_loading(&self, loading: bool);
}

impl<S: PlaceStore + ?Sized> PlaceStore for Rc<S> {
    fn snapshot(&self) -> Vec<Place> {
        (**self).snapshot()
    }
    fn replace_all(&self, places: Vec<Place>) {
        (**self).replace_all(places)
    }
    fn append(&self, place: Place) {
        (**self).append(place)
    }
    fn remove(&self, id: PlaceId) {
        (**self).remove(id)
    }
    fn is_loading(&self) -> bool {
        (**self).is_loading()
    }
    fn set_loading(&self, loading: bool) {
        (**self).set_loading(loading)
    }
}

/// Plain in-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    places: RefCell<Vec<Place>>,
    loading: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlaceStore for MemoryStore {
    fn snapshot(&self) -> Vec<Place> {
        self.places.borrow().clone()
    }

    fn replace_all(&self, places: Vec<Place>) {
        *self.places.borrow_mut() = places;
    }

    fn append(&self, place: Place) {
        self.places.borrow_mut().push(place);
    }

    fn remove(&self, id: PlaceId) {
        self.places.borrow_mut().retain(|p| p.id != id);
    }

    fn is_loading(&self) -> bool {
        self.loading.get()
    }

    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }
}

/// Holds the loading flag up for its lifetime
pub struct LoadingGuard<'a, S: PlaceStore> {
    store: &'a S,
}

impl<'a, S: PlaceStore> LoadingGuard<'a, S> {
    pub fn acquire(store: &'a S) -> Self {
        store.set_loading(true);
        Self { store }
    }
}

impl<S: PlaceStore> Drop for LoadingGuard<'_, S> {
    fn drop(&mut self) {
        self.store.set_loading(false);
    }
}

pub struct PlaceSync<A, S, N> {
    api: A,
    store: S,
    notifier: N,
    activated: Cell<bool>,
}

impl<A: PlacesApi, S: PlaceStore, N: Notifier> PlaceSync<A, S, N> {
    pub fn new(api: A, store: S, notifier: N) -> Self {
        Self {
            api,
            store,
            notifier,
            activated: Cell::new(false),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn places(&self) -> Vec<Place> {
        self.store.snapshot()
    }

    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    /// First mount: refresh once. Returns whether this call did the refresh.
    pub async fn activate(&self) -> bool {
        if self.activated.replace(true) {
            return false;
        }
        let _ = self.refresh().await;
        true
    }

    /// Replace the collection with the remote listing.
    ///
    /// On failure the previous collection is kept. Returns the new length.
    pub async fn refresh(&self) -> Result<usize, RemoteRequestError> {
        let _loading = LoadingGuard::acquire(&self.store);

        match self.api.list_places().await {
            Ok(places) => {
                let count = places.len();
                info!("[SYNC] loaded {} places", count);
                self.store.replace_all(places);
                Ok(count)
            }
            Err(e) => {
                warn!("[SYNC] list failed: {}", e);
                self.notifier.notify(Notice::failure("불러오기 실패", e.to_string()));
                Err(e)
            }
        }
    }

    /// Create remotely, then append locally
    pub async fn add(&self, draft: PlaceDraft) -> Result<Place, RemoteRequestError> {
        match self.api.create_place(draft).await {
            Ok(place) => {
                info!("[SYNC] added place {}", place.id);
                self.store.append(place.clone());
                self.notifier.notify(Notice::success(
                    "✨ 등록 완료",
                    "맛집이 성공적으로 등록되었습니다.",
                ));
                Ok(place)
            }
            Err(e) => {
                warn!("[SYNC] create failed: {}", e);
                self.notifier.notify(Notice::failure("등록 실패", e.to_string()));
                Err(e)
            }
        }
    }

    /// Delete remotely, then drop locally
    pub async fn remove(&self, id: PlaceId) -> Result<(), RemoteRequestError> {
        match self.api.delete_place(id).await {
            Ok(()) => {
                info!("[SYNC] removed place {}", id);
                self.store.remove(id);
                self.notifier.notify(Notice::success("🗑️ 삭제 완료", "맛집이 삭제되었습니다."));
                Ok(())
            }
            Err(e) => {
                warn!("[SYNC] delete of {} failed: {}", id, e);
                self.notifier.notify(Notice::failure("삭제 실패", e.to_string()));
                Err(e)
            }
        }
    }
}
