//! Matjip Core
//!
//! Layered architecture:
//! - domain: Place entity, categories and display helpers
//! - api: Remote places service client
//! - form: Entry form controller
//! - sync: List synchronization controller
//! - notice: User-facing outcome notices

pub mod api;
pub mod domain;
pub mod error;
pub mod form;
pub mod notice;
pub mod sync;

pub use api::{ApiConfig, HttpPlacesApi, IdSequence, Operation, PlacesApi};
pub use domain::{format_won, Category, Place, PlaceDraft, PlaceId};
pub use error::{FailureCause, FormError, RemoteRequestError};
pub use form::{FormField, FormSlots, PlaceForm, PlaceFormFields};
pub use notice::{Notice, NoticeKind, Notifier};
pub use sync::{LoadingGuard, MemoryStore, PlaceStore, PlaceSync};
