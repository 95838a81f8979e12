//! Places Service Layer
//!
//! Defines the abstract interface to the remote places service.
//! `HttpPlacesApi` is the reqwest implementation; tests use fakes.

mod config;
mod http;
mod id;

use async_trait::async_trait;

use crate::domain::{Place, PlaceDraft, PlaceId};
use crate::error::RemoteRequestError;

pub use config::ApiConfig;
pub use http::{decode_listing, HttpPlacesApi};
pub use id::IdSequence;

/// Common result type for places service calls
pub type ApiResult<T> = Result<T, RemoteRequestError>;

/// The three remote operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Create,
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Create => "create",
            Operation::Delete => "delete",
        }
    }

    pub fn method(&self) -> &'static str {
        match self {
            Operation::List => "GET",
            Operation::Create => "POST",
            Operation::Delete => "DELETE",
        }
    }

    /// Whether `status` counts as success for this operation.
    ///
    /// Delete accepts 404: an absent record is a fine end state.
    pub fn accepts(&self, status: u16) -> bool {
        match self {
            Operation::List => (200..300).contains(&status),
            Operation::Create => matches!(status, 200 | 201),
            Operation::Delete => matches!(status, 200 | 204 | 404),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Remote places service
///
/// Futures are not `Send`: everything runs on the browser's single thread.
/// Each call is attempted exactly once.
#[async_trait(?Send)]
pub trait PlacesApi {
    /// Fetch the full collection
    async fn list_places(&self) -> ApiResult<Vec<Place>>;

    /// Assign an id to the draft and send it; returns the locally built place
    async fn create_place(&self, draft: PlaceDraft) -> ApiResult<Place>;

    /// Delete by id
    async fn delete_place(&self, id: PlaceId) -> ApiResult<()>;
}
