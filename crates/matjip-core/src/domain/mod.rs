//! Domain Layer
//!
//! Restaurant bookmark entities.
//! This layer has NO external dependencies (except serde for serialization).

mod category;
mod place;

pub use category::Category;
pub use place::{format_won, Place, PlaceDraft, PlaceId};
