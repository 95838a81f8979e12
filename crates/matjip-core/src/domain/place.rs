//! Place Entity
//!
//! One restaurant bookmark as exchanged with the places service.

use serde::{Deserialize, Serialize};
use super::category::Category;

/// Place identifier, a bare JSON number on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(pub i64);

impl std::fmt::Display for PlaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A restaurant bookmark
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    /// Price in won
    pub price: u64,
    pub category: Category,
    #[serde(default)]
    pub description: String,
    /// Map location link (empty = no link)
    #[serde(default)]
    pub link: String,
    /// Display image URL (empty = placeholder)
    #[serde(default)]
    pub image: String,
}

impl Place {
    pub fn has_image(&self) -> bool {
        !self.image.trim().is_empty()
    }

    pub fn has_link(&self) -> bool {
        !self.link.trim().is_empty()
    }

    pub fn display_price(&self) -> String {
        format_won(self.price)
    }
}

/// A place that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceDraft {
    pub name: String,
    pub price: u64,
    pub category: Category,
    pub description: String,
    pub link: String,
    pub image: String,
}

impl PlaceDraft {
    /// Stamp the draft with its id
    pub fn into_place(self, id: PlaceId) -> Place {
        Place {
            id,
            name: self.name,
            price: self.price,
            category: self.category,
            description: self.description,
            link: self.link,
            image: self.image,
        }
    }
}

/// Format a price with thousands grouping, e.g. `12,000원`
pub fn format_won(price: u64) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.push('원');
    grouped
}
