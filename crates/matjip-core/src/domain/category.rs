//! Category Value
//!
//! Fixed set of restaurant categories, serialized by their Korean label.

use serde::{Deserialize, Serialize};

/// Restaurant category
///
/// Labels this client does not know deserialize as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String")]
pub enum Category {
    #[serde(rename = "한식")]
    Korean,
    #[serde(rename = "중식")]
    Chinese,
    #[serde(rename = "일식")]
    Japanese,
    #[serde(rename = "양식")]
    Western,
    #[serde(rename = "분식")]
    Street,
    #[serde(rename = "카페")]
    Cafe,
    #[default]
    #[serde(rename = "기타")]
    Other,
}

impl Category {
    /// Selector order
    pub const ALL: [Category; 7] = [
        Category::Korean,
        Category::Chinese,
        Category::Japanese,
        Category::Western,
        Category::Street,
        Category::Cafe,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Korean => "한식",
            Category::Chinese => "중식",
            Category::Japanese => "일식",
            Category::Western => "양식",
            Category::Street => "분식",
            Category::Cafe => "카페",
            Category::Other => "기타",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Korean => "🍚",
            Category::Chinese => "🥟",
            Category::Japanese => "🍱",
            Category::Western => "🍝",
            Category::Street => "🍜",
            Category::Cafe => "☕",
            Category::Other => "🍴",
        }
    }

    /// Strict lookup by label, used by the form
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self::from_label(&label).unwrap_or(Category::Other)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
