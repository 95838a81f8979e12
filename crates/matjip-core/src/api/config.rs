//! Places service configuration.

/// Mock endpoint the app ships against
const DEFAULT_BASE_URL: &str = "https://24d5f3f4-0575-41b0-bbf8-780027b63eed.mock.pstmn.io";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn places_url(&self) -> String {
        format!("{}/places", self.base_url)
    }

    pub fn place_url(&self, id: crate::domain::PlaceId) -> String {
        format!("{}/places/{}", self.base_url, id)
    }
}

impl Default for ApiConfig {
    /// `MATJIP_API_BASE_URL` at build time, else the mock endpoint
    fn default() -> Self {
        Self::new(option_env!("MATJIP_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }
}
