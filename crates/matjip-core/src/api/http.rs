//! HTTP Places Client
//!
//! reqwest implementation of `PlacesApi`. On wasm32 reqwest goes through the
//! browser's fetch.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use super::{ApiConfig, ApiResult, IdSequence, Operation, PlacesApi};
use crate::domain::{Place, PlaceDraft, PlaceId};
use crate::error::RemoteRequestError;

pub struct HttpPlacesApi {
    client: reqwest::Client,
    config: ApiConfig,
    ids: IdSequence,
}

impl HttpPlacesApi {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    pub fn with_client(config: ApiConfig, client: reqwest::Client) -> Self {
        Self {
            client,
            config,
            ids: IdSequence::new(),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Send a prepared request and check its status against `operation`.
    /// `request` must already carry its Content-Type.
    async fn send(
        &self,
        operation: Operation,
        request: reqwest::RequestBuilder,
    ) -> ApiResult<reqwest::Response> {
        let response = request
            .send()
            .await
            .map_err(|e| RemoteRequestError::transport(operation, e))?;

        let status = response.status().as_u16();
        debug!("[API] {} -> {}", operation.method(), status);
        if !operation.accepts(status) {
            return Err(RemoteRequestError::status(operation, status));
        }
        Ok(response)
    }
}

impl Default for HttpPlacesApi {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

#[async_trait(?Send)]
impl PlacesApi for HttpPlacesApi {
    async fn list_places(&self) -> ApiResult<Vec<Place>> {
        let url = self.config.places_url();
        let request = self.client.get(&url).header(CONTENT_TYPE, "application/json");
        let response = self.send(Operation::List, request).await?;
        let body = response
            .text()
            .await
            .map_err(|e| RemoteRequestError::transport(Operation::List, e))?;
        decode_listing(&body)
    }

    async fn create_place(&self, draft: PlaceDraft) -> ApiResult<Place> {
        let place = draft.into_place(self.ids.next());
        let url = self.config.places_url();
        // `json` sets the Content-Type. The echoed body is not trusted; the
        // local record is authoritative.
        self.send(Operation::Create, self.client.post(&url).json(&place)).await?;
        Ok(place)
    }

    async fn delete_place(&self, id: PlaceId) -> ApiResult<()> {
        let url = self.config.place_url(id);
        let request = self.client.delete(&url).header(CONTENT_TYPE, "application/json");
        self.send(Operation::Delete, request).await?;
        Ok(())
    }
}

/// Parse a listing body. An empty body, or anything that is valid JSON but
/// not an array, is treated as an empty collection.
pub fn decode_listing(body: &str) -> ApiResult<Vec<Place>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let value: Value =
        serde_json::from_str(body).map_err(|e| RemoteRequestError::decode(Operation::List, e))?;

    if !value.is_array() {
        warn!("[API] listing body is not an array, treating as empty");
        return Ok(Vec::new());
    }
    serde_json::from_value(value).map_err(|e| RemoteRequestError::decode(Operation::List, e))
}

#[cfg(test)]
mod tests;
