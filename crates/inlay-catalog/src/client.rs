//! Read-only HTTP client for the volumes endpoint

use inlay_core::prelude::*;
use serde::Serialize;
use serde_json::Value;

/// Volumes endpoint queried when no other is configured.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/books/v1/volumes";

/// Search parameters for one catalog request.
///
/// Serializes straight into the query string (`q`, `maxResults`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumesQuery {
    /// Full-text search terms.
    #[serde(rename = "q")]
    pub terms: String,
    pub max_results: u32,
}

impl Default for VolumesQuery {
    fn default() -> Self {
        Self {
            terms: "greenwood tulsa".to_string(),
            max_results: 15,
        }
    }
}

/// Client for the catalog's volumes endpoint.
///
/// Issues a single parameterized GET per [`fetch`](Self::fetch) call.
/// Transport and status failures surface as [`Error::Network`]; there
/// is no retry policy here, the caller decides what a failed fetch
/// means for the screen.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the raw volume records matching `query`.
    ///
    /// Yields the top-level `items` array undecoded; per-record schema
    /// checks belong to [`decode_volumes`](crate::decode::decode_volumes).
    /// The endpoint omits `items` entirely when nothing matches, which
    /// is an empty batch here, not an error.
    pub async fn fetch(&self, query: &VolumesQuery) -> Result<Vec<Value>> {
        debug!(
            terms = %query.terms,
            max_results = query.max_results,
            "fetching volumes"
        );

        let body: Value = self
            .http
            .get(self.base_url.as_str())
            .query(query)
            .send()
            .await
            .map_err(|e| Error::network(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::network(e.to_string()))?
            .json()
            .await
            .map_err(|e| Error::network(e.to_string()))?;

        Ok(items_from_body(body))
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Pull the `items` array out of a volumes response body.
fn items_from_body(body: Value) -> Vec<Value> {
    match body {
        Value::Object(mut map) => match map.remove("items") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}
