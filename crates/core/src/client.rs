//! HTTP client for the Open Library search endpoint.

use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::types::{cover_url_with_base, CoverSize, SearchResponse};

/// Failures surfaced to the user as an error banner.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The server answered with a non-success status.
    #[error("Network error: {0}")]
    Status(u16),
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The body was not the expected JSON object.
    #[error("Unexpected response: {0}")]
    Parse(String),
    /// No HTTP client has been set up yet.
    #[error("Search is unavailable: no catalog client")]
    Unavailable,
}

/// One search to perform: the raw query and the 1-based page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub page: u32,
}

/// Build the full search URL. The query is percent-encoded but otherwise sent
/// exactly as typed.
pub fn build_search_url(base: &str, query: &str, page: u32, limit: u32) -> String {
    format!(
        "{base}?title={}&page={page}&limit={limit}",
        urlencoding::encode(query)
    )
}

/// Decode a response body into a [`SearchResponse`].
pub fn parse_search_body(body: &str) -> Result<SearchResponse, SearchError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| SearchError::Parse(e.to_string()))?;
    if !value.is_object() {
        return Err(SearchError::Parse("expected a JSON object".into()));
    }
    serde_json::from_value(value).map_err(|e| SearchError::Parse(e.to_string()))
}

#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    search_url: String,
    covers_url: String,
    page_size: u32,
}

impl CatalogClient {
    pub fn new(config: &Config) -> Result<Self, SearchError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            search_url: config.search_url.clone(),
            covers_url: config.covers_url.clone(),
            page_size: config.page_size,
        })
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Cover URL on the configured cover service.
    pub fn cover_url(&self, cover_id: Option<i64>, size: CoverSize) -> Option<String> {
        cover_url_with_base(&self.covers_url, cover_id, size)
    }

    /// Run one search. Non-2xx statuses, transport failures and malformed
    /// bodies all come back as `Err`.
    pub async fn search(&self, query: &str, page: u32) -> Result<SearchResponse, SearchError> {
        let url = build_search_url(&self.search_url, query, page, self.page_size);
        let start = Instant::now();
        debug!(query, page, url = url.as_str(), "Search request");

        let resp = self.http.get(&url).send().await.map_err(|e| {
            warn!(query, page, error = %e, "Search request failed");
            SearchError::Network(e)
        })?;

        let status = resp.status();
        if !status.is_success() {
            warn!(query, page, status = status.as_u16(), "Search returned error status");
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = resp.text().await?;
        let parsed = parse_search_body(&body)?;
        info!(
            query,
            page,
            count = parsed.docs.len(),
            num_found = parsed.num_found,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Search complete"
        );
        Ok(parsed)
    }

    /// Convenience wrapper taking a [`SearchRequest`].
    pub async fn execute(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        self.search(&request.query, request.page).await
    }
}
