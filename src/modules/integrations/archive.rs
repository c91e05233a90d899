//! archive.org integration
//!
//! Reqwest implementation of [`ArchiveSource`] for the metadata and advanced
//! search endpoints. Every call is bounded by the client timeout.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::source::SEARCH_FIELDS;
use crate::domain::upstream::{MetadataDocument, SearchResponse};
use crate::domain::{ArchiveEndpoints, ArchiveSource, SearchRequest, UpstreamError};

const USER_AGENT: &str = concat!("OpenIslamicLibrary/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ArchiveClient {
    client: reqwest::Client,
    endpoints: ArchiveEndpoints,
}

impl ArchiveClient {
    pub fn new(endpoints: ArchiveEndpoints, timeout: Duration) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| UpstreamError::Transport(format!("Failed to build client: {}", e)))?;

        Ok(Self { client, endpoints })
    }

    /// Full advanced-search URL for a request
    pub fn search_url(&self, request: &SearchRequest) -> Result<Url, UpstreamError> {
        let mut url = Url::parse(&self.endpoints.search_url())
            .map_err(|e| UpstreamError::Transport(format!("Invalid search URL: {}", e)))?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("q", &request.query);
            for field in SEARCH_FIELDS {
                pairs.append_pair("fl[]", field);
            }
            if let Some(sort) = &request.sort {
                pairs.append_pair("sort[]", sort);
            }
            pairs.append_pair("rows", &request.rows.to_string());
            if let Some(page) = request.page {
                pairs.append_pair("page", &page.to_string());
            }
            pairs.append_pair("output", "json");
        }

        Ok(url)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, UpstreamError> {
        let resp = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                UpstreamError::Transport(format!("Timed out: {}", url))
            } else {
                UpstreamError::Transport(e.to_string())
            }
        })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| UpstreamError::Transport(format!("Failed to read response body: {}", e)))?;

        serde_json::from_str(&body).map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ArchiveSource for ArchiveClient {
    async fn metadata(&self, identifier: &str) -> Result<MetadataDocument, UpstreamError> {
        let url = self.endpoints.metadata_url(identifier);
        tracing::debug!(%identifier, "Fetching archive metadata");
        self.fetch_json(&url).await
    }

    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, UpstreamError> {
        let url = self.search_url(request)?;
        tracing::debug!(query = %request.query, rows = request.rows, page = ?request.page, "Archive search");
        self.fetch_json(url.as_str()).await
    }
}
