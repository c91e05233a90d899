//! Upstream source abstraction
//!
//! The catalog service only talks to the archive through this trait. The
//! reqwest implementation lives in the integrations module.

use async_trait::async_trait;

use super::errors::UpstreamError;
use super::upstream::{MetadataDocument, SearchResponse};

/// Fields requested from the advanced search endpoint
pub const SEARCH_FIELDS: [&str; 8] = [
    "identifier",
    "title",
    "creator",
    "date",
    "language",
    "licenseurl",
    "rights",
    "downloads",
];

/// Parameters of one advanced search call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub rows: u32,
    pub page: Option<u32>,
    pub sort: Option<String>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, rows: u32) -> Self {
        Self {
            query: query.into(),
            rows,
            page: None,
            sort: None,
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }
}

#[async_trait]
pub trait ArchiveSource: Send + Sync {
    /// Fetch the metadata document of one item
    async fn metadata(&self, identifier: &str) -> Result<MetadataDocument, UpstreamError>;

    /// Run an advanced search query
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, UpstreamError>;
}
