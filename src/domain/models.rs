//! Response models shared by the catalog endpoints

use serde::{Deserialize, Serialize};

use super::formats::FormatEntry;

/// A search or popular-list row, enriched with its downloads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSummary {
    pub identifier: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<String>,
    pub language: Option<String>,
    pub license_url: Option<String>,
    pub rights: Option<String>,
    pub downloads: Option<u64>,
    pub cover_url: String,
    pub source_page: String,
    pub formats: Vec<FormatEntry>,
}

/// Detail view of a single item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDetail {
    pub id: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<String>,
    pub language: Option<String>,
    pub license_url: Option<String>,
    pub rights: Option<String>,
    pub source_page: String,
    pub cover_url: String,
    pub formats: Vec<FormatEntry>,
}

/// One page of search results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchPage {
    pub total: u64,
    pub docs: Vec<BookSummary>,
}

impl SearchPage {
    pub fn empty() -> Self {
        Self::default()
    }
}
