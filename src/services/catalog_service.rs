//! Catalog Service - Search, popular list and book detail
//!
//! Talks to the archive through [`ArchiveSource`] and turns its documents into
//! response models. Search rows are enriched with their download formats by
//! one concurrent metadata lookup per row.

use std::sync::Arc;

use futures::future::join_all;

use crate::domain::mapper::{to_book_detail, to_book_summary};
use crate::domain::upstream::ItemFields;
use crate::domain::{
    ArchiveEndpoints, ArchiveSource, BookDetail, BookSummary, FormatEntry, SearchPage,
    SearchRequest, UpstreamError, normalize_formats,
};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 50;

/// Rows shown in a listing carry at most this many downloads
pub const MAX_FORMATS_PER_ROW: usize = 5;

pub const POPULAR_ROWS: u32 = 16;
pub const POPULAR_SORT: &str = "downloads desc";

/// Most downloaded openly licensed Islamic texts
pub const POPULAR_QUERY: &str = concat!(
    r#"(mediatype:"texts")"#,
    " AND ",
    "(licenseurl:* OR rights:* OR collection:(opensource) OR collection:(community_texts))",
    " AND ",
    "(subject:(Islam OR Quran OR Qur'an OR Hadith OR Seerah) OR title:(Quran OR Hadith OR Seerah))",
);

pub fn clamp_page(page: i64) -> u32 {
    page.clamp(1, u32::MAX as i64) as u32
}

pub fn clamp_limit(limit: i64) -> u32 {
    limit.clamp(1, MAX_LIMIT) as u32
}

#[derive(Clone)]
pub struct CatalogService {
    source: Arc<dyn ArchiveSource>,
    endpoints: ArchiveEndpoints,
}

impl CatalogService {
    pub fn new(source: Arc<dyn ArchiveSource>, endpoints: ArchiveEndpoints) -> Self {
        Self { source, endpoints }
    }

    pub fn endpoints(&self) -> &ArchiveEndpoints {
        &self.endpoints
    }

    /// Detail view of one item with its full ranked format list
    pub async fn book(&self, identifier: &str) -> Result<BookDetail, UpstreamError> {
        let document = self.source.metadata(identifier).await?;
        Ok(to_book_detail(&self.endpoints, identifier, &document))
    }

    /// Search the archive and enrich each row with its downloads.
    ///
    /// A blank query returns an empty page without touching the network.
    pub async fn search(
        &self,
        query: &str,
        page: i64,
        limit: i64,
    ) -> Result<SearchPage, UpstreamError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(SearchPage::empty());
        }

        let request = SearchRequest::new(query, clamp_limit(limit)).page(clamp_page(page));
        let response = self.source.search(&request).await?.response;

        let docs = self.enrich(response.docs).await;
        let total = response.num_found.unwrap_or(docs.len() as u64);

        tracing::info!(query, total, returned = docs.len(), "Search completed");
        Ok(SearchPage { total, docs })
    }

    /// The curated popular list
    pub async fn popular(&self) -> Result<Vec<BookSummary>, UpstreamError> {
        let request = SearchRequest::new(POPULAR_QUERY, POPULAR_ROWS).sort(POPULAR_SORT);
        let response = self.source.search(&request).await?.response;
        Ok(self.enrich(response.docs).await)
    }

    // Rows without an identifier can't be looked up nor linked, so they are skipped.
    async fn enrich(&self, docs: Vec<ItemFields>) -> Vec<BookSummary> {
        let rows: Vec<(String, ItemFields)> = docs
            .into_iter()
            .filter_map(|fields| {
                let identifier = fields.identifier.clone()?;
                Some((identifier, fields))
            })
            .collect();

        // join_all keeps input order, whatever order the lookups finish in
        let formats = join_all(
            rows.iter()
                .map(|(identifier, _)| self.row_formats(identifier)),
        )
        .await;

        rows.iter()
            .zip(formats)
            .map(|((identifier, fields), formats)| {
                to_book_summary(&self.endpoints, identifier, fields, formats)
            })
            .collect()
    }

    async fn row_formats(&self, identifier: &str) -> Vec<FormatEntry> {
        match self.source.metadata(identifier).await {
            Ok(document) => {
                let mut formats = normalize_formats(&self.endpoints, identifier, &document.files);
                formats.truncate(MAX_FORMATS_PER_ROW);
                formats
            }
            Err(e) => {
                tracing::warn!(%identifier, error = %e, "Format enrichment failed, returning row without downloads");
                Vec::new()
            }
        }
    }
}
