//! Mapping from upstream documents to response models
//!
//! Pure functions: no I/O, no failure. Missing upstream fields stay `None`.

use super::formats::{normalize_formats, FormatEntry};
use super::links::ArchiveEndpoints;
use super::models::{BookDetail, BookSummary};
use super::upstream::{ItemFields, MetadataDocument};

/// `creator` is the archive's usual field; some uploads only carry `author`
pub fn author_of(fields: &ItemFields) -> Option<String> {
    fields.creator.clone().or_else(|| fields.author.clone())
}

pub fn to_book_summary(
    endpoints: &ArchiveEndpoints,
    identifier: &str,
    fields: &ItemFields,
    formats: Vec<FormatEntry>,
) -> BookSummary {
    BookSummary {
        identifier: identifier.to_string(),
        title: fields.title.clone(),
        author: author_of(fields),
        year: fields.date.clone(),
        language: fields.language.clone(),
        license_url: fields.licenseurl.clone(),
        rights: fields.rights.clone(),
        downloads: fields.downloads,
        cover_url: endpoints.cover_url(identifier),
        source_page: endpoints.source_page(identifier),
        formats,
    }
}

/// Build the detail view, with the complete ranked format list
pub fn to_book_detail(
    endpoints: &ArchiveEndpoints,
    identifier: &str,
    document: &MetadataDocument,
) -> BookDetail {
    let fields = &document.metadata;
    BookDetail {
        id: identifier.to_string(),
        title: fields.title.clone(),
        author: author_of(fields),
        year: fields.date.clone(),
        language: fields.language.clone(),
        license_url: fields.licenseurl.clone(),
        rights: fields.rights.clone(),
        source_page: endpoints.source_page(identifier),
        cover_url: endpoints.cover_url(identifier),
        formats: normalize_formats(endpoints, identifier, &document.files),
    }
}
