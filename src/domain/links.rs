//! URL templates for the archive service
//!
//! Every link handed to clients is derived here from the identifier alone,
//! so book, search and popular responses agree byte for byte.

use urlencoding::encode;

pub const DEFAULT_ARCHIVE_BASE_URL: &str = "https://archive.org";

/// Base URLs of the archive endpoints, all rooted at one host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEndpoints {
    base: String,
}

impl ArchiveEndpoints {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn metadata_url(&self, identifier: &str) -> String {
        format!("{}/metadata/{}", self.base, encode(identifier))
    }

    pub fn search_url(&self) -> String {
        format!("{}/advancedsearch.php", self.base)
    }

    /// Each path segment is encoded on its own so `/`, `#`, `?` and spaces
    /// inside a file name stay part of that segment.
    pub fn download_url(&self, identifier: &str, file_name: &str) -> String {
        format!(
            "{}/download/{}/{}",
            self.base,
            encode(identifier),
            encode(file_name)
        )
    }

    pub fn cover_url(&self, identifier: &str) -> String {
        format!("{}/services/img/{}", self.base, encode(identifier))
    }

    pub fn source_page(&self, identifier: &str) -> String {
        format!("{}/details/{}", self.base, encode(identifier))
    }
}

impl Default for ArchiveEndpoints {
    fn default() -> Self {
        Self::new(DEFAULT_ARCHIVE_BASE_URL)
    }
}
