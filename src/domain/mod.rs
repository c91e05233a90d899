//! Domain layer - Pure catalog logic
//!
//! This layer contains NO framework dependencies (no Axum, no reqwest).
//! Upstream document shapes, the format normalizer, the metadata mapper,
//! URL templates and the source trait.

pub mod errors;
pub mod formats;
pub mod links;
pub mod mapper;
pub mod models;
pub mod source;
pub mod upstream;

pub use errors::UpstreamError;
pub use formats::{FormatEntry, FormatLabel, normalize_formats};
pub use links::ArchiveEndpoints;
pub use models::{BookDetail, BookSummary, SearchPage};
pub use source::{ArchiveSource, SearchRequest};
