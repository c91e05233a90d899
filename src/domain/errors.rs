//! Domain error types
//!
//! These errors are framework-agnostic and describe what went wrong talking
//! to the archive. HTTP mapping lives in the api layer.

/// Failure of a single call to the archive service
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpstreamError {
    /// Connection failure, timeout, or anything else below HTTP
    #[error("Archive request failed: {0}")]
    Transport(String),
    /// The archive answered with a non-success status
    #[error("Archive returned status {0}")]
    Status(u16),
    /// The body was not the JSON document we expected
    #[error("Archive response could not be decoded: {0}")]
    Decode(String),
}
