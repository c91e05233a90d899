//! External service integrations

pub mod archive;
