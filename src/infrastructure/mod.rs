//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - Configuration loading (config)
//! - HTTP server setup (server)
//! - Application state (state)

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use state::AppState;
