//! Application state shared across all handlers

use std::sync::Arc;

use super::config::Config;
use crate::domain::{ArchiveEndpoints, ArchiveSource, UpstreamError};
use crate::modules::integrations::archive::ArchiveClient;
use crate::services::catalog_service::CatalogService;

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
}

impl AppState {
    /// State backed by any archive source
    pub fn new(source: Arc<dyn ArchiveSource>, endpoints: ArchiveEndpoints) -> Self {
        Self {
            catalog: CatalogService::new(source, endpoints),
        }
    }

    /// State backed by the real archive client
    pub fn from_config(config: &Config) -> Result<Self, UpstreamError> {
        let endpoints = ArchiveEndpoints::new(config.archive_base_url.clone());
        let client = ArchiveClient::new(endpoints.clone(), config.upstream_timeout())?;
        Ok(Self::new(Arc::new(client), endpoints))
    }
}
