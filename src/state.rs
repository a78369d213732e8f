//! Shared application state for all routes.

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::resource::ResourceKind;
use crate::service::CrudService;
use crate::store::{sample_packages, ResourceStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Owns every collection; handlers reach it only through this state.
    pub store: Arc<ResourceStore>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build the store for the kinds enabled in `config`, seeding sample packages if asked to.
    pub fn new(config: ServerConfig) -> Result<Self, AppError> {
        let kinds: Vec<ResourceKind> = ResourceKind::ALL
            .into_iter()
            .filter(|k| *k != ResourceKind::Customer || config.enable_customers)
            .collect();
        let store = ResourceStore::new(&kinds);
        if config.seed_sample {
            CrudService::seed(&store, ResourceKind::Package, sample_packages())?;
        }
        Ok(AppState {
            store: Arc::new(store),
            config: Arc::new(config),
        })
    }
}
