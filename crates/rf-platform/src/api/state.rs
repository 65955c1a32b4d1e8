//! Shared router state

use std::sync::Arc;

use crate::error::{PlatformError, Result};
use crate::repository::DocumentStore;

/// State handed to every router.
///
/// `store` is `None` when no database was configured or the connection could
/// not be set up; data routes then fail with `DatabaseUnavailable`.
#[derive(Clone, Default)]
pub struct ApiState {
    pub store: Option<Arc<dyn DocumentStore>>,
    pub database_url_set: bool,
    pub database_name: Option<String>,
}

impl ApiState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store: Some(store),
            database_url_set: false,
            database_name: None,
        }
    }

    pub fn without_store() -> Self {
        Self::default()
    }

    pub fn with_database_info(mut self, url_set: bool, database_name: Option<String>) -> Self {
        self.database_url_set = url_set;
        self.database_name = database_name;
        self
    }

    pub fn store(&self) -> Result<&dyn DocumentStore> {
        self.store.as_deref().ok_or(PlatformError::DatabaseUnavailable)
    }
}
