//! Shared application state

use std::sync::Arc;

use crate::channel::WorkerRegistry;
use crate::config::Config;
use crate::repository::JobTable;

/// State shared by the HTTP API and the worker channel
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub worker: Arc<WorkerRegistry>,
    pub jobs: JobTable,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            worker: Arc::new(WorkerRegistry::new()),
            jobs: JobTable::new(),
        }
    }
}
