use std::sync::Arc;

use crate::config::settings::AppConfig;
use crate::infrastructure::encoder::Encoder;
use crate::infrastructure::storage::local::StorageService;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub storage: StorageService,
    pub encoder: Arc<dyn Encoder>,
}

impl AppState {
    pub fn new(config: AppConfig, storage: StorageService, encoder: Arc<dyn Encoder>) -> Self {
        Self {
            config,
            storage,
            encoder,
        }
    }
}
