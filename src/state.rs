// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::gateway::{ChatCompletion, CompletionGateway};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub gateway: Arc<dyn ChatCompletion>,
    pub model: String,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            gateway: Arc::new(CompletionGateway::new(config)),
            model: config.model.clone(),
        }
    }
}
