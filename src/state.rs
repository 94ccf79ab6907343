// src/state.rs
use std::sync::Arc;

use crate::services::generation::GenerationClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub generator: GenerationClient,
}

impl AppState {
    pub fn new(generation_url: impl Into<String>) -> Self {
        Self {
            generator: GenerationClient::new(generation_url),
        }
    }
}
