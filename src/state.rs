use crate::config::Config;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            started_at: Utc::now(),
        }
    }
}
