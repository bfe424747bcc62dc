use std::sync::Arc;

use crate::{config::Config, model::SentimentModel};

/// Shared, read-only request context: configuration plus the scoring model.
/// Nothing here mutates after startup; handlers share it without locks.
pub struct AppState {
    pub config: Config,
    pub model: SentimentModel,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        let config = Config::load();
        let model = SentimentModel::new();

        Arc::new(Self { config, model })
    }
}
