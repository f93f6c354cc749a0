use std::sync::Arc;

use crate::client::MarketClient;
use crate::config::PanelsConfig;
use crate::model::AssetGroup;

/// Shared, read-only state behind every panel handler.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<MarketClient>,
    pub config: Arc<PanelsConfig>,
    pub groups: Arc<Vec<AssetGroup>>,
}

impl AppState {
    pub fn new(client: MarketClient, config: PanelsConfig, groups: Vec<AssetGroup>) -> Self {
        AppState {
            client: Arc::new(client),
            config: Arc::new(config),
            groups: Arc::new(groups),
        }
    }
}
