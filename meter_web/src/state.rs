use std::sync::Arc;

use meter_core::{DashboardConfig, ProviderManager};

/// Immutable server state: the adapter set plus the environment snapshot
/// taken at startup. Nothing here mutates between requests.
#[derive(Clone)]
pub struct AppState {
    pub manager: Arc<ProviderManager>,
    pub config: Arc<DashboardConfig>,
}

impl AppState {
    pub fn new(manager: ProviderManager, config: DashboardConfig) -> Self {
        Self {
            manager: Arc::new(manager),
            config: Arc::new(config),
        }
    }
}
