use std::sync::Arc;

use backend_domain::ports::{PlayerRepository, WarRepository};
use backend_domain::RuntimeConfig;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub war_repo: Arc<dyn WarRepository>,
    pub player_repo: Arc<dyn PlayerRepository>,
    pub metrics: Arc<Metrics>,
}
