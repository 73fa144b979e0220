use std::sync::Arc;
use topograph_infrastructure::ResilientTopology;

#[derive(Clone)]
pub struct AppState {
    pub topology: Arc<ResilientTopology>,
}
