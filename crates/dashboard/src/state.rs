//! Screen-local state: the latest fetched sections plus busy flags.

use std::sync::Arc;

use common::{NumberWiseDistribution, PredictionSnapshot, StatisticsSummary};
use tokio::sync::RwLock;

/// Everything the screen renders.
///
/// Each section is independently absent until its first successful fetch
/// and is replaced wholesale afterwards; a failed fetch leaves its section
/// at the previous value.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_prediction: Option<PredictionSnapshot>,
    pub number_wise: Option<NumberWiseDistribution>,
    pub statistics: Option<StatisticsSummary>,
    /// True from mount (or a manual recompute) until the next settle.
    pub loading: bool,
    /// True while a pull-style refresh is in flight.
    pub refreshing: bool,
}

impl AppState {
    /// Fresh state for a newly mounted screen.
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }
}

/// Shared handle to the screen state, written only by the refresh
/// orchestrator and its manual trigger paths.
pub type SharedState = Arc<RwLock<AppState>>;

/// Create a new shared state in the just-mounted configuration.
pub fn new_shared_state() -> SharedState {
    Arc::new(RwLock::new(AppState::new()))
}
