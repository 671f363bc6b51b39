//! The data-refresh orchestrator.
//!
//! `refresh_all` fans the three section fetches out concurrently and
//! joins them. Each fetch settles only its own section: a failure is
//! logged and the section keeps its prior value, so one bad endpoint
//! never blocks or invalidates the other two. Busy flags are cleared
//! once the join settles, whatever the individual outcomes.

use predict_client::PredictClient;
use tracing::{error, warn};

use crate::state::SharedState;

/// Issues the fetches and owns all writes to the shared screen state.
#[derive(Clone)]
pub struct Refresher {
    client: PredictClient,
    state: SharedState,
}

impl Refresher {
    pub fn new(client: PredictClient, state: SharedState) -> Self {
        Self { client, state }
    }

    pub fn state(&self) -> &SharedState {
        &self.state
    }

    /// Refresh all three sections, then clear the busy flags.
    pub async fn refresh_all(&self) {
        tokio::join!(
            self.load_current_prediction(),
            self.load_number_wise(),
            self.load_statistics(),
        );

        let mut state = self.state.write().await;
        state.loading = false;
        state.refreshing = false;
    }

    /// Pull-style refresh: mark refreshing, then run the usual cycle.
    pub async fn pull_refresh(&self) {
        self.state.write().await.refreshing = true;
        self.refresh_all().await;
    }

    /// Manual "refresh predictions": ask the service to recompute, then
    /// reload everything. The loading flag is cleared even when the
    /// trigger fails, so the screen cannot get stuck busy.
    pub async fn refresh_predictions(&self) {
        self.state.write().await.loading = true;

        match self.client.trigger_refresh().await {
            Ok(()) => self.refresh_all().await,
            Err(e) => {
                error!("Failed to refresh predictions: {}", e);
                self.state.write().await.loading = false;
            }
        }
    }

    async fn load_current_prediction(&self) {
        match self.client.get_current_prediction().await {
            Ok(prediction) => {
                self.state.write().await.current_prediction = Some(prediction);
            }
            Err(e) => warn!("Failed to load current prediction: {}", e),
        }
    }

    async fn load_number_wise(&self) {
        match self.client.get_number_wise_predictions().await {
            Ok(numbers) => {
                self.state.write().await.number_wise = Some(numbers);
            }
            Err(e) => warn!("Failed to load number-wise predictions: {}", e),
        }
    }

    async fn load_statistics(&self) {
        match self.client.get_statistics().await {
            Ok(stats) => {
                self.state.write().await.statistics = Some(stats);
            }
            Err(e) => warn!("Failed to load statistics: {}", e),
        }
    }
}
