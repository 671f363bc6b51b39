//! REST client for the prediction service.
//!
//! Covers the three read endpoints and the recompute trigger. All
//! responses share the `{ success, ...payload }` envelope; a non-success
//! envelope is reported as an error just like a transport failure.

use common::{
    Error, NumberWiseDistribution, NumberWiseEnvelope, PredictionEnvelope, PredictionSnapshot,
    RefreshEnvelope, StatisticsEnvelope, StatisticsSummary,
};
use tracing::debug;

/// Async REST client for the prediction API.
#[derive(Debug, Clone)]
pub struct PredictClient {
    client: reqwest::Client,
    base_url: String,
}

impl PredictClient {
    /// Create a new client against the given base URL (host/port).
    ///
    /// No request timeout is configured; the transport default applies.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent("draw-watch/0.1")
            .pool_max_idle_per_host(4)
            .build()
            .expect("failed to build prediction HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// URL helper.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, Error>
    where
        T: serde::de::DeserializeOwned,
    {
        debug!("GET {}", path);

        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                status,
                message: body.chars().take(500).collect(),
            });
        }

        resp.json().await.map_err(|e| Error::Http(e.to_string()))
    }

    /// Fetch the headline prediction for the current or next draw.
    pub async fn get_current_prediction(&self) -> Result<PredictionSnapshot, Error> {
        let envelope: PredictionEnvelope = self.get_json("/api/current-prediction").await?;
        if !envelope.success {
            return Err(Error::Envelope(
                envelope
                    .error
                    .unwrap_or_else(|| "current prediction unavailable".into()),
            ));
        }
        envelope
            .prediction
            .ok_or_else(|| Error::Envelope("current prediction payload missing".into()))
    }

    /// Fetch the per-digit probability distribution.
    pub async fn get_number_wise_predictions(&self) -> Result<NumberWiseDistribution, Error> {
        let envelope: NumberWiseEnvelope = self.get_json("/api/number-wise-predictions").await?;
        if !envelope.success {
            return Err(Error::Envelope(
                envelope
                    .error
                    .unwrap_or_else(|| "number-wise predictions unavailable".into()),
            ));
        }
        envelope
            .number_wise_predictions
            .ok_or_else(|| Error::Envelope("number-wise payload missing".into()))
    }

    /// Fetch the aggregate draw statistics.
    pub async fn get_statistics(&self) -> Result<StatisticsSummary, Error> {
        let envelope: StatisticsEnvelope = self.get_json("/api/statistics").await?;
        if !envelope.success {
            return Err(Error::Envelope(
                envelope
                    .error
                    .unwrap_or_else(|| "statistics unavailable".into()),
            ));
        }
        envelope
            .statistics
            .ok_or_else(|| Error::Envelope("statistics payload missing".into()))
    }

    /// Ask the service to recompute its predictions. The response body is
    /// not consumed beyond the success flag.
    pub async fn trigger_refresh(&self) -> Result<(), Error> {
        let envelope: RefreshEnvelope = self.get_json("/api/refresh").await?;
        if !envelope.success {
            return Err(Error::Envelope(
                envelope
                    .error
                    .unwrap_or_else(|| "recompute trigger rejected".into()),
            ));
        }
        debug!(
            "Service recompute triggered: {}",
            envelope.message.unwrap_or_default()
        );
        Ok(())
    }
}
