//! Domain types for the prediction service wire contract.
//!
//! Every endpoint wraps its payload in a `{ success, ...payload }`
//! envelope. Failure envelopes carry `error` instead of the payload key.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

// ── Round status ──────────────────────────────────────────────────────

/// Whether the predicted draw is live right now or still upcoming.
///
/// The wire values are the literal strings `"LIVE NOW"` and
/// `"NEXT ROUND"`; anything else decodes as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoundStatus {
    #[serde(rename = "LIVE NOW")]
    Live,
    #[serde(rename = "NEXT ROUND")]
    Pending,
}

impl<'de> Deserialize<'de> for RoundStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "LIVE NOW" => RoundStatus::Live,
            _ => RoundStatus::Pending,
        })
    }
}

impl RoundStatus {
    pub fn is_live(self) -> bool {
        matches!(self, RoundStatus::Live)
    }
}

// ── Current prediction ────────────────────────────────────────────────

/// The headline prediction for the current or next draw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionSnapshot {
    pub status: RoundStatus,
    /// 1-based draw index within the day's schedule.
    #[serde(default)]
    pub draw_number: u32,
    /// Announcement time of the targeted draw, e.g. "16:30".
    #[serde(default)]
    pub target_time: String,
    /// Predicted digit (0-9).
    pub predicted_number: u8,
    /// Service-reported confidence percentage (0-100).
    pub confidence: f64,
    /// Human-readable description of the prediction method.
    #[serde(default)]
    pub method: String,
    /// Countdown to the next draw, e.g. "1h 12m".
    #[serde(default)]
    pub time_to_next: Option<String>,
    /// Schedule detail block the service attaches to predictions.
    #[serde(default)]
    pub round_info: Option<RoundInfo>,
}

/// Draw schedule details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundInfo {
    #[serde(default)]
    pub current_time: String,
    #[serde(default)]
    pub current_draw: Option<String>,
    #[serde(default)]
    pub next_draw_time: Option<String>,
    #[serde(default)]
    pub draw_number: u32,
    #[serde(default)]
    pub time_to_next: Option<String>,
    #[serde(default)]
    pub total_draws_today: u32,
}

// ── Number-wise distribution ──────────────────────────────────────────

/// Per-digit probability distribution over outcomes 0-9.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumberWiseDistribution {
    /// Probability percentage per digit. String-keyed on the wire
    /// (`{"0": 5.0, ...}`).
    #[serde(deserialize_with = "digit_keyed_map")]
    pub probabilities: BTreeMap<u8, f64>,
    /// `[digit, probability]` pairs, descending by probability. The rank
    /// of a digit is its 1-based position here.
    pub sorted_predictions: Vec<(u8, f64)>,
    #[serde(default)]
    pub top_prediction: Option<u8>,
    #[serde(default)]
    pub top_probability: Option<f64>,
}

impl NumberWiseDistribution {
    /// Probability for a digit, 0.0 when the service omitted it.
    pub fn probability(&self, digit: u8) -> f64 {
        self.probabilities.get(&digit).copied().unwrap_or(0.0)
    }

    /// 1-based rank of a digit in the sorted predictions.
    pub fn rank_of(&self, digit: u8) -> Option<usize> {
        self.sorted_predictions
            .iter()
            .position(|(d, _)| *d == digit)
            .map(|idx| idx + 1)
    }
}

// ── Statistics ────────────────────────────────────────────────────────

/// Aggregate statistics over the analyzed draw history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsSummary {
    #[serde(default)]
    pub total_draws_analyzed: u64,
    /// Hot number.
    pub most_frequent_number: u8,
    /// Cold number.
    pub least_frequent_number: u8,
    /// Most recent results, oldest first.
    #[serde(default)]
    pub recent_trend: Vec<u8>,
    /// Occurrence count per digit. String-keyed on the wire.
    #[serde(default, deserialize_with = "digit_keyed_map")]
    pub frequency_distribution: BTreeMap<u8, u64>,
}

// ── Response envelopes ────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct PredictionEnvelope {
    pub success: bool,
    #[serde(default)]
    pub prediction: Option<PredictionSnapshot>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NumberWiseEnvelope {
    pub success: bool,
    #[serde(default)]
    pub number_wise_predictions: Option<NumberWiseDistribution>,
    #[serde(default)]
    pub round_info: Option<RoundInfo>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatisticsEnvelope {
    pub success: bool,
    #[serde(default)]
    pub statistics: Option<StatisticsSummary>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefreshEnvelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Decode a JSON object whose keys are digits serialized as strings,
/// as produced by the service's JSON encoder.
fn digit_keyed_map<'de, D, V>(deserializer: D) -> std::result::Result<BTreeMap<u8, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    let raw = BTreeMap::<String, V>::deserialize(deserializer)?;
    let mut map = BTreeMap::new();
    for (key, value) in raw {
        let digit: u8 = key
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid digit key {key:?}")))?;
        map.insert(digit, value);
    }
    Ok(map)
}
