//! Card rendering: pure functions from fetched state to terminal text.
//!
//! A section that has not loaded renders nothing, so partial data
//! produces a partial dashboard.

use common::{NumberWiseDistribution, PredictionSnapshot, RoundStatus, StatisticsSummary};

use crate::state::AppState;

/// Probability at or above this gets the "high" treatment.
pub const HIGH_PROBABILITY_PCT: f64 = 15.0;
/// Probability at or above this gets the "medium" treatment.
pub const MEDIUM_PROBABILITY_PCT: f64 = 8.0;

const BAR_WIDTH: usize = 10;

/// Visual treatment bucket for one digit cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbabilityTier {
    /// Rank 1: the headline prediction.
    Top,
    High,
    Medium,
    Low,
}

impl ProbabilityTier {
    /// Classify a digit by its rank and probability percentage.
    pub fn classify(rank: Option<usize>, probability: f64) -> Self {
        match rank {
            Some(1) => ProbabilityTier::Top,
            _ if probability >= HIGH_PROBABILITY_PCT => ProbabilityTier::High,
            _ if probability >= MEDIUM_PROBABILITY_PCT => ProbabilityTier::Medium,
            _ => ProbabilityTier::Low,
        }
    }

    fn marker(self) -> &'static str {
        match self {
            ProbabilityTier::Top => "★",
            ProbabilityTier::High => "▲",
            ProbabilityTier::Medium => "●",
            ProbabilityTier::Low => "·",
        }
    }
}

/// Render every section that has data.
///
/// Before the first prediction arrives a still-loading screen shows a
/// placeholder instead of an empty dashboard.
pub fn render_dashboard(state: &AppState) -> String {
    if state.loading && state.current_prediction.is_none() {
        return "Loading predictions...\n".to_string();
    }

    let mut out = String::new();
    if let Some(ref prediction) = state.current_prediction {
        out.push_str(&render_current_prediction(prediction));
        out.push('\n');
    }
    if let Some(ref numbers) = state.number_wise {
        out.push_str(&render_number_wise(numbers));
        out.push('\n');
    }
    if let Some(ref stats) = state.statistics {
        out.push_str(&render_statistics(stats));
        out.push('\n');
    }
    out
}

/// The headline prediction card.
pub fn render_current_prediction(prediction: &PredictionSnapshot) -> String {
    let status_line = match prediction.status {
        RoundStatus::Live => format!("🔴 LIVE NOW - Round {}", prediction.draw_number),
        RoundStatus::Pending => format!("⏰ NEXT ROUND - Round {}", prediction.draw_number),
    };
    let time_line = match prediction.status {
        RoundStatus::Live => format!("Current Draw: {}", prediction.target_time),
        RoundStatus::Pending => format!("Next Draw: {}", prediction.target_time),
    };

    let mut card = String::new();
    card.push_str(&status_line);
    card.push('\n');
    card.push_str(&format!("  {}\n", time_line));
    card.push_str(&format!(
        "  Predicted Number: {}  ({:.0}% confidence)\n",
        prediction.predicted_number, prediction.confidence
    ));
    if !prediction.method.is_empty() {
        card.push_str(&format!("  Method: {}\n", prediction.method));
    }
    if let Some(ref time_to_next) = prediction.time_to_next {
        card.push_str(&format!("  Time Remaining: {}\n", time_to_next));
    }
    card
}

/// The per-digit probability grid.
pub fn render_number_wise(numbers: &NumberWiseDistribution) -> String {
    let mut card = String::from("Number-wise Predictions\n");
    for digit in 0u8..=9 {
        let probability = numbers.probability(digit);
        let rank = numbers.rank_of(digit);
        let tier = ProbabilityTier::classify(rank, probability);
        let rank_label = rank.map(|r| format!("#{}", r)).unwrap_or_else(|| "--".into());
        card.push_str(&format!(
            "  {} {}  {:>3.0}%  {}  {}\n",
            tier.marker(),
            digit,
            probability,
            probability_bar(probability),
            rank_label
        ));
    }
    card
}

/// The aggregate statistics card.
pub fn render_statistics(stats: &StatisticsSummary) -> String {
    let mut card = String::from("Quick Stats\n");
    card.push_str(&format!("  Total Draws:  {}\n", stats.total_draws_analyzed));
    card.push_str(&format!("  Hot Number:   {}\n", stats.most_frequent_number));
    card.push_str(&format!("  Cold Number:  {}\n", stats.least_frequent_number));
    if !stats.recent_trend.is_empty() {
        let trend = stats
            .recent_trend
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        card.push_str(&format!("  Recent Results: {}\n", trend));
    }
    card
}

fn probability_bar(probability: f64) -> String {
    // One block per 2.5 percentage points, clamped to the cell width.
    let filled = ((probability.max(0.0) / 2.5).round() as usize).min(BAR_WIDTH);
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(BAR_WIDTH - filled));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn distribution(pairs: Vec<(u8, f64)>) -> NumberWiseDistribution {
        NumberWiseDistribution {
            probabilities: pairs.iter().copied().collect(),
            sorted_predictions: pairs,
            top_prediction: None,
            top_probability: None,
        }
    }

    fn sample_prediction(status: RoundStatus) -> PredictionSnapshot {
        PredictionSnapshot {
            status,
            draw_number: 5,
            target_time: "16:30".into(),
            predicted_number: 7,
            confidence: 23.4,
            method: "Hot Number Analysis".into(),
            time_to_next: Some("45m".into()),
            round_info: None,
        }
    }

    #[test]
    fn test_top_rank_gets_top_treatment() {
        // Digit 1 at 22% is rank 1; digit 2 at 9% falls in the medium band.
        let dist = distribution(vec![(1, 22.0), (2, 9.0), (0, 5.0)]);

        assert_eq!(
            ProbabilityTier::classify(dist.rank_of(1), dist.probability(1)),
            ProbabilityTier::Top
        );
        assert_eq!(
            ProbabilityTier::classify(dist.rank_of(2), dist.probability(2)),
            ProbabilityTier::Medium
        );
        assert_eq!(
            ProbabilityTier::classify(dist.rank_of(0), dist.probability(0)),
            ProbabilityTier::Low
        );
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(
            ProbabilityTier::classify(Some(2), 15.0),
            ProbabilityTier::High
        );
        assert_eq!(
            ProbabilityTier::classify(Some(4), 8.0),
            ProbabilityTier::Medium
        );
        assert_eq!(
            ProbabilityTier::classify(Some(9), 7.9),
            ProbabilityTier::Low
        );
        // Rank 1 wins regardless of the probability bands.
        assert_eq!(ProbabilityTier::classify(Some(1), 3.0), ProbabilityTier::Top);
        assert_eq!(ProbabilityTier::classify(None, 20.0), ProbabilityTier::High);
    }

    #[test]
    fn test_missing_sections_render_nothing() {
        let state = AppState::default();
        assert_eq!(render_dashboard(&state), "");
    }

    #[test]
    fn test_loading_placeholder_before_first_data() {
        let state = AppState::new();
        assert_eq!(render_dashboard(&state), "Loading predictions...\n");
    }

    #[test]
    fn test_partial_state_renders_partial_dashboard() {
        let mut state = AppState::default();
        state.statistics = Some(StatisticsSummary {
            total_draws_analyzed: 220,
            most_frequent_number: 7,
            least_frequent_number: 0,
            recent_trend: vec![3, 7, 1],
            frequency_distribution: BTreeMap::new(),
        });

        let out = render_dashboard(&state);
        assert!(out.contains("Quick Stats"));
        assert!(out.contains("Total Draws:  220"));
        assert!(!out.contains("Number-wise"));
    }

    #[test]
    fn test_current_prediction_wording_tracks_status() {
        let live = render_current_prediction(&sample_prediction(RoundStatus::Live));
        assert!(live.contains("LIVE NOW - Round 5"));
        assert!(live.contains("Current Draw: 16:30"));

        let pending = render_current_prediction(&sample_prediction(RoundStatus::Pending));
        assert!(pending.contains("NEXT ROUND - Round 5"));
        assert!(pending.contains("Next Draw: 16:30"));
        assert!(pending.contains("Predicted Number: 7  (23% confidence)"));
        assert!(pending.contains("Time Remaining: 45m"));
    }

    #[test]
    fn test_number_grid_lists_every_digit_with_rank() {
        let pairs: Vec<(u8, f64)> = vec![
            (1, 22.0),
            (7, 16.0),
            (5, 12.0),
            (8, 10.0),
            (2, 9.0),
            (3, 8.0),
            (6, 7.0),
            (4, 6.0),
            (0, 5.0),
            (9, 5.0),
        ];
        let out = render_number_wise(&distribution(pairs));

        for digit in 0..10 {
            assert!(out.contains(&format!(" {} ", digit)));
        }
        assert!(out.contains("#1"));
        assert!(out.contains("#10"));
    }

    #[test]
    fn test_probability_bar_clamps() {
        assert_eq!(probability_bar(0.0), "░".repeat(10));
        assert_eq!(probability_bar(100.0), "█".repeat(10));
        assert_eq!(probability_bar(-3.0), "░".repeat(10));
    }
}
