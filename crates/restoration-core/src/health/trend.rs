//! Direction of change across recent land-health observations.

use serde::{Deserialize, Serialize};

/// Average per-observation change beyond which a site counts as moving.
pub const DEFAULT_TREND_THRESHOLD: f64 = 1.5;

/// Number of most recent observations considered.
pub const TREND_WINDOW: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    #[default]
    Stable,
    Declining,
}

/// Classify a chronological series of scores.
///
/// Uses the last `min(3, len)` scores:
///   avg_change = (last − first) / window
///   avg_change >  threshold → Improving
///   avg_change < −threshold → Declining
/// Fewer than two scores is always `Stable`.
pub fn trend_from_scores(scores: &[f64], threshold: f64) -> Trend {
    if scores.len() < 2 {
        return Trend::Stable;
    }
    let window = &scores[scores.len() - TREND_WINDOW.min(scores.len())..];
    let avg_change = (window[window.len() - 1] - window[0]) / window.len() as f64;

    if avg_change > threshold {
        Trend::Improving
    } else if avg_change < -threshold {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_series_is_stable() {
        assert_eq!(trend_from_scores(&[], DEFAULT_TREND_THRESHOLD), Trend::Stable);
        assert_eq!(trend_from_scores(&[12.0], DEFAULT_TREND_THRESHOLD), Trend::Stable);
    }

    #[test]
    fn two_points_divide_by_two() {
        // (50 − 46) / 2 = 2.0 > 1.5
        assert_eq!(trend_from_scores(&[46.0, 50.0], 1.5), Trend::Improving);
        // (50 − 47) / 2 = 1.5, not strictly greater
        assert_eq!(trend_from_scores(&[47.0, 50.0], 1.5), Trend::Stable);
    }

    #[test]
    fn only_last_three_count() {
        // A big early drop is outside the window.
        let scores = [90.0, 40.0, 41.0, 42.0, 43.0];
        // (43 − 41) / 3 ≈ 0.67
        assert_eq!(trend_from_scores(&scores, 1.5), Trend::Stable);
        assert_eq!(trend_from_scores(&scores, 0.5), Trend::Improving);
    }

    #[test]
    fn declining_series() {
        assert_eq!(trend_from_scores(&[70.0, 66.0, 62.0], 1.5), Trend::Declining);
    }
}
