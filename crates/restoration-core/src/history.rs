//! Historical land-health observations for a site.
//!
//! A history is a JSON array of snapshots ordered by date ascending. Ordering
//! is the caller's responsibility and is not checked.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::health::scorer::percent_change;
use crate::health::{Grade, LandHealthComponents, LandHealthScorer, Trend};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotStatus {
    Baseline,
    Improving,
    Stagnant,
    Declining,
}

/// One dated field observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandHealthSnapshot {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub components: LandHealthComponents,
    pub tree_count: u32,
    pub avg_tree_age_years: f64,
    pub status: SnapshotStatus,
    #[serde(default)]
    pub notes: String,
}

/// A snapshot reduced to its score and grade.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredSnapshot {
    pub date: NaiveDate,
    pub status: SnapshotStatus,
    pub score: f64,
    pub grade: Grade,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    pub snapshots: Vec<ScoredSnapshot>,
    pub baseline_score: f64,
    pub latest_score: f64,
    pub latest: LandHealthSnapshot,
    /// Whole-percent change of the latest score over the first.
    pub improvement_percent: f64,
    pub trend: Trend,
}

pub fn parse_history(json: &str) -> Result<Vec<LandHealthSnapshot>> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_history(path: &Path) -> Result<Vec<LandHealthSnapshot>> {
    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let history = parse_history(&contents)?;
    tracing::debug!(path = %path.display(), snapshots = history.len(), "loaded land health history");
    Ok(history)
}

/// Score every snapshot and compare the latest against the first.
pub fn summarize_history(
    scorer: &LandHealthScorer,
    history: &[LandHealthSnapshot],
) -> Result<HistorySummary> {
    let (Some(first), Some(latest)) = (history.first(), history.last()) else {
        return Err(Error::EmptyHistory);
    };

    let snapshots: Vec<ScoredSnapshot> = history
        .iter()
        .map(|s| {
            let score = scorer.calculate_score(&s.components);
            ScoredSnapshot {
                date: s.date,
                status: s.status,
                score,
                grade: Grade::from_score(score),
            }
        })
        .collect();

    let baseline_score = scorer.calculate_score(&first.components);
    let latest_score = scorer.calculate_score(&latest.components);

    Ok(HistorySummary {
        snapshots,
        baseline_score,
        latest_score,
        latest: latest.clone(),
        improvement_percent: percent_change(baseline_score, latest_score),
        trend: scorer.trend(history),
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    pub(crate) fn demo_history() -> Vec<LandHealthSnapshot> {
        parse_history(include_str!("../data/land_health_history.json")).expect("fixture parses")
    }

    #[test]
    fn fixture_parses_in_order() {
        let h = demo_history();
        assert_eq!(h.len(), 8);
        assert_eq!(h[0].status, SnapshotStatus::Baseline);
        assert_eq!(h[0].date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(h[0].tree_count, 1500);
        assert!(h.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn fixture_scores() {
        let scorer = LandHealthScorer::default();
        let summary = summarize_history(&scorer, &demo_history()).unwrap();
        let expected = [43.2, 50.4, 54.8, 63.1, 66.4, 68.9, 73.7, 77.9];
        for (s, e) in summary.snapshots.iter().zip(expected) {
            assert_abs_diff_eq!(s.score, e, epsilon = 1e-9);
        }
        assert_eq!(summary.snapshots[0].grade, Grade::Poor);
        assert_eq!(summary.snapshots[7].grade, Grade::Good);
    }

    /// Last three scores 68.9 → 77.9: avg change 3.0 per snapshot.
    #[test]
    fn fixture_trend_and_improvement() {
        let scorer = LandHealthScorer::default();
        let summary = summarize_history(&scorer, &demo_history()).unwrap();
        assert_eq!(summary.trend, Trend::Improving);
        assert_abs_diff_eq!(summary.baseline_score, 43.2, epsilon = 1e-9);
        assert_abs_diff_eq!(summary.latest_score, 77.9, epsilon = 1e-9);
        assert_eq!(summary.improvement_percent, 80.0);
        assert_eq!(summary.latest.date, NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
    }

    #[test]
    fn empty_history_is_an_error() {
        let scorer = LandHealthScorer::default();
        assert!(matches!(summarize_history(&scorer, &[]), Err(Error::EmptyHistory)));
    }

    #[test]
    fn snapshot_round_trips_camel_case() {
        let h = demo_history();
        let json = serde_json::to_value(&h[1]).unwrap();
        assert_eq!(json["vegetationDensity"], 45.0);
        assert_eq!(json["avgTreeAgeYears"], 0.42);
        assert_eq!(json["status"], "improving");
        assert_eq!(json["date"], "2024-04-01");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_history(Path::new("/nonexistent/history.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/history.json"));
    }

    #[test]
    fn unknown_status_is_rejected() {
        let json = r#"[{"date":"2024-01-01","vegetationDensity":1,"soilHealthIndex":1,
            "moistureLevel":1,"biodiversityScore":1,"treeCount":1,"avgTreeAgeYears":1,
            "status":"thriving"}]"#;
        assert!(matches!(parse_history(json), Err(Error::Json(_))));
    }
}
