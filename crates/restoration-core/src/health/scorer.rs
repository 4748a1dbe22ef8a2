//! Weighted land-health scoring.
//!
//! Land Health = 0.35·VD + 0.30·SH + 0.20·ML + 0.15·BS, rounded to one decimal,
//! where VD/SH/ML/BS are vegetation density, soil health, moisture, and
//! biodiversity on a 0–100 scale.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::health::components::LandHealthComponents;
use crate::health::grade::Grade;
use crate::health::trend::{trend_from_scores, Trend, DEFAULT_TREND_THRESHOLD, TREND_WINDOW};
use crate::health::weights::HealthWeights;
use crate::history::LandHealthSnapshot;
use crate::rounding::{round_percent, round_tenths};

/// Scorer configuration. Missing JSON fields take the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScorerConfig {
    pub weights: HealthWeights,
    pub trend_threshold: f64,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            weights: HealthWeights::default(),
            trend_threshold: DEFAULT_TREND_THRESHOLD,
        }
    }
}

/// Per-component `weight × value`, each rounded to one decimal on its own.
///
/// The four terms may differ from the overall score by a tenth or two.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedContributions {
    pub vegetation: f64,
    pub soil: f64,
    pub moisture: f64,
    pub biodiversity: f64,
}

impl WeightedContributions {
    pub fn total(&self) -> f64 {
        self.vegetation + self.soil + self.moisture + self.biodiversity
    }
}

/// Full analysis of a single observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandHealthResult {
    pub overall_score: f64,
    pub components: LandHealthComponents,
    pub weighted_contributions: WeightedContributions,
    pub grade: Grade,
    pub trend: Trend,
}

#[derive(Debug, Clone)]
pub struct LandHealthScorer {
    config: ScorerConfig,
}

impl Default for LandHealthScorer {
    fn default() -> Self {
        Self { config: ScorerConfig::default() }
    }
}

impl LandHealthScorer {
    /// Fails if the weights do not sum to 1.0 or the threshold is negative/non-finite.
    pub fn new(config: ScorerConfig) -> Result<Self> {
        config.weights.validate()?;
        if !config.trend_threshold.is_finite() || config.trend_threshold < 0.0 {
            return Err(Error::InvalidThreshold(config.trend_threshold));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    pub fn weights(&self) -> &HealthWeights {
        &self.config.weights
    }

    /// Composite score rounded to one decimal. Inputs are not range-checked.
    pub fn calculate_score(&self, components: &LandHealthComponents) -> f64 {
        round_tenths(self.config.weights.weighted_sum(components))
    }

    pub fn weighted_contributions(&self, c: &LandHealthComponents) -> WeightedContributions {
        let w = &self.config.weights;
        WeightedContributions {
            vegetation: round_tenths(w.vegetation * c.vegetation_density),
            soil: round_tenths(w.soil * c.soil_health_index),
            moisture: round_tenths(w.moisture * c.moisture_level),
            biodiversity: round_tenths(w.biodiversity * c.biodiversity_score),
        }
    }

    pub fn grade(&self, score: f64) -> Grade {
        Grade::from_score(score)
    }

    /// Trend over the most recent snapshots (see [`trend_from_scores`]).
    pub fn trend(&self, snapshots: &[LandHealthSnapshot]) -> Trend {
        let start = snapshots.len().saturating_sub(TREND_WINDOW);
        let scores: Vec<f64> = snapshots[start..]
            .iter()
            .map(|s| self.calculate_score(&s.components))
            .collect();
        trend_from_scores(&scores, self.config.trend_threshold)
    }

    /// Score, contributions, grade, and trend. Without history the trend is `Stable`.
    pub fn analyze(
        &self,
        components: &LandHealthComponents,
        history: Option<&[LandHealthSnapshot]>,
    ) -> LandHealthResult {
        let overall_score = self.calculate_score(components);
        LandHealthResult {
            overall_score,
            components: *components,
            weighted_contributions: self.weighted_contributions(components),
            grade: self.grade(overall_score),
            trend: history.map(|h| self.trend(h)).unwrap_or_default(),
        }
    }

    /// Whole-percent change of the health score from `baseline` to `current`.
    ///
    /// Returns 0 when the baseline score is 0.
    pub fn improvement_percent(
        &self,
        baseline: &LandHealthComponents,
        current: &LandHealthComponents,
    ) -> f64 {
        percent_change(self.calculate_score(baseline), self.calculate_score(current))
    }
}

/// `round((current − baseline) / baseline × 100)`, guarded against a zero baseline.
pub(crate) fn percent_change(baseline: f64, current: f64) -> f64 {
    if baseline == 0.0 {
        return 0.0;
    }
    round_percent((current - baseline) / baseline * 100.0)
}
