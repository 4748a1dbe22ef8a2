//! End-to-end site assessment: history → health analysis → carbon estimate.

use serde::{Deserialize, Serialize};

use crate::carbon::{CarbonCalculationInput, CarbonCalculationResult, CarbonEstimator, CarbonImprovement};
use crate::error::{Error, Result};
use crate::health::{LandHealthResult, LandHealthScorer};
use crate::history::LandHealthSnapshot;

/// Site attributes that are not part of the monitoring snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteParams {
    pub hectares: f64,
    pub forest_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteAssessment {
    /// Analysis of the latest snapshot, trend taken from the full history.
    pub health: LandHealthResult,
    pub baseline_score: f64,
    pub carbon: CarbonCalculationResult,
    /// Carbon on the current base at baseline health vs. current health.
    pub carbon_improvement: CarbonImprovement,
}

/// Assess a site from its monitoring history.
///
/// The latest snapshot supplies components, tree count, and stand age; the
/// first snapshot is the baseline. Fails on an empty history or invalid
/// site parameters.
pub fn assess_site(
    scorer: &LandHealthScorer,
    estimator: &CarbonEstimator,
    history: &[LandHealthSnapshot],
    site: &SiteParams,
) -> Result<SiteAssessment> {
    let (Some(first), Some(latest)) = (history.first(), history.last()) else {
        return Err(Error::EmptyHistory);
    };

    let health = scorer.analyze(&latest.components, Some(history));
    let baseline_score = scorer.calculate_score(&first.components);

    let input = CarbonCalculationInput {
        tree_count: latest.tree_count,
        avg_tree_age_years: latest.avg_tree_age_years,
        forest_type: site.forest_type.clone(),
        hectares: site.hectares,
        land_health_score: health.overall_score,
    };
    input.validate()?;

    let carbon = estimator.calculate(&input);
    let carbon_improvement =
        estimator.improvement_from_baseline(baseline_score, health.overall_score, carbon.base_carbon);

    tracing::info!(
        score = health.overall_score,
        grade = %health.grade,
        co2e = carbon.co2_equivalent,
        "site assessed"
    );

    Ok(SiteAssessment {
        health,
        baseline_score,
        carbon,
        carbon_improvement,
    })
}
