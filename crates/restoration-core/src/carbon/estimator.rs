//! Health-adjusted carbon sequestration estimate.
//!
//!   base      = hectares × growth_rate(forest_type) × age_factor(age)
//!   adjusted  = base × health / 100
//!   CO2e      = adjusted × 3.67
//!
//! Every stage is rounded to one decimal before feeding the next.

use serde::{Deserialize, Serialize};

use crate::carbon::tables::CarbonTables;
use crate::error::{Error, Result};
use crate::health::components::check_percent;
use crate::health::scorer::percent_change;
use crate::rounding::round_tenths;

/// tCO2e per tC (molar mass ratio 44/12, IPCC convention).
pub const CO2_PER_CARBON: f64 = 3.67;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonCalculationInput {
    pub tree_count: u32,
    pub avg_tree_age_years: f64,
    /// Key into the forest-type table; unknown keys use the default type.
    pub forest_type: String,
    pub hectares: f64,
    /// Land health score, 0–100.
    pub land_health_score: f64,
}

impl CarbonCalculationInput {
    /// Age must be finite and non-negative, area finite and positive, and the
    /// health score within [0, 100].
    pub fn validate(&self) -> Result<()> {
        if !self.avg_tree_age_years.is_finite() || self.avg_tree_age_years < 0.0 {
            return Err(Error::InvalidInput {
                field: "avgTreeAgeYears",
                value: self.avg_tree_age_years,
                expected: "a finite, non-negative age",
            });
        }
        if !self.hectares.is_finite() || self.hectares <= 0.0 {
            return Err(Error::InvalidInput {
                field: "hectares",
                value: self.hectares,
                expected: "a finite, positive area",
            });
        }
        check_percent("landHealthScore", self.land_health_score)
    }
}

/// Formula instantiations for the transparency panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonFormulas {
    pub base: String,
    pub adjustment: String,
    pub co2_conversion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonCalculationResult {
    /// Forest type actually used, after any fallback.
    pub forest_type: String,
    pub growth_rate: f64,
    pub age_factor: f64,
    /// tC.
    pub base_carbon: f64,
    /// tC.
    pub adjusted_carbon: f64,
    pub health_multiplier: f64,
    /// Echoes the input health score.
    pub improvement_percent: f64,
    /// tCO2e.
    pub co2_equivalent: f64,
    pub formulas: CarbonFormulas,
}

/// Same base carbon evaluated at two health scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonImprovement {
    pub baseline_carbon: f64,
    pub current_carbon: f64,
    pub improvement: f64,
    pub improvement_percent: f64,
}

#[derive(Debug, Clone, Default)]
pub struct CarbonEstimator {
    tables: CarbonTables,
}

impl CarbonEstimator {
    pub fn new(tables: CarbonTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &CarbonTables {
        &self.tables
    }

    pub fn age_factor(&self, age_years: f64) -> f64 {
        self.tables.age_factor(age_years)
    }

    pub fn base_carbon(&self, input: &CarbonCalculationInput) -> f64 {
        let (_, forest) = self.tables.forest_type(&input.forest_type);
        round_tenths(input.hectares * forest.growth_rate * self.age_factor(input.avg_tree_age_years))
    }

    pub fn adjusted_carbon(&self, base_carbon: f64, health_score: f64) -> f64 {
        round_tenths(base_carbon * (health_score / 100.0))
    }

    pub fn co2_equivalent(&self, carbon_tonnes: f64) -> f64 {
        round_tenths(carbon_tonnes * CO2_PER_CARBON)
    }

    pub fn calculate(&self, input: &CarbonCalculationInput) -> CarbonCalculationResult {
        let (forest_key, forest) = self.tables.forest_type(&input.forest_type);
        let age_factor = self.age_factor(input.avg_tree_age_years);
        let base_carbon = round_tenths(input.hectares * forest.growth_rate * age_factor);
        let health_multiplier = input.land_health_score / 100.0;
        let adjusted_carbon = self.adjusted_carbon(base_carbon, input.land_health_score);
        let co2_equivalent = self.co2_equivalent(adjusted_carbon);

        tracing::debug!(
            forest_type = forest_key,
            hectares = input.hectares,
            base_carbon,
            adjusted_carbon,
            co2_equivalent,
            "carbon estimate"
        );

        let formulas = CarbonFormulas {
            base: format!(
                "Base Carbon = {} ha × {} tC/ha/yr × {} (age factor, {:.2} yr) = {:.1} tC",
                input.hectares, forest.growth_rate, age_factor, input.avg_tree_age_years, base_carbon
            ),
            adjustment: format!(
                "Health Multiplier = {}/100 = {:.2}x → Adjusted = {:.1} × {:.2} = {:.1} tC",
                input.land_health_score, health_multiplier, base_carbon, health_multiplier, adjusted_carbon
            ),
            co2_conversion: format!(
                "CO₂ Equivalent = {:.1} tC × {} = {:.1} tCO₂e",
                adjusted_carbon, CO2_PER_CARBON, co2_equivalent
            ),
        };

        CarbonCalculationResult {
            forest_type: forest_key.to_string(),
            growth_rate: forest.growth_rate,
            age_factor,
            base_carbon,
            adjusted_carbon,
            health_multiplier,
            improvement_percent: input.land_health_score,
            co2_equivalent,
            formulas,
        }
    }

    /// Carbon gained by moving from `baseline_health` to `current_health` on
    /// the same base. The percentage is 0 when the baseline carbon is 0.
    pub fn improvement_from_baseline(
        &self,
        baseline_health: f64,
        current_health: f64,
        base_carbon: f64,
    ) -> CarbonImprovement {
        let baseline_carbon = self.adjusted_carbon(base_carbon, baseline_health);
        let current_carbon = self.adjusted_carbon(base_carbon, current_health);
        CarbonImprovement {
            baseline_carbon,
            current_carbon,
            improvement: round_tenths(current_carbon - baseline_carbon),
            improvement_percent: percent_change(baseline_carbon, current_carbon),
        }
    }
}
