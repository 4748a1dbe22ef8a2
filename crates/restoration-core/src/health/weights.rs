//! Component weights for the composite land-health score.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::health::components::LandHealthComponents;

/// Allowed deviation of the weight sum from 1.0.
///
/// 0.35 + 0.30 + 0.20 + 0.15 evaluates to 0.9999999999999999 in f64.
const SUM_TOLERANCE: f64 = 1e-9;

/// Relative weight of each component in the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthWeights {
    pub vegetation: f64,
    pub soil: f64,
    pub moisture: f64,
    pub biodiversity: f64,
}

impl Default for HealthWeights {
    fn default() -> Self {
        Self {
            vegetation: 0.35,
            soil: 0.30,
            moisture: 0.20,
            biodiversity: 0.15,
        }
    }
}

/// One row of the weight transparency table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightShare {
    pub component: &'static str,
    pub weight: f64,
    pub percentage: f64,
}

impl HealthWeights {
    pub fn sum(&self) -> f64 {
        self.vegetation + self.soil + self.moisture + self.biodiversity
    }

    /// Weights must be finite, non-negative, and sum to 1.0.
    pub fn validate(&self) -> Result<()> {
        let all = [self.vegetation, self.soil, self.moisture, self.biodiversity];
        let sum = self.sum();
        if all.iter().any(|w| !w.is_finite() || *w < 0.0) || (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(Error::InvalidWeights { sum });
        }
        Ok(())
    }

    /// Unrounded weighted sum, accumulated in component order.
    pub(crate) fn weighted_sum(&self, c: &LandHealthComponents) -> f64 {
        self.vegetation * c.vegetation_density
            + self.soil * c.soil_health_index
            + self.moisture * c.moisture_level
            + self.biodiversity * c.biodiversity_score
    }

    /// Human-readable score formula.
    pub fn formula(&self) -> String {
        format!(
            "Land Health Score = {} × Vegetation Density + {} × Soil Health + {} × Moisture Level + {} × Biodiversity Score",
            self.vegetation, self.soil, self.moisture, self.biodiversity
        )
    }

    pub fn breakdown(&self) -> Vec<WeightShare> {
        [
            ("vegetation", self.vegetation),
            ("soil", self.soil),
            ("moisture", self.moisture),
            ("biodiversity", self.biodiversity),
        ]
        .into_iter()
        .map(|(component, weight)| WeightShare {
            component,
            weight,
            percentage: (weight * 1000.0).round() / 10.0,
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        let w = HealthWeights::default();
        assert!((w.sum() - 1.0).abs() < SUM_TOLERANCE);
        w.validate().expect("default weights are valid");
    }

    #[test]
    fn rejects_bad_sum() {
        let w = HealthWeights { vegetation: 0.5, ..HealthWeights::default() };
        match w.validate() {
            Err(Error::InvalidWeights { sum }) => assert!((sum - 1.15).abs() < 1e-12),
            other => panic!("expected InvalidWeights, got {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_weight_even_if_sum_is_one() {
        let w = HealthWeights { vegetation: 0.65, soil: -0.15, moisture: 0.35, biodiversity: 0.15 };
        assert!(w.validate().is_err());
    }

    #[test]
    fn formula_lists_each_weight() {
        let f = HealthWeights::default().formula();
        assert!(f.starts_with("Land Health Score = 0.35 × Vegetation Density"));
        assert!(f.contains("0.3 × Soil Health"));
        assert!(f.ends_with("0.15 × Biodiversity Score"));
    }

    #[test]
    fn breakdown_percentages() {
        let b = HealthWeights::default().breakdown();
        let pct: Vec<f64> = b.iter().map(|s| s.percentage).collect();
        assert_eq!(pct, vec![35.0, 30.0, 20.0, 15.0]);
        assert_eq!(b[0].component, "vegetation");
    }
}
