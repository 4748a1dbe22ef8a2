//! Raw component metrics for a single land-health observation.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Four normalized 0–100 sub-metrics collected for a site.
///
/// Scoring treats these as plain numbers: out-of-range values propagate
/// arithmetically. Call [`LandHealthComponents::validate`] at input boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandHealthComponents {
    /// Canopy/vegetation cover (NDVI-derived), 0–100.
    pub vegetation_density: f64,
    /// Soil health index, 0–100.
    pub soil_health_index: f64,
    /// Soil moisture level, 0–100.
    pub moisture_level: f64,
    /// Biodiversity score, 0–100.
    pub biodiversity_score: f64,
}

impl LandHealthComponents {
    pub fn new(vegetation: f64, soil: f64, moisture: f64, biodiversity: f64) -> Self {
        Self {
            vegetation_density: vegetation,
            soil_health_index: soil,
            moisture_level: moisture,
            biodiversity_score: biodiversity,
        }
    }

    /// Named component values in weight order.
    pub fn fields(&self) -> [(&'static str, f64); 4] {
        [
            ("vegetationDensity", self.vegetation_density),
            ("soilHealthIndex", self.soil_health_index),
            ("moistureLevel", self.moisture_level),
            ("biodiversityScore", self.biodiversity_score),
        ]
    }

    /// Reject non-finite values and values outside [0, 100].
    pub fn validate(&self) -> Result<()> {
        for (field, value) in self.fields() {
            check_percent(field, value)?;
        }
        Ok(())
    }
}

/// Fails with [`Error::InvalidInput`] unless `value` is finite and in [0, 100].
pub(crate) fn check_percent(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidInput {
            field,
            value,
            expected: "a finite value in [0, 100]",
        })
    }
}

/// Traffic-light indicator for a single component value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Success,
    Warning,
    Danger,
}

impl ComponentStatus {
    /// ≥ 70 success, ≥ 50 warning, otherwise danger.
    pub fn from_value(value: f64) -> Self {
        if value >= 70.0 {
            ComponentStatus::Success
        } else if value >= 50.0 {
            ComponentStatus::Warning
        } else {
            ComponentStatus::Danger
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_bounds() {
        LandHealthComponents::new(0.0, 100.0, 50.0, 0.0)
            .validate()
            .expect("bounds are inclusive");
    }

    #[test]
    fn validate_rejects_out_of_range_and_nan() {
        let err = LandHealthComponents::new(38.0, 101.0, 45.0, 35.0)
            .validate()
            .unwrap_err();
        assert!(
            matches!(err, Error::InvalidInput { field: "soilHealthIndex", .. }),
            "unexpected error: {err}"
        );

        let err = LandHealthComponents::new(f64::NAN, 0.0, 0.0, 0.0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput { field: "vegetationDensity", .. }));

        assert!(LandHealthComponents::new(0.0, 0.0, -0.1, 0.0).validate().is_err());
    }

    #[test]
    fn camel_case_json() {
        let c: LandHealthComponents = serde_json::from_str(
            r#"{"vegetationDensity":38,"soilHealthIndex":52,"moistureLevel":45,"biodiversityScore":35}"#,
        )
        .unwrap();
        assert_eq!(c, LandHealthComponents::new(38.0, 52.0, 45.0, 35.0));
    }

    #[test]
    fn component_status_thresholds() {
        assert_eq!(ComponentStatus::from_value(70.0), ComponentStatus::Success);
        assert_eq!(ComponentStatus::from_value(69.9), ComponentStatus::Warning);
        assert_eq!(ComponentStatus::from_value(50.0), ComponentStatus::Warning);
        assert_eq!(ComponentStatus::from_value(49.9), ComponentStatus::Danger);
    }
}
