//! Land-health scoring and carbon sequestration estimates for restoration sites.
//!
//! Pipeline:
//!   raw component metrics → [`health::LandHealthScorer`] (score, grade, trend) →
//!   [`carbon::CarbonEstimator`] (base carbon × health multiplier → tCO2e).
//!
//! Everything here is pure computation over in-memory values. Forest growth
//! rates and age factors are explicit configuration ([`carbon::CarbonTables`]).

pub mod assessment;
pub mod carbon;
pub mod error;
pub mod health;
pub mod history;
pub mod rounding;

pub use assessment::{assess_site, SiteAssessment, SiteParams};
pub use carbon::{
    CarbonCalculationInput, CarbonCalculationResult, CarbonEstimator, CarbonImprovement,
    CarbonTables,
};
pub use error::{Error, Result};
pub use health::{
    Grade, HealthWeights, LandHealthComponents, LandHealthResult, LandHealthScorer, ScorerConfig,
    Trend,
};
pub use history::{LandHealthSnapshot, SnapshotStatus};
