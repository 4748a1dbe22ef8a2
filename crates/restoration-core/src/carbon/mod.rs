//! Carbon sequestration estimates scaled by land health.

pub mod estimator;
pub mod tables;

pub use estimator::{
    CarbonCalculationInput, CarbonCalculationResult, CarbonEstimator, CarbonFormulas,
    CarbonImprovement, CO2_PER_CARBON,
};
pub use tables::{AgeBucket, CarbonTables, ForestType, DEFAULT_FOREST_TYPE};
