//! Land-health scoring: weighted composite score, grade bands, and trend.

pub mod components;
pub mod grade;
pub mod scorer;
pub mod trend;
pub mod weights;

pub use components::{ComponentStatus, LandHealthComponents};
pub use grade::Grade;
pub use scorer::{LandHealthResult, LandHealthScorer, ScorerConfig, WeightedContributions};
pub use trend::{trend_from_scores, Trend, DEFAULT_TREND_THRESHOLD};
pub use weights::{HealthWeights, WeightShare};
