//! Forest-type growth rates and stand-age factors.
//!
//! These are configuration, not algorithm: the estimator receives a
//! `CarbonTables` at construction. `data/carbon_tables.json` mirrors the
//! built-in set and is the template for replacement tables.
//!
//! Age buckets are half-open on the right and keyed by their lower bound:
//!   [0, 5) [5, 10) [10, 20) [20, 40) [40, ∞)

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Forest type used when a requested key is unknown.
pub const DEFAULT_FOREST_TYPE: &str = "tropical_rainforest";

/// Annual sequestration rate for one forest type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForestType {
    pub name: String,
    /// tC / ha / yr.
    pub growth_rate: f64,
}

/// Stand-age bucket starting at `min_age_years`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeBucket {
    pub min_age_years: f64,
    pub factor: f64,
}

/// On-disk layout; validated into [`CarbonTables`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TablesFile {
    forest_types: BTreeMap<String, ForestType>,
    default_forest_type: String,
    age_factors: Vec<AgeBucket>,
}

/// Validated growth-rate and age-factor tables.
///
/// Invariants: at least one forest type, the default key is present, rates
/// and factors are finite and non-negative, and age buckets start at 0 with
/// strictly ascending boundaries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonTables {
    forest_types: BTreeMap<String, ForestType>,
    default_forest_type: String,
    age_factors: Vec<AgeBucket>,
}

impl Default for CarbonTables {
    /// IPCC-style annual rates (tC/ha/yr) and a rise-then-decline age curve.
    fn default() -> Self {
        let forest = |name: &str, growth_rate: f64| ForestType { name: name.to_string(), growth_rate };
        let forest_types = BTreeMap::from([
            (DEFAULT_FOREST_TYPE.to_string(), forest("Tropical rainforest", 3.5)),
            ("tropical_dry".to_string(), forest("Tropical dry forest", 2.1)),
            ("temperate".to_string(), forest("Temperate forest", 2.0)),
            ("boreal".to_string(), forest("Boreal forest", 1.2)),
        ]);
        let age_factors = [(0.0, 0.4), (5.0, 0.8), (10.0, 1.0), (20.0, 0.9), (40.0, 0.7)]
            .into_iter()
            .map(|(min_age_years, factor)| AgeBucket { min_age_years, factor })
            .collect();

        Self {
            forest_types,
            default_forest_type: DEFAULT_FOREST_TYPE.to_string(),
            age_factors,
        }
    }
}

impl CarbonTables {
    pub fn new(
        forest_types: BTreeMap<String, ForestType>,
        default_forest_type: impl Into<String>,
        age_factors: Vec<AgeBucket>,
    ) -> Result<Self> {
        let tables = Self {
            forest_types,
            default_forest_type: default_forest_type.into(),
            age_factors,
        };
        tables.validate()?;
        Ok(tables)
    }

    /// Parse and validate tables from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: TablesFile = serde_json::from_str(json)?;
        Self::new(file.forest_types, file.default_forest_type, file.age_factors)
    }

    /// Load and validate tables from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tables = Self::from_json(&contents)?;
        tracing::debug!(
            path = %path.display(),
            forest_types = tables.forest_types.len(),
            age_buckets = tables.age_factors.len(),
            "loaded carbon tables"
        );
        Ok(tables)
    }

    pub fn forest_types(&self) -> &BTreeMap<String, ForestType> {
        &self.forest_types
    }

    pub fn default_forest_type(&self) -> &str {
        &self.default_forest_type
    }

    pub fn age_factors(&self) -> &[AgeBucket] {
        &self.age_factors
    }

    fn validate(&self) -> Result<()> {
        if self.forest_types.is_empty() {
            return Err(Error::InvalidTables("no forest types defined".into()));
        }
        if !self.forest_types.contains_key(&self.default_forest_type) {
            return Err(Error::InvalidTables(format!(
                "default forest type '{}' is not defined",
                self.default_forest_type
            )));
        }
        for (key, ft) in &self.forest_types {
            if !ft.growth_rate.is_finite() || ft.growth_rate < 0.0 {
                return Err(Error::InvalidTables(format!(
                    "forest type '{key}' has invalid growth rate {}",
                    ft.growth_rate
                )));
            }
        }

        let Some(first) = self.age_factors.first() else {
            return Err(Error::InvalidTables("no age factor buckets defined".into()));
        };
        if first.min_age_years != 0.0 {
            return Err(Error::InvalidTables(format!(
                "first age bucket must start at 0, got {}",
                first.min_age_years
            )));
        }
        // Negated so NaN boundaries are rejected too.
        if self
            .age_factors
            .windows(2)
            .any(|w| !(w[0].min_age_years < w[1].min_age_years))
        {
            return Err(Error::InvalidTables(
                "age bucket boundaries must be strictly ascending".into(),
            ));
        }
        if let Some(b) = self
            .age_factors
            .iter()
            .find(|b| !b.factor.is_finite() || b.factor < 0.0)
        {
            return Err(Error::InvalidTables(format!(
                "age bucket at {} yr has invalid factor {}",
                b.min_age_years, b.factor
            )));
        }
        Ok(())
    }

    /// Multiplier for a stand of the given mean age.
    ///
    /// Negative or NaN ages fall into the first bucket.
    pub fn age_factor(&self, age_years: f64) -> f64 {
        let bucket = self
            .age_factors
            .iter()
            .rev()
            .find(|b| age_years >= b.min_age_years)
            .unwrap_or(&self.age_factors[0]);
        bucket.factor
    }

    /// Resolve a forest-type key, falling back to the default with a warning.
    ///
    /// Returns the key actually used alongside its entry.
    pub fn forest_type<'a>(&'a self, key: &'a str) -> (&'a str, &'a ForestType) {
        if let Some(ft) = self.forest_types.get(key) {
            return (key, ft);
        }
        tracing::warn!(
            requested = key,
            fallback = %self.default_forest_type,
            "unknown forest type, using default"
        );
        (
            self.default_forest_type.as_str(),
            &self.forest_types[&self.default_forest_type],
        )
    }
}
