//! Qualitative grade bands for a land-health score.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered grade bands, worst first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    Critical,
    Poor,
    Fair,
    Good,
    Excellent,
}

impl Grade {
    /// Step function over the score; each band's lower bound is inclusive.
    ///
    /// ```text
    ///   [80, ∞) Excellent   [65, 80) Good   [50, 65) Fair   [35, 50) Poor   else Critical
    /// ```
    ///
    /// NaN compares false against every bound and lands in `Critical`.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Grade::Excellent
        } else if score >= 65.0 {
            Grade::Good
        } else if score >= 50.0 {
            Grade::Fair
        } else if score >= 35.0 {
            Grade::Poor
        } else {
            Grade::Critical
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::Critical => "Critical",
            Grade::Poor => "Poor",
            Grade::Fair => "Fair",
            Grade::Good => "Good",
            Grade::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        assert_eq!(Grade::from_score(80.0), Grade::Excellent);
        assert_ne!(Grade::from_score(79.9), Grade::Poor);
        assert_eq!(Grade::from_score(79.9), Grade::Good);
        assert_eq!(Grade::from_score(65.0), Grade::Good);
        assert_eq!(Grade::from_score(64.9), Grade::Fair);
        assert_eq!(Grade::from_score(50.0), Grade::Fair);
        assert_eq!(Grade::from_score(35.0), Grade::Poor);
        assert_eq!(Grade::from_score(34.9), Grade::Critical);
        assert_eq!(Grade::from_score(f64::NAN), Grade::Critical);
    }

    /// Grade never decreases as the score increases.
    #[test]
    fn monotone_in_score() {
        let mut prev = Grade::from_score(-10.0);
        for tenths in -100..=1100 {
            let g = Grade::from_score(tenths as f64 / 10.0);
            assert!(g >= prev, "grade dropped at score {}", tenths as f64 / 10.0);
            prev = g;
        }
    }

    #[test]
    fn ordering_worst_to_best() {
        assert!(Grade::Critical < Grade::Poor);
        assert!(Grade::Poor < Grade::Fair);
        assert!(Grade::Fair < Grade::Good);
        assert!(Grade::Good < Grade::Excellent);
    }
}
