//! Display precision helpers shared by the health and carbon formulas.

/// Round to one decimal place, half away from zero on the tenths digit.
///
/// `round_tenths(43.15) == 43.2`, `round_tenths(-0.25) == -0.3`.
pub fn round_tenths(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Round to a whole percentage point, half away from zero.
pub fn round_percent(x: f64) -> f64 {
    x.round()
}
