//! Statistical helpers shared by transforms and views.

use crate::error::Result;
use crate::error::VisError;

/// Critical values for two-sided confidence intervals.
const Z_SCORES: [(f64, f64); 8] = [
    (0.80, 1.282),
    (0.85, 1.440),
    (0.90, 1.645),
    (0.95, 1.960),
    (0.975, 2.241),
    (0.99, 2.576),
    (0.995, 2.807),
    (0.999, 3.291),
];

/// The critical value (z-score) for a given confidence level.
///
/// Only the tabulated levels are supported; any other level fails
/// with [VisError::ConfidenceLevel].
pub fn z_score(level: f64) -> Result<f64> {
    Z_SCORES
        .iter()
        .find(|(supported, _)| *supported == level)
        .map(|(_, z)| *z)
        .ok_or(VisError::ConfidenceLevel(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabulated_levels_resolve() {
        assert_eq!(z_score(0.95).unwrap(), 1.960);
        assert_eq!(z_score(0.999).unwrap(), 3.291);
    }

    #[test]
    fn other_levels_fail() {
        assert!(matches!(z_score(0.93), Err(VisError::ConfidenceLevel(_))));
    }
}
