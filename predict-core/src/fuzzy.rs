//! Fuzzy equality for `f64` sequences
//!
//! Two values are equal when they differ by at most `threshold` times the
//! larger of their magnitudes. This absorbs rounding from the forward and
//! inverse operations without merging genuinely different values.

use crate::SearchFailure;

/// Default relative threshold for fuzzy equality
pub const FUZZY_EQ_THRESHOLD: f64 = 1e-10;

/// Fuzzy equality with the default threshold
pub fn fuzzy_eq(a: f64, b: f64) -> bool {
    fuzzy_eq_within(a, b, FUZZY_EQ_THRESHOLD)
}

/// Fuzzy equality with an explicit relative threshold
pub fn fuzzy_eq_within(a: f64, b: f64, threshold: f64) -> bool {
    (a - b).abs() <= a.abs().max(b.abs()) * threshold
}

/// Check whether a sequence is constant.
///
/// Fails on the first non-finite value, since such a value can never be
/// part of a chain that reduces to a constant.
pub fn check_constant(values: &[f64], threshold: f64) -> Result<bool, SearchFailure> {
    if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(SearchFailure::NonFiniteValue { index, value });
    }
    let Some(&first) = values.first() else {
        return Ok(true);
    };
    Ok(values.iter().all(|&v| fuzzy_eq_within(v, first, threshold)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: f64 = FUZZY_EQ_THRESHOLD;

    #[test]
    fn test_fuzzy_eq_true() {
        assert!(fuzzy_eq(1.0, 1.0));
        assert!(fuzzy_eq(-1.0, -1.0));
        assert!(fuzzy_eq(2.25, 2.25));
        assert!(fuzzy_eq(0.0, 0.0));
        assert!(fuzzy_eq(0.1 + 0.2, 0.3));
    }

    #[test]
    fn test_fuzzy_eq_false() {
        assert!(!fuzzy_eq(1.0, 2.0));
        assert!(!fuzzy_eq(-1.0, 1.0));
        assert!(!fuzzy_eq(-T, T));
        assert!(!fuzzy_eq(0.0, T));
    }

    #[test]
    fn test_threshold_boundary_below() {
        assert!(fuzzy_eq(1.0 + 0.99 * T, 1.0));
        assert!(fuzzy_eq(1.0, 1.0 + 0.99 * T));
        assert!(fuzzy_eq(1e6, 1e6 * (1.0 + 0.5 * T)));
    }

    #[test]
    fn test_threshold_boundary_above() {
        assert!(!fuzzy_eq(1.0 + 1.01 * T, 1.0));
        assert!(!fuzzy_eq(1.0, 1.0 + 1.01 * T));
        assert!(!fuzzy_eq(1e6, 1e6 * (1.0 + 2.0 * T)));
    }

    #[test]
    fn test_scales_with_magnitude() {
        // Absolute difference of 1 is tiny next to 1e12
        assert!(fuzzy_eq(1e12, 1e12 + 1.0));
        assert!(!fuzzy_eq(1e6, 1e6 + 1.0));
        // Negative values scale on magnitude too
        assert!(fuzzy_eq(-1e12, -1e12 - 1.0));
    }

    #[test]
    fn test_custom_threshold() {
        assert!(fuzzy_eq_within(1.0, 1.001, 1e-2));
        assert!(!fuzzy_eq_within(1.0, 1.001, 1e-4));
    }

    #[test]
    fn test_check_constant() {
        assert_eq!(check_constant(&[4.0, 4.0, 4.0], T), Ok(true));
        assert_eq!(check_constant(&[4.0, 4.0, 5.0], T), Ok(false));
        assert_eq!(check_constant(&[], T), Ok(true));
    }

    #[test]
    fn test_check_constant_non_finite() {
        let result = check_constant(&[1.0, f64::INFINITY, 3.0], T);
        assert!(matches!(result, Err(SearchFailure::NonFiniteValue { index: 1, .. })));
        let result = check_constant(&[f64::NAN, f64::NAN], T);
        assert!(matches!(result, Err(SearchFailure::NonFiniteValue { index: 0, .. })));
    }
}
