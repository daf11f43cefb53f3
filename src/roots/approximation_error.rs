use crate::prelude::ErrorsSqr;

/// The three standard error metrics of an approximation `x` to a true value `n`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproximationError {
    /// `|n - x|`
    pub absolute: f64,
    /// `|1 - x/n|`
    pub relative: f64,
    /// `|(n - x)/n| * 100`
    pub percent: f64,
}

/// Computes the absolute, relative, and percent error of an approximation `x`
/// to a true value `n`.
///
/// Pure function, no side effects. The relative and percent metrics divide by
/// `n`, so `n == 0` is rejected up front instead of letting a NaN or infinity
/// propagate into a caller's report.
///
/// # Errors
/// `ErrorsSqr::ZeroDivisor` when `n == 0`.
pub fn approximation_error(n: f64, x: f64) -> Result<ApproximationError, ErrorsSqr> {
    if n == 0.0 {
        return Err(ErrorsSqr::ZeroDivisor(
            "relative error is undefined for a true value of zero",
        ));
    }
    Ok(ApproximationError {
        absolute: (n - x).abs(),
        relative: (1.0 - x / n).abs(),
        percent: ((n - x) / n).abs() * 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_for_a_simple_approximation() {
        let err = approximation_error(100.0, 99.0).unwrap();
        assert!((err.absolute - 1.0).abs() < 1e-15);
        assert!((err.relative - 0.01).abs() < 1e-15);
        assert!((err.percent - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_exact_approximation_has_zero_error() {
        let err = approximation_error(42.0, 42.0).unwrap();
        assert_eq!(err.absolute, 0.0);
        assert_eq!(err.relative, 0.0);
        assert_eq!(err.percent, 0.0);
    }

    #[test]
    fn test_zero_true_value_is_rejected() {
        assert!(matches!(
            approximation_error(0.0, 1.0),
            Err(ErrorsSqr::ZeroDivisor(_))
        ));
    }
}
