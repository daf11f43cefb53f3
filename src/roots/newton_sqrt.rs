use crate::{
    prelude::ErrorsSqr,
    roots::root_result::{
        relative_error, RootApproximation, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
    },
};

/// Approximates the square root of `n` with Newton's method.
///
/// # Overview
/// Newton's method finds a zero of `f(x) = x^2 - n` by repeatedly sliding the
/// current guess down the tangent line:
///
/// ```text
/// x <- x - (x^2 - n) / (2x)
/// ```
///
/// Iteration stops once the relative error `|1 - x^2/n|` drops to `1e-14`,
/// so the stopping rule behaves the same for `n = 2` as for `n = 1000000`.
/// Convergence is quadratic near the root; the iteration count grows roughly
/// with `log(n)` because the default seed `n/2` starts far above the root and
/// the early steps halve the guess.
///
/// # Edge Cases
/// - `n == 0` and `n == 1` return immediately with zero iterations.
/// - `n < 0` computes the root of `|n|` and tags the result
///   `RootValue::Imaginary`, since the true root is `i * sqrt(|n|)`.
///
/// # Returns
/// The converged estimate and the number of update steps taken, or
/// `ErrorsSqr::FailedToConverge` if the iteration cap of 1000 is exhausted.
pub fn newton_sqrt(n: f64) -> Result<RootApproximation, ErrorsSqr> {
    newton_sqrt_seeded(n, None, DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS)
}

/// Same solver with the seed guess, tolerance, and iteration cap exposed.
///
/// The seed may be any positive number; the closer it is to the true root the
/// fewer steps the solver takes. `None` seeds with `n/2`, which is safe for
/// every `n` the closed-form cases do not already handle.
///
/// # Errors
/// - `ErrorsSqr::ZeroDivisor` for a seed of exactly zero (the update divides
///   by `2x`).
/// - `ErrorsSqr::InvalidInputRange` for a negative seed (the iteration would
///   converge to the negative root).
/// - `ErrorsSqr::FailedToConverge` once `max_iterations` updates have been
///   spent without satisfying the tolerance.
pub fn newton_sqrt_seeded(
    n: f64,
    seed: Option<f64>,
    tolerance: f64,
    max_iterations: usize,
) -> Result<RootApproximation, ErrorsSqr> {
    if n < 0.0 {
        let (magnitude, iterations) = converge(-n, seed, tolerance, max_iterations)?;
        return Ok(RootApproximation::imaginary(magnitude, iterations));
    }
    let (root, iterations) = converge(n, seed, tolerance, max_iterations)?;
    Ok(RootApproximation::real(root, iterations))
}

fn converge(
    n: f64,
    seed: Option<f64>,
    tolerance: f64,
    max_iterations: usize,
) -> Result<(f64, usize), ErrorsSqr> {
    if n == 0.0 {
        return Ok((0.0, 0));
    }
    if n == 1.0 {
        return Ok((1.0, 0));
    }
    let mut x = match seed {
        Some(s) if s == 0.0 => {
            return Err(ErrorsSqr::ZeroDivisor("seed guess must not be zero"))
        }
        Some(s) if s < 0.0 => {
            return Err(ErrorsSqr::InvalidInputRange("seed guess must be positive"))
        }
        Some(s) => s,
        None => n / 2.0,
    };
    let mut iterations = 0;
    while relative_error(n, x) > tolerance {
        if iterations >= max_iterations {
            return Err(ErrorsSqr::FailedToConverge(
                "newton_sqrt exhausted its iteration cap",
            ));
        }
        x = x - ((x * x - n) / (2.0 * x));
        iterations += 1;
    }
    Ok((x, iterations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roots::root_result::RootValue;

    #[test]
    fn test_converges_to_ten_for_one_hundred() {
        let result = newton_sqrt(100.0).unwrap();
        let root = result.value.real().unwrap();
        assert!((root - 10.0).abs() < 1e-12);
        assert!(result.iterations <= 12, "took {} iterations", result.iterations);
    }

    #[test]
    fn test_closed_form_inputs_take_zero_iterations() {
        assert_eq!(newton_sqrt(0.0).unwrap(), RootApproximation::real(0.0, 0));
        assert_eq!(newton_sqrt(1.0).unwrap(), RootApproximation::real(1.0, 0));
    }

    #[test]
    fn test_negative_input_yields_imaginary_root() {
        let result = newton_sqrt(-4.0).unwrap();
        match result.value {
            RootValue::Imaginary(m) => assert!((m - 2.0).abs() < 1e-12),
            RootValue::Real(_) => panic!("expected an imaginary root"),
        }
        assert_eq!(result.value.as_complex().im, result.value.as_complex().norm());
    }

    #[test]
    fn test_convergence_bound_across_magnitudes() {
        for n in [2.0, 10.0, 100.0, 1_000_000.0] {
            let result = newton_sqrt(n).unwrap();
            let root = result.value.real().unwrap();
            assert!(relative_error(n, root) < 1e-13);
            assert!(result.iterations <= 64, "sqrt({}) took {} iterations", n, result.iterations);
        }
    }

    #[test]
    fn test_matches_native_sqrt_over_a_sweep() {
        for n in 2..=1000 {
            let n = n as f64;
            let root = newton_sqrt(n).unwrap().value.real().unwrap();
            assert!((root - n.sqrt()).abs() < 1e-9, "sqrt({}) = {}", n, root);
        }
    }

    #[test]
    fn test_bad_seeds_are_rejected() {
        assert_eq!(
            newton_sqrt_seeded(2.0, Some(0.0), DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS),
            Err(ErrorsSqr::ZeroDivisor("seed guess must not be zero"))
        );
        assert!(matches!(
            newton_sqrt_seeded(2.0, Some(-1.0), DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS),
            Err(ErrorsSqr::InvalidInputRange(_))
        ));
    }

    #[test]
    fn test_iteration_cap_surfaces_failed_to_converge() {
        assert!(matches!(
            newton_sqrt_seeded(2.0, None, DEFAULT_TOLERANCE, 2),
            Err(ErrorsSqr::FailedToConverge(_))
        ));
    }
}
