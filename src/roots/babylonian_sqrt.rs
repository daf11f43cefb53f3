use crate::{
    prelude::ErrorsSqr,
    roots::root_result::{
        relative_error, RootApproximation, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
    },
};

/// Approximates the square root of `n` with the Babylonian method: replace the
/// guess with the arithmetic mean of the guess and `n` divided by the guess,
///
/// ```text
/// x <- (x + n/x) / 2
/// ```
///
/// If `x` overshoots the root then `n/x` undershoots it (and vice versa), so
/// their mean is always a better guess. Algebraically this is exactly the
/// Newton update for `f(x) = x^2 - n`, but it is kept as its own solver so the
/// two formulations can be compared and tested against each other. Convergence
/// predicate, seeding, and edge cases all match `newton_sqrt`.
pub fn babylonian_sqrt(n: f64) -> Result<RootApproximation, ErrorsSqr> {
    babylonian_sqrt_seeded(n, None, DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS)
}

/// Same solver with the seed guess, tolerance, and iteration cap exposed.
pub fn babylonian_sqrt_seeded(
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
                "babylonian_sqrt exhausted its iteration cap",
            ));
        }
        x = (x + n / x) / 2.0;
        iterations += 1;
    }
    Ok((x, iterations))
}
