use crate::{
    prelude::ErrorsSqr,
    roots::root_result::{
        relative_error, RootApproximation, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
    },
};

/// Approximates the square root of `n` by interval halving.
///
/// The solver keeps a bracket `[low, high]` (defaults `low = 0`, `high = n`)
/// and a half-width `mid = (high - low) / 2`, with `low + mid` as the candidate
/// root. Each pass squares the candidate: overshoot shrinks the bracket with
/// `high -= mid`, undershoot grows it with `low += mid`. The half-width shrinks
/// by a factor of two per pass, so this is deterministic halving toward the
/// target rather than a classic binary search that recomputes `mid` from reset
/// bounds. Convergence uses the same relative-error predicate as `newton_sqrt`,
/// `|1 - candidate^2/n| <= 1e-14`.
///
/// One bit of the root is gained per pass, so this solver routinely needs
/// several times the iterations Newton's method does for the same tolerance.
/// Edge cases match `newton_sqrt`: 0 and 1 return immediately, negative `n`
/// yields a `RootValue::Imaginary` result.
pub fn binary_search_sqrt(n: f64) -> Result<RootApproximation, ErrorsSqr> {
    binary_search_sqrt_bounded(n, None, None, DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS)
}

/// Same solver with the bracket, tolerance, and iteration cap exposed.
///
/// The default bracket `[0, n]` contains the root for any `n >= 1`. For
/// `0 < n < 1` the root lies above `n`, so the default bracket cannot reach it
/// and the solver reports `FailedToConverge`; pass an explicit `high` of at
/// least 1 for fractional inputs.
///
/// # Errors
/// - `ErrorsSqr::InvalidInputRange` unless `0 <= low < high`.
/// - `ErrorsSqr::FailedToConverge` once `max_iterations` passes have been spent
///   without satisfying the tolerance.
pub fn binary_search_sqrt_bounded(
    n: f64,
    low: Option<f64>,
    high: Option<f64>,
    tolerance: f64,
    max_iterations: usize,
) -> Result<RootApproximation, ErrorsSqr> {
    if n < 0.0 {
        let (magnitude, iterations) = converge(-n, low, high, tolerance, max_iterations)?;
        return Ok(RootApproximation::imaginary(magnitude, iterations));
    }
    let (root, iterations) = converge(n, low, high, tolerance, max_iterations)?;
    Ok(RootApproximation::real(root, iterations))
}

fn converge(
    n: f64,
    low: Option<f64>,
    high: Option<f64>,
    tolerance: f64,
    max_iterations: usize,
) -> Result<(f64, usize), ErrorsSqr> {
    if n == 0.0 {
        return Ok((0.0, 0));
    }
    if n == 1.0 {
        return Ok((1.0, 0));
    }
    let mut low = low.unwrap_or(0.0);
    let mut high = high.unwrap_or(n);
    if low < 0.0 || low >= high {
        return Err(ErrorsSqr::InvalidInputRange(
            "bracket must satisfy 0 <= low < high",
        ));
    }
    let mut mid = 0.0;
    let mut iterations = 0;
    while relative_error(n, low + mid) > tolerance {
        if iterations >= max_iterations {
            return Err(ErrorsSqr::FailedToConverge(
                "binary_search_sqrt exhausted its iteration cap",
            ));
        }
        mid = (high - low) / 2.0;
        let candidate = low + mid;
        if candidate * candidate > n {
            high -= mid;
        } else {
            low += mid;
        }
        iterations += 1;
    }
    Ok((low + mid, iterations))
}
