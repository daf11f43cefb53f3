use crate::{
    prelude::ErrorsSqr,
    roots::root_result::{
        relative_error, RootApproximation, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
    },
};

/// Recursive formulations of the Newton and interval-halving solvers. The math
/// is identical to `newton_sqrt` and `binary_search_sqrt`; the loop state
/// (current guess, or bracket bounds, plus the iteration counter) is threaded
/// through recursive calls instead of mutated in place. Both use the same
/// relative-error predicate as the loop solvers so the two formulations
/// terminate identically across input magnitudes; an absolute-error check here
/// would stop being satisfiable once `n` grows past what 64-bit floats can
/// square to within a fixed absolute distance.
///
/// Recursion depth equals the iteration count, which the cap keeps in the low
/// hundreds at worst, so stack use is not a concern.
pub fn recursive_newton_sqrt(n: f64) -> Result<RootApproximation, ErrorsSqr> {
    recursive_newton_sqrt_seeded(n, None, DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS)
}

/// Recursive Newton solver with the seed guess, tolerance, and iteration cap
/// exposed. Seed validation matches `newton_sqrt_seeded`.
pub fn recursive_newton_sqrt_seeded(
    n: f64,
    seed: Option<f64>,
    tolerance: f64,
    max_iterations: usize,
) -> Result<RootApproximation, ErrorsSqr> {
    if n < 0.0 {
        let (magnitude, iterations) = converge_newton(-n, seed, tolerance, max_iterations)?;
        return Ok(RootApproximation::imaginary(magnitude, iterations));
    }
    let (root, iterations) = converge_newton(n, seed, tolerance, max_iterations)?;
    Ok(RootApproximation::real(root, iterations))
}

fn converge_newton(
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
    let x = match seed {
        Some(s) if s == 0.0 => {
            return Err(ErrorsSqr::ZeroDivisor("seed guess must not be zero"))
        }
        Some(s) if s < 0.0 => {
            return Err(ErrorsSqr::InvalidInputRange("seed guess must be positive"))
        }
        Some(s) => s,
        None => n / 2.0,
    };
    newton_step(n, x, 0, tolerance, max_iterations)
}

fn newton_step(
    n: f64,
    x: f64,
    iterations: usize,
    tolerance: f64,
    max_iterations: usize,
) -> Result<(f64, usize), ErrorsSqr> {
    if iterations >= max_iterations {
        return Err(ErrorsSqr::FailedToConverge(
            "recursive_newton_sqrt exhausted its iteration cap",
        ));
    }
    let next = x - ((x * x - n) / (2.0 * x));
    if relative_error(n, next) <= tolerance {
        return Ok((next, iterations + 1));
    }
    newton_step(n, next, iterations + 1, tolerance, max_iterations)
}

/// Recursive interval-halving solver; see `binary_search_sqrt` for the update
/// rule and the caveat on fractional inputs with the default bracket.
pub fn recursive_binary_search_sqrt(n: f64) -> Result<RootApproximation, ErrorsSqr> {
    recursive_binary_search_sqrt_bounded(n, None, None, DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS)
}

/// Recursive interval-halving solver with the bracket, tolerance, and
/// iteration cap exposed. Bracket validation matches
/// `binary_search_sqrt_bounded`.
pub fn recursive_binary_search_sqrt_bounded(
    n: f64,
    low: Option<f64>,
    high: Option<f64>,
    tolerance: f64,
    max_iterations: usize,
) -> Result<RootApproximation, ErrorsSqr> {
    if n < 0.0 {
        let (magnitude, iterations) = converge_halving(-n, low, high, tolerance, max_iterations)?;
        return Ok(RootApproximation::imaginary(magnitude, iterations));
    }
    let (root, iterations) = converge_halving(n, low, high, tolerance, max_iterations)?;
    Ok(RootApproximation::real(root, iterations))
}

fn converge_halving(
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
    let low = low.unwrap_or(0.0);
    let high = high.unwrap_or(n);
    if low < 0.0 || low >= high {
        return Err(ErrorsSqr::InvalidInputRange(
            "bracket must satisfy 0 <= low < high",
        ));
    }
    halving_step(n, low, high, 0, tolerance, max_iterations)
}

fn halving_step(
    n: f64,
    low: f64,
    high: f64,
    iterations: usize,
    tolerance: f64,
    max_iterations: usize,
) -> Result<(f64, usize), ErrorsSqr> {
    let mid = (high - low) / 2.0;
    let candidate = low + mid;
    if relative_error(n, candidate) <= tolerance {
        return Ok((candidate, iterations));
    }
    if iterations >= max_iterations {
        return Err(ErrorsSqr::FailedToConverge(
            "recursive_binary_search_sqrt exhausted its iteration cap",
        ));
    }
    if candidate * candidate > n {
        halving_step(n, low, high - mid, iterations + 1, tolerance, max_iterations)
    } else {
        halving_step(n, low + mid, high, iterations + 1, tolerance, max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roots::binary_search_sqrt::binary_search_sqrt;
    use crate::roots::newton_sqrt::newton_sqrt;
    use crate::roots::root_result::RootValue;

    #[test]
    fn test_recursive_newton_matches_loop_newton() {
        for n in 2..=500 {
            let n = n as f64;
            let looped = newton_sqrt(n).unwrap().value.real().unwrap();
            let recursed = recursive_newton_sqrt(n).unwrap().value.real().unwrap();
            assert!(
                (looped - recursed).abs() < 1e-9,
                "sqrt({}) disagrees: loop {} vs recursion {}",
                n,
                looped,
                recursed
            );
        }
    }

    #[test]
    fn test_recursive_halving_matches_loop_halving() {
        for n in 2..=500 {
            let n = n as f64;
            let looped = binary_search_sqrt(n).unwrap().value.real().unwrap();
            let recursed = recursive_binary_search_sqrt(n).unwrap().value.real().unwrap();
            assert!(
                (looped - recursed).abs() < 1e-9,
                "sqrt({}) disagrees: loop {} vs recursion {}",
                n,
                looped,
                recursed
            );
        }
    }

    #[test]
    fn test_edge_cases() {
        assert_eq!(recursive_newton_sqrt(0.0).unwrap(), RootApproximation::real(0.0, 0));
        assert_eq!(recursive_binary_search_sqrt(1.0).unwrap(), RootApproximation::real(1.0, 0));
        match recursive_newton_sqrt(-2.0).unwrap().value {
            RootValue::Imaginary(m) => assert!((m - 2.0_f64.sqrt()).abs() < 1e-12),
            RootValue::Real(_) => panic!("expected an imaginary root"),
        }
        match recursive_binary_search_sqrt(-9.0).unwrap().value {
            RootValue::Imaginary(m) => assert!((m - 3.0).abs() < 1e-6),
            RootValue::Real(_) => panic!("expected an imaginary root"),
        }
    }

    #[test]
    fn test_caps_and_guards() {
        assert!(matches!(
            recursive_newton_sqrt_seeded(2.0, Some(0.0), DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS),
            Err(ErrorsSqr::ZeroDivisor(_))
        ));
        assert!(matches!(
            recursive_newton_sqrt_seeded(2.0, None, DEFAULT_TOLERANCE, 2),
            Err(ErrorsSqr::FailedToConverge(_))
        ));
        assert!(matches!(
            recursive_binary_search_sqrt_bounded(
                9.0,
                Some(5.0),
                Some(4.0),
                DEFAULT_TOLERANCE,
                DEFAULT_MAX_ITERATIONS
            ),
            Err(ErrorsSqr::InvalidInputRange(_))
        ));
    }
}
