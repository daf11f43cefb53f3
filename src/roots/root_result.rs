use num::Complex;

/// Shared types for the square-root solvers. They live here to keep the individual
/// solver files free of duplicated definitions, the same way the solvers all share
/// one convergence predicate.

/// Relative-error tolerance used by every solver unless the caller overrides it.
/// A solver is converged once `|1 - x*x/n| <= tolerance`, which behaves uniformly
/// across input magnitudes where an absolute tolerance would not.
pub const DEFAULT_TOLERANCE: f64 = 1e-14;

/// Iteration cap used by every solver unless the caller overrides it. The loop
/// solvers all terminate in well under a hundred passes for inputs up to around
/// a million, so hitting this cap indicates a degenerate seed or bounds rather
/// than a slow input.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// The value a square-root solver converged to. A negative input has no real
/// root, so the solvers compute the root of the magnitude and tag the result as
/// imaginary instead of smuggling the flag through a tuple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootValue {
    Real(f64),
    /// The root of `|n|`; the full value is this magnitude times the imaginary unit.
    Imaginary(f64),
}

impl RootValue {
    /// The real root, or `None` for an imaginary result.
    pub fn real(&self) -> Option<f64> {
        match self {
            RootValue::Real(x) => Some(*x),
            RootValue::Imaginary(_) => None,
        }
    }

    /// Both variants as a point in the complex plane.
    pub fn as_complex(&self) -> Complex<f64> {
        match self {
            RootValue::Real(x) => Complex::new(*x, 0.0),
            RootValue::Imaginary(m) => Complex::new(0.0, *m),
        }
    }
}

/// A converged estimate together with the number of update steps it took to get
/// there. Inputs handled by a closed form (0, 1, and their negatives) report zero
/// iterations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootApproximation {
    pub value: RootValue,
    pub iterations: usize,
}

impl RootApproximation {
    pub fn real(value: f64, iterations: usize) -> Self {
        RootApproximation { value: RootValue::Real(value), iterations }
    }

    pub fn imaginary(magnitude: f64, iterations: usize) -> Self {
        RootApproximation { value: RootValue::Imaginary(magnitude), iterations }
    }
}

/// Relative error of a candidate root `x` against the target `n`, i.e.
/// `|1 - x*x/n|`. Callers guarantee `n != 0`; the solvers special-case zero
/// before ever evaluating this.
pub(crate) fn relative_error(n: f64, x: f64) -> f64 {
    (1.0 - (x * x) / n).abs()
}
