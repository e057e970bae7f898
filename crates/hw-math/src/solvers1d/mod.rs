//! 1D root-finding solvers.

use hw_core::{
    errors::{Error, Result},
    Real,
};

/// Iteration budget shared by all solvers.
pub const MAX_ITERATIONS: u32 = 100;

/// Accuracy used when the caller passes a non-positive one.
pub const DEFAULT_ACCURACY: Real = 1.0e-10;

// ── Secant ────────────────────────────────────────────────────────────────────

/// Secant method for root finding.
///
/// Uses two initial points `x0` and `x1` and iteratively refines.  No
/// bracket is required; convergence is superlinear on smooth functions.
///
/// Returns [`Error::NonConvergence`] when the iteration budget is exhausted
/// or the secant slope vanishes — never the last iterate.
pub fn secant<F>(f: F, x0: Real, x1: Real, accuracy: Real) -> Result<Real>
where
    F: Fn(Real) -> Real,
{
    let acc = if accuracy > 0.0 {
        accuracy
    } else {
        DEFAULT_ACCURACY
    };
    let mut x0 = x0;
    let mut x1 = x1;
    let mut f0 = f(x0);
    let mut f1 = f(x1);

    if f0.abs() < acc {
        return Ok(x0);
    }
    if f1.abs() < acc {
        return Ok(x1);
    }

    for _ in 0..MAX_ITERATIONS {
        let denom = f1 - f0;
        if denom.abs() < f64::EPSILON {
            return Err(Error::NonConvergence(
                "secant slope vanishes (f(x0) ≈ f(x1))".into(),
            ));
        }
        let x2 = x1 - f1 * (x1 - x0) / denom;
        let f2 = f(x2);

        if f2.abs() < acc || (x2 - x1).abs() < acc {
            return Ok(x2);
        }

        x0 = x1;
        f0 = f1;
        x1 = x2;
        f1 = f2;
    }

    Err(Error::NonConvergence(format!(
        "secant: {MAX_ITERATIONS} iterations reached"
    )))
}

// ── Seeded entry point ────────────────────────────────────────────────────────

/// Find a root of `f` starting from a single seed value.
///
/// Narrow interface for callers that have a good initial guess but no
/// bracket: the second secant point is taken a small relative step away
/// from the seed.  Fails with [`Error::NonConvergence`]; the seed is never
/// returned unverified.
pub fn solve<F>(f: F, seed: Real) -> Result<Real>
where
    F: Fn(Real) -> Real,
{
    let bump = 1.0e-4 * seed.abs().max(1.0);
    secant(f, seed, seed + bump, DEFAULT_ACCURACY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secant_sqrt2() {
        let root = secant(|x| x * x - 2.0, 1.0, 2.0, 1e-12).unwrap();
        assert!((root - 2.0_f64.sqrt()).abs() < 1e-10, "got {root}");
    }

    #[test]
    fn solve_from_seed() {
        let root = solve(|x| x.exp() - 3.0, 1.0).unwrap();
        assert!((root - 3.0_f64.ln()).abs() < 1e-9, "got {root}");
    }

    #[test]
    fn solve_monotone_decreasing() {
        // Same shape as a bond-price objective: decreasing in the rate.
        let root = solve(|r: f64| 100.0 * (-5.0 * r).exp() - 80.0, 0.03).unwrap();
        assert!((root - (100.0_f64 / 80.0).ln() / 5.0).abs() < 1e-9, "got {root}");
    }

    #[test]
    fn solve_rootless_objective_fails() {
        let err = solve(|x: f64| x * x + 1.0, 0.5).unwrap_err();
        assert!(matches!(err, hw_core::Error::NonConvergence(_)));
    }

    #[test]
    fn secant_flat_function_fails() {
        let err = secant(|_| 1.0, 0.0, 1.0, 1e-12).unwrap_err();
        assert!(matches!(err, hw_core::Error::NonConvergence(_)));
    }
}
