//! Error types for hullwhite-rs.
//!
//! A single `thiserror`-derived enum covers the whole workspace.  Input
//! validation goes through the `ensure!` macro; the solver reports
//! non-convergence through its own variant so callers can tell a bad input
//! apart from a failed iteration.

use thiserror::Error;

/// The top-level error type used throughout hullwhite-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated (invalid argument, out-of-domain input).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Parallel input sequences of unequal length.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// A root-finding iteration exhausted its budget without converging.
    #[error("root finder did not converge: {0}")]
    NonConvergence(String),
}

/// Shorthand `Result` type used throughout hullwhite-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Validate a precondition, returning `Err(Error::Precondition(...))` if
/// `$cond` is false.
///
/// # Example
/// ```
/// use hw_core::ensure;
/// fn positive(x: f64) -> hw_core::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
