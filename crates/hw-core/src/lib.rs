//! # hw-core
//!
//! Core types, traits, and error definitions for hullwhite-rs.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace – numeric type aliases, the error
//! hierarchy, and the option direction enum.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Option direction (call / put / forward).
pub mod direction;

/// Error types and the `ensure!` convenience macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// A time measurement in years.
pub type Time = Real;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A discount factor in (0, 1].
pub type DiscountFactor = Real;

/// A volatility level expressed as a decimal.
pub type Volatility = Real;

/// Alias used for array sizes / indices.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use direction::Direction;
pub use errors::{Error, Result};
