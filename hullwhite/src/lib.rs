//! # hullwhite
//!
//! Closed-form pricing of interest-rate options under the one-factor
//! Hull-White short-rate model: options on zero-coupon bonds, and options
//! on coupon-bearing bonds (European swaptions) via Jamshidian's
//! decomposition.  Elementary Black (lognormal) and Bachelier (normal)
//! pricers are included as building blocks.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `hw-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use hullwhite::pricing::HullWhite;
//!
//! let hw = HullWhite::new(0.1, 0.015).unwrap();
//! assert!((hw.b(5.0, 7.0) - 1.9801326693).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use hw_core as core;

/// Mathematical utilities: distributions, root-finding.
pub use hw_math as math;

/// Closed-form pricers: Black/Bachelier, Hull-White, Jamshidian.
pub use hw_pricing as pricing;
