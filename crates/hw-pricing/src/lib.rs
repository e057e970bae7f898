//! # hw-pricing
//!
//! Closed-form interest-rate option pricing:
//!
//! * elementary lognormal (Black) and normal (Bachelier) option formulas,
//! * the Hull-White one-factor affine term structure and the zero-coupon
//!   bond options it implies,
//! * options on coupon-bearing bonds (swaptions) via Jamshidian's
//!   decomposition.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Elementary analytic option pricers (Black, Bachelier).
pub mod black;

/// Hull-White affine term structure and zero-coupon bond options.
pub mod hull_white;

/// Coupon-bond options via Jamshidian's decomposition.
pub mod jamshidian;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use black::{bachelier, black};
pub use hull_white::HullWhite;
pub use jamshidian::{coupon_bond_option, critical_rate, Cashflow};
