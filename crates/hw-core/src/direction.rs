//! Option direction.

use crate::Real;
use std::fmt;

/// The direction of an option contract.
///
/// `Forward` is the degenerate direction used by the analytic pricers for a
/// linear (unconditional) settlement at expiry; it lets a forward be priced
/// through the same entry point as the optional legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// A call option (right to buy).
    Call,
    /// A put option (right to sell).
    Put,
    /// A forward: linear settlement, no optionality.
    Forward,
}

impl Direction {
    /// Sign convention used uniformly in the closed-form pricers:
    /// +1 for `Call` and `Forward`, −1 for `Put`.
    pub fn sign(self) -> Real {
        match self {
            Direction::Call | Direction::Forward => 1.0,
            Direction::Put => -1.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Call => write!(f, "Call"),
            Direction::Put => write!(f, "Put"),
            Direction::Forward => write!(f, "Forward"),
        }
    }
}
