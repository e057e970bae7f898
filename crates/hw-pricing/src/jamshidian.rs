//! Options on coupon-bearing bonds via Jamshidian's decomposition.
//!
//! An option on a coupon bond is not a sum of options on its cash flows at
//! the common strike: the bond-price/rate relationship is monotone but not
//! additive across independently chosen strikes.  At the single critical
//! rate where the coupon bond's model price equals the option strike,
//! however, each zero-coupon bond's price at that same rate yields a
//! per-cash-flow strike such that the sum of the individual zero-bond
//! options replicates the coupon-bond option's payoff in every state.
//! Finding that rate has no closed form; it is the one root-finding step of
//! the algorithm.

use hw_core::{
    ensure, Direction, DiscountFactor, Error, Rate, Real, Result, Time,
};
use hw_math::solvers1d;

use crate::hull_white::HullWhite;

/// A single fixed cash flow of the bond being optioned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cashflow {
    /// Payment time in years, strictly after the option expiry.
    pub time: Time,
    /// Amount paid.
    pub amount: Real,
}

impl Cashflow {
    /// Create a cash flow.
    pub fn new(time: Time, amount: Real) -> Self {
        Self { time, amount }
    }
}

/// Validate the schedule/discount shapes and ordering before any pricing.
fn validate(cashflows: &[Cashflow], discounts: &[DiscountFactor], s: Time) -> Result<()> {
    if cashflows.len() != discounts.len() {
        return Err(Error::ShapeMismatch(format!(
            "{} cash flows vs {} discount factors",
            cashflows.len(),
            discounts.len()
        )));
    }
    ensure!(!cashflows.is_empty(), "schedule must contain at least one cash flow");
    for pair in cashflows.windows(2) {
        ensure!(
            pair[0].time < pair[1].time,
            "payment times must be strictly increasing, got {} then {}",
            pair[0].time,
            pair[1].time
        );
    }
    ensure!(
        cashflows[0].time > s,
        "first payment time {} must lie after the option expiry {s}",
        cashflows[0].time
    );
    Ok(())
}

/// The short rate at expiry `s` at which the coupon bond's model-implied
/// price equals `strike`.
///
/// The objective `Σᵢ cᵢ·P(s,Tᵢ; r) − strike` is strictly decreasing in `r`,
/// so the root is unique when it exists.  The solver is seeded with the
/// simply-compounded forward rate implied by `df_dt/df_s` over the first
/// accrual period `dt`; non-convergence surfaces as
/// [`Error::NonConvergence`], never as the seed.
///
/// The result is ephemeral: it depends on the strike, schedule, curve
/// snapshot, and model parameters, and is recomputed per pricing call.
#[allow(clippy::too_many_arguments)]
pub fn critical_rate(
    model: &HullWhite,
    cashflows: &[Cashflow],
    discounts: &[DiscountFactor],
    strike: Real,
    s: Time,
    dt: Time,
    df_s: DiscountFactor,
    df_dt: DiscountFactor,
) -> Result<Rate> {
    validate(cashflows, discounts, s)?;

    let seed = (df_s / df_dt - 1.0) / dt;
    solvers1d::solve(
        |r| {
            cashflows
                .iter()
                .zip(discounts)
                .map(|(cf, &df)| {
                    cf.amount * model.bond_price(s, cf.time, dt, df_s, df, df_dt, r)
                })
                .sum::<Real>()
                - strike
        },
        seed,
    )
}

/// Price an option on a coupon-bearing bond (a European swaption, when the
/// schedule is a swap's fixed leg) by Jamshidian's decomposition.
///
/// Each cash flow's zero-coupon bond is optioned at its own strike
/// `Kᵢ = P(s,Tᵢ; r*)`, the model price at the critical rate `r*`, and the
/// weighted premiums are summed.
#[allow(clippy::too_many_arguments)]
pub fn coupon_bond_option(
    model: &HullWhite,
    direction: Direction,
    cashflows: &[Cashflow],
    discounts: &[DiscountFactor],
    strike: Real,
    s: Time,
    dt: Time,
    df_s: DiscountFactor,
    df_dt: DiscountFactor,
) -> Result<Real> {
    let r_star = critical_rate(model, cashflows, discounts, strike, s, dt, df_s, df_dt)?;

    Ok(cashflows
        .iter()
        .zip(discounts)
        .map(|(cf, &df)| {
            let k = model.bond_price(s, cf.time, dt, df_s, df, df_dt, r_star);
            cf.amount * model.zero_bond_option(direction, k, s, cf.time, df_s, df)
        })
        .sum())
}
