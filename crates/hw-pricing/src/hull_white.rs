//! Hull-White (extended Vasicek) affine term structure.
//!
//! ```text
//! dr = (θ(t) − a·r) dt + σ dW
//! ```
//!
//! Zero-coupon bond prices are affine in the short rate:
//! `P(t,T) = A(t,T) exp(−B(t,T) r(t))`, where `A` is reconstructed from the
//! initial discount curve so that the model reprices it exactly at time 0.
//!
//! Curve inputs are passed point-wise as scalar discount factors; the model
//! never holds a curve object.  All functions are pure and recompute `A`
//! and `B` on every call.

use hw_core::{ensure, Direction, DiscountFactor, Error, Rate, Real, Result, Time, Volatility};

use crate::black::black;

/// Below this threshold the mean reversion is treated as exactly zero.
///
/// The general `B` formula is 0/0 at `a = 0`; the zero branch is the
/// analytic limit, not a numerical fallback.
const A_EPSILON: Real = 1e-12;

/// Hull-White one-factor model parameters.
///
/// Mean reversion `a` may be zero or negative; `sigma` must be strictly
/// positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullWhite {
    /// Mean-reversion speed.
    pub a: Real,
    /// Short-rate volatility.
    pub sigma: Volatility,
}

impl HullWhite {
    /// Create a new model. Fails for non-positive `sigma`.
    pub fn new(a: Real, sigma: Volatility) -> Result<Self> {
        ensure!(sigma > 0.0, "sigma must be strictly positive, got {sigma}");
        Ok(Self { a, sigma })
    }

    /// `B(t,T) = (1 − exp(−a(T−t)))/a`, with the `a → 0` limit `T − t`.
    ///
    /// No error is raised for `T < t`: the formula is sign-consistent
    /// (`B(t,T)` and `B(T,t)` have opposite signs, zero at `t = T`), and
    /// exactly antisymmetric in the zero-reversion limit.
    pub fn b(&self, t: Time, big_t: Time) -> Real {
        let tau = big_t - t;
        if self.a.abs() < A_EPSILON {
            tau
        } else {
            (1.0 - (-self.a * tau).exp()) / self.a
        }
    }

    /// Affine multiplier `A(t,T)` such that `P(t,T) = A·exp(−B·r_t)`.
    ///
    /// Reconstructed from two initial-curve discount factors and the
    /// instantaneous forward rate `fwd = f(0,t)`:
    ///
    /// `ln A = ln(P(0,T)/P(0,t)) + B·f(0,t) − σ²·B²·(1−e^{−2at})/(4a)`
    ///
    /// The last factor equals `B(0,2t)/4`, so the `a = 0` degeneracy is
    /// carried entirely by the [`b`](Self::b) branch (`t/2` in the limit).
    pub fn a_factor(
        &self,
        t: Time,
        big_t: Time,
        df_t: DiscountFactor,
        df_big_t: DiscountFactor,
        fwd: Rate,
    ) -> Real {
        let b = self.b(t, big_t);
        let convexity = self.b(0.0, 2.0 * t) / 4.0;
        ((df_big_t / df_t).ln() + b * fwd - self.sigma * self.sigma * b * b * convexity).exp()
    }

    /// Forward-start variant of [`a_factor`](Self::a_factor).
    ///
    /// Replaces the instantaneous forward rate with the discrete proxy
    /// `ln(P(0,t)/P(0,t+dt))/dt` built from one extra curve point, for use
    /// when only discrete-tenor discount factors are observable.  Agrees
    /// with `a_factor` in the limit `dt → 0`.
    pub fn a_forward_start(
        &self,
        t: Time,
        big_t: Time,
        dt: Time,
        df_t: DiscountFactor,
        df_big_t: DiscountFactor,
        df_dt: DiscountFactor,
    ) -> Real {
        let fwd = (df_t / df_dt).ln() / dt;
        self.a_factor(t, big_t, df_t, df_big_t, fwd)
    }

    /// Term (cumulative, non-annualized) price volatility over `[0,s]` of
    /// the zero-coupon bond maturing at `T`:
    ///
    /// `σ · B(s,T) · sqrt(B(0,2s)/2)`
    ///
    /// Divide by `√s` to obtain the annualized lognormal volatility used by
    /// a Black-type pricer.
    pub fn term_volatility(&self, s: Time, big_t: Time) -> Volatility {
        self.sigma * self.b(s, big_t) * (self.b(0.0, 2.0 * s) / 2.0).sqrt()
    }

    /// Model-implied time-`t` price of the bond maturing at `T`, given the
    /// short rate `r` at `t`:
    ///
    /// `P(t,T) = A_fs(t,T) · exp(−B(t,T)·r)`
    #[allow(clippy::too_many_arguments)]
    pub fn bond_price(
        &self,
        t: Time,
        big_t: Time,
        dt: Time,
        df_t: DiscountFactor,
        df_big_t: DiscountFactor,
        df_dt: DiscountFactor,
        r: Rate,
    ) -> Real {
        self.a_forward_start(t, big_t, dt, df_t, df_big_t, df_dt) * (-self.b(t, big_t) * r).exp()
    }

    /// Vectorized [`bond_price`](Self::bond_price): one price per maturity,
    /// sharing `t`, `dt`, `df_t`, `df_dt`, and `r`.
    ///
    /// Fails with [`Error::ShapeMismatch`] before any computation when the
    /// maturity and discount sequences differ in length.
    #[allow(clippy::too_many_arguments)]
    pub fn bond_prices(
        &self,
        t: Time,
        maturities: &[Time],
        dt: Time,
        df_t: DiscountFactor,
        discounts: &[DiscountFactor],
        df_dt: DiscountFactor,
        r: Rate,
    ) -> Result<Vec<Real>> {
        if maturities.len() != discounts.len() {
            return Err(Error::ShapeMismatch(format!(
                "{} maturities vs {} discount factors",
                maturities.len(),
                discounts.len()
            )));
        }
        Ok(maturities
            .iter()
            .zip(discounts)
            .map(|(&big_t, &df)| self.bond_price(t, big_t, dt, df_t, df, df_dt, r))
            .collect())
    }

    /// Price of an option expiring at `s` on the zero-coupon bond maturing
    /// at `T`.
    ///
    /// The normally-distributed short rate implies a lognormally-distributed
    /// bond price, so the option is delegated to the Black pricer with
    /// forward `P(0,T)/P(0,s)` and annualized volatility
    /// `term_volatility(s,T)/√s`.
    pub fn zero_bond_option(
        &self,
        direction: Direction,
        strike: Real,
        s: Time,
        big_t: Time,
        df_s: DiscountFactor,
        df_big_t: DiscountFactor,
    ) -> Real {
        let volatility = self.term_volatility(s, big_t) / s.sqrt();
        black(direction, strike, df_big_t / df_s, s, volatility, df_s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    fn model(a: Real) -> HullWhite {
        HullWhite::new(a, 0.015).unwrap()
    }

    #[test]
    fn rejects_non_positive_sigma() {
        assert!(HullWhite::new(0.1, 0.0).is_err());
        assert!(HullWhite::new(0.1, -0.01).is_err());
    }

    #[test]
    fn b_literal_value() {
        assert_abs_diff_eq!(model(0.1).b(5.0, 7.0), 1.980_132_669_3, epsilon = 1e-9);
    }

    #[test]
    fn b_zero_branch_matches_general_limit() {
        let exact = model(0.0).b(1.0, 6.0);
        let near = model(1e-6).b(1.0, 6.0);
        assert_eq!(exact, 5.0);
        assert_relative_eq!(near, exact, epsilon = 1e-5);
    }

    #[test]
    fn a_forward_start_zero_branch_matches_general_limit() {
        // Regression for the zero-mean-reversion limit of the forward-start
        // multiplier: the zero branch must agree with the general branch
        // evaluated at small nonzero a.
        let df = |x: f64| (-0.04 * x).exp();
        let (t, big_t, dt) = (0.5, 2.0, 0.25);
        let exact = model(0.0).a_forward_start(t, big_t, dt, df(t), df(big_t), df(t + dt));
        let near = model(1e-7).a_forward_start(t, big_t, dt, df(t), df(big_t), df(t + dt));
        assert_relative_eq!(near, exact, epsilon = 1e-6);
    }

    #[test]
    fn a_forward_start_converges_to_a_factor() {
        // Non-flat curve so the discrete forward proxy actually differs
        // from the instantaneous forward.
        let zero = |x: f64| (0.05 + 0.01 * x) * x;
        let df = |x: f64| (-zero(x)).exp();
        let fwd = |x: f64| 0.05 + 0.02 * x; // d/dx zero(x)

        let hw = model(0.1);
        let (t, big_t) = (1.0, 4.0);
        let exact = hw.a_factor(t, big_t, df(t), df(big_t), fwd(t));
        let proxy = hw.a_forward_start(t, big_t, 1e-5, df(t), df(big_t), df(t + 1e-5));
        assert_relative_eq!(proxy, exact, epsilon = 1e-5);
    }

    #[test]
    fn bond_price_recovers_initial_curve_at_time_zero() {
        // At t = 0 the affine reconstruction must return the curve's own
        // discount factor when r equals the proxy short rate.
        let df = |x: f64| (-0.05 * x).exp();
        let hw = model(0.1);
        let dt = 0.25;
        let r0 = (1.0 / df(dt)).ln() / dt;
        let p = hw.bond_price(0.0, 3.0, dt, 1.0, df(3.0), df(dt), r0);
        assert_relative_eq!(p, df(3.0), epsilon = 1e-12);
    }

    #[test]
    fn bond_price_decreasing_in_rate() {
        let df = |x: f64| (-0.05 * x).exp();
        let hw = model(0.1);
        let lo = hw.bond_price(0.5, 3.0, 0.25, df(0.5), df(3.0), df(0.75), 0.02);
        let hi = hw.bond_price(0.5, 3.0, 0.25, df(0.5), df(3.0), df(0.75), 0.08);
        assert!(lo > hi);
    }

    #[test]
    fn bond_prices_shape_mismatch() {
        let df = |x: f64| (-0.05 * x).exp();
        let err = model(0.1)
            .bond_prices(
                0.5,
                &[1.0, 2.0, 3.0],
                0.25,
                df(0.5),
                &[df(1.0), df(2.0)],
                df(0.75),
                0.05,
            )
            .unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch(_)));
    }

    #[test]
    fn bond_prices_align_with_scalar_form() {
        let df = |x: f64| (-0.05 * x).exp();
        let hw = model(0.05);
        let prices = hw
            .bond_prices(
                0.5,
                &[1.0, 2.0],
                0.25,
                df(0.5),
                &[df(1.0), df(2.0)],
                df(0.75),
                0.05,
            )
            .unwrap();
        assert_eq!(prices.len(), 2);
        assert_eq!(
            prices[0],
            hw.bond_price(0.5, 1.0, 0.25, df(0.5), df(1.0), df(0.75), 0.05)
        );
        assert_eq!(
            prices[1],
            hw.bond_price(0.5, 2.0, 0.25, df(0.5), df(2.0), df(0.75), 0.05)
        );
    }

    #[test]
    fn term_volatility_zero_reversion_closed_form() {
        // a = 0: σ (T−s) √s
        let hw = model(0.0);
        assert_relative_eq!(
            hw.term_volatility(0.25, 1.25),
            0.015 * 1.0 * 0.25_f64.sqrt(),
            epsilon = 1e-14
        );
    }

    #[test]
    fn zero_bond_option_put_call_parity() {
        let df = |x: f64| (-0.05 * x).exp();
        let hw = model(0.1);
        let (s, big_t, k) = (0.25, 1.25, 0.95);
        let c = hw.zero_bond_option(Direction::Call, k, s, big_t, df(s), df(big_t));
        let p = hw.zero_bond_option(Direction::Put, k, s, big_t, df(s), df(big_t));
        assert_abs_diff_eq!(c - p, df(big_t) - k * df(s), epsilon = 1e-12);
    }

    proptest! {
        #[test]
        fn b_sign_consistency(
            a in prop_oneof![-0.5..-0.01_f64, 0.01..0.5_f64],
            t in 0.0..10.0_f64,
            big_t in 0.0..10.0_f64,
        ) {
            let hw = HullWhite::new(a, 0.01).unwrap();
            let fwd = hw.b(t, big_t);
            let rev = hw.b(big_t, t);
            if (big_t - t).abs() < 1e-9 {
                prop_assert!(fwd.abs() < 1e-8 && rev.abs() < 1e-8);
            } else {
                prop_assert!(fwd * rev < 0.0);
            }
        }

        #[test]
        fn b_antisymmetric_at_zero_reversion(
            t in 0.0..10.0_f64,
            big_t in 0.0..10.0_f64,
        ) {
            let hw = HullWhite::new(0.0, 0.01).unwrap();
            prop_assert!((hw.b(t, big_t) + hw.b(big_t, t)).abs() < 1e-12);
        }

        #[test]
        fn b_continuous_at_zero_reversion(
            t in 0.0..5.0_f64,
            tau in 0.0..5.0_f64,
        ) {
            let exact = HullWhite::new(0.0, 0.01).unwrap().b(t, t + tau);
            let near = HullWhite::new(1e-6, 0.01).unwrap().b(t, t + tau);
            prop_assert!((near - exact).abs() <= 1e-5 * (1.0 + exact.abs()));
        }
    }
}
