//! Elementary analytic option pricers.
//!
//! Both pricers quote on a forward price and discount the premium with an
//! externally supplied discount factor.  Degenerate inputs (non-positive
//! volatility, expiry, or — for the lognormal model — strike/forward)
//! price to exactly `0.0` rather than erroring; that convention is part of
//! the contract and is relied on by the zero-volatility limits upstream.

use hw_core::{Direction, Real};
use hw_math::{normal_cdf, normal_pdf};

/// Black (lognormal) forward option price.
///
/// $$V = DF \cdot \phi \left( F\,N(\phi d_1) - K\,N(\phi d_2) \right)$$
///
/// with $d_{1,2} = \frac{\ln(F/K) \pm \sigma^2 T / 2}{\sigma\sqrt{T}}$ and
/// $\phi$ the direction sign.  `Direction::Forward` settles linearly as
/// `discount · (forward − strike)`.
///
/// Returns `0.0` whenever `strike`, `forward`, `expiry`, or `volatility`
/// is non-positive.
pub fn black(
    direction: Direction,
    strike: Real,
    forward: Real,
    expiry: Real,
    volatility: Real,
    discount: Real,
) -> Real {
    if strike <= 0.0 || forward <= 0.0 || expiry <= 0.0 || volatility <= 0.0 {
        return 0.0;
    }

    if direction == Direction::Forward {
        return discount * (forward - strike);
    }

    let std_dev = volatility * expiry.sqrt();
    let d1 = ((forward / strike).ln() + 0.5 * std_dev * std_dev) / std_dev;
    let d2 = d1 - std_dev;

    let phi = direction.sign();
    discount * phi * (forward * normal_cdf(phi * d1) - strike * normal_cdf(phi * d2))
}

/// Bachelier (normal) forward option price.
///
/// $$V = DF \left( \phi (F - K)\,N(\phi d) + \sigma \sqrt{T}\,\varphi(d)
/// \right)$$
///
/// with $d = (F - K)/(\sigma\sqrt{T})$.  The normal model admits negative
/// forwards and strikes, so only `expiry` and `volatility` are guarded.
pub fn bachelier(
    direction: Direction,
    strike: Real,
    forward: Real,
    expiry: Real,
    volatility: Real,
    discount: Real,
) -> Real {
    if expiry <= 0.0 || volatility <= 0.0 {
        return 0.0;
    }

    if direction == Direction::Forward {
        return discount * (forward - strike);
    }

    let std_dev = volatility * expiry.sqrt();
    let d = (forward - strike) / std_dev;

    let phi = direction.sign();
    discount * (phi * (forward - strike) * normal_cdf(phi * d) + std_dev * normal_pdf(d))
}
