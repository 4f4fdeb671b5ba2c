//! Par variance by discrete log-contract replication.
//!
//! The payoff replicated is
//!
//! ```text
//! v(K) = -2 ln(K/F) + 2 (K - F) / F
//! ```
//!
//! whose expectation under the forward measure is the expected total
//! variance of the log return. `v` is sampled at the quoted strikes and
//! joined linearly; the slope change at strike `K_i` is the weight `w_i`
//! given to the out-of-the-money option there:
//!
//! ```text
//! var = sum_{K_i <  F} w_i * P(K_i) + sum_{K_i >= F} w_i * C(K_i)
//! ```
//!
//! The first and last strikes always carry zero weight.

use super::error::ReplicationError;
use super::quotes::{validate_strikes, OptionSide, QuoteSet};
use varswap_core::math::interpolators::PiecewiseLinearCurve;

/// Log-contract payoff at `strike` for `forward`.
///
/// Zero with zero slope at `strike == forward`, convex elsewhere.
///
/// # Example
///
/// ```
/// use varswap_pricing::replication::auxiliary_payoff;
///
/// assert_eq!(auxiliary_payoff(100.0, 100.0), 0.0);
/// assert!(auxiliary_payoff(80.0, 100.0) > 0.0);
/// ```
#[inline]
pub fn auxiliary_payoff(strike: f64, forward: f64) -> f64 {
    -2.0 * (strike / forward).ln() + 2.0 * ((strike - forward) / forward)
}

/// Per-strike result of a replication.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrikeContribution {
    /// Strike price
    pub strike: f64,
    /// Option holding at this strike
    pub weight: f64,
    /// Option used at this strike
    pub side: OptionSide,
    /// Price of the option used
    pub price: f64,
    /// `weight * price`
    pub contribution: f64,
}

/// Par variance together with its per-strike breakdown.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplicationReport {
    /// Forward price separating puts from calls
    pub forward: f64,
    /// Sum of all contributions
    pub par_variance: f64,
    /// One entry per strike, in strike order
    pub contributions: Vec<StrikeContribution>,
}

fn validate_forward(forward: f64) -> Result<(), ReplicationError> {
    if !forward.is_finite() || forward <= 0.0 {
        return Err(ReplicationError::InvalidForward { forward });
    }
    Ok(())
}

/// Slope jumps of the payoff curve through validated strikes.
fn curve_weights(forward: f64, strikes: &[f64]) -> Result<Vec<f64>, ReplicationError> {
    let payoffs: Vec<f64> = strikes
        .iter()
        .map(|&k| auxiliary_payoff(k, forward))
        .collect();
    let curve = PiecewiseLinearCurve::new(strikes, &payoffs)?;
    Ok(curve.jump_sequence())
}

/// Option holdings per strike.
///
/// Depends on the strikes and the forward only, never on prices.
///
/// # Errors
///
/// * `InsufficientQuotes`, `InvalidStrike`, `UnsortedStrikes` - as for [`QuoteSet::new`]
/// * `InvalidForward` - forward not positive and finite
///
/// # Example
///
/// ```
/// use varswap_pricing::replication::replication_weights;
///
/// let weights = replication_weights(100.0, &[90.0, 95.0, 100.0, 105.0, 110.0]).unwrap();
/// assert_eq!(weights.len(), 5);
/// assert_eq!(weights[0], 0.0);
/// assert_eq!(weights[4], 0.0);
/// assert!(weights[1..4].iter().all(|&w| w > 0.0));
/// ```
pub fn replication_weights(forward: f64, strikes: &[f64]) -> Result<Vec<f64>, ReplicationError> {
    validate_strikes(strikes)?;
    validate_forward(forward)?;
    curve_weights(forward, strikes)
}

/// Sum of `weights[i]` times the out-of-the-money price at strike `i`.
///
/// Accumulates in strike order.
pub(crate) fn otm_weighted_sum(forward: f64, quotes: &QuoteSet, weights: &[f64]) -> f64 {
    quotes
        .iter()
        .zip(weights)
        .fold(0.0, |total, (quote, &weight)| {
            total + quote.price(OptionSide::for_strike(quote.strike, forward)) * weight
        })
}

/// Replicate the par variance and report every strike's contribution.
///
/// Weights are computed once and reused across strikes.
///
/// # Errors
///
/// * `InvalidForward` - forward not positive and finite
/// * `NonFiniteResult` - the sum overflowed or hit a zero-width strike interval
pub fn replicate(forward: f64, quotes: &QuoteSet) -> Result<ReplicationReport, ReplicationError> {
    validate_forward(forward)?;
    let weights = curve_weights(forward, quotes.strikes())?;

    let contributions: Vec<StrikeContribution> = quotes
        .iter()
        .zip(&weights)
        .map(|(quote, &weight)| {
            let side = OptionSide::for_strike(quote.strike, forward);
            let price = quote.price(side);
            StrikeContribution {
                strike: quote.strike,
                weight,
                side,
                price,
                contribution: price * weight,
            }
        })
        .collect();

    let par_variance = otm_weighted_sum(forward, quotes, &weights);
    if !par_variance.is_finite() {
        return Err(ReplicationError::NonFiniteResult {
            value: par_variance,
        });
    }

    Ok(ReplicationReport {
        forward,
        par_variance,
        contributions,
    })
}

/// Par variance of a variance swap from aligned strike/put/call sequences.
///
/// Puts are used for strikes below `forward`, calls for strikes at or above
/// it. The result is total (not annualised) variance in the units implied by
/// the option prices, which are taken as forward (undiscounted) prices.
///
/// # Arguments
///
/// * `forward` - Forward price, `> 0`
/// * `strikes` - Strikes, ascending, each `> 0`
/// * `puts` - Put prices aligned with `strikes`
/// * `calls` - Call prices aligned with `strikes`
///
/// # Errors
///
/// Input-shape errors are reported before any other check; see
/// [`QuoteSet::new`] and [`replicate`] for the full list.
///
/// # Example
///
/// ```
/// use varswap_pricing::replication::{variance, ReplicationError};
///
/// let err = variance(100.0, &[90.0, 100.0], &[1.0], &[1.0, 2.0]).unwrap_err();
/// assert!(matches!(err, ReplicationError::LengthMismatch { .. }));
/// ```
pub fn variance(
    forward: f64,
    strikes: &[f64],
    puts: &[f64],
    calls: &[f64],
) -> Result<f64, ReplicationError> {
    let quotes = QuoteSet::new(strikes, puts, calls)?;
    validate_forward(forward)?;
    let weights = curve_weights(forward, quotes.strikes())?;

    let total = otm_weighted_sum(forward, &quotes, &weights);
    if !total.is_finite() {
        return Err(ReplicationError::NonFiniteResult { value: total });
    }
    Ok(total)
}
