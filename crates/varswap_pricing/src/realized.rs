//! Realised variance of an observed price path.
//!
//! This is the floating leg a variance swap settles against:
//!
//! ```text
//! sigma^2 = (1/m) * sum_{i=0}^{m-1} R_i^2,   R_i = (S_{i+1} - S_i) / S_i
//! ```
//!
//! with `m` the number of returns. No annualisation is applied.

use varswap_core::types::PricingError;

/// Realised variance of simple returns.
///
/// # Arguments
///
/// * `prices` - Observed prices `S_0, ..., S_m`, each positive and finite
///
/// # Errors
///
/// * `PricingError::InvalidInput` - fewer than 2 prices, or a price that is
///   not positive and finite
///
/// # Example
///
/// ```
/// use varswap_pricing::realized::realized_variance;
///
/// // Returns +10% and -10%
/// let var = realized_variance(&[100.0, 110.0, 99.0]).unwrap();
/// assert!((var - 0.01).abs() < 1e-12);
/// ```
pub fn realized_variance(prices: &[f64]) -> Result<f64, PricingError> {
    if prices.len() < 2 {
        return Err(PricingError::InvalidInput(format!(
            "realised variance needs at least 2 prices, got {}",
            prices.len()
        )));
    }

    if let Some((index, price)) = prices
        .iter()
        .enumerate()
        .find(|(_, s)| !s.is_finite() || **s <= 0.0)
    {
        return Err(PricingError::InvalidInput(format!(
            "price at index {} must be positive and finite, got {}",
            index, price
        )));
    }

    let sum_sq: f64 = prices
        .windows(2)
        .map(|w| {
            let r = (w[1] - w[0]) / w[0];
            r * r
        })
        .sum();

    Ok(sum_sq / (prices.len() - 1) as f64)
}
