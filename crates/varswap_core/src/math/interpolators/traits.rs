//! Common interface for 1D interpolators.

use crate::types::InterpolationError;
use num_traits::Float;

/// One-dimensional interpolator over a set of knots.
///
/// Implementors decide how queries outside [`domain`](Interpolator::domain)
/// are treated; failures are reported through [`InterpolationError`].
///
/// # Example
///
/// ```
/// use varswap_core::math::interpolators::{Interpolator, PiecewiseLinearCurve};
///
/// fn midpoint<I: Interpolator<f64>>(interp: &I) -> f64 {
///     let (lo, hi) = interp.domain();
///     interp.interpolate(0.5 * (lo + hi)).unwrap()
/// }
///
/// let curve = PiecewiseLinearCurve::new(&[0.0, 2.0], &[0.0, 4.0]).unwrap();
/// assert!((midpoint(&curve) - 2.0).abs() < 1e-12);
/// ```
pub trait Interpolator<T: Float> {
    /// Value of the interpolant at `x`.
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// Smallest and largest knot abscissae.
    fn domain(&self) -> (T, T);
}
