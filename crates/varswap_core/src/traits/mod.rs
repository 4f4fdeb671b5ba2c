//! Core numeric traits.

/// Generic floating-point trait for numeric computations.
///
/// Curves in this crate are generic over any type implementing this trait,
/// so `f32` and `f64` data share one implementation.
///
/// # Examples
/// ```
/// use varswap_core::traits::Float;
///
/// fn log_moneyness<T: Float>(strike: T, forward: T) -> T {
///     (strike / forward).ln()
/// }
///
/// let m: f64 = log_moneyness(110.0, 100.0);
/// assert!((m - 0.0953102).abs() < 1e-6);
/// ```
pub use num_traits::Float;
