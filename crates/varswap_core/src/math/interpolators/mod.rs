//! Interpolation methods for numerical computation.
//!
//! This module provides the curves used to build replication payoffs, with
//! generic `T: Float` type parameters so the same code serves `f32` and `f64`.
//!
//! ## Available Interpolators
//!
//! - [`PiecewiseLinearCurve`]: Continuous piecewise linear function through sorted knots,
//!   with slope queries and the per-knot slope jumps used as replication weights
//!
//! ## Core Trait
//!
//! All 1D interpolators implement the [`Interpolator`] trait, which defines:
//! - `interpolate(x: T) -> Result<T, InterpolationError>`: Compute interpolated value
//! - `domain() -> (T, T)`: Return the knot range
//!
//! ## Example
//!
//! ```
//! use varswap_core::math::interpolators::{Interpolator, PiecewiseLinearCurve};
//!
//! let xs = [0.0_f64, 1.0, 2.0, 3.0];
//! let ys = [0.0, 1.0, 4.0, 9.0];
//!
//! let curve = PiecewiseLinearCurve::new(&xs, &ys).unwrap();
//! let (x_min, x_max) = curve.domain();
//! assert_eq!(x_min, 0.0);
//! assert_eq!(x_max, 3.0);
//!
//! // Interpolate at x = 1.5 (between y=1.0 and y=4.0)
//! let y = curve.interpolate(1.5).unwrap();
//! assert!((y - 2.5).abs() < 1e-10);
//! ```

mod piecewise_linear;
mod traits;

// Re-export public types at module level
pub use piecewise_linear::PiecewiseLinearCurve;
pub use traits::Interpolator;
