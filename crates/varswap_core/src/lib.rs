//! # varswap_core: Numerical Foundation for Variance Swap Replication
//!
//! ## Layer 1 (Foundation) Role
//!
//! varswap_core is the bottom layer of the workspace, providing:
//! - Piecewise-linear curves with slope and knot-jump queries (`math::interpolators`)
//! - The `Interpolator` trait shared by 1D curves (`math::interpolators`)
//! - Generic floating-point trait re-export (`traits`)
//! - Error types: `PricingError`, `InterpolationError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other varswap_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use varswap_core::math::interpolators::PiecewiseLinearCurve;
//!
//! let curve = PiecewiseLinearCurve::new(&[0.0_f64, 1.0, 2.0], &[0.0, 1.0, 3.0]).unwrap();
//!
//! // Linear interpolation inside the knots
//! assert!((curve.value(0.5).unwrap() - 0.5).abs() < 1e-12);
//!
//! // Slope changes at interior knots
//! assert_eq!(curve.jump_sequence(), vec![0.0, 1.0, 0.0]);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `InterpolationError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
