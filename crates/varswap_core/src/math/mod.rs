//! Numerical building blocks.
//!
//! - `interpolators`: 1D curves evaluated between and beyond their knots

pub mod interpolators;
