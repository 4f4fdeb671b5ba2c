//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing operations
//! - `InterpolationError`: Errors from curve construction and evaluation

use std::fmt;
use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode. Layer-specific errors
/// convert into this type at crate boundaries.
///
/// # Variants
/// - `InvalidInput`: Invalid market data or parameters
/// - `NumericalInstability`: Computation produced a non-finite or unusable value
///
/// # Examples
/// ```
/// use varswap_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative forward price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative forward price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    InvalidInput(String),

    /// Numerical instability during computation
    NumericalInstability(String),
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PricingError::NumericalInstability(msg) => {
                write!(f, "Numerical instability: {}", msg)
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Interpolation-related errors.
///
/// Provides structured error handling for curve construction and
/// evaluation with descriptive context for each failure mode.
///
/// # Variants
/// - `InsufficientData`: Not enough knots for a curve
/// - `NonMonotonicData`: Knot x-coordinates are not ascending
/// - `FinalKnotEvaluation`: Query exactly at the last knot
/// - `InvalidInput`: General invalid input error
///
/// # Examples
/// ```
/// use varswap_core::types::InterpolationError;
///
/// let err = InterpolationError::NonMonotonicData { index: 2 };
/// assert!(format!("{}", err).contains("index 2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Knot x-coordinates are not sorted ascending.
    #[error("Data is not monotonic at index {index}")]
    NonMonotonicData {
        /// Index of the first knot smaller than its predecessor
        index: usize,
    },

    /// Query point equals the final knot's x-coordinate.
    #[error("Cannot evaluate at the final knot x = {x}; extrapolation requires x beyond it")]
    FinalKnotEvaluation {
        /// The rejected query point
        x: f64,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<InterpolationError> for PricingError {
    fn from(err: InterpolationError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
