//! Error types for variance replication.
//!
//! This module provides:
//! - `ReplicationError`: Failures of quote validation and replication
//! - `ErrorKind`: Coarse classification used by hosts to report failures

use super::quotes::OptionSide;
use std::fmt;
use thiserror::Error;
use varswap_core::types::{InterpolationError, PricingError};

/// Coarse classification of a [`ReplicationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Mismatched sequence lengths or too few quotes.
    InputShape,
    /// A value outside its mathematical domain (non-positive strike or forward, NaN).
    Domain,
    /// Strikes not presented in ascending order.
    Ordering,
    /// The computation produced a non-finite value.
    Numerical,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InputShape => write!(f, "input shape"),
            ErrorKind::Domain => write!(f, "domain"),
            ErrorKind::Ordering => write!(f, "ordering"),
            ErrorKind::Numerical => write!(f, "numerical"),
        }
    }
}

/// Variance replication errors.
///
/// Every variant is raised before any partial result is produced.
///
/// # Examples
/// ```
/// use varswap_pricing::replication::{ErrorKind, ReplicationError};
///
/// let err = ReplicationError::InvalidStrike { index: 2, strike: 0.0 };
/// assert_eq!(err.kind(), ErrorKind::Domain);
/// assert!(format!("{}", err).contains("index 2"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReplicationError {
    /// Strike, put and call sequences differ in length.
    #[error("Length mismatch: {strikes} strikes, {puts} puts, {calls} calls")]
    LengthMismatch {
        /// Number of strikes
        strikes: usize,
        /// Number of put prices
        puts: usize,
        /// Number of call prices
        calls: usize,
    },

    /// Fewer than two quotes.
    #[error("Insufficient quotes: got {got}, need at least 2")]
    InsufficientQuotes {
        /// Number of quotes provided
        got: usize,
    },

    /// Forward price is not positive and finite.
    #[error("Invalid forward price: F = {forward}")]
    InvalidForward {
        /// The rejected forward
        forward: f64,
    },

    /// Strike is not positive and finite.
    #[error("Invalid strike at index {index}: K = {strike}")]
    InvalidStrike {
        /// Position of the strike
        index: usize,
        /// The rejected strike
        strike: f64,
    },

    /// Strike smaller than its predecessor.
    #[error("Strikes not sorted ascending at index {index}")]
    UnsortedStrikes {
        /// Position of the first out-of-order strike
        index: usize,
    },

    /// Option price is NaN or infinite.
    #[error("Invalid {side} price at index {index}: {price}")]
    InvalidPrice {
        /// Position of the quote
        index: usize,
        /// Which price was rejected
        side: OptionSide,
        /// The rejected price
        price: f64,
    },

    /// The weighted sum is NaN or infinite.
    #[error("Par variance is not finite: {value}")]
    NonFiniteResult {
        /// The computed value
        value: f64,
    },

    /// Failure building or querying the payoff curve.
    #[error("Payoff curve error: {0}")]
    Curve(#[from] InterpolationError),
}

impl ReplicationError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReplicationError::LengthMismatch { .. }
            | ReplicationError::InsufficientQuotes { .. } => ErrorKind::InputShape,
            ReplicationError::InvalidForward { .. }
            | ReplicationError::InvalidStrike { .. }
            | ReplicationError::InvalidPrice { .. } => ErrorKind::Domain,
            ReplicationError::UnsortedStrikes { .. } => ErrorKind::Ordering,
            ReplicationError::NonFiniteResult { .. } => ErrorKind::Numerical,
            ReplicationError::Curve(inner) => match inner {
                InterpolationError::InsufficientData { .. }
                | InterpolationError::InvalidInput(_) => ErrorKind::InputShape,
                InterpolationError::NonMonotonicData { .. } => ErrorKind::Ordering,
                InterpolationError::FinalKnotEvaluation { .. } => ErrorKind::Domain,
            },
        }
    }
}

impl From<ReplicationError> for PricingError {
    fn from(err: ReplicationError) -> Self {
        match err.kind() {
            ErrorKind::Numerical => PricingError::NumericalInstability(err.to_string()),
            _ => PricingError::InvalidInput(err.to_string()),
        }
    }
}
