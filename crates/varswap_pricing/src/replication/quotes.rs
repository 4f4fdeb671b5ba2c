//! Option quote strips used as replication input.

use super::error::ReplicationError;
use std::fmt;

/// Which option of a quote is used at a strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionSide {
    /// Put option, used for strikes below the forward.
    Put,
    /// Call option, used for strikes at or above the forward.
    Call,
}

impl OptionSide {
    /// Side held at `strike` for a given `forward`.
    #[inline]
    pub fn for_strike(strike: f64, forward: f64) -> Self {
        if strike < forward {
            OptionSide::Put
        } else {
            OptionSide::Call
        }
    }
}

impl fmt::Display for OptionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionSide::Put => write!(f, "put"),
            OptionSide::Call => write!(f, "call"),
        }
    }
}

/// Market prices of the put and call struck at one strike.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionQuote {
    /// Strike price
    pub strike: f64,
    /// Put price
    pub put: f64,
    /// Call price
    pub call: f64,
}

impl OptionQuote {
    /// Create a quote.
    pub fn new(strike: f64, put: f64, call: f64) -> Self {
        Self { strike, put, call }
    }

    /// Price of the given side.
    #[inline]
    pub fn price(&self, side: OptionSide) -> f64 {
        match side {
            OptionSide::Put => self.put,
            OptionSide::Call => self.call,
        }
    }
}

/// Validated, index-aligned strike/put/call sequences.
///
/// Invariants established by the constructors:
/// - all three sequences have the same length `n >= 2`
/// - every strike is positive and finite
/// - strikes are sorted ascending (equal neighbours allowed)
/// - every price is finite
///
/// # Example
///
/// ```
/// use varswap_pricing::replication::{OptionQuote, QuoteSet};
///
/// let quotes = [
///     OptionQuote::new(110.0, 10.5, 0.5),
///     OptionQuote::new(90.0, 0.5, 10.5),
///     OptionQuote::new(100.0, 4.0, 4.0),
/// ];
/// let set = QuoteSet::from_quotes(&quotes).unwrap();
/// assert_eq!(set.strikes(), &[90.0, 100.0, 110.0]);
/// assert_eq!(set.puts(), &[0.5, 4.0, 10.5]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteSet {
    strikes: Vec<f64>,
    puts: Vec<f64>,
    calls: Vec<f64>,
}

impl QuoteSet {
    /// Build from parallel sequences, which must already be sorted by strike.
    ///
    /// # Errors
    ///
    /// Checked in order:
    /// * `LengthMismatch` - sequences differ in length
    /// * `InsufficientQuotes` - fewer than 2 quotes
    /// * `InvalidStrike` - a strike is zero, negative or non-finite
    /// * `UnsortedStrikes` - strikes not ascending
    /// * `InvalidPrice` - a put or call price is non-finite
    pub fn new(strikes: &[f64], puts: &[f64], calls: &[f64]) -> Result<Self, ReplicationError> {
        if strikes.len() != puts.len() || strikes.len() != calls.len() {
            return Err(ReplicationError::LengthMismatch {
                strikes: strikes.len(),
                puts: puts.len(),
                calls: calls.len(),
            });
        }

        validate_strikes(strikes)?;

        for (index, (&put, &call)) in puts.iter().zip(calls).enumerate() {
            if !put.is_finite() {
                return Err(ReplicationError::InvalidPrice {
                    index,
                    side: OptionSide::Put,
                    price: put,
                });
            }
            if !call.is_finite() {
                return Err(ReplicationError::InvalidPrice {
                    index,
                    side: OptionSide::Call,
                    price: call,
                });
            }
        }

        Ok(Self {
            strikes: strikes.to_vec(),
            puts: puts.to_vec(),
            calls: calls.to_vec(),
        })
    }

    /// Build from quote records in any order.
    ///
    /// Records are sorted by strike; each keeps its own put and call.
    pub fn from_quotes(quotes: &[OptionQuote]) -> Result<Self, ReplicationError> {
        let mut sorted = quotes.to_vec();
        sorted.sort_by(|a, b| a.strike.total_cmp(&b.strike));

        let strikes: Vec<f64> = sorted.iter().map(|q| q.strike).collect();
        let puts: Vec<f64> = sorted.iter().map(|q| q.put).collect();
        let calls: Vec<f64> = sorted.iter().map(|q| q.call).collect();

        Self::new(&strikes, &puts, &calls)
    }

    /// Strikes, ascending.
    #[inline]
    pub fn strikes(&self) -> &[f64] {
        &self.strikes
    }

    /// Put prices, aligned with `strikes`.
    #[inline]
    pub fn puts(&self) -> &[f64] {
        &self.puts
    }

    /// Call prices, aligned with `strikes`.
    #[inline]
    pub fn calls(&self) -> &[f64] {
        &self.calls
    }

    /// Number of quotes.
    #[inline]
    pub fn len(&self) -> usize {
        self.strikes.len()
    }

    /// Never true for a constructed set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strikes.is_empty()
    }

    /// Quote records in strike order.
    pub fn iter(&self) -> impl Iterator<Item = OptionQuote> + '_ {
        self.strikes
            .iter()
            .zip(&self.puts)
            .zip(&self.calls)
            .map(|((&strike, &put), &call)| OptionQuote { strike, put, call })
    }
}

/// Check count, positivity and ordering of a strike sequence.
pub(crate) fn validate_strikes(strikes: &[f64]) -> Result<(), ReplicationError> {
    if strikes.len() < 2 {
        return Err(ReplicationError::InsufficientQuotes { got: strikes.len() });
    }

    if let Some((index, &strike)) = strikes
        .iter()
        .enumerate()
        .find(|(_, k)| !k.is_finite() || **k <= 0.0)
    {
        return Err(ReplicationError::InvalidStrike { index, strike });
    }

    if let Some(i) = strikes.windows(2).position(|w| w[0] > w[1]) {
        return Err(ReplicationError::UnsortedStrikes { index: i + 1 });
    }

    Ok(())
}
