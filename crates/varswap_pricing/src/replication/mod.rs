//! Static replication of a variance swap's par variance.
//!
//! This module provides:
//! - [`OptionQuote`] and [`QuoteSet`]: validated strike/put/call strips
//! - [`variance`]: the par variance as a single number
//! - [`replicate`]: the par variance with its per-strike breakdown
//! - [`replication_weights`]: the option holdings, which depend on strikes
//!   and forward only
//! - [`ReplicationError`]: input-shape, domain, ordering and numerical failures
//!
//! All inputs are validated before any arithmetic is attempted.

pub mod error;
pub mod quotes;
pub mod variance;

pub use error::{ErrorKind, ReplicationError};
pub use quotes::{OptionQuote, OptionSide, QuoteSet};
pub use variance::{
    auxiliary_payoff, replicate, replication_weights, variance, ReplicationReport,
    StrikeContribution,
};
