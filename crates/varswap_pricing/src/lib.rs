//! # varswap_pricing: Variance Swap Replication
//!
//! ## Layer 2 Role
//!
//! Builds on `varswap_core` to price the two legs of a variance swap:
//! - Fixed leg: par variance from a strip of out-of-the-money options
//!   (`replication`)
//! - Floating leg: realised variance of an observed price path (`realized`)
//!
//! ## Replication
//!
//! The log-contract payoff `v(K) = -2 ln(K/F) + 2 (K - F)/F` is sampled at
//! the quoted strikes and joined into a piecewise linear curve. The slope
//! change of that curve at each strike is the number of options held at that
//! strike: puts below the forward, calls at or above it.
//!
//! ```rust
//! use varswap_pricing::replication::variance;
//!
//! let strikes = [80.0, 100.0, 125.0];
//! let puts = [1.0, 2.0, 3.0];
//! let calls = [3.0, 2.0, 1.0];
//!
//! // Only the interior strike carries weight; it sits at the forward so the call is used
//! let var = variance(100.0, &strikes, &puts, &calls).unwrap();
//! assert!((var - 0.008925742052568).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialisation for quotes and replication reports

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod realized;
pub mod replication;
