//! Weights command implementation
//!
//! Prints the option holdings of the replicating portfolio.

use std::io::Write;
use tracing::info;
use varswap_pricing::replication::replication_weights;

use crate::config::OutputFormat;
use crate::input::parse_strikes;
use crate::output::write_weights;
use crate::Result;

/// Run the weights command
pub fn run<W: Write>(out: &mut W, forward: f64, strikes: &str, format: OutputFormat) -> Result<()> {
    let strikes = parse_strikes(strikes)?;
    info!("Computing weights for {} strikes at F = {}", strikes.len(), forward);

    let weights = replication_weights(forward, &strikes)?;
    write_weights(out, &strikes, &weights, format)
}
