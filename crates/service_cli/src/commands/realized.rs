//! Realized command implementation
//!
//! Computes the realised variance of a price path read from CSV.

use std::io::Write;
use std::path::Path;
use tracing::info;
use varswap_pricing::realized::realized_variance;

use crate::config::OutputFormat;
use crate::input::read_prices_file;
use crate::output::write_realized;
use crate::Result;

/// Run the realized command
pub fn run<W: Write>(out: &mut W, prices: &Path, format: OutputFormat) -> Result<()> {
    info!("Reading prices from {}", prices.display());
    let series = read_prices_file(prices)?;

    let variance = realized_variance(&series)?;
    info!("Realised variance over {} prices: {}", series.len(), variance);

    write_realized(out, series.len(), variance, format)
}
