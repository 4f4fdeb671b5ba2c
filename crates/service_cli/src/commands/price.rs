//! Price command implementation
//!
//! Replicates the par variance of a quote strip read from CSV.

use std::io::Write;
use std::path::Path;
use tracing::{debug, info};
use varswap_pricing::replication::{replicate, OptionQuote, QuoteSet, ReplicationReport};

use crate::config::OutputFormat;
use crate::input::read_quotes_file;
use crate::output::write_report;
use crate::Result;

/// Replicate from records already read.
///
/// With `sort` the records may come in any order; otherwise they must
/// already ascend by strike.
pub fn price_quotes(quotes: &[OptionQuote], forward: f64, sort: bool) -> Result<ReplicationReport> {
    let set = if sort {
        QuoteSet::from_quotes(quotes)?
    } else {
        let strikes: Vec<f64> = quotes.iter().map(|q| q.strike).collect();
        let puts: Vec<f64> = quotes.iter().map(|q| q.put).collect();
        let calls: Vec<f64> = quotes.iter().map(|q| q.call).collect();
        QuoteSet::new(&strikes, &puts, &calls)?
    };

    let report = replicate(forward, &set)?;
    for row in &report.contributions {
        debug!(
            strike = row.strike,
            weight = row.weight,
            side = %row.side,
            contribution = row.contribution,
            "strike contribution"
        );
    }
    Ok(report)
}

/// Run the price command
pub fn run<W: Write>(
    out: &mut W,
    quotes: &Path,
    forward: f64,
    sort: bool,
    format: OutputFormat,
) -> Result<()> {
    info!("Starting replication...");
    info!("  Quotes: {}", quotes.display());
    info!("  Forward: {}", forward);
    info!("  Output format: {}", format);

    let records = read_quotes_file(quotes)?;
    info!("Loaded {} quotes", records.len());

    let report = price_quotes(&records, forward, sort)?;
    write_report(out, &report, format)?;

    info!("Par variance: {}", report.par_variance);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::read_quotes;
    use crate::CliError;
    use approx::assert_relative_eq;
    use varswap_pricing::replication::ErrorKind;

    const STRIP: &str = "strike,put,call\n\
                         90,1,5\n\
                         95,2,4\n\
                         100,3,3\n\
                         105,4,2\n\
                         110,5,1\n";

    #[test]
    fn test_price_quotes_in_file_order() {
        let quotes = read_quotes(STRIP.as_bytes()).unwrap();
        let report = price_quotes(&quotes, 100.0, false).unwrap();

        assert_relative_eq!(report.par_variance, 0.007039016595553666, epsilon = 1e-14);
        assert_eq!(report.contributions.len(), 5);
    }

    #[test]
    fn test_unsorted_file_needs_sort_flag() {
        let mut quotes = read_quotes(STRIP.as_bytes()).unwrap();
        quotes.reverse();

        match price_quotes(&quotes, 100.0, false) {
            Err(CliError::Replication { kind, .. }) => assert_eq!(kind, ErrorKind::Ordering),
            other => panic!("Expected ordering failure, got {:?}", other),
        }

        let report = price_quotes(&quotes, 100.0, true).unwrap();
        assert_relative_eq!(report.par_variance, 0.007039016595553666, epsilon = 1e-14);
    }

    #[test]
    fn test_invalid_forward_is_a_domain_error() {
        let quotes = read_quotes(STRIP.as_bytes()).unwrap();
        match price_quotes(&quotes, -1.0, false) {
            Err(CliError::Replication { kind, .. }) => assert_eq!(kind, ErrorKind::Domain),
            other => panic!("Expected domain failure, got {:?}", other),
        }
    }

    #[test]
    fn test_run_missing_file() {
        let mut out = Vec::new();
        let result = run(
            &mut out,
            Path::new("missing/quotes.csv"),
            100.0,
            false,
            OutputFormat::Table,
        );
        assert!(matches!(result, Err(CliError::FileNotFound(_))));
        assert!(out.is_empty());
    }
}
