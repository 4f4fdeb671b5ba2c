//! Result rendering
//!
//! Every writer takes any `io::Write` so commands print to stdout and tests
//! capture into a buffer.

use serde::Serialize;
use std::io::Write;
use varswap_pricing::replication::ReplicationReport;

use crate::config::OutputFormat;
use crate::Result;

#[derive(Debug, Serialize)]
struct WeightRow {
    strike: f64,
    weight: f64,
}

#[derive(Debug, Serialize)]
struct RealizedSummary {
    observations: usize,
    returns: usize,
    realized_variance: f64,
}

/// Render a replication report.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &ReplicationReport,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for row in &report.contributions {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => {
            writeln!(out, "Forward:      {:.6}", report.forward)?;
            writeln!(out, "Par variance: {:.10}", report.par_variance)?;
            writeln!(out)?;
            writeln!(
                out,
                "┌────────────┬──────────────┬──────┬────────────┬──────────────┐"
            )?;
            writeln!(
                out,
                "│ Strike     │ Weight       │ Side │ Price      │ Contribution │"
            )?;
            writeln!(
                out,
                "├────────────┼──────────────┼──────┼────────────┼──────────────┤"
            )?;
            for row in &report.contributions {
                writeln!(
                    out,
                    "│ {:>10.4} │ {:>12.8} │ {:<4} │ {:>10.4} │ {:>12.8} │",
                    row.strike, row.weight, row.side, row.price, row.contribution
                )?;
            }
            writeln!(
                out,
                "└────────────┴──────────────┴──────┴────────────┴──────────────┘"
            )?;
        }
    }
    Ok(())
}

/// Render per-strike weights.
pub fn write_weights<W: Write>(
    out: &mut W,
    strikes: &[f64],
    weights: &[f64],
    format: OutputFormat,
) -> Result<()> {
    let rows: Vec<WeightRow> = strikes
        .iter()
        .zip(weights)
        .map(|(&strike, &weight)| WeightRow { strike, weight })
        .collect();

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &rows)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for row in &rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => {
            writeln!(out, "┌────────────┬──────────────┐")?;
            writeln!(out, "│ Strike     │ Weight       │")?;
            writeln!(out, "├────────────┼──────────────┤")?;
            for row in &rows {
                writeln!(out, "│ {:>10.4} │ {:>12.8} │", row.strike, row.weight)?;
            }
            writeln!(out, "└────────────┴──────────────┘")?;
        }
    }
    Ok(())
}

/// Render a realised variance over `observations` prices.
pub fn write_realized<W: Write>(
    out: &mut W,
    observations: usize,
    variance: f64,
    format: OutputFormat,
) -> Result<()> {
    let summary = RealizedSummary {
        observations,
        returns: observations.saturating_sub(1),
        realized_variance: variance,
    };

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &summary)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            writer.serialize(&summary)?;
            writer.flush()?;
        }
        OutputFormat::Table => {
            writeln!(out, "Observations:      {}", summary.observations)?;
            writeln!(out, "Returns:           {}", summary.returns)?;
            writeln!(out, "Realised variance: {:.10}", summary.realized_variance)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use varswap_pricing::replication::{replicate, OptionSide, QuoteSet};

    fn sample_report() -> ReplicationReport {
        let quotes = QuoteSet::new(&[80.0, 100.0, 125.0], &[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0])
            .unwrap();
        replicate(100.0, &quotes).unwrap()
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    // ========================================
    // Report
    // ========================================

    #[test]
    fn test_report_json() {
        let report = sample_report();
        let text = render(|out| write_report(out, &report, OutputFormat::Json));

        let parsed: ReplicationReport = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.contributions.len(), 3);
        assert_relative_eq!(parsed.par_variance, report.par_variance, epsilon = 1e-15);
        assert_eq!(parsed.contributions[2].side, OptionSide::Call);
    }

    #[test]
    fn test_report_csv_has_one_row_per_strike() {
        let text = render(|out| write_report(out, &sample_report(), OutputFormat::Csv));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "strike,weight,side,price,contribution");
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("80.0,0.0,put,1.0,"));
        assert!(lines[3].contains(",call,"));
    }

    #[test]
    fn test_report_table() {
        let text = render(|out| write_report(out, &sample_report(), OutputFormat::Table));
        assert!(text.contains("Par variance: 0.0089257421"));
        assert!(text.contains("│ Strike"));
        assert_eq!(text.lines().filter(|l| l.starts_with("│ ")).count(), 4);
    }

    // ========================================
    // Weights and realised variance
    // ========================================

    #[test]
    fn test_weights_csv() {
        let text = render(|out| {
            write_weights(out, &[90.0, 100.0], &[0.0, 0.0], OutputFormat::Csv)
        });
        assert_eq!(text, "strike,weight\n90.0,0.0\n100.0,0.0\n");
    }

    #[test]
    fn test_weights_json() {
        let text = render(|out| {
            write_weights(out, &[90.0, 100.0], &[0.0, 0.5], OutputFormat::Json)
        });
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[1]["weight"], 0.5);
    }

    #[test]
    fn test_realized_outputs() {
        let table = render(|out| write_realized(out, 3, 0.01, OutputFormat::Table));
        assert!(table.contains("Returns:           2"));

        let json = render(|out| write_realized(out, 3, 0.01, OutputFormat::Json));
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["realized_variance"], 0.01);
        assert_eq!(parsed["observations"], 3);
    }
}
