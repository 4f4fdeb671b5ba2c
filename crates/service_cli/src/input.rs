//! CSV readers for quote strips and price series.

use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use varswap_pricing::replication::OptionQuote;

use crate::{CliError, Result};

#[derive(Debug, Deserialize)]
struct PriceRecord {
    price: f64,
}

fn reader<R: Read>(source: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(source)
}

fn open(path: &Path) -> Result<File> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    Ok(File::open(path)?)
}

/// Read `strike,put,call` records, in file order.
pub fn read_quotes<R: Read>(source: R) -> Result<Vec<OptionQuote>> {
    reader(source)
        .into_deserialize()
        .map(|record| record.map_err(CliError::from))
        .collect()
}

/// Read a `price` column, in file order.
pub fn read_prices<R: Read>(source: R) -> Result<Vec<f64>> {
    reader(source)
        .into_deserialize::<PriceRecord>()
        .map(|record| record.map(|r| r.price).map_err(CliError::from))
        .collect()
}

pub fn read_quotes_file(path: &Path) -> Result<Vec<OptionQuote>> {
    read_quotes(open(path)?)
}

pub fn read_prices_file(path: &Path) -> Result<Vec<f64>> {
    read_prices(open(path)?)
}

/// Parse a comma-separated strike list such as `90,95,100`.
pub fn parse_strikes(list: &str) -> Result<Vec<f64>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .map_err(|_| CliError::InvalidArgument(format!("Not a number: {}", s)))
        })
        .collect()
}
