//! CLI error types
//!
//! Library errors are translated here into the messages the operator sees.

use thiserror::Error;
use varswap_core::types::PricingError;
use varswap_pricing::replication::{ErrorKind, ReplicationError};

use crate::config::ConfigError;

/// Errors surfaced by the `varswap` binary
#[derive(Debug, Error)]
pub enum CliError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Replication failed ({kind}): {source}")]
    Replication {
        kind: ErrorKind,
        source: ReplicationError,
    },

    #[error("Pricing failed: {0}")]
    Pricing(#[from] PricingError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ReplicationError> for CliError {
    fn from(source: ReplicationError) -> Self {
        CliError::Replication {
            kind: source.kind(),
            source,
        }
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replication_error_carries_kind() {
        let err: CliError = ReplicationError::UnsortedStrikes { index: 2 }.into();
        match &err {
            CliError::Replication { kind, .. } => assert_eq!(*kind, ErrorKind::Ordering),
            other => panic!("Expected Replication variant, got {:?}", other),
        }
        assert_eq!(
            err.to_string(),
            "Replication failed (ordering): Strikes not sorted ascending at index 2"
        );
    }

    #[test]
    fn test_pricing_error_display() {
        let err: CliError = PricingError::InvalidInput("too few prices".to_string()).into();
        assert_eq!(err.to_string(), "Pricing failed: Invalid input: too few prices");
    }

    #[test]
    fn test_config_error_is_transparent() {
        let err: CliError = ConfigError::InvalidFormat("xml".to_string()).into();
        assert!(err.to_string().starts_with("Invalid output format: xml"));
    }

    #[test]
    fn test_file_not_found_display() {
        let err = CliError::FileNotFound("quotes.csv".to_string());
        assert_eq!(err.to_string(), "File not found: quotes.csv");
    }
}
