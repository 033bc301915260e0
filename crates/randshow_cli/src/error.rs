//! CLI error types

use randshow_core::types::{DistributionError, EngineError, EntropyError};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised by the `randshow` subcommands
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be assembled
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The system entropy source failed while seeding an engine
    #[error("Failed to seed engine: {0}")]
    Entropy(#[from] EntropyError),

    /// Engine parameters were rejected
    #[error("Invalid engine parameters: {0}")]
    Engine(#[from] EngineError),

    /// Distribution parameters were rejected
    #[error("Invalid distribution parameters: {0}")]
    Distribution(#[from] DistributionError),

    /// A command-line argument is out of range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// One or more buckets fell outside the tolerance band
    #[error("Uniformity check failed: {failed} bucket(s) outside tolerance for {engine}")]
    UniformityFailed {
        /// Engine that failed
        engine: String,
        /// Number of failing buckets
        failed: usize,
    },

    /// Writing output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::InvalidArgument("min must be below max".to_string());
        assert_eq!(err.to_string(), "Invalid argument: min must be below max");

        let err = CliError::UniformityFailed {
            engine: "lcg".to_string(),
            failed: 3,
        };
        assert!(err.to_string().contains("3 bucket(s)"));
        assert!(err.to_string().contains("lcg"));
    }

    #[test]
    fn test_from_conversions() {
        let err: CliError = DistributionError::InvalidBase(2).into();
        assert!(matches!(err, CliError::Distribution(_)));

        let err: CliError = EngineError::DegenerateModulus { modulus: 1 }.into();
        assert!(err.to_string().starts_with("Invalid engine parameters"));

        let err: CliError = ConfigError::InvalidEngine("mt".to_string()).into();
        assert!(err.to_string().contains("mt"));
    }
}
