//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Pattern matched no readable file
    NoInputFiles(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Processing error from core
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoInputFiles(patterns) => {
                write!(f, "No files found matching: {patterns}")
            }
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<subtok_core::Error> for CliError {
    fn from(error: subtok_core::Error) -> Self {
        match error {
            subtok_core::Error::Infrastructure(msg) => CliError::ProcessingError(msg),
            other => CliError::ConfigError(other.to_string()),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = CliError::NoInputFiles("*.txt".to_string());
        assert_eq!(error.to_string(), "No files found matching: *.txt");

        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");

        let error = CliError::ConfigError("unknown script".to_string());
        assert_eq!(error.to_string(), "Configuration error: unknown script");

        let error = CliError::ProcessingError("invalid UTF-8".to_string());
        assert_eq!(error.to_string(), "Processing error: invalid UTF-8");
    }

    #[test]
    fn test_from_core_error() {
        let error: CliError = subtok_core::Error::UnknownScript("Elvish".into()).into();
        assert!(matches!(error, CliError::ConfigError(ref msg) if msg.contains("Elvish")));

        let error: CliError = subtok_core::Error::Infrastructure("disk on fire".into()).into();
        assert!(matches!(error, CliError::ProcessingError(_)));
    }

    #[test]
    fn test_converts_into_anyhow() {
        let failure: CliResult<()> = Err(CliError::ConfigError("bad".into()).into());
        let message = failure.unwrap_err().to_string();
        assert_eq!(message, "Configuration error: bad");
    }
}
