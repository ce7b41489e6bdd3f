//! Error types for readscore-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during readability analysis.
///
/// The pure scoring functions never produce these; only the gated
/// [`check_readability`](crate::readability::check_readability) entry point does.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    /// The input has no words or no sentences, so every formula divides by zero.
    #[error("no scorable text in input")]
    EmptyInput,
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
