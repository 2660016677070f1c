//! Common error types for BFHL

use thiserror::Error;

/// Common result type for BFHL operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the BFHL crates
#[derive(Error, Debug)]
pub enum Error {
    /// TOML config file could not be parsed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
