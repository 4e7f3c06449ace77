//! Error types for the mint risk scanner

use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Validation error (malformed mint address)
    #[error("Validation error: {0}")]
    Validation(String),

    /// RPC/Solana error
    #[error("RPC error: {0}")]
    Rpc(String),

    /// HTTP error (price lookups)
    #[error("HTTP error: {0}")]
    Http(String),

    /// Malformed amount or response payload
    #[error("Parse error: {0}")]
    Parse(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors raised while decoding a mint account buffer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Buffer shorter than the fixed mint layout
    #[error("mint account too short: expected {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },

    /// COption tag was neither 0 nor 1
    #[error("invalid option tag {tag} for {field}")]
    InvalidOptionTag { field: &'static str, tag: u32 },
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
