use thiserror::Error;

/// Errors produced by the cipher functions.
///
/// Every error is reported before any output is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The key cannot be used: empty, no letters, or not invertible mod 26.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// A numeric parameter is outside its accepted range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The input cannot be represented in the output alphabet.
    #[error("Malformed input: {0}")]
    MalformedInput(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CipherError>;
