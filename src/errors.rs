use thiserror::Error;

use crate::types::Atoms;

/// Token construction errors - raised at the point of detection and never retried
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Decimal string is not a non-negative number, or is more precise than the token allows
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Required send/mint quantity was an empty string
    #[error("Invalid amount: empty string. Amount must be a decimalized number as a string.")]
    EmptyAmount,

    /// Decimals outside 0-9
    #[error("Invalid decimals {decimals}. Decimals must be an integer 0-9.")]
    InvalidDecimals { decimals: u8 },

    /// No spendable token utxos for this token id
    #[error("No token utxos for tokenId \"{token_id}\"")]
    NoTokenUtxos { token_id: String },

    /// Available balance does not cover the request (both values decimalized)
    #[error("tokenUtxos have insufficient balance {available} to send {requested}")]
    InsufficientBalance { available: String, requested: String },

    /// Only fixed supply or a single mint baton at output 2 is supported
    #[error("Unsupported mint baton output index {0}: only a mint baton at index 2 is supported")]
    UnsupportedMintBatonPosition(u8),

    /// Quantity exceeds what the protocol can represent on the wire
    #[error("Atoms out of range: {atoms} exceeds protocol maximum {max}")]
    EncodingOverflow { atoms: Atoms, max: Atoms },

    /// NFT parent fan-out requested without any eligible inputs
    #[error("No eligible inputs for this NFT parent fan tx")]
    NoEligibleFanInputs,

    /// Fan-out input that does not hold whole NFT1 group units
    #[error("Invalid fan input: {0}")]
    InvalidFanInput(String),

    /// Token id is not 64 hex characters
    #[error("Token ID must be 64 hex characters, but got \"{0}\"")]
    InvalidTokenId(String),

    /// Genesis metadata field that cannot be encoded
    #[error("Invalid genesis field {field}: {reason}")]
    InvalidGenesisField { field: &'static str, reason: String },

    /// Builder asked to emit a token type it does not handle
    #[error("Unsupported token type {token_type} for {operation}")]
    UnsupportedTokenType {
        token_type: String,
        operation: &'static str,
    },

    /// Amount list that the protocol cannot carry
    #[error("Invalid amounts: {0}")]
    InvalidAmounts(String),

    /// Fee for the measured tx does not fit in a sats amount
    #[error("Fee overflow: {size} bytes at {sats_per_kb} sats/kB")]
    FeeOverflow { size: usize, sats_per_kb: u64 },
}

/// Result type for token construction
pub type TokenResult<T> = Result<T, TokenError>;

/// Application error type for the command line front end
#[derive(Error, Debug)]
pub enum AppError {
    /// Token construction failures
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// Script parsing failures
    #[error("Parse error: {0}")]
    Parse(#[from] crate::parser::ParseError),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON snapshot / output handling
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Hex arguments
    #[error("Hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed command line input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Application-wide result type
pub type AppResult<T> = Result<T, AppError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
