//! Parser-specific error types

/// Result type for token script parsing
pub type ParseResult<T> = Result<T, ParseError>;

/// A script that claims to be a token message but is malformed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Only push-ops are supported, got opcode 0x{0:02x}")]
    NonPushOp(u8),

    #[error("Missing {0}")]
    Missing(&'static str),

    #[error("Not enough bytes: Tried reading {needed} byte(s), but there are only {left} byte(s) left")]
    NotEnoughBytes { needed: usize, left: usize },

    #[error("{field} must be {expected}, got {actual} byte(s)")]
    WrongSize {
        field: &'static str,
        expected: &'static str,
        actual: usize,
    },

    #[error("Unknown txType {0:?}")]
    UnknownTxType(String),

    #[error("Superfluous {0} bytes")]
    Superfluous(&'static str),

    #[error("Size must be between 0 and 127, got {0}")]
    SizeOutOfRange(u64),

    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Invalid eMPP script: {0}")]
    InvalidEmpp(String),
}
