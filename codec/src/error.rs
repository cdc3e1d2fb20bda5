//! Error types for codec operations

use thiserror::Error;

/// Error type for codec operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unexpected end of buffer: need {needed} bytes, {remaining} remaining")]
    EndOfBuffer { needed: usize, remaining: usize },
    #[error("not fixed size: {0}")]
    NotFixedSize(String),
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },
    #[error("layout mismatch: declared {0} bytes, wrote {1}")]
    LayoutMismatch(usize, usize), // declared, written
    #[error("invalid data in {0}: {1}")]
    InvalidData(String, String), // context, message
    #[error("invalid length: {0}")]
    InvalidLength(usize),
    #[error("length exceeded: {0} > {1}")]
    LengthExceeded(usize, usize), // found, max
    #[error("invalid bool")]
    InvalidBool,
    #[error("element type is unknown: {0}")]
    UnknownKind(String),
    #[error("not a slice: {0}")]
    NotSlice(String),
}
