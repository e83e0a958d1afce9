//! Error types for parameter handling.

use std::fmt;

/// Result type for parameter operations.
pub type ParamsResult<T> = Result<T, ParamsError>;

/// Errors raised while reading request parameters or form items.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParamsError {
    /// Limits exceeded.
    #[error("{kind} limit exceeded: {actual} > {limit}")]
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },

    /// The charset label is not one this crate can decode.
    #[error("unsupported charset {label:?}")]
    UnsupportedCharset { label: String },

    /// The bytes are not valid in the requested charset.
    #[error("invalid {charset} content at byte {position}")]
    InvalidEncoding {
        charset: &'static str,
        position: usize,
    },
}

/// Specific parameter limits that can be exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    QueryBytes,
    ParameterCount,
    NameBytes,
    ValueBytes,
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::QueryBytes => "query bytes",
            Self::ParameterCount => "parameter count",
            Self::NameBytes => "parameter name bytes",
            Self::ValueBytes => "parameter value bytes",
        };
        f.write_str(name)
    }
}
