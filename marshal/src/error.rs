//! Error types for marshalling operations.

use std::fmt;
use std::num::IntErrorKind;

/// Result type for marshalling operations.
pub type MarshalResult<T> = Result<T, MarshalError>;

/// Errors reported by the checked marshalling APIs.
///
/// The total decode functions on [`ParameterCodec`](crate::ParameterCodec)
/// never surface these; they map every error to the caller's default.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarshalError {
    /// Numeric base outside `2..=36`.
    #[error("radix {radix} is outside the supported range 2..=36")]
    InvalidRadix {
        /// The rejected base.
        radix: u32,
    },

    /// No token was supplied for the parameter.
    #[error("token is absent")]
    Absent,

    /// A token was supplied but does not parse in the policy's base.
    #[error("token {token:?} is not a base-{radix} integer: {reason}")]
    Malformed {
        /// The offending token.
        token: String,
        /// Base the token was parsed in.
        radix: u32,
        /// Why parsing failed.
        reason: MalformedReason,
    },

    /// The token decoded to an ordinal outside the enum's constant sequence.
    #[error("ordinal {ordinal} is outside the {len} known constants")]
    OrdinalOutOfRange {
        /// The decoded ordinal.
        ordinal: i32,
        /// Number of constants in the universe.
        len: usize,
    },

    /// A visibility name other than `public` or `private`.
    #[error("unknown parameter visibility {name:?}")]
    UnknownVisibility {
        /// The rejected name.
        name: String,
    },
}

impl MarshalError {
    /// Returns `true` if the error only reports a missing token.
    ///
    /// Callers use this to tell stale or tampered input apart from a
    /// parameter that was simply never set.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Why a present token failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// The token (or the part after the sign) is empty.
    Empty,
    /// A character is not a digit of the base, or a sign is misplaced.
    InvalidDigit,
    /// The value is larger than `i32::MAX`.
    Overflow,
    /// The value is smaller than `i32::MIN`.
    Underflow,
}

impl From<&IntErrorKind> for MalformedReason {
    fn from(kind: &IntErrorKind) -> Self {
        match kind {
            IntErrorKind::Empty => Self::Empty,
            IntErrorKind::PosOverflow => Self::Overflow,
            IntErrorKind::NegOverflow => Self::Underflow,
            _ => Self::InvalidDigit,
        }
    }
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Empty => "empty",
            Self::InvalidDigit => "invalid digit",
            Self::Overflow => "above the 32-bit range",
            Self::Underflow => "below the 32-bit range",
        };
        f.write_str(text)
    }
}
