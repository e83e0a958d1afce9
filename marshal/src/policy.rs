//! Encoding policies and parameter visibility.

use std::fmt;
use std::str::FromStr;

use crate::codec::{ParameterCodec, PRIVATE, PUBLIC};
use crate::error::MarshalError;
use crate::radix::Radix;

/// A named numeric base used for integer tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodingPolicy {
    name: &'static str,
    radix: Radix,
}

impl EncodingPolicy {
    /// Base 10. The token format is an external contract and must not change.
    pub const PUBLIC: Self = Self::custom("public", Radix::DECIMAL);

    /// Base 36. Tokens only round-trip within the same component.
    pub const PRIVATE: Self = Self::custom("private", Radix::MAX);

    /// Creates a policy with an arbitrary base.
    #[must_use]
    pub const fn custom(name: &'static str, radix: Radix) -> Self {
        Self { name, radix }
    }

    /// Returns the policy name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }

    /// Returns the policy base.
    #[must_use]
    pub const fn radix(self) -> Radix {
        self.radix
    }
}

/// Which standing codec a parameter family uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Visibility {
    /// Parameters other systems may construct or read.
    Public,
    /// Parameters encoded and decoded by the same component only.
    #[default]
    Private,
}

impl Visibility {
    /// Returns the process-wide codec for this visibility.
    #[must_use]
    pub const fn codec(self) -> ParameterCodec {
        match self {
            Self::Public => PUBLIC,
            Self::Private => PRIVATE,
        }
    }

    /// Returns the policy for this visibility.
    #[must_use]
    pub const fn policy(self) -> EncodingPolicy {
        match self {
            Self::Public => EncodingPolicy::PUBLIC,
            Self::Private => EncodingPolicy::PRIVATE,
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.policy().name())
    }
}

impl FromStr for Visibility {
    type Err = MarshalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("public") {
            Ok(Self::Public)
        } else if s.eq_ignore_ascii_case("private") {
            Ok(Self::Private)
        } else {
            Err(MarshalError::UnknownVisibility { name: s.to_owned() })
        }
    }
}
