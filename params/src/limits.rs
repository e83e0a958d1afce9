//! Configurable limits for bounded parameter decoding.

use crate::error::{LimitKind, ParamsError, ParamsResult};

/// Limits enforced while parsing query strings and form bodies.
///
/// Request parameters are client-supplied; these bounds keep a hostile
/// request from forcing unbounded allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of name/value pairs.
    pub max_parameters: usize,

    /// Maximum length of a decoded parameter name in bytes.
    pub max_name_bytes: usize,

    /// Maximum length of a decoded parameter value in bytes.
    pub max_value_bytes: usize,

    /// Maximum length of the raw query string or form body in bytes.
    pub max_query_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_parameters: 64,
            max_name_bytes: 256,
            max_value_bytes: 8 * 1024,
            max_query_bytes: 64 * 1024,
        }
    }
}

impl Limits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_parameters: 8,
            max_name_bytes: 32,
            max_value_bytes: 128,
            max_query_bytes: 1024,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_parameters: usize::MAX,
            max_name_bytes: usize::MAX,
            max_value_bytes: usize::MAX,
            max_query_bytes: usize::MAX,
        }
    }

    pub(crate) fn check(&self, kind: LimitKind, actual: usize) -> ParamsResult<()> {
        let limit = match kind {
            LimitKind::QueryBytes => self.max_query_bytes,
            LimitKind::ParameterCount => self.max_parameters,
            LimitKind::NameBytes => self.max_name_bytes,
            LimitKind::ValueBytes => self.max_value_bytes,
        };
        if actual > limit {
            return Err(ParamsError::LimitsExceeded {
                kind,
                limit,
                actual,
            });
        }
        Ok(())
    }

    pub(crate) fn check_pair(
        &self,
        count: usize,
        name_bytes: usize,
        value_bytes: usize,
    ) -> ParamsResult<()> {
        self.check(LimitKind::ParameterCount, count)?;
        self.check(LimitKind::NameBytes, name_bytes)?;
        self.check(LimitKind::ValueBytes, value_bytes)
    }
}
