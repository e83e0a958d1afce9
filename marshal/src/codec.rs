//! Typed value ↔ token conversion under an encoding policy.

use crate::error::{MarshalError, MarshalResult};
use crate::ordinal::Ordinal;
use crate::policy::EncodingPolicy;
use crate::radix::{format_i32, parse_i32, Radix};

/// Process-wide codec for public parameters (base 10).
pub const PUBLIC: ParameterCodec = ParameterCodec::new(EncodingPolicy::PUBLIC);

/// Process-wide codec for private parameters (base 36).
pub const PRIVATE: ParameterCodec = ParameterCodec::new(EncodingPolicy::PRIVATE);

/// Converts integers, ordinal enums and strings to and from tokens.
///
/// Encoding is total. The `decode_*` functions are total as well and fall
/// back to the caller's default on absent or corrupt input; the `try_decode_*`
/// variants report which of the two happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParameterCodec {
    policy: EncodingPolicy,
}

impl ParameterCodec {
    /// Creates a codec for `policy`.
    #[must_use]
    pub const fn new(policy: EncodingPolicy) -> Self {
        Self { policy }
    }

    /// Returns the encoding policy.
    #[must_use]
    pub const fn policy(&self) -> EncodingPolicy {
        self.policy
    }

    /// Returns the base used for integer tokens.
    #[must_use]
    pub const fn radix(&self) -> Radix {
        self.policy.radix()
    }

    /// Encodes an integer in the policy's base.
    #[must_use]
    pub fn encode_int(&self, value: i32) -> String {
        format_i32(value, self.radix())
    }

    /// Decodes an integer, reporting absent and malformed tokens.
    pub fn try_decode_int(&self, token: Option<&str>) -> MarshalResult<i32> {
        let token = token.ok_or(MarshalError::Absent)?;
        parse_i32(token, self.radix())
    }

    /// Decodes an integer, returning `default` when the token is absent or
    /// does not parse.
    #[must_use]
    pub fn decode_int(&self, token: Option<&str>, default: i32) -> i32 {
        self.try_decode_int(token)
            .unwrap_or_else(|err| self.fall_back(&err, default))
    }

    /// Encodes an enum constant as its ordinal.
    #[must_use]
    pub fn encode_enum<E: Ordinal>(&self, value: E) -> String {
        self.encode_int(ordinal_to_i32(value.ordinal()))
    }

    /// Decodes an enum constant against `E::VALUES`.
    #[must_use]
    pub fn decode_enum<E: Ordinal>(&self, token: Option<&str>, default: E) -> E {
        self.decode_enum_in(token, E::VALUES, default)
    }

    /// Decodes an enum constant against an explicit universe.
    ///
    /// An unparseable token and an ordinal outside `universe` both yield
    /// `default`, so tokens minted by an older or newer constant sequence
    /// degrade instead of failing.
    #[must_use]
    pub fn decode_enum_in<E: Ordinal>(&self, token: Option<&str>, universe: &[E], default: E) -> E {
        let ordinal = self.decode_int(token, ordinal_to_i32(default.ordinal()));
        lookup(universe, ordinal).unwrap_or_else(|| {
            tracing::debug!(
                policy = self.policy.name(),
                ordinal,
                len = universe.len(),
                "ordinal out of range, using default"
            );
            default
        })
    }

    /// Decodes an enum constant, reporting absent, malformed and
    /// out-of-range tokens.
    pub fn try_decode_enum<E: Ordinal>(&self, token: Option<&str>) -> MarshalResult<E> {
        let ordinal = self.try_decode_int(token)?;
        lookup(E::VALUES, ordinal).ok_or(MarshalError::OrdinalOutOfRange {
            ordinal,
            len: E::VALUES.len(),
        })
    }

    /// Encodes a string. Strings are their own tokens; transport escaping is
    /// left to the caller.
    #[must_use]
    pub fn encode_string(&self, value: &str) -> String {
        value.to_owned()
    }

    /// Decodes a string, returning `default` only when the token is absent.
    #[must_use]
    pub fn decode_string(&self, token: Option<&str>, default: &str) -> String {
        token.unwrap_or(default).to_owned()
    }

    fn fall_back(&self, err: &MarshalError, default: i32) -> i32 {
        if err.is_absent() {
            tracing::trace!(policy = self.policy.name(), default, "token absent");
        } else {
            tracing::debug!(policy = self.policy.name(), default, %err, "corrupt token");
        }
        default
    }
}

// Enums never come close to i32::MAX constants; a saturated ordinal simply
// decodes as out of range.
fn ordinal_to_i32(ordinal: usize) -> i32 {
    i32::try_from(ordinal).unwrap_or(i32::MAX)
}

fn lookup<E: Copy>(universe: &[E], ordinal: i32) -> Option<E> {
    usize::try_from(ordinal)
        .ok()
        .and_then(|idx| universe.get(idx))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::ordinal_enum! {
        enum Pair {
            First,
            Second,
        }
    }

    #[test]
    fn base_distinctness() {
        assert_eq!(PUBLIC.encode_int(35), "35");
        assert_eq!(PRIVATE.encode_int(35), "z");
    }

    #[test]
    fn decode_absent_uses_default() {
        assert_eq!(PUBLIC.decode_int(None, 7), 7);
        assert_eq!(PRIVATE.decode_int(None, -7), -7);
        assert_eq!(PUBLIC.decode_string(None, "x"), "x");
    }

    #[test]
    fn decode_corrupt_uses_default() {
        assert_eq!(PUBLIC.decode_int(Some("###"), 3), 3);
        assert_eq!(PUBLIC.decode_int(Some(""), 3), 3);
        assert_eq!(PUBLIC.decode_int(Some("z"), 3), 3);
        assert_eq!(PRIVATE.decode_int(Some("zzzzzzz"), 3), 3);
    }

    #[test]
    fn decode_present_empty_string() {
        assert_eq!(PRIVATE.decode_string(Some(""), "x"), "");
    }

    #[test]
    fn string_identity() {
        let token = PUBLIC.encode_string("hello");
        assert_eq!(PUBLIC.decode_string(Some(&token), "x"), "hello");
    }

    #[test]
    fn try_decode_distinguishes_absent_from_corrupt() {
        assert_eq!(PRIVATE.try_decode_int(None), Err(MarshalError::Absent));
        assert!(matches!(
            PRIVATE.try_decode_int(Some("!")),
            Err(MarshalError::Malformed { radix: 36, .. })
        ));
        assert_eq!(PRIVATE.try_decode_int(Some("z")), Ok(35));
    }

    #[test]
    fn enum_encodes_ordinal_only() {
        assert_eq!(PUBLIC.encode_enum(Pair::First), "0");
        assert_eq!(PUBLIC.encode_enum(Pair::Second), "1");
    }

    #[test]
    fn enum_ordinal_drift_falls_back() {
        assert_eq!(PUBLIC.decode_enum(Some("5"), Pair::First), Pair::First);
        assert_eq!(PUBLIC.decode_enum(Some("-1"), Pair::Second), Pair::Second);
        assert_eq!(
            PUBLIC.try_decode_enum::<Pair>(Some("5")),
            Err(MarshalError::OrdinalOutOfRange { ordinal: 5, len: 2 })
        );
    }

    #[test]
    fn enum_explicit_universe() {
        let older = [Pair::First];
        assert_eq!(
            PUBLIC.decode_enum_in(Some("1"), &older, Pair::First),
            Pair::First
        );
        assert_eq!(
            PUBLIC.decode_enum_in(Some("0"), &older, Pair::Second),
            Pair::First
        );
    }

    #[test]
    fn lookup_rejects_negative_ordinals() {
        assert_eq!(lookup(&[1, 2], -1), None);
        assert_eq!(lookup(&[1, 2], 1), Some(2));
    }

    #[test]
    fn codecs_are_shareable() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<ParameterCodec>();
    }
}
