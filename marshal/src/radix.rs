//! Integer formatting and parsing in an arbitrary base.

use crate::error::{MalformedReason, MarshalError, MarshalResult};

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

// Base 2 needs 32 digits for i32::MIN plus the sign.
const MAX_FORMATTED_LEN: usize = 33;

/// A numeric base in `2..=36` using the digits `0-9` then `a-z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Radix(u32);

impl Radix {
    /// The smallest supported base.
    pub const MIN: Self = Self(2);
    /// Base 10.
    pub const DECIMAL: Self = Self(10);
    /// The largest supported base.
    pub const MAX: Self = Self(36);

    /// Creates a radix, rejecting bases outside `2..=36`.
    pub fn new(base: u32) -> MarshalResult<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&base) {
            Ok(Self(base))
        } else {
            Err(MarshalError::InvalidRadix { radix: base })
        }
    }

    /// Returns the raw base.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Radix {
    type Error = MarshalError;

    fn try_from(base: u32) -> MarshalResult<Self> {
        Self::new(base)
    }
}

impl From<Radix> for u32 {
    fn from(radix: Radix) -> Self {
        radix.0
    }
}

/// Formats `value` in `radix`: lowercase digits, a leading `-` for negative
/// values, and no leading zeros.
#[must_use]
pub fn format_i32(value: i32, radix: Radix) -> String {
    let base = radix.get();
    let mut buf = [0u8; MAX_FORMATTED_LEN];
    let mut pos = buf.len();
    let mut magnitude = value.unsigned_abs();

    loop {
        pos -= 1;
        buf[pos] = DIGITS[(magnitude % base) as usize];
        magnitude /= base;
        if magnitude == 0 {
            break;
        }
    }
    if value < 0 {
        pos -= 1;
        buf[pos] = b'-';
    }

    buf[pos..].iter().copied().map(char::from).collect()
}

/// Parses a signed integer in `radix`.
///
/// Accepts an optional leading `+` or `-` followed by at least one digit of
/// the base, in either letter case. Anything else, including whitespace and
/// values outside the `i32` range, is rejected.
pub fn parse_i32(token: &str, radix: Radix) -> MarshalResult<i32> {
    i32::from_str_radix(token, radix.get()).map_err(|err| MarshalError::Malformed {
        token: token.to_owned(),
        radix: radix.get(),
        reason: MalformedReason::from(err.kind()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radix_bounds() {
        assert!(Radix::new(1).is_err());
        assert_eq!(Radix::new(2).unwrap(), Radix::MIN);
        assert_eq!(Radix::new(36).unwrap(), Radix::MAX);
        assert_eq!(
            Radix::new(37).unwrap_err(),
            MarshalError::InvalidRadix { radix: 37 }
        );
        assert_eq!(Radix::try_from(10).unwrap(), Radix::DECIMAL);
        assert_eq!(u32::from(Radix::MAX), 36);
    }

    #[test]
    fn format_decimal() {
        assert_eq!(format_i32(0, Radix::DECIMAL), "0");
        assert_eq!(format_i32(35, Radix::DECIMAL), "35");
        assert_eq!(format_i32(-35, Radix::DECIMAL), "-35");
        assert_eq!(format_i32(i32::MAX, Radix::DECIMAL), "2147483647");
        assert_eq!(format_i32(i32::MIN, Radix::DECIMAL), "-2147483648");
    }

    #[test]
    fn format_max_radix() {
        assert_eq!(format_i32(35, Radix::MAX), "z");
        assert_eq!(format_i32(36, Radix::MAX), "10");
        assert_eq!(format_i32(-1, Radix::MAX), "-1");
        assert_eq!(format_i32(i32::MAX, Radix::MAX), "zik0zj");
        assert_eq!(format_i32(i32::MIN, Radix::MAX), "-zik0zk");
    }

    #[test]
    fn format_binary_extremes_fit_buffer() {
        let min = format_i32(i32::MIN, Radix::MIN);
        assert_eq!(min.len(), MAX_FORMATTED_LEN);
        assert!(min.starts_with("-1"));
        assert_eq!(format_i32(5, Radix::MIN), "101");
    }

    #[test]
    fn parse_accepts_signs_and_case() {
        assert_eq!(parse_i32("+7", Radix::DECIMAL).unwrap(), 7);
        assert_eq!(parse_i32("-7", Radix::DECIMAL).unwrap(), -7);
        assert_eq!(parse_i32("Z", Radix::MAX).unwrap(), 35);
        assert_eq!(parse_i32("-ZIK0ZK", Radix::MAX).unwrap(), i32::MIN);
    }

    #[test]
    fn parse_rejects_malformed() {
        let reason = |token: &str, radix| match parse_i32(token, radix).unwrap_err() {
            MarshalError::Malformed { reason, .. } => reason,
            other => panic!("unexpected error {other:?}"),
        };
        assert_eq!(reason("", Radix::DECIMAL), MalformedReason::Empty);
        assert_eq!(reason("-", Radix::DECIMAL), MalformedReason::InvalidDigit);
        assert_eq!(reason("1-", Radix::DECIMAL), MalformedReason::InvalidDigit);
        assert_eq!(reason(" 1", Radix::DECIMAL), MalformedReason::InvalidDigit);
        assert_eq!(reason("z", Radix::DECIMAL), MalformedReason::InvalidDigit);
        assert_eq!(reason("2147483648", Radix::DECIMAL), MalformedReason::Overflow);
        assert_eq!(reason("-zik0zl", Radix::MAX), MalformedReason::Underflow);
        assert_eq!(reason("٣", Radix::DECIMAL), MalformedReason::InvalidDigit);
    }

    #[test]
    fn parse_error_keeps_token() {
        let err = parse_i32("###", Radix::MAX).unwrap_err();
        assert_eq!(
            err,
            MarshalError::Malformed {
                token: "###".to_string(),
                radix: 36,
                reason: MalformedReason::InvalidDigit,
            }
        );
    }
}
