//! Typed parameter marshalling for portlet URLs and form fields.
//!
//! This crate converts signed 32-bit integers, ordinal enums and strings to
//! and from short text tokens. Two standing codecs are provided:
//!
//! - [`PUBLIC`] encodes integers in base 10. Its token format is a committed
//!   contract with other systems.
//! - [`PRIVATE`] encodes integers in base 36. Its tokens only round-trip
//!   within one component and may change without notice.
//!
//! # Design Principles
//!
//! - **Total decoding** - Request parameters are untrusted; decoding falls
//!   back to a default instead of failing.
//! - **Stateless** - Codecs are `Copy` values over an immutable policy and
//!   can be shared freely across threads.
//! - **Ordinal identity** - Enum constants travel as their position, never
//!   their name.
//!
//! # Example
//!
//! ```
//! use marshal::{PRIVATE, PUBLIC};
//!
//! assert_eq!(PUBLIC.encode_int(35), "35");
//! assert_eq!(PRIVATE.encode_int(35), "z");
//!
//! assert_eq!(PRIVATE.decode_int(Some("z"), 0), 35);
//! assert_eq!(PRIVATE.decode_int(Some("###"), 0), 0);
//! assert_eq!(PRIVATE.decode_int(None, 1), 1);
//! ```

mod codec;
mod error;
mod ordinal;
mod policy;
mod radix;

pub use codec::{ParameterCodec, PRIVATE, PUBLIC};
pub use error::{MalformedReason, MarshalError, MarshalResult};
pub use ordinal::Ordinal;
pub use policy::{EncodingPolicy, Visibility};
pub use radix::{format_i32, parse_i32, Radix};
