//! Request parameter namespace and transport for portlet parameters.
//!
//! This crate handles the flat parameter-name → token mapping that marshalled
//! values travel in: query strings, portlet URLs and form posts. It does not
//! know how tokens are produced; only how they are carried.
//!
//! # Design Principles
//!
//! - **Absent is not empty** - A missing parameter is `None`, never `""`.
//! - **Bounded decoding** - Client-supplied queries and bodies are checked
//!   against [`Limits`] while parsing.
//! - **Deterministic rendering** - Parameters render in name order.

mod error;
mod form;
mod limits;
mod parameters;
mod portlet_url;

pub use error::{LimitKind, ParamsError, ParamsResult};
pub use form::{Charset, FormData, FormItem, CHARSET_FIELD};
pub use limits::Limits;
pub use parameters::{Iter, Parameters};
pub use portlet_url::{PortletUrl, UrlKind};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        // Verify all expected items are exported
        let _ = Parameters::new();
        let _ = Limits::default();
        let _ = PortletUrl::new(UrlKind::Render, "/");
        let _ = FormData::new();
        let _ = Charset::default();
        let _ = CHARSET_FIELD;

        // Error types
        let _: ParamsResult<()> = Ok(());
    }

    #[test]
    fn limits_default_is_reasonable() {
        let limits = Limits::default();
        assert!(
            limits.max_parameters >= 16,
            "should allow a realistic number of parameters"
        );
        assert!(
            limits.max_value_bytes >= 1024,
            "should allow useful text values"
        );
    }
}
