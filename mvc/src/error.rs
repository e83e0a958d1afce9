//! Error types for the MVC layer.

use std::io;
use std::path::PathBuf;

use crate::host::Locale;

/// Result type for MVC operations.
pub type MvcResult<T> = Result<T, MvcError>;

/// Errors raised while configuring the portlet or handling a request.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MvcError {
    /// Parameter or form handling error.
    #[error(transparent)]
    Params(#[from] params::ParamsError),

    /// A configuration or bundle file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A configuration or bundle document is not valid TOML for its schema.
    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    /// Configuration values are inconsistent.
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },

    /// A bundle entry is not a string.
    #[error("bundle {origin} has a non-string message at {key:?}")]
    InvalidBundle { origin: String, key: String },

    /// A locale tag could not be parsed.
    #[error("invalid locale tag {tag:?}")]
    InvalidLocale { tag: String },

    /// No bundle in the fallback chain defines the key.
    #[error("no message for {key:?} in locale {locale}")]
    MissingMessage { key: String, locale: Locale },
}
