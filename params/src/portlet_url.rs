//! Portlet URLs carrying encoded parameters.

use std::fmt;

use crate::parameters::Parameters;

/// The request phase a URL targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlKind {
    Render,
    Action,
    Resource,
}

/// A URL into the portlet: a base plus the parameters to carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortletUrl {
    kind: UrlKind,
    base: String,
    parameters: Parameters,
}

impl PortletUrl {
    /// Creates a URL with no parameters.
    #[must_use]
    pub fn new(kind: UrlKind, base: impl Into<String>) -> Self {
        Self {
            kind,
            base: base.into(),
            parameters: Parameters::new(),
        }
    }

    /// Returns the request phase this URL targets.
    #[must_use]
    pub const fn kind(&self) -> UrlKind {
        self.kind
    }

    /// Returns the base the query is appended to.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Returns the carried parameters.
    #[must_use]
    pub const fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Replaces the value of `name`.
    pub fn set_parameter(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.parameters.set(name, value);
    }

    /// Returns the first value of `name`.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name)
    }
}

impl fmt::Display for PortletUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)?;
        if self.parameters.is_empty() {
            return Ok(());
        }
        let separator = if self.base.contains('?') { '&' } else { '?' };
        write!(f, "{separator}{}", self.parameters.to_query())
    }
}
