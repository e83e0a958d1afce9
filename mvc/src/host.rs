//! In-process stand-ins for the container's request and response objects.

use std::fmt;
use std::str::FromStr;

use params::{Parameters, PortletUrl, UrlKind};
use serde::Deserialize;

use crate::error::{MvcError, MvcResult};

/// The portlet mode a request renders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PortletMode {
    #[default]
    View,
    Edit,
    Help,
}

impl PortletMode {
    /// Returns the lowercase mode name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Edit => "edit",
            Self::Help => "help",
        }
    }
}

impl fmt::Display for PortletMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PortletMode {
    type Err = MvcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "view" => Ok(Self::View),
            "edit" => Ok(Self::Edit),
            "help" => Ok(Self::Help),
            _ => Err(MvcError::InvalidConfig {
                reason: format!("unknown portlet mode {s:?}"),
            }),
        }
    }
}

/// A language with an optional country, e.g. `de` or `de_DE`.
///
/// The root locale has an empty language and matches the base bundle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub struct Locale {
    language: String,
    country: Option<String>,
}

impl Locale {
    /// Creates a locale, normalizing case (`de`, `DE`).
    #[must_use]
    pub fn new(language: &str, country: Option<&str>) -> Self {
        Self {
            language: language.to_ascii_lowercase(),
            country: country.map(str::to_ascii_uppercase),
        }
    }

    /// The locale of the base bundle.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            language: String::new(),
            country: None,
        }
    }

    /// Parses `de`, `de_DE` or `de-DE`. An empty tag is the root locale.
    pub fn parse(tag: &str) -> MvcResult<Self> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Ok(Self::root());
        }
        let invalid = || MvcError::InvalidLocale {
            tag: tag.to_owned(),
        };

        let mut parts = tag.split(['_', '-']);
        let language = parts.next().ok_or_else(invalid)?;
        let country = parts.next();
        if parts.next().is_some() {
            return Err(invalid());
        }
        if !(2..=8).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }
        if let Some(country) = country {
            let alpha = country.len() == 2 && country.chars().all(|c| c.is_ascii_alphabetic());
            let numeric = country.len() == 3 && country.chars().all(|c| c.is_ascii_digit());
            if !alpha && !numeric {
                return Err(invalid());
            }
        }
        Ok(Self::new(language, country))
    }

    /// Returns the lowercase language, empty for the root locale.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns the uppercase country, if any.
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Returns `true` for the root locale.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.language.is_empty()
    }

    /// Returns the lookup order for bundles, most specific first, ending
    /// with the root locale.
    #[must_use]
    pub fn fallback_chain(&self) -> Vec<Self> {
        let mut chain = Vec::with_capacity(3);
        if self.country.is_some() {
            chain.push(self.clone());
        }
        if !self.is_root() {
            chain.push(Self::new(&self.language, None));
        }
        chain.push(Self::root());
        chain
    }

    /// Returns the bundle file suffix: `""`, `_de` or `_de_DE`.
    #[must_use]
    pub fn bundle_suffix(&self) -> String {
        if self.is_root() {
            String::new()
        } else {
            format!("_{self}")
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("root");
        }
        f.write_str(&self.language)?;
        if let Some(country) = &self.country {
            write!(f, "_{country}")?;
        }
        Ok(())
    }
}

impl FromStr for Locale {
    type Err = MvcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = MvcError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        Self::parse(&tag)
    }
}

/// The parts of an incoming request the portlet reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortletRequest {
    pub parameters: Parameters,
    pub mode: PortletMode,
    pub context_path: String,
    pub response_content_type: String,
}

impl PortletRequest {
    /// Creates a view-mode request carrying `parameters`.
    #[must_use]
    pub fn new(parameters: Parameters) -> Self {
        Self {
            parameters,
            ..Self::default()
        }
    }

    /// Sets the portlet mode.
    #[must_use]
    pub fn with_mode(mut self, mode: PortletMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the web application context path.
    #[must_use]
    pub fn with_context_path(mut self, context_path: impl Into<String>) -> Self {
        self.context_path = context_path.into();
        self
    }

    /// Returns the first value of `name`.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name)
    }
}

impl Default for PortletRequest {
    fn default() -> Self {
        Self {
            parameters: Parameters::new(),
            mode: PortletMode::View,
            context_path: String::new(),
            response_content_type: "text/html".to_string(),
        }
    }
}

/// The parts of a response the portlet writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortletResponse {
    namespace: String,
    locale: Locale,
    character_encoding: String,
    render_base: String,
    action_base: String,
    content_type: Option<String>,
    render_parameters: Parameters,
}

impl PortletResponse {
    /// Creates a UTF-8 response for the portlet window `namespace`.
    #[must_use]
    pub fn new(namespace: impl Into<String>, locale: Locale) -> Self {
        Self {
            namespace: namespace.into(),
            locale,
            character_encoding: "UTF-8".to_string(),
            render_base: "/render".to_string(),
            action_base: "/action".to_string(),
            content_type: None,
            render_parameters: Parameters::new(),
        }
    }

    /// Sets the bases render and action URLs are built on.
    #[must_use]
    pub fn with_url_bases(mut self, render: impl Into<String>, action: impl Into<String>) -> Self {
        self.render_base = render.into();
        self.action_base = action.into();
        self
    }

    /// Sets the character encoding.
    #[must_use]
    pub fn with_character_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.character_encoding = encoding.into();
        self
    }

    /// Returns the namespace that scopes markup of this portlet window.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the response locale.
    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Returns the character encoding.
    #[must_use]
    pub fn character_encoding(&self) -> &str {
        &self.character_encoding
    }

    /// Creates a URL targeting the render phase.
    #[must_use]
    pub fn create_render_url(&self) -> PortletUrl {
        PortletUrl::new(UrlKind::Render, self.render_base.clone())
    }

    /// Creates a URL targeting the action phase.
    #[must_use]
    pub fn create_action_url(&self) -> PortletUrl {
        PortletUrl::new(UrlKind::Action, self.action_base.clone())
    }

    /// Sets a parameter for the render phase following an action.
    pub fn set_render_parameter(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.render_parameters.set(name, value);
    }

    /// Returns the parameters set for the next render phase.
    #[must_use]
    pub const fn render_parameters(&self) -> &Parameters {
        &self.render_parameters
    }

    /// Sets the response content type.
    pub fn set_content_type(&mut self, content_type: impl Into<String>) {
        self.content_type = Some(content_type.into());
    }

    /// Returns the content type, if set.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_roundtrip() {
        for mode in [PortletMode::View, PortletMode::Edit, PortletMode::Help] {
            assert_eq!(mode.to_string().parse::<PortletMode>().unwrap(), mode);
        }
        assert!("maximized".parse::<PortletMode>().is_err());
    }

    #[test]
    fn locale_parse_forms() {
        assert_eq!(Locale::parse("de").unwrap(), Locale::new("de", None));
        assert_eq!(Locale::parse("de_DE").unwrap(), Locale::new("de", Some("DE")));
        assert_eq!(Locale::parse("DE-de").unwrap(), Locale::new("de", Some("DE")));
        assert_eq!(Locale::parse("es_419").unwrap().country(), Some("419"));
        assert!(Locale::parse("").unwrap().is_root());
    }

    #[test]
    fn locale_parse_rejects_garbage() {
        for tag in ["d", "de_D", "de_DE_x", "d3", "de_12", "_DE"] {
            assert!(
                matches!(Locale::parse(tag), Err(MvcError::InvalidLocale { .. })),
                "{tag} should be rejected"
            );
        }
    }

    #[test]
    fn locale_fallback_chain() {
        let chain = Locale::new("de", Some("AT")).fallback_chain();
        assert_eq!(
            chain,
            [
                Locale::new("de", Some("AT")),
                Locale::new("de", None),
                Locale::root()
            ]
        );
        assert_eq!(Locale::root().fallback_chain(), [Locale::root()]);
    }

    #[test]
    fn locale_display_and_suffix() {
        assert_eq!(Locale::new("de", Some("at")).to_string(), "de_AT");
        assert_eq!(Locale::root().to_string(), "root");
        assert_eq!(Locale::new("fr", None).bundle_suffix(), "_fr");
        assert_eq!(Locale::root().bundle_suffix(), "");
    }

    #[test]
    fn request_defaults() {
        let request = PortletRequest::default();
        assert_eq!(request.mode, PortletMode::View);
        assert_eq!(request.response_content_type, "text/html");
        assert_eq!(request.parameter("x"), None);
    }

    #[test]
    fn response_urls_use_bases() {
        let response = PortletResponse::new("ns_", Locale::root()).with_url_bases("/r", "/a");
        assert_eq!(response.create_render_url().base(), "/r");
        assert_eq!(response.create_action_url().kind(), UrlKind::Action);
        assert_eq!(response.character_encoding(), "UTF-8");
    }

    #[test]
    fn render_parameters_replace() {
        let mut response = PortletResponse::new("ns_", Locale::root());
        response.set_render_parameter("0", "a");
        response.set_render_parameter("0", "b");
        assert_eq!(response.render_parameters().values("0"), ["b"]);
    }
}
