//! Portlet configuration loaded from TOML.

use std::fs;
use std::path::{Path, PathBuf};

use marshal::Visibility;
use serde::Deserialize;

use crate::error::{MvcError, MvcResult};
use crate::host::Locale;

/// Deployment settings for [`TemplatePortlet`](crate::TemplatePortlet).
///
/// Every field has a default, so an empty document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PortletConfig {
    /// Directory prefix of the per-mode templates; must end with `/`.
    pub template_root: String,
    /// File suffix appended to the mode name.
    pub template_suffix: String,
    /// Locale used when a response does not carry one.
    pub default_locale: Locale,
    /// Directory of `messages*.toml` files layered over the built-in bundles.
    pub bundle_dir: Option<PathBuf>,
    /// Codec used for the model's navigational parameters.
    pub visibility: Visibility,
    /// Bounds for client-supplied queries and form bodies.
    pub limits: LimitsConfig,
}

impl Default for PortletConfig {
    fn default() -> Self {
        Self {
            template_root: "/WEB-INF/templates/".to_string(),
            template_suffix: ".html".to_string(),
            default_locale: Locale::new("en", None),
            bundle_dir: None,
            visibility: Visibility::Private,
            limits: LimitsConfig::default(),
        }
    }
}

impl PortletConfig {
    /// Reads and validates a config file.
    pub fn load(path: &Path) -> MvcResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| {
            tracing::warn!("failed to read config at {}: {source}", path.display());
            MvcError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let config = Self::parse(&content, &path.display().to_string())?;
        tracing::debug!(path = %path.display(), "loaded portlet config");
        Ok(config)
    }

    /// Parses and validates a config document.
    pub fn from_toml_str(content: &str) -> MvcResult<Self> {
        Self::parse(content, "inline config")
    }

    fn parse(content: &str, origin: &str) -> MvcResult<Self> {
        let config: Self = toml::from_str(content).map_err(|source| MvcError::Parse {
            origin: origin.to_owned(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field constraints serde cannot express.
    pub fn validate(&self) -> MvcResult<()> {
        if !self.template_root.ends_with('/') {
            return Err(MvcError::InvalidConfig {
                reason: format!(
                    "template_root {:?} must end with '/'",
                    self.template_root
                ),
            });
        }
        self.limits.validate()
    }
}

/// Serialized form of [`params::Limits`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LimitsConfig {
    pub max_parameters: usize,
    pub max_name_bytes: usize,
    pub max_value_bytes: usize,
    pub max_query_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        let limits = params::Limits::default();
        Self {
            max_parameters: limits.max_parameters,
            max_name_bytes: limits.max_name_bytes,
            max_value_bytes: limits.max_value_bytes,
            max_query_bytes: limits.max_query_bytes,
        }
    }
}

impl LimitsConfig {
    fn validate(&self) -> MvcResult<()> {
        let fields = [
            ("max_parameters", self.max_parameters),
            ("max_name_bytes", self.max_name_bytes),
            ("max_value_bytes", self.max_value_bytes),
            ("max_query_bytes", self.max_query_bytes),
        ];
        match fields.iter().find(|(_, value)| *value == 0) {
            Some((name, _)) => Err(MvcError::InvalidConfig {
                reason: format!("limits.{name} must be non-zero"),
            }),
            None => Ok(()),
        }
    }
}

impl From<&LimitsConfig> for params::Limits {
    fn from(config: &LimitsConfig) -> Self {
        Self {
            max_parameters: config.max_parameters,
            max_name_bytes: config.max_name_bytes,
            max_value_bytes: config.max_value_bytes,
            max_query_bytes: config.max_query_bytes,
        }
    }
}
