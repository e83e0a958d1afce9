//! Localized message bundles.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{MvcError, MvcResult};
use crate::host::Locale;

const BUNDLE_STEM: &str = "messages";

const EMBEDDED: &[(&str, &str)] = &[
    ("", include_str!("../resources/bundles/messages.toml")),
    ("de", include_str!("../resources/bundles/messages_de.toml")),
];

type Messages = HashMap<String, String>;

/// Messages resolved for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceBundle {
    locale: Locale,
    messages: Messages,
}

impl ResourceBundle {
    /// Returns the most specific locale that contributed messages.
    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Looks up a message.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Looks up a message that must exist.
    pub fn message(&self, key: &str) -> MvcResult<&str> {
        self.get(key).ok_or_else(|| MvcError::MissingMessage {
            key: key.to_owned(),
            locale: self.locale.clone(),
        })
    }

    /// Returns the number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if no messages are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Message tables for every known locale.
#[derive(Debug, Clone, Default)]
pub struct BundleSet {
    tables: HashMap<Locale, Messages>,
}

impl BundleSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bundles compiled into the crate.
    pub fn embedded() -> MvcResult<Self> {
        let mut set = Self::new();
        for (tag, content) in EMBEDDED {
            let locale = Locale::parse(tag)?;
            let origin = format!("embedded {BUNDLE_STEM}{}.toml", locale.bundle_suffix());
            set.merge(locale, parse_messages(content, &origin)?);
        }
        Ok(set)
    }

    /// Returns the embedded bundles overlaid with every `messages*.toml`
    /// file in `dir`. File entries override embedded entries key by key.
    pub fn load_dir(dir: &Path) -> MvcResult<Self> {
        let mut set = Self::embedded()?;
        let io_err = |source| MvcError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut paths = Vec::new();
        for entry in fs::read_dir(dir).map_err(io_err)? {
            paths.push(entry.map_err(io_err)?.path());
        }
        paths.sort();

        for path in paths {
            let Some(locale) = bundle_locale(&path)? else {
                continue;
            };
            let content = fs::read_to_string(&path).map_err(|source| MvcError::Io {
                path: path.clone(),
                source,
            })?;
            let messages = parse_messages(&content, &path.display().to_string())?;
            tracing::debug!(path = %path.display(), %locale, count = messages.len(), "loaded bundle");
            set.merge(locale, messages);
        }
        Ok(set)
    }

    /// Adds messages for `locale`, replacing existing keys.
    pub fn merge(&mut self, locale: Locale, messages: HashMap<String, String>) {
        self.tables.entry(locale).or_default().extend(messages);
    }

    /// Resolves the bundle for `locale` along its fallback chain.
    #[must_use]
    pub fn resolve(&self, locale: &Locale) -> ResourceBundle {
        let chain = locale.fallback_chain();
        let mut messages = Messages::new();
        for candidate in chain.iter().rev() {
            if let Some(table) = self.tables.get(candidate) {
                messages.extend(table.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
        }
        let resolved = chain
            .into_iter()
            .find(|candidate| self.tables.contains_key(candidate))
            .unwrap_or_default();
        tracing::debug!(requested = %locale, resolved = %resolved, "resource bundle locale");
        ResourceBundle {
            locale: resolved,
            messages,
        }
    }
}

fn bundle_locale(path: &Path) -> MvcResult<Option<Locale>> {
    if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
        return Ok(None);
    }
    let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
        return Ok(None);
    };
    match stem.strip_prefix(BUNDLE_STEM) {
        Some("") => Ok(Some(Locale::root())),
        Some(suffix) => match suffix.strip_prefix('_') {
            Some(tag) => Locale::parse(tag).map(Some),
            None => Ok(None),
        },
        None => Ok(None),
    }
}

fn parse_messages(content: &str, origin: &str) -> MvcResult<Messages> {
    let table: toml::Table = toml::from_str(content).map_err(|source| MvcError::Parse {
        origin: origin.to_owned(),
        source,
    })?;
    let mut messages = Messages::new();
    flatten(&table, "", origin, &mut messages)?;
    Ok(messages)
}

// Nested tables become dotted keys, so `[form] title = ..` and
// `"form.title" = ..` name the same message.
fn flatten(table: &toml::Table, prefix: &str, origin: &str, out: &mut Messages) -> MvcResult<()> {
    for (key, value) in table {
        let full = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            toml::Value::String(text) => {
                out.insert(full, text.clone());
            }
            toml::Value::Table(nested) => flatten(nested, &full, origin, out)?,
            _ => {
                return Err(MvcError::InvalidBundle {
                    origin: origin.to_owned(),
                    key: full,
                })
            }
        }
    }
    Ok(())
}
