//! The request parameter namespace.

use std::collections::btree_map::{self, BTreeMap};

use url::form_urlencoded;

use crate::error::{LimitKind, ParamsResult};
use crate::limits::Limits;

/// A multi-valued map of parameter name to tokens.
///
/// Lookups distinguish an absent parameter (`None`) from one that is present
/// with an empty value (`Some("")`). Iteration order is by name so that
/// rendered query strings are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    entries: BTreeMap<String, Vec<String>>,
}

impl Parameters {
    /// Creates an empty parameter map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Parses an `application/x-www-form-urlencoded` query string.
    ///
    /// A leading `?` is ignored. Repeated names accumulate values in order.
    pub fn from_query(query: &str, limits: &Limits) -> ParamsResult<Self> {
        limits.check(LimitKind::QueryBytes, query.len())?;
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut params = Self::new();
        for (count, (name, value)) in form_urlencoded::parse(query.as_bytes()).enumerate() {
            limits.check_pair(count + 1, name.len(), value.len())?;
            params.append(name.into_owned(), value.into_owned());
        }
        tracing::trace!(count = params.len(), "parsed query parameters");
        Ok(params)
    }

    /// Renders the parameters as an `application/x-www-form-urlencoded`
    /// query string without a leading `?`.
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, values) in &self.entries {
            for value in values {
                serializer.append_pair(name, value);
            }
        }
        serializer.finish()
    }

    /// Returns the first value of `name`, or `None` when it is absent.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns every value of `name`.
    #[must_use]
    pub fn values(&self, name: &str) -> &[String] {
        self.entries
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Replaces all values of `name` with `value`.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), vec![value.into()]);
    }

    /// Adds `value` after any existing values of `name`.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.entry(name.into()).or_default().push(value.into());
    }

    /// Removes `name`, returning its values.
    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.entries.remove(name)
    }

    /// Returns `true` if `name` is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the number of distinct names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates names with their values in name order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

/// Iterator over `(name, values)` pairs.
#[derive(Debug)]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, Vec<String>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a [String]);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = (&'a str, &'a [String]);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.append(name, value);
        }
        params
    }
}
