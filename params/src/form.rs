//! Form post items and the charsets used to read them.

use std::fmt;
use std::str::FromStr;

use percent_encoding::percent_decode;

use crate::error::{LimitKind, ParamsError, ParamsResult};
use crate::limits::Limits;

/// Field name a browser uses to report the charset of the submitted form.
pub const CHARSET_FIELD: &str = "_charset_";

/// A character encoding form item content can be read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Charset {
    #[default]
    Utf8,
    Latin1,
    Ascii,
}

impl Charset {
    /// Resolves a charset label, ignoring case and surrounding whitespace.
    pub fn from_label(label: &str) -> ParamsResult<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" | "unicode-1-1-utf-8" => Ok(Self::Utf8),
            "iso-8859-1" | "iso8859-1" | "iso_8859-1" | "latin1" | "l1" | "cp819" => {
                Ok(Self::Latin1)
            }
            "us-ascii" | "ascii" | "iso-ir-6" => Ok(Self::Ascii),
            _ => Err(ParamsError::UnsupportedCharset {
                label: label.to_owned(),
            }),
        }
    }

    /// Returns the canonical charset name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Latin1 => "ISO-8859-1",
            Self::Ascii => "US-ASCII",
        }
    }

    /// Decodes `bytes` into a string.
    pub fn decode(self, bytes: &[u8]) -> ParamsResult<String> {
        match self {
            Self::Utf8 => std::str::from_utf8(bytes)
                .map(str::to_owned)
                .map_err(|err| self.invalid_at(err.valid_up_to())),
            Self::Latin1 => Ok(bytes.iter().copied().map(char::from).collect()),
            Self::Ascii => match bytes.iter().position(|b| !b.is_ascii()) {
                Some(position) => Err(self.invalid_at(position)),
                None => Ok(bytes.iter().copied().map(char::from).collect()),
            },
        }
    }

    const fn invalid_at(self, position: usize) -> ParamsError {
        ParamsError::InvalidEncoding {
            charset: self.name(),
            position,
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Charset {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

/// One field of a submitted form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormItem {
    pub field_name: String,
    pub content: Vec<u8>,
}

impl FormItem {
    /// Creates a form item.
    #[must_use]
    pub fn new(field_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            field_name: field_name.into(),
            content: content.into(),
        }
    }

    /// Reads the content as text in `charset`.
    pub fn string(&self, charset: Charset) -> ParamsResult<String> {
        charset.decode(&self.content)
    }
}

/// The items of a form post in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    items: Vec<FormItem>,
}

impl FormData {
    /// Creates an empty form.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Parses an `application/x-www-form-urlencoded` body.
    ///
    /// Values keep their raw percent-decoded bytes so they can be read in
    /// whatever charset `_charset_` announces. Field names are read as UTF-8.
    pub fn from_urlencoded(body: &[u8], limits: &Limits) -> ParamsResult<Self> {
        limits.check(LimitKind::QueryBytes, body.len())?;

        let mut form = Self::new();
        for pair in body.split(|&byte| byte == b'&').filter(|pair| !pair.is_empty()) {
            let (name, value) = match pair.iter().position(|&byte| byte == b'=') {
                Some(split) => (&pair[..split], &pair[split + 1..]),
                None => (pair, &pair[pair.len()..]),
            };
            let name = decode_component(name);
            let value = decode_component(value);
            limits.check_pair(form.len() + 1, name.len(), value.len())?;
            form.push(FormItem::new(String::from_utf8_lossy(&name), value));
        }
        tracing::trace!(items = form.len(), "parsed form body");
        Ok(form)
    }

    /// Appends an item.
    pub fn push(&mut self, item: FormItem) {
        self.items.push(item);
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the form has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates items in submission order.
    pub fn iter(&self) -> std::slice::Iter<'_, FormItem> {
        self.items.iter()
    }
}

impl FromIterator<FormItem> for FormData {
    fn from_iter<I: IntoIterator<Item = FormItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FormData {
    type Item = &'a FormItem;
    type IntoIter = std::slice::Iter<'a, FormItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Percent-decodes one urlencoded name or value, `+` being a space.
fn decode_component(raw: &[u8]) -> Vec<u8> {
    let spaced: Vec<u8> = raw
        .iter()
        .map(|&byte| if byte == b'+' { b' ' } else { byte })
        .collect();
    percent_decode(&spaced).collect()
}
