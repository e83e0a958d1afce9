//! Navigational state decoded from request parameters.

use marshal::ParameterCodec;
use params::{Parameters, PortletUrl};

use crate::host::PortletResponse;
use crate::portlet::Dependencies;

/// Default of [`TemplateModel::sample_int`].
pub const DEFAULT_SAMPLE_INT: i32 = 1;

/// Default of [`TemplateModel::sample_text`].
pub const DEFAULT_SAMPLE_TEXT: &str = "sample";

marshal::ordinal_enum! {
    /// Names of the model's render parameters, encoded as ordinals.
    ///
    /// Existing URLs carry these ordinals, so new parameters go at the end.
    pub enum Param {
        SampleInt,
        SampleText,
    }
}

/// The template's render state: one integer and one string.
///
/// Decoding is eager and total; absent or corrupt parameters yield the
/// defaults. Transition URLs are built from modified copies, see
/// [`incremented`](Self::incremented) and friends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateModel {
    codec: ParameterCodec,
    sample_int: i32,
    sample_text: String,
}

impl TemplateModel {
    /// Creates a model holding the defaults.
    #[must_use]
    pub fn new(deps: &Dependencies) -> Self {
        Self {
            codec: deps.parameter_codec,
            sample_int: DEFAULT_SAMPLE_INT,
            sample_text: DEFAULT_SAMPLE_TEXT.to_owned(),
        }
    }

    /// Decodes the model from request parameters.
    #[must_use]
    pub fn decode(parameters: &Parameters, deps: &Dependencies) -> Self {
        let codec = deps.parameter_codec;
        let sample_int = codec.decode_int(
            parameters.get(&param_name(codec, Param::SampleInt)),
            DEFAULT_SAMPLE_INT,
        );
        let sample_text = codec.decode_string(
            parameters.get(&param_name(codec, Param::SampleText)),
            DEFAULT_SAMPLE_TEXT,
        );
        tracing::debug!(
            policy = codec.policy().name(),
            sample_int,
            sample_text = %sample_text,
            "decoded model"
        );
        Self {
            codec,
            sample_int,
            sample_text,
        }
    }

    /// Writes both parameters into `parameters`.
    pub fn encode(&self, parameters: &mut Parameters) {
        for (name, value) in self.tokens() {
            parameters.set(name, value);
        }
    }

    /// Writes both parameters onto a URL.
    pub fn encode_url(&self, url: &mut PortletUrl) {
        for (name, value) in self.tokens() {
            url.set_parameter(name, value);
        }
    }

    /// Writes both parameters as render parameters of an action response.
    pub fn encode_response(&self, response: &mut PortletResponse) {
        for (name, value) in self.tokens() {
            response.set_render_parameter(name, value);
        }
    }

    fn tokens(&self) -> [(String, String); 2] {
        [
            (
                param_name(self.codec, Param::SampleText),
                self.codec.encode_string(&self.sample_text),
            ),
            (
                param_name(self.codec, Param::SampleInt),
                self.codec.encode_int(self.sample_int),
            ),
        ]
    }

    /// Returns the codec the parameters are written with.
    #[must_use]
    pub const fn codec(&self) -> ParameterCodec {
        self.codec
    }

    #[must_use]
    pub const fn sample_int(&self) -> i32 {
        self.sample_int
    }

    pub fn set_sample_int(&mut self, value: i32) {
        self.sample_int = value;
    }

    #[must_use]
    pub fn sample_text(&self) -> &str {
        &self.sample_text
    }

    pub fn set_sample_text(&mut self, value: impl Into<String>) {
        self.sample_text = value.into();
    }

    /// Adds one, wrapping at `i32::MAX`.
    pub fn inc_sample_int(&mut self) {
        self.sample_int = self.sample_int.wrapping_add(1);
    }

    /// Subtracts one, wrapping at `i32::MIN`.
    pub fn dec_sample_int(&mut self) {
        self.sample_int = self.sample_int.wrapping_sub(1);
    }

    /// Restores the defaults.
    pub fn clear(&mut self) {
        self.sample_int = DEFAULT_SAMPLE_INT;
        self.sample_text = DEFAULT_SAMPLE_TEXT.to_owned();
    }

    /// Takes over the values of `other`, keeping this model's codec.
    pub fn copy_from(&mut self, other: &Self) {
        self.sample_int = other.sample_int;
        self.sample_text.clone_from(&other.sample_text);
    }

    #[must_use]
    pub fn with_sample_int(mut self, value: i32) -> Self {
        self.set_sample_int(value);
        self
    }

    #[must_use]
    pub fn with_sample_text(mut self, value: impl Into<String>) -> Self {
        self.set_sample_text(value);
        self
    }

    /// Returns a copy with the integer incremented.
    #[must_use]
    pub fn incremented(&self) -> Self {
        let mut next = self.clone();
        next.inc_sample_int();
        next
    }

    /// Returns a copy with the integer decremented.
    #[must_use]
    pub fn decremented(&self) -> Self {
        let mut next = self.clone();
        next.dec_sample_int();
        next
    }

    /// Returns a copy holding the defaults.
    #[must_use]
    pub fn cleared(&self) -> Self {
        let mut next = self.clone();
        next.clear();
        next
    }
}

/// Returns the parameter name `param` is carried under.
#[must_use]
pub fn param_name(codec: ParameterCodec, param: Param) -> String {
    codec.encode_enum(param)
}
