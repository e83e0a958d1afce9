//! Localized, render-ready values for templates.

use crate::bundle::ResourceBundle;
use crate::error::MvcResult;
use crate::host::{Locale, PortletRequest, PortletResponse};

const BLANK_IMAGE: &str = "/images/blank.png";

/// Response properties every view exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewContext {
    locale: Locale,
    bundle: ResourceBundle,
    namespace: String,
    character_encoding: String,
    blank_image_url: String,
}

impl ViewContext {
    /// Builds the context for a response rendered in `locale`.
    pub fn new(
        request: &PortletRequest,
        response: &PortletResponse,
        locale: Locale,
        bundle: ResourceBundle,
    ) -> Self {
        Self {
            locale,
            bundle,
            namespace: response.namespace().to_owned(),
            character_encoding: response.character_encoding().to_owned(),
            blank_image_url: format!("{}{BLANK_IMAGE}", request.context_path),
        }
    }

    /// Returns the locale the response is rendered in.
    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    #[must_use]
    pub const fn bundle(&self) -> &ResourceBundle {
        &self.bundle
    }

    /// Returns the prefix that keeps element ids unique per portlet window.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub fn character_encoding(&self) -> &str {
        &self.character_encoding
    }

    /// Returns the URL of a transparent placeholder image.
    #[must_use]
    pub fn blank_image_url(&self) -> &str {
        &self.blank_image_url
    }

    /// Looks up a localized message.
    pub fn message(&self, key: &str) -> MvcResult<&str> {
        self.bundle.message(key)
    }
}

/// The template page's messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateView {
    context: ViewContext,
}

/// Declares [`TEMPLATE_MESSAGES`] and one [`TemplateView`] accessor per entry.
macro_rules! template_messages {
    ($($name:ident => $key:literal),* $(,)?) => {
        /// Message keys of the template page, by accessor name.
        pub const TEMPLATE_MESSAGES: &[(&str, &str)] = &[$((stringify!($name), $key)),*];

        impl TemplateView {
            $(
                #[doc = concat!("Returns the `", $key, "` message.")]
                pub fn $name(&self) -> MvcResult<&str> {
                    self.context.message($key)
                }
            )*
        }
    };
}

template_messages! {
    cancel_button_title => "form.button.cancel",
    dec_sample_int_hint => "link.decrement.hint",
    dec_sample_int_title => "link.decrement.title",
    form_title => "form.title",
    inc_sample_int_hint => "link.increment.hint",
    inc_sample_int_title => "link.increment.title",
    info_icon_hint => "icon.information.hint",
    info_icon_title => "icon.information.title",
    required_field_hint => "form.requiredField",
    reset_hint => "link.reset.hint",
    reset_title => "link.reset.title",
    sample_text_title => "form.sampleText.title",
    save_button_title => "form.button.save",
}

impl TemplateView {
    #[must_use]
    pub const fn new(context: ViewContext) -> Self {
        Self { context }
    }

    #[must_use]
    pub const fn context(&self) -> &ViewContext {
        &self.context
    }

    /// Resolves every message of [`TEMPLATE_MESSAGES`], failing on the first
    /// missing key.
    pub fn messages(&self) -> MvcResult<Vec<(&'static str, &str)>> {
        TEMPLATE_MESSAGES
            .iter()
            .map(|&(name, key)| self.context.message(key).map(|text| (name, text)))
            .collect()
    }
}
