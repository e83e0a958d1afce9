//! URLs and form keys for state transitions.

use marshal::ParameterCodec;
use params::PortletUrl;

use crate::actions::{Action, Key};
use crate::host::PortletResponse;
use crate::model::TemplateModel;

/// Builds the links and form field names a rendered page needs.
///
/// Every transition URL carries a modified copy of the model; the model
/// itself is never changed.
#[derive(Debug, Clone, Copy)]
pub struct TemplateController<'a> {
    model: &'a TemplateModel,
    response: &'a PortletResponse,
    codec: ParameterCodec,
}

impl<'a> TemplateController<'a> {
    pub fn new(model: &'a TemplateModel, response: &'a PortletResponse, codec: ParameterCodec) -> Self {
        Self {
            model,
            response,
            codec,
        }
    }

    /// Returns the form target, carrying the current state.
    #[must_use]
    pub fn action_url(&self) -> PortletUrl {
        let mut url = self.response.create_action_url();
        self.model.encode_url(&mut url);
        url
    }

    /// Returns a render URL restoring the defaults.
    #[must_use]
    pub fn clear_url(&self) -> PortletUrl {
        self.render_url(&self.model.cleared())
    }

    #[must_use]
    pub fn inc_sample_int_url(&self) -> PortletUrl {
        self.render_url(&self.model.incremented())
    }

    #[must_use]
    pub fn dec_sample_int_url(&self) -> PortletUrl {
        self.render_url(&self.model.decremented())
    }

    fn render_url(&self, snapshot: &TemplateModel) -> PortletUrl {
        let mut url = self.response.create_render_url();
        snapshot.encode_url(&mut url);
        url
    }

    /// Field name of the submit button.
    #[must_use]
    pub fn key_action(&self) -> String {
        self.codec.encode_enum(Key::Action)
    }

    /// Field name of the sample text input.
    #[must_use]
    pub fn key_sample_text(&self) -> String {
        self.codec.encode_enum(Key::SampleText)
    }

    #[must_use]
    pub fn value_action_save(&self) -> String {
        self.codec.encode_enum(Action::SampleFormSave)
    }

    #[must_use]
    pub fn value_action_cancel(&self) -> String {
        self.codec.encode_enum(Action::SampleFormCancel)
    }
}
