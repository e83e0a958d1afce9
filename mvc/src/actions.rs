//! Form post processing for the action phase.

use marshal::ParameterCodec;
use params::{Charset, FormData, FormItem, CHARSET_FIELD};

use crate::error::MvcResult;
use crate::model::TemplateModel;

marshal::ordinal_enum! {
    /// Form field names, encoded as ordinals.
    pub enum Key {
        Action,
        SampleText,
        Unknown,
    }
}

marshal::ordinal_enum! {
    /// Values of the [`Key::Action`] field.
    pub enum Action {
        SampleFormCancel,
        SampleFormSave,
    }
}

/// Applies a submitted form to a model.
#[derive(Debug)]
pub struct TemplateActions<'m> {
    model: &'m mut TemplateModel,
    codec: ParameterCodec,
}

impl<'m> TemplateActions<'m> {
    /// Creates a handler that writes into `model`, decoding field names and
    /// action values with the model's codec.
    pub fn new(model: &'m mut TemplateModel) -> Self {
        let codec = model.codec();
        Self { model, codec }
    }

    /// Processes the form items in order.
    ///
    /// The model is only updated once every item has been read; an item that
    /// cannot be decoded in the current charset aborts processing and leaves
    /// the model unchanged. Returns `true` if any item asks for the model to
    /// be committed.
    pub fn process_actions(&mut self, form: &FormData) -> MvcResult<bool> {
        let mut entry = ActionEntry::new(self.model.clone());
        let mut result = false;

        for item in form {
            tracing::trace!(field = %item.field_name, "form item");
            if item.field_name == CHARSET_FIELD {
                let label = entry.read_string(item)?;
                entry.charset = Charset::from_label(&label)?;
                continue;
            }

            let key = self
                .codec
                .decode_enum(Some(item.field_name.as_str()), Key::Unknown);
            tracing::debug!(?key, "decoding key");
            result |= self.decode_key(&mut entry, key, item)?;
        }

        self.model.copy_from(&entry.model);
        tracing::debug!(result, "processed actions");
        Ok(result)
    }

    fn decode_key(&self, entry: &mut ActionEntry, key: Key, item: &FormItem) -> MvcResult<bool> {
        match key {
            Key::Action => {
                let value = entry.read_string(item)?;
                let action = self
                    .codec
                    .decode_enum(Some(value.as_str()), Action::SampleFormCancel);
                tracing::debug!(?action, "processing action");
                let result = entry.process_action(action);
                entry.sample_text = None;
                Ok(result)
            }
            Key::SampleText => {
                entry.sample_text = Some(entry.read_string(item)?);
                Ok(false)
            }
            Key::Unknown => Ok(false),
        }
    }

    /// Persists the committed model. The template keeps no backing store.
    pub fn commit(&self) {
        tracing::debug!(
            sample_int = self.model.sample_int(),
            sample_text = self.model.sample_text(),
            "commit"
        );
    }
}

struct ActionEntry {
    charset: Charset,
    model: TemplateModel,
    sample_text: Option<String>,
}

impl ActionEntry {
    fn new(model: TemplateModel) -> Self {
        Self {
            charset: Charset::default(),
            model,
            sample_text: None,
        }
    }

    fn read_string(&self, item: &FormItem) -> MvcResult<String> {
        Ok(item.string(self.charset)?)
    }

    fn process_action(&mut self, action: Action) -> bool {
        match action {
            Action::SampleFormCancel => false,
            Action::SampleFormSave => {
                if let Some(text) = self.sample_text.take() {
                    self.model.set_sample_text(text);
                }
                false
            }
        }
    }
}
