//! Command-line tooling for the portlet parameter codec.
//!
//! This crate backs the `portlet-tools` binary:
//!
//! - Encode integers and strings under the public or private policy
//! - Decode tokens and report whether the default was used, and why
//! - Run an action phase against a query and form body
//! - Render a JSON report of everything a template would see
//!
//! # Design Principles
//!
//! - **Same code paths** - Reports are produced by the real portlet, not a
//!   re-implementation.
//! - **Machine-readable output** - Reports serialize to JSON.

use std::collections::BTreeMap;
use std::path::Path;

use marshal::ParameterCodec;
use mvc::{
    Locale, MvcResult, PortletConfig, PortletMode, PortletRequest, PortletResponse,
    TemplatePortlet,
};
use serde::Serialize;

/// Namespace of the simulated portlet window.
pub const NAMESPACE: &str = "portlet_";

/// How a decode arrived at its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeStatus {
    /// The token was present and valid.
    Decoded,
    /// No token; the default was used.
    Absent,
    /// The token did not parse; the default was used.
    Corrupt,
}

/// Result of decoding one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeReport<T> {
    pub value: T,
    pub status: DecodeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Decodes an integer token, reporting how the value was obtained.
#[must_use]
pub fn decode_int(codec: ParameterCodec, token: Option<&str>, default: i32) -> DecodeReport<i32> {
    match codec.try_decode_int(token) {
        Ok(value) => DecodeReport {
            value,
            status: DecodeStatus::Decoded,
            error: None,
        },
        Err(err) if err.is_absent() => DecodeReport {
            value: default,
            status: DecodeStatus::Absent,
            error: None,
        },
        Err(err) => DecodeReport {
            value: default,
            status: DecodeStatus::Corrupt,
            error: Some(err.to_string()),
        },
    }
}

/// Decodes a string token. Strings are never corrupt.
#[must_use]
pub fn decode_string(codec: ParameterCodec, token: Option<&str>, default: &str) -> DecodeReport<String> {
    let status = if token.is_some() {
        DecodeStatus::Decoded
    } else {
        DecodeStatus::Absent
    };
    DecodeReport {
        value: codec.decode_string(token, default),
        status,
        error: None,
    }
}

/// Initializes the portlet from a config file, or from defaults when no
/// path is given.
pub fn load_portlet(path: Option<&Path>) -> MvcResult<TemplatePortlet> {
    let config = match path {
        Some(path) => PortletConfig::load(path)?,
        None => PortletConfig::default(),
    };
    TemplatePortlet::init(config)
}

/// Runs the action phase and returns the render parameters it produced as
/// a query string.
pub fn apply_action(portlet: &TemplatePortlet, query: &str, body: &str) -> MvcResult<String> {
    let request = PortletRequest::new(portlet.parse_query(query)?);
    let form = portlet.parse_form(body.as_bytes())?;
    let mut response = PortletResponse::new(NAMESPACE, portlet.config().default_locale.clone());
    portlet.process_action(&request, &form, &mut response);
    let render_query = response.render_parameters().to_query();
    tracing::debug!(items = form.len(), %render_query, "applied action");
    Ok(render_query)
}

/// Inputs of a simulated render request.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub query: String,
    pub locale: Option<Locale>,
    pub mode: PortletMode,
    pub context_path: String,
}

/// Everything a template receives for one render.
#[derive(Debug, Clone, Serialize)]
pub struct RenderReport {
    pub template_path: String,
    pub content_type: Option<String>,
    pub locale: String,
    pub bundle_locale: String,
    pub namespace: String,
    pub blank_image_url: String,
    pub model: ModelReport,
    pub urls: UrlReport,
    pub form: FormReport,
    pub messages: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelReport {
    pub sample_int: i32,
    pub sample_text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UrlReport {
    pub action: String,
    pub clear: String,
    pub increment: String,
    pub decrement: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormReport {
    pub key_action: String,
    pub key_sample_text: String,
    pub value_save: String,
    pub value_cancel: String,
}

/// Runs the render phase and collects the template inputs.
pub fn render_report(portlet: &TemplatePortlet, options: &RenderOptions) -> MvcResult<RenderReport> {
    let request = PortletRequest::new(portlet.parse_query(&options.query)?)
        .with_mode(options.mode)
        .with_context_path(options.context_path.clone());
    let locale = options
        .locale
        .clone()
        .unwrap_or_else(|| portlet.config().default_locale.clone());
    let mut response = PortletResponse::new(NAMESPACE, locale);
    let context = portlet.render(&request, &mut response)?;

    let view = context.view();
    let messages = view
        .messages()?
        .into_iter()
        .map(|(name, text)| (name.to_owned(), text.to_owned()))
        .collect();
    let controller = context.controller(&response);

    Ok(RenderReport {
        template_path: context.template_path().to_owned(),
        content_type: response.content_type().map(str::to_owned),
        locale: view.context().locale().to_string(),
        bundle_locale: view.context().bundle().locale().to_string(),
        namespace: view.context().namespace().to_owned(),
        blank_image_url: view.context().blank_image_url().to_owned(),
        model: ModelReport {
            sample_int: context.model().sample_int(),
            sample_text: context.model().sample_text().to_owned(),
        },
        urls: UrlReport {
            action: controller.action_url().to_string(),
            clear: controller.clear_url().to_string(),
            increment: controller.inc_sample_int_url().to_string(),
            decrement: controller.dec_sample_int_url().to_string(),
        },
        form: FormReport {
            key_action: controller.key_action(),
            key_sample_text: controller.key_sample_text(),
            value_save: controller.value_action_save(),
            value_cancel: controller.value_action_cancel(),
        },
        messages,
    })
}
