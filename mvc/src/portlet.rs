//! Request lifecycle: action and render phases.

use marshal::{ParameterCodec, PRIVATE};
use params::{FormData, Limits, Parameters};

use crate::actions::TemplateActions;
use crate::bundle::BundleSet;
use crate::config::PortletConfig;
use crate::controller::TemplateController;
use crate::error::MvcResult;
use crate::host::{PortletRequest, PortletResponse};
use crate::model::TemplateModel;
use crate::view::{TemplateView, ViewContext};

/// Services shared by the model, actions, controller and view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependencies {
    /// Codec for parameter names, form keys and navigational values.
    pub parameter_codec: ParameterCodec,
}

impl Default for Dependencies {
    fn default() -> Self {
        Self {
            parameter_codec: PRIVATE,
        }
    }
}

/// The template portlet: decodes state, applies form posts and prepares
/// render contexts.
#[derive(Debug, Clone)]
pub struct TemplatePortlet {
    config: PortletConfig,
    dependencies: Dependencies,
    bundles: BundleSet,
    limits: Limits,
}

impl TemplatePortlet {
    /// Validates `config` and loads the message bundles.
    pub fn init(config: PortletConfig) -> MvcResult<Self> {
        config.validate()?;
        let bundles = match &config.bundle_dir {
            Some(dir) => BundleSet::load_dir(dir)?,
            None => BundleSet::embedded()?,
        };
        let dependencies = Dependencies {
            parameter_codec: config.visibility.codec(),
        };
        let limits = Limits::from(&config.limits);
        tracing::debug!(
            template_root = %config.template_root,
            visibility = %config.visibility,
            "portlet initialized"
        );
        Ok(Self {
            config,
            dependencies,
            bundles,
            limits,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &PortletConfig {
        &self.config
    }

    #[must_use]
    pub const fn dependencies(&self) -> &Dependencies {
        &self.dependencies
    }

    #[must_use]
    pub const fn bundles(&self) -> &BundleSet {
        &self.bundles
    }

    #[must_use]
    pub const fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Parses a request query within the configured limits.
    pub fn parse_query(&self, query: &str) -> MvcResult<Parameters> {
        Ok(Parameters::from_query(query, &self.limits)?)
    }

    /// Parses an urlencoded form body within the configured limits.
    pub fn parse_form(&self, body: &[u8]) -> MvcResult<FormData> {
        Ok(FormData::from_urlencoded(body, &self.limits)?)
    }

    /// Decodes the model carried by `request`.
    #[must_use]
    pub fn decode_model(&self, request: &PortletRequest) -> TemplateModel {
        TemplateModel::decode(&request.parameters, &self.dependencies)
    }

    /// Runs the action phase.
    ///
    /// Processing errors are logged and swallowed; the model, changed or
    /// not, is always written into the response's render parameters.
    pub fn process_action(
        &self,
        request: &PortletRequest,
        form: &FormData,
        response: &mut PortletResponse,
    ) {
        let mut model = self.decode_model(request);
        {
            let mut actions = TemplateActions::new(&mut model);
            match actions.process_actions(form) {
                Ok(true) => {
                    tracing::debug!("committing the model");
                    actions.commit();
                }
                Ok(false) => {}
                Err(err) => tracing::warn!(%err, "failed to process actions"),
            }
        }
        model.encode_response(response);
    }

    /// Runs the render phase up to template dispatch.
    ///
    /// Messages resolve in the response locale, or in the configured default
    /// when the response carries the root locale.
    pub fn render(
        &self,
        request: &PortletRequest,
        response: &mut PortletResponse,
    ) -> MvcResult<RenderContext> {
        response.set_content_type(request.response_content_type.clone());

        let locale = if response.locale().is_root() {
            self.config.default_locale.clone()
        } else {
            response.locale().clone()
        };
        let bundle = self.bundles.resolve(&locale);
        let view = TemplateView::new(ViewContext::new(request, response, locale, bundle));
        let model = self.decode_model(request);
        let template_path = format!(
            "{}{}{}",
            self.config.template_root, request.mode, self.config.template_suffix
        );
        tracing::debug!(template = %template_path, "dispatching render");

        Ok(RenderContext {
            view,
            model,
            template_path,
            dependencies: self.dependencies,
        })
    }
}

/// What a template receives: view, model and a controller factory.
#[derive(Debug, Clone)]
pub struct RenderContext {
    view: TemplateView,
    model: TemplateModel,
    template_path: String,
    dependencies: Dependencies,
}

impl RenderContext {
    #[must_use]
    pub const fn view(&self) -> &TemplateView {
        &self.view
    }

    #[must_use]
    pub const fn model(&self) -> &TemplateModel {
        &self.model
    }

    /// Returns `template_root + mode + template_suffix`.
    #[must_use]
    pub fn template_path(&self) -> &str {
        &self.template_path
    }

    /// Returns a controller building URLs against `response`.
    #[must_use]
    pub fn controller<'a>(&'a self, response: &'a PortletResponse) -> TemplateController<'a> {
        TemplateController::new(&self.model, response, self.dependencies.parameter_codec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Locale, PortletMode};
    use marshal::{Visibility, PUBLIC};

    fn portlet() -> TemplatePortlet {
        TemplatePortlet::init(PortletConfig::default()).unwrap()
    }

    #[test]
    fn init_selects_codec_from_visibility() {
        assert_eq!(portlet().dependencies().parameter_codec, PRIVATE);

        let config = PortletConfig {
            visibility: Visibility::Public,
            ..PortletConfig::default()
        };
        let portlet = TemplatePortlet::init(config).unwrap();
        assert_eq!(portlet.dependencies().parameter_codec, PUBLIC);
    }

    #[test]
    fn init_rejects_invalid_config() {
        let config = PortletConfig {
            template_root: "no-slash".to_string(),
            ..PortletConfig::default()
        };
        assert!(TemplatePortlet::init(config).is_err());
    }

    #[test]
    fn init_fails_on_missing_bundle_dir() {
        let config = PortletConfig {
            bundle_dir: Some("/nonexistent/bundles".into()),
            ..PortletConfig::default()
        };
        assert!(TemplatePortlet::init(config).is_err());
    }

    #[test]
    fn template_path_follows_mode() {
        let portlet = portlet();
        let request = PortletRequest::default().with_mode(PortletMode::Edit);
        let mut response = PortletResponse::new("ns_", Locale::root());
        let context = portlet.render(&request, &mut response).unwrap();
        assert_eq!(context.template_path(), "/WEB-INF/templates/edit.html");
        assert_eq!(response.content_type(), Some("text/html"));
    }

    #[test]
    fn render_uses_default_locale_for_root_response() {
        let config = PortletConfig {
            default_locale: Locale::new("de", None),
            ..PortletConfig::default()
        };
        let portlet = TemplatePortlet::init(config).unwrap();
        let mut response = PortletResponse::new("ns_", Locale::root());
        let context = portlet
            .render(&PortletRequest::default(), &mut response)
            .unwrap();
        assert_eq!(context.view().form_title().unwrap(), "Beispielformular");
    }

    #[test]
    fn process_action_always_encodes_model() {
        let portlet = portlet();
        let request = PortletRequest::new([("0", "a")].into_iter().collect());
        let mut response = PortletResponse::new("ns_", Locale::root());
        portlet.process_action(&request, &FormData::new(), &mut response);
        assert_eq!(response.render_parameters().get("0"), Some("a"));
        assert_eq!(response.render_parameters().get("1"), Some("sample"));
    }

    #[test]
    fn parse_helpers_apply_limits() {
        let portlet = portlet();
        assert_eq!(portlet.parse_query("?0=a").unwrap().get("0"), Some("a"));
        assert_eq!(portlet.parse_form(b"1=x&0=1").unwrap().len(), 2);
        let huge = "x".repeat(portlet.limits().max_query_bytes + 1);
        assert!(portlet.parse_query(&huge).is_err());
    }
}
