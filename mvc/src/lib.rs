//! Model, actions, controller and view for a portlet whose navigational
//! state travels in marshalled request parameters.
//!
//! A request flows through two phases:
//!
//! - **Action** - [`TemplatePortlet::process_action`] decodes the model,
//!   applies the submitted [`FormData`](params::FormData) through
//!   [`TemplateActions`] and writes the model back as render parameters.
//! - **Render** - [`TemplatePortlet::render`] decodes the model again and
//!   returns a [`RenderContext`] holding the localized [`TemplateView`] and a
//!   [`TemplateController`] for transition URLs.
//!
//! Parameter names, form keys and action values are ordinal tokens of the
//! [`Param`], [`Key`] and [`Action`] enums under the codec selected by
//! [`PortletConfig::visibility`].
//!
//! # Example
//!
//! ```
//! use mvc::{Locale, PortletConfig, PortletRequest, PortletResponse, TemplatePortlet};
//!
//! let portlet = TemplatePortlet::init(PortletConfig::default()).unwrap();
//! let request = PortletRequest::new(portlet.parse_query("0=z").unwrap());
//! let mut response = PortletResponse::new("ns_", Locale::root());
//!
//! let context = portlet.render(&request, &mut response).unwrap();
//! assert_eq!(context.model().sample_int(), 35);
//! assert_eq!(context.controller(&response).inc_sample_int_url().parameter("0"), Some("10"));
//! ```

mod actions;
mod bundle;
mod config;
mod controller;
mod error;
mod host;
mod model;
mod portlet;
mod view;

pub use actions::{Action, Key, TemplateActions};
pub use bundle::{BundleSet, ResourceBundle};
pub use config::{LimitsConfig, PortletConfig};
pub use controller::TemplateController;
pub use error::{MvcError, MvcResult};
pub use host::{Locale, PortletMode, PortletRequest, PortletResponse};
pub use model::{param_name, Param, TemplateModel, DEFAULT_SAMPLE_INT, DEFAULT_SAMPLE_TEXT};
pub use portlet::{Dependencies, RenderContext, TemplatePortlet};
pub use view::{TemplateView, ViewContext, TEMPLATE_MESSAGES};
