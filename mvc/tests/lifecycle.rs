//! Action and render phases driven the way a container would.

use marshal::{Visibility, PRIVATE};
use mvc::{
    Action, Key, Locale, PortletConfig, PortletRequest, PortletResponse, TemplatePortlet,
};
use params::{FormData, FormItem, CHARSET_FIELD};

fn portlet() -> TemplatePortlet {
    TemplatePortlet::init(PortletConfig::default()).unwrap()
}

fn en_response() -> PortletResponse {
    PortletResponse::new("ns_", Locale::new("en", None)).with_url_bases("/render", "/action")
}

/// Runs an action followed by a render, as a full page round trip does.
fn post(portlet: &TemplatePortlet, query: &str, body: &str) -> PortletRequest {
    let request = PortletRequest::new(portlet.parse_query(query).unwrap());
    let form = portlet.parse_form(body.as_bytes()).unwrap();
    let mut response = en_response();
    portlet.process_action(&request, &form, &mut response);
    PortletRequest::new(response.render_parameters().clone())
}

#[test]
fn save_flow_updates_text_and_keeps_int() {
    let portlet = portlet();
    let mut response = en_response();
    let context = portlet
        .render(&PortletRequest::new(portlet.parse_query("0=z").unwrap()), &mut response)
        .unwrap();
    let controller = context.controller(&response);

    let action_url = controller.action_url();
    assert_eq!(action_url.to_string(), "/action?0=z&1=sample");

    let body = format!(
        "{}=hello+world&{}={}",
        controller.key_sample_text(),
        controller.key_action(),
        controller.value_action_save()
    );
    let query = action_url.parameters().to_query();
    let next = post(&portlet, &query, &body);

    let mut response = en_response();
    let context = portlet.render(&next, &mut response).unwrap();
    assert_eq!(context.model().sample_int(), 35);
    assert_eq!(context.model().sample_text(), "hello world");
}

#[test]
fn cancel_flow_keeps_state() {
    let portlet = portlet();
    let body = format!(
        "{}=ignored&{}={}",
        PRIVATE.encode_enum(Key::SampleText),
        PRIVATE.encode_enum(Key::Action),
        PRIVATE.encode_enum(Action::SampleFormCancel)
    );
    let next = post(&portlet, "0=5&1=before", &body);
    assert_eq!(next.parameter("0"), Some("5"));
    assert_eq!(next.parameter("1"), Some("before"));
}

#[test]
fn bad_charset_is_swallowed() {
    let portlet = portlet();
    let body = format!("{CHARSET_FIELD}=koi8-r&1=x&0=1");
    let next = post(&portlet, "0=7", &body);
    assert_eq!(next.parameter("0"), Some("7"));
    assert_eq!(next.parameter("1"), Some("sample"));
}

#[test]
fn latin1_form_items() {
    let portlet = portlet();
    let form: FormData = [
        FormItem::new(CHARSET_FIELD, "latin1"),
        FormItem::new("1", vec![0x47, 0x72, 0xFC, 0xDF]),
        FormItem::new("0", "1"),
    ]
    .into_iter()
    .collect();
    let mut response = en_response();
    portlet.process_action(&PortletRequest::default(), &form, &mut response);
    assert_eq!(response.render_parameters().get("1"), Some("Grüß"));
}

#[test]
fn transition_urls_from_render() {
    let portlet = portlet();
    let mut response = en_response();
    let request = PortletRequest::new(portlet.parse_query("0=a&1=x").unwrap());
    let context = portlet.render(&request, &mut response).unwrap();
    let controller = context.controller(&response);

    assert_eq!(controller.inc_sample_int_url().to_string(), "/render?0=b&1=x");
    assert_eq!(controller.dec_sample_int_url().to_string(), "/render?0=9&1=x");
    assert_eq!(controller.clear_url().to_string(), "/render?0=1&1=sample");
}

#[test]
fn corrupt_parameters_render_defaults() {
    let portlet = portlet();
    let mut response = en_response();
    let request = PortletRequest::new(portlet.parse_query("0=%21%21&9=zz").unwrap());
    let context = portlet.render(&request, &mut response).unwrap();
    assert_eq!(context.model().sample_int(), 1);
    assert_eq!(context.model().sample_text(), "sample");
}

#[test]
fn german_render() {
    let portlet = portlet();
    let mut response = PortletResponse::new("ns_", Locale::new("de", Some("AT")));
    let request = PortletRequest::default().with_context_path("/wps");
    let context = portlet.render(&request, &mut response).unwrap();
    let view = context.view();
    assert_eq!(view.save_button_title().unwrap(), "Speichern");
    assert_eq!(view.context().blank_image_url(), "/wps/images/blank.png");
    assert_eq!(view.context().bundle().locale(), &Locale::new("de", None));
}

#[test]
fn public_visibility_uses_decimal_tokens() {
    let config = PortletConfig {
        visibility: Visibility::Public,
        ..PortletConfig::default()
    };
    let portlet = TemplatePortlet::init(config).unwrap();
    let mut response = en_response();
    let request = PortletRequest::new(portlet.parse_query("0=35").unwrap());
    let context = portlet.render(&request, &mut response).unwrap();
    assert_eq!(context.model().sample_int(), 35);
    assert_eq!(
        context.controller(&response).inc_sample_int_url().to_string(),
        "/render?0=36&1=sample"
    );
}

#[test]
fn bundle_dir_overrides_messages() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("messages.toml"),
        "[form]\ntitle = \"Custom title\"\n",
    )
    .unwrap();
    let config = PortletConfig {
        bundle_dir: Some(dir.path().to_path_buf()),
        ..PortletConfig::default()
    };
    let portlet = TemplatePortlet::init(config).unwrap();
    let mut response = en_response();
    let context = portlet
        .render(&PortletRequest::default(), &mut response)
        .unwrap();
    assert_eq!(context.view().form_title().unwrap(), "Custom title");
    assert_eq!(context.view().save_button_title().unwrap(), "Save");
}

#[test]
fn latin1_form_body() {
    let portlet = portlet();
    let form = portlet
        .parse_form(b"_charset_=ISO-8859-1&1=g%FC%DF&0=1")
        .unwrap();
    let mut response = en_response();
    portlet.process_action(&PortletRequest::default(), &form, &mut response);
    assert_eq!(response.render_parameters().get("1"), Some("güß"));
}

#[test]
fn utf8_form_body_is_the_default() {
    let portlet = portlet();
    let form = portlet.parse_form(b"1=g%C3%BC&0=1").unwrap();
    let mut response = en_response();
    portlet.process_action(&PortletRequest::default(), &form, &mut response);
    assert_eq!(response.render_parameters().get("1"), Some("gü"));
}

#[test]
fn root_response_renders_in_default_locale() {
    let config = PortletConfig {
        default_locale: Locale::new("de", None),
        ..PortletConfig::default()
    };
    let portlet = TemplatePortlet::init(config).unwrap();
    let mut response = PortletResponse::new("ns_", Locale::root());
    let context = portlet.render(&PortletRequest::default(), &mut response).unwrap();
    let view = context.view();
    assert_eq!(view.context().locale(), &Locale::new("de", None));
    assert_eq!(view.context().bundle().locale(), view.context().locale());
    assert_eq!(view.save_button_title().unwrap(), "Speichern");
}
