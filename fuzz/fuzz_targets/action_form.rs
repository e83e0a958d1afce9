#![no_main]

use libfuzzer_sys::fuzz_target;
use mvc::{Locale, PortletConfig, PortletRequest, PortletResponse, TemplatePortlet};
use params::{FormData, Limits};

fuzz_target!(|data: &[u8]| {
    let Ok(portlet) = TemplatePortlet::init(PortletConfig::default()) else {
        return;
    };
    let Ok(form) = FormData::from_urlencoded(data, &Limits::for_testing()) else {
        return;
    };

    // The action phase never fails and always leaves a decodable model.
    let mut response = PortletResponse::new("fuzz_", Locale::root());
    portlet.process_action(&PortletRequest::default(), &form, &mut response);
    let request = PortletRequest::new(response.render_parameters().clone());
    let mut render = PortletResponse::new("fuzz_", Locale::root());
    let _ = portlet.render(&request, &mut render);
});
