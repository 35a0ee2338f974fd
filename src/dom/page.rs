//! Page Bootstrap Helpers

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::document;
use crate::config::AppConfig;
use crate::error::ConfigError;

/// Configuration from `<body data-*>` attributes
pub fn read_config() -> Result<AppConfig, ConfigError> {
    let body = document().and_then(|d| d.body());
    AppConfig::from_attributes(|name| body.as_ref().and_then(|b| b.get_attribute(name)))
}

/// Fresh element at the top of `.container` (or `<body>`) for alerts
pub fn alert_mount_point() -> Option<HtmlElement> {
    let document = document()?;
    let mount: HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
    mount.set_class_name("alert-host-root");

    let parent: HtmlElement = match document.query_selector(".container").ok().flatten() {
        Some(container) => container.dyn_into().ok()?,
        None => document.body()?,
    };
    parent.insert_before(&mount, parent.first_child().as_ref()).ok()?;
    Some(mount)
}
