//! Resume Review Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod corrections;
mod diagnostics;
mod dom;
mod error;
mod i18n;
mod models;
mod notifications;
mod store;
mod validation;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match dom::read_config() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    if let Err(err) = rolling_logger::init(config.log_level) {
        web_sys::console::error_1(&format!("logger already installed: {}", err).into());
    }
    if let Some(err) = config_error {
        log::warn!("[APP] {}, using defaults", err);
    }

    let Some(mount) = dom::alert_mount_point() else {
        log::error!("[APP] no place to mount the alert host");
        return;
    };
    leptos::mount::mount_to(mount, move || view! { <App config=config /> }).forget();
}
