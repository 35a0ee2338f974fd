//! Resume Review Frontend App
//!
//! Attaches the controllers to the server-rendered page and hosts the
//! alert area.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::AlertHost;
use crate::config::AppConfig;
use crate::dom;
use crate::notifications::Notifier;
use crate::store::NotificationState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(NotificationState::default());
    provide_context(store);

    let notifier = Notifier::new(store, config.alert_dismiss_ms);
    bind_page(&config, notifier);

    view! { <AlertHost /> }
}

/// Wire every controller the current page has markup for
fn bind_page(config: &AppConfig, notifier: Notifier) {
    let Some(document) = dom::document() else {
        log::error!("[APP] no document, nothing to bind");
        return;
    };

    dom::bind_language(&document, &config.default_language);
    dom::bind_corrections(&document, config.apply_endpoint.clone(), notifier);
    dom::bind_form_guards(&document, notifier);

    log::info!("[APP] page ready, language {}", dom::current_language());
}
