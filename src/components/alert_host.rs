//! Alert Host Component
//!
//! Renders the notification store as dismissible Bootstrap alerts.

use leptos::prelude::*;

use crate::store::{store_alerts, store_dismiss_alert, use_notification_store};

#[component]
pub fn AlertHost() -> impl IntoView {
    let store = use_notification_store();

    view! {
        <div class="alert-host">
            <For
                each=move || store_alerts(&store)
                key=|alert| alert.id
                children=move |alert| {
                    let id = alert.id;
                    view! {
                        <div
                            class=format!("alert {} alert-dismissible fade show", alert.kind.css_class())
                            role="alert"
                        >
                            {alert.message}
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Close"
                                on:click=move |_| store_dismiss_alert(&store, id)
                            ></button>
                        </div>
                    }
                }
            />
        </div>
    }
}
