//! DOM Adapters
//!
//! web-sys implementations of the controller views and the event wiring
//! that drives them. Handlers are registered once and live for the page.

mod corrections;
mod forms;
mod language;
mod page;

pub use corrections::bind_corrections;
pub use forms::bind_form_guards;
pub use language::{bind_language, current_language};
pub use page::{alert_mount_point, read_config};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget};

pub(crate) fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// All elements matching `selector`, in document order
pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("[DOM] bad selector {}: {:?}", selector, err);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Element that fired `ev`, if it is one
pub(crate) fn event_element(ev: &Event) -> Option<Element> {
    ev.target()?.dyn_into::<Element>().ok()
}

/// Register `handler` for `event` on `target` for the page lifetime
pub(crate) fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::error!("[DOM] could not register {} handler: {:?}", event, err);
    }
    closure.forget();
}
