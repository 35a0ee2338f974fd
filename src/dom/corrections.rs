//! Correction Controls
//!
//! Markup contract:
//! - checkbox `input.correction-checkbox[data-correction-id]`
//! - payload `<script type="application/json" id="correction-data-{id}">`
//! - text buffer `#resume-text-content`
//! - trigger `#apply-corrections-btn`

use std::cell::RefCell;
use std::rc::Rc;

use leptos::task::spawn_local;
use serde_json::Value;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlInputElement, HtmlTextAreaElement};

use super::{event_element, listen, query_all};
use crate::api;
use crate::corrections::{ApplyOutcome, CorrectionController, CorrectionView};
use crate::models::CorrectionId;
use crate::notifications::{AlertKind, Notifier};

const CHECKBOX_CLASS_SELECTOR: &str = ".correction-checkbox";
const CHECKBOX_SELECTOR: &str = "input.correction-checkbox[data-correction-id]";
const ID_ATTR: &str = "data-correction-id";
const PAYLOAD_ID_PREFIX: &str = "correction-data-";
const TEXT_BUFFER_ID: &str = "resume-text-content";
const APPLY_BUTTON_ID: &str = "apply-corrections-btn";

pub struct DomCorrectionView {
    document: Document,
    notifier: Notifier,
}

impl DomCorrectionView {
    fn checkboxes(&self) -> Vec<HtmlInputElement> {
        query_all(&self.document, CHECKBOX_SELECTOR)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
            .collect()
    }
}

impl CorrectionView for DomCorrectionView {
    fn checked_ids(&self) -> Vec<CorrectionId> {
        self.checkboxes()
            .into_iter()
            .filter(|input| input.checked())
            .filter_map(|input| input.get_attribute(ID_ATTR))
            .map(CorrectionId::new)
            .collect()
    }

    fn payload(&self, id: &CorrectionId) -> Option<Value> {
        let element = self
            .document
            .get_element_by_id(&format!("{}{}", PAYLOAD_ID_PREFIX, id))?;
        let raw = element.text_content()?;
        match serde_json::from_str(&raw) {
            Ok(payload) => Some(payload),
            Err(err) => {
                log::warn!("[CORRECTIONS] payload for {} is not valid JSON: {}", id, err);
                None
            }
        }
    }

    fn resume_text(&self) -> String {
        let Some(element) = self.document.get_element_by_id(TEXT_BUFFER_ID) else {
            log::warn!("[CORRECTIONS] text buffer #{} not found", TEXT_BUFFER_ID);
            return String::new();
        };
        match element.dyn_ref::<HtmlTextAreaElement>() {
            Some(textarea) => textarea.value(),
            None => element.text_content().unwrap_or_default(),
        }
    }

    fn set_resume_text(&mut self, text: &str) {
        let Some(element) = self.document.get_element_by_id(TEXT_BUFFER_ID) else {
            log::warn!("[CORRECTIONS] text buffer #{} not found", TEXT_BUFFER_ID);
            return;
        };
        match element.dyn_ref::<HtmlTextAreaElement>() {
            Some(textarea) => textarea.set_value(text),
            None => element.set_text_content(Some(text)),
        }
    }

    fn uncheck(&mut self, id: &CorrectionId) {
        for input in self.checkboxes() {
            if input.get_attribute(ID_ATTR).as_deref() == Some(id.as_str()) {
                input.set_checked(false);
            }
        }
    }

    fn set_apply_enabled(&mut self, enabled: bool) {
        let Some(element) = self.document.get_element_by_id(APPLY_BUTTON_ID) else {
            return;
        };
        match element.dyn_ref::<HtmlButtonElement>() {
            Some(button) => button.set_disabled(!enabled),
            None if enabled => {
                let _ = element.remove_attribute("disabled");
            }
            None => {
                let _ = element.set_attribute("disabled", "");
            }
        }
    }

    fn notify(&mut self, kind: AlertKind, message: &str) {
        self.notifier.notify(kind, message);
    }
}

/// Wire checkbox changes and the apply trigger. Pages without the trigger
/// are left alone.
pub fn bind_corrections(document: &Document, endpoint: String, notifier: Notifier) {
    let Some(trigger) = document.get_element_by_id(APPLY_BUTTON_ID) else {
        log::debug!("[CORRECTIONS] no apply control on this page");
        return;
    };

    let view = DomCorrectionView {
        document: document.clone(),
        notifier,
    };
    let controller = Rc::new(RefCell::new(CorrectionController::new(view)));
    log::info!(
        "[CORRECTIONS] ready with {} restored selection(s)",
        controller.borrow().selection().len()
    );

    // Delegated so boxes rendered later are covered too
    {
        let controller = Rc::clone(&controller);
        listen(document, "change", move |ev| {
            let Some(element) = event_element(&ev) else { return };
            if !element.matches(CHECKBOX_CLASS_SELECTOR).unwrap_or(false) {
                return;
            }
            let Some(input) = element.dyn_ref::<HtmlInputElement>() else { return };
            let Some(id) = input.get_attribute(ID_ATTR) else {
                log::warn!("[CORRECTIONS] checkbox without {}", ID_ATTR);
                return;
            };
            controller.borrow_mut().toggle(CorrectionId::new(id), input.checked());
        });
    }

    let endpoint = Rc::new(endpoint);
    listen(&trigger, "click", move |ev| {
        ev.prevent_default();
        let request = controller.borrow_mut().begin_apply();
        let Some(request) = request else { return };

        let controller = Rc::clone(&controller);
        let endpoint = Rc::clone(&endpoint);
        spawn_local(async move {
            let result = api::apply_corrections(&endpoint, &request).await;
            let outcome = controller.borrow_mut().finish_apply(result);
            let phase = controller.borrow().phase();
            match outcome {
                ApplyOutcome::Applied { count } => {
                    log::debug!("[CORRECTIONS] {} applied, now {:?}", count, phase);
                }
                ApplyOutcome::Failed(err) => {
                    log::debug!("[CORRECTIONS] selection kept after '{}', now {:?}", err, phase);
                }
                ApplyOutcome::Ignored => {}
            }
        });
    });
}
