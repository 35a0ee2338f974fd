//! Language Controls
//!
//! Markup contract:
//! - selector buttons `[data-lang]` (any element except inputs)
//! - form radios `input[type=radio][name=language]`, value is the code
//! - mirrored fields `input[type=hidden][name=language]`
//! - translatable `[data-i18n]` (text) and `[data-i18n-placeholder]`

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use super::{event_element, listen, query_all};
use crate::i18n::{
    LanguageCode, LanguageController, LanguageView, SlotKind, Translatable, TranslationTable, Trigger,
};

const SELECTOR_BUTTONS: &str = "[data-lang]:not(input)";
const LANG_ATTR: &str = "data-lang";
const LANGUAGE_RADIOS: &str = "input[type=\"radio\"][name=\"language\"]";
const MIRRORED_FIELDS: &str = "input[type=\"hidden\"][name=\"language\"]";
const TEXT_KEY_ATTR: &str = "data-i18n";
const PLACEHOLDER_KEY_ATTR: &str = "data-i18n-placeholder";
const ACTIVE_CLASS: &str = "active";

thread_local! {
    static LANGUAGE: RefCell<Option<LanguageController<DomLanguageView>>> = const { RefCell::new(None) };
}

/// The page's current language; the default until `bind_language` ran
pub fn current_language() -> LanguageCode {
    LANGUAGE.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(|controller| controller.current().clone())
            .unwrap_or_else(LanguageCode::fallback)
    })
}

pub struct DomLanguageView {
    document: Document,
}

impl DomLanguageView {
    fn set_active(element: &Element, active: bool) {
        if let Err(err) = element.class_list().toggle_with_force(ACTIVE_CLASS, active) {
            log::warn!("[I18N] could not toggle selector class: {:?}", err);
        }
        let _ = element.set_attribute("aria-pressed", if active { "true" } else { "false" });
    }

    fn collect(&self, attr: &str, kind: SlotKind) -> Vec<Translatable<Element>> {
        query_all(&self.document, &format!("[{}]", attr))
            .into_iter()
            .filter_map(|node| {
                let key = node.get_attribute(attr)?;
                Some(Translatable { node, key, kind })
            })
            .collect()
    }
}

impl LanguageView for DomLanguageView {
    type Node = Element;

    fn activate_selectors(&mut self, code: &LanguageCode) {
        for button in query_all(&self.document, SELECTOR_BUTTONS) {
            let active = button.get_attribute(LANG_ATTR).as_deref() == Some(code.as_str());
            Self::set_active(&button, active);
        }

        for radio in query_all(&self.document, LANGUAGE_RADIOS) {
            let Some(input) = radio.dyn_ref::<HtmlInputElement>() else { continue };
            let active = input.value() == code.as_str();
            input.set_checked(active);

            // Styled labels stand in for the hidden radio
            let id = input.id();
            if !id.is_empty() {
                if let Ok(Some(label)) = self.document.query_selector(&format!("label[for=\"{}\"]", id)) {
                    Self::set_active(&label, active);
                }
            }
        }
    }

    fn mirror_form_fields(&mut self, code: &LanguageCode) {
        for field in query_all(&self.document, MIRRORED_FIELDS) {
            if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
                input.set_value(code.as_str());
            }
        }
    }

    fn translatables(&self) -> Vec<Translatable<Element>> {
        let mut slots = self.collect(TEXT_KEY_ATTR, SlotKind::Text);
        slots.extend(self.collect(PLACEHOLDER_KEY_ATTR, SlotKind::Placeholder));
        slots
    }

    fn render_translation(&mut self, node: &Element, kind: SlotKind, text: &str) {
        match kind {
            SlotKind::Text => node.set_text_content(Some(text)),
            SlotKind::Placeholder => {
                if let Err(err) = node.set_attribute("placeholder", text) {
                    log::warn!("[I18N] could not set placeholder: {:?}", err);
                }
            }
        }
    }

    fn set_document_language(&mut self, code: &LanguageCode) {
        if let Some(root) = self.document.document_element() {
            let _ = root.set_attribute("lang", code.as_str());
        }
    }

    fn current_href(&self) -> Option<String> {
        web_sys::window()?.location().href().ok()
    }

    fn navigate(&mut self, href: &str) {
        let Some(window) = web_sys::window() else { return };
        if let Err(err) = window.location().set_href(href) {
            log::error!("[I18N] navigation to {} failed: {:?}", href, err);
        }
    }
}

/// Translations are pre-populated by the page as `window.translations`
fn load_translations() -> TranslationTable {
    let Some(window) = web_sys::window() else {
        return TranslationTable::default();
    };

    match js_sys::Reflect::get(&window, &JsValue::from_str("translations")) {
        Ok(value) if !value.is_undefined() && !value.is_null() => {
            serde_wasm_bindgen::from_value(value).unwrap_or_else(|err| {
                log::error!("[I18N] window.translations has an unexpected shape: {}", err);
                TranslationTable::default()
            })
        }
        _ => TranslationTable::new(),
    }
}

fn select_from_user(code: &str) {
    LANGUAGE.with(|cell| {
        let mut slot = cell.borrow_mut();
        let Some(controller) = slot.as_mut() else { return };
        if let Err(err) = controller.select_language(code, Trigger::User) {
            log::warn!("[I18N] {}", err);
        }
    });
}

/// Apply the initial language and wire both selector groups
pub fn bind_language(document: &Document, default: &LanguageCode) {
    let view = DomLanguageView {
        document: document.clone(),
    };
    let table = load_translations();
    if table.is_empty() {
        log::warn!("[I18N] no translations loaded, content stays as rendered");
    }
    let controller = LanguageController::start(table, view, default.clone());
    LANGUAGE.with(|cell| *cell.borrow_mut() = Some(controller));

    listen(document, "click", |ev| {
        let Some(element) = event_element(&ev) else { return };
        let Ok(Some(button)) = element.closest(SELECTOR_BUTTONS) else { return };
        let Some(code) = button.get_attribute(LANG_ATTR) else { return };
        ev.prevent_default();
        select_from_user(&code);
    });

    listen(document, "change", |ev| {
        let Some(element) = event_element(&ev) else { return };
        if !element.matches(LANGUAGE_RADIOS).unwrap_or(false) {
            return;
        }
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            select_from_user(&input.value());
        }
    });
}
