//! Language Synchronization Controller
//!
//! Owns the current language and pushes it to every dependent control in a
//! single synchronous pass, so duplicated selector groups never disagree.

use super::nav::{language_from_href, with_language_param};
use super::translations::{Lookup, TranslationTable};
use super::LanguageCode;
use crate::error::LanguageError;

/// What caused a language change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Page load; never navigates
    InitialLoad,
    /// Explicit click or radio change; persists through navigation
    User,
}

/// Which part of a translatable element receives the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Text,
    Placeholder,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Translatable<N> {
    pub node: N,
    pub key: String,
    pub kind: SlotKind,
}

/// Everything the controller touches outside its own state
pub trait LanguageView {
    type Node;

    /// Mark selectors for `code` active and every other selector inactive
    fn activate_selectors(&mut self, code: &LanguageCode);
    /// Set every form field that carries the language on submit
    fn mirror_form_fields(&mut self, code: &LanguageCode);
    fn translatables(&self) -> Vec<Translatable<Self::Node>>;
    fn render_translation(&mut self, node: &Self::Node, kind: SlotKind, text: &str);
    fn set_document_language(&mut self, code: &LanguageCode);
    fn current_href(&self) -> Option<String>;
    fn navigate(&mut self, href: &str);
}

/// Summary of one `select_language` pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectReport {
    pub translated: usize,
    pub fallbacks: usize,
    pub missing: Vec<String>,
    pub table_missing: bool,
    pub navigated: bool,
}

pub struct LanguageController<V> {
    current: LanguageCode,
    table: TranslationTable,
    view: V,
}

impl<V: LanguageView> LanguageController<V> {
    /// Resolve the language from the page URL (or `default`) and apply it
    pub fn start(table: TranslationTable, view: V, default: LanguageCode) -> Self {
        let initial = view
            .current_href()
            .and_then(|href| language_from_href(&href))
            .unwrap_or(default);

        let mut controller = Self {
            current: initial.clone(),
            table,
            view,
        };
        if let Err(err) = controller.select_language(initial.as_str(), Trigger::InitialLoad) {
            log::error!("[I18N] initial language rejected: {}", err);
        }
        controller
    }

    pub fn current(&self) -> &LanguageCode {
        &self.current
    }

    #[cfg(test)]
    fn view(&self) -> &V {
        &self.view
    }

    pub fn select_language(&mut self, raw: &str, trigger: Trigger) -> Result<SelectReport, LanguageError> {
        let code = LanguageCode::parse(raw)?;
        let mut report = SelectReport::default();

        if !self.table.has_language(&code) {
            log::error!("[I18N] no translation table for '{}', leaving content as is", code);
            report.table_missing = true;
        }

        self.current = code.clone();
        self.view.activate_selectors(&code);
        self.view.mirror_form_fields(&code);

        if !report.table_missing {
            for slot in self.view.translatables() {
                match self.table.lookup(&code, &slot.key) {
                    Lookup::Found(text) => {
                        self.view.render_translation(&slot.node, slot.kind, text);
                        report.translated += 1;
                    }
                    Lookup::Fallback(text) => {
                        log::debug!("[I18N] '{}' missing for {}, using default", slot.key, code);
                        self.view.render_translation(&slot.node, slot.kind, text);
                        report.fallbacks += 1;
                    }
                    Lookup::Missing => {
                        log::warn!("[I18N] no translation for '{}' in {} or default", slot.key, code);
                        report.missing.push(slot.key);
                    }
                }
            }
        }

        self.view.set_document_language(&code);

        if trigger == Trigger::User {
            report.navigated = self.persist(&code);
        }

        log::info!(
            "[I18N] language set to {} ({}): {} translated, {} fallback, {} missing, reload {}",
            code,
            code.label(),
            report.translated,
            report.fallbacks,
            report.missing.len(),
            report.navigated
        );
        Ok(report)
    }

    fn persist(&mut self, code: &LanguageCode) -> bool {
        let Some(href) = self.view.current_href() else {
            log::warn!("[I18N] no current location, language will not persist");
            return false;
        };
        if language_from_href(&href).as_ref() == Some(code) {
            return false;
        }

        match with_language_param(&href, code) {
            Ok(target) if target != href => {
                self.view.navigate(&target);
                true
            }
            Ok(_) => false,
            Err(err) => {
                log::warn!("[I18N] cannot rewrite '{}': {}", href, err);
                false
            }
        }
    }
}
