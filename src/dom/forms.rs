//! Form Guards
//!
//! Block submission of the analyze and cover-letter forms when their input
//! would be rejected anyway.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement, HtmlTextAreaElement};

use super::{current_language, listen};
use crate::error::ValidationError;
use crate::notifications::{AlertKind, Notifier};
use crate::validation::{validate_job_description, validate_resume, ResumeSource};

const RESUME_FORM: &str = "form[action*=\"analyze\"]";
const COVER_LETTER_FORM: &str = "form[action*=\"anschreiben\"]";

fn input(document: &Document, id: &str) -> Option<HtmlInputElement> {
    document.get_element_by_id(id)?.dyn_into().ok()
}

/// Value of an input or textarea
fn field_value(document: &Document, id: &str) -> Option<String> {
    let element = document.get_element_by_id(id)?;
    if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        return Some(textarea.value());
    }
    element.dyn_ref::<HtmlInputElement>().map(|input| input.value())
}

fn is_checked(document: &Document, id: &str) -> bool {
    input(document, id).map(|radio| radio.checked()).unwrap_or(false)
}

fn check_resume_form(document: &Document) -> Result<(), ValidationError> {
    if is_checked(document, "upload-option") {
        if let Some(file_input) = input(document, "resume-file") {
            let files_selected = file_input.files().map(|files| files.length() as usize).unwrap_or(0);
            return validate_resume(ResumeSource::Upload { files_selected });
        }
    } else if is_checked(document, "paste-option") {
        if let Some(text) = field_value(document, "resume-text") {
            return validate_resume(ResumeSource::Paste { text: &text });
        }
    }
    validate_resume(ResumeSource::Unspecified)
}

fn check_cover_letter_form(document: &Document) -> Result<(), ValidationError> {
    match field_value(document, "job-description") {
        Some(text) => validate_job_description(&text),
        None => Ok(()),
    }
}

pub fn bind_form_guards(document: &Document, notifier: Notifier) {
    let guards: [(&str, fn(&Document) -> Result<(), ValidationError>); 2] = [
        (RESUME_FORM, check_resume_form),
        (COVER_LETTER_FORM, check_cover_letter_form),
    ];

    for (selector, check) in guards {
        let Ok(Some(form)) = document.query_selector(selector) else { continue };
        let document = document.clone();
        let selector = selector.to_string();
        listen(&form, "submit", move |ev| match check(&document) {
            Ok(()) => {
                log::info!("[FORMS] submitting {} in {}", selector, current_language());
            }
            Err(err) => {
                ev.prevent_default();
                log::info!("[FORMS] blocked {}: {}", selector, err);
                notifier.notify(AlertKind::Warning, &err.to_string());
            }
        });
    }
}
