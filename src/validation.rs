//! Form Guards
//!
//! Checks run on submit before anything reaches the server.

use crate::error::ValidationError;

/// Minimum trimmed length for pasted resume text and job descriptions
pub const MIN_TEXT_CHARS: usize = 50;

/// How the resume is being provided on the analyze form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeSource<'a> {
    Upload { files_selected: usize },
    Paste { text: &'a str },
    /// Neither option checked; the server decides
    Unspecified,
}

pub fn validate_resume(source: ResumeSource<'_>) -> Result<(), ValidationError> {
    match source {
        ResumeSource::Upload { files_selected: 0 } => Err(ValidationError::MissingFile),
        ResumeSource::Upload { .. } | ResumeSource::Unspecified => Ok(()),
        ResumeSource::Paste { text } => {
            let text = text.trim();
            if text.is_empty() {
                Err(ValidationError::EmptyResumeText)
            } else if text.chars().count() < MIN_TEXT_CHARS {
                Err(ValidationError::ResumeTextTooShort)
            } else {
                Ok(())
            }
        }
    }
}

pub fn validate_job_description(text: &str) -> Result<(), ValidationError> {
    if text.trim().chars().count() < MIN_TEXT_CHARS {
        Err(ValidationError::JobDescriptionTooShort)
    } else {
        Ok(())
    }
}
