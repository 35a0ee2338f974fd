//! Error Types
//!
//! Every variant here is recoverable: handlers log it, surface a
//! notification where the user needs one, and leave the page interactive.

use thiserror::Error;

/// Failure of a correction-apply round trip
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApplyError {
    #[error("request could not be sent: {0}")]
    Transport(String),

    #[error("server responded with status {status}: {message:?}")]
    Status { status: u16, message: Option<String> },

    #[error("malformed response body: {0}")]
    Malformed(String),

    #[error("response did not contain corrected text")]
    MissingCorrectedText,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LanguageError {
    #[error("unsupported language code '{0}'")]
    Unsupported(String),
}

/// Blocking form problems; the message is shown to the user as-is
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a file to upload.")]
    MissingFile,

    #[error("Please paste your resume text.")]
    EmptyResumeText,

    #[error("Resume text is too short. Please provide more content.")]
    ResumeTextTooShort,

    #[error("Please provide a more detailed job description for better results.")]
    JobDescriptionTooShort,

    #[error("Please select at least one correction to apply.")]
    NoCorrectionSelected,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}
