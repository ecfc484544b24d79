use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::FieldName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Navigation,
    Validation,
    Render,
    Export,
    Catalog,
    Config,
    Unexpected,
}

#[derive(Debug, Error)]
pub enum SummitError {
    #[error("navigation error: {0}")]
    Navigation(String),
    #[error("{field}: {message}")]
    Validation { field: FieldName, message: String },
    #[error("render error: {0}")]
    Render(String),
    #[error("export error: {0}")]
    Export(String),
    #[error("catalog error: {0}")]
    Catalog(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl SummitError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Navigation(_) => ErrorCode::Navigation,
            Self::Validation { .. } => ErrorCode::Validation,
            Self::Render(_) => ErrorCode::Render,
            Self::Export(_) => ErrorCode::Export,
            Self::Catalog(_) => ErrorCode::Catalog,
            Self::Config(_) => ErrorCode::Config,
            Self::Unexpected(_) => ErrorCode::Unexpected,
        }
    }

    /// Text shown to the visitor; internal detail stays in the log.
    pub fn user_message(&self) -> String {
        match self {
            Self::Navigation(_) => "Navigation failed. Please try again.".to_string(),
            Self::Validation { message, .. } => message.clone(),
            Self::Render(_) => "Speaker information not available.".to_string(),
            Self::Export(_) => {
                "Unable to download confirmation. Please try printing instead.".to_string()
            }
            Self::Catalog(_) => "Unable to load speakers. Please refresh the page.".to_string(),
            Self::Config(_) => "Settings could not be loaded; defaults are in use.".to_string(),
            Self::Unexpected(_) => {
                "An error occurred while loading the application. Please refresh the page."
                    .to_string()
            }
        }
    }
}

impl From<serde_json::Error> for SummitError {
    fn from(value: serde_json::Error) -> Self {
        Self::Catalog(value.to_string())
    }
}

/// Serializable snapshot of an error, as surfaced to the UI banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
}

impl ErrorReport {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<&SummitError> for ErrorReport {
    fn from(value: &SummitError) -> Self {
        Self {
            code: value.code(),
            message: value.user_message(),
        }
    }
}
