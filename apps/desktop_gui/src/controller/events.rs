//! Status messages and error presentation for the desktop shell.

use std::any::Any;

use shared::error::{ErrorCode, ErrorReport, SummitError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBannerSeverity {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    pub severity: StatusBannerSeverity,
    pub heading: &'static str,
    pub message: String,
}

impl StatusBanner {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: StatusBannerSeverity::Info,
            heading: "Notice",
            message: message.into(),
        }
    }

    pub fn from_report(report: &ErrorReport) -> Self {
        Self {
            severity: StatusBannerSeverity::Error,
            heading: err_label(report.code),
            message: report.message.clone(),
        }
    }
}

pub fn err_label(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::Navigation => "Navigation",
        ErrorCode::Validation => "Registration",
        ErrorCode::Render => "Speakers",
        ErrorCode::Export => "Download",
        ErrorCode::Catalog => "Program data",
        ErrorCode::Config => "Settings",
        ErrorCode::Unexpected => "Unexpected",
    }
}

/// Turns a caught panic payload into the generic failure.
pub fn panic_to_error(payload: &(dyn Any + Send)) -> SummitError {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string());
    SummitError::Unexpected(detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_banner_uses_user_message() {
        let err = SummitError::Export("disk full".into());
        let banner = StatusBanner::from_report(&ErrorReport::from(&err));
        assert_eq!(banner.severity, StatusBannerSeverity::Error);
        assert_eq!(banner.heading, "Download");
        assert_eq!(
            banner.message,
            "Unable to download confirmation. Please try printing instead."
        );
    }

    #[test]
    fn panic_payloads_become_unexpected_errors() {
        let caught = std::panic::catch_unwind(|| panic!("page exploded")).unwrap_err();
        let err = panic_to_error(caught.as_ref());
        assert!(matches!(&err, SummitError::Unexpected(detail) if detail == "page exploded"));
        assert_eq!(
            err.user_message(),
            "An error occurred while loading the application. Please refresh the page."
        );

        let formatted = std::panic::catch_unwind(|| panic!("row {}", 7)).unwrap_err();
        assert!(matches!(
            panic_to_error(formatted.as_ref()),
            SummitError::Unexpected(detail) if detail == "row 7"
        ));
    }
}
