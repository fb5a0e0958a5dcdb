//! Lead capture boundary.
//!
//! # Responsibility
//! - Define the request/response contract with the external lead backend.
//! - Validate contact form input before a submission is attempted.
//!
//! # Invariants
//! - The core never retries a failed submission; the caller surfaces the
//!   error and the operator resubmits.
//! - Validation problems are reported as strings, never as `Err`.

use crate::validate::ValidationReport;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Contact form payload sent to the lead backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub message: String,
}

/// Backend acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Submission failure, shown to the operator as a banner message.
#[derive(Debug)]
pub enum LeadCaptureError {
    /// Transport-level failure reaching the backend.
    Network(String),
    /// Backend reached but it refused the submission.
    Backend(String),
}

impl Display for LeadCaptureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(detail) => write!(f, "network error submitting lead: {detail}"),
            Self::Backend(detail) => write!(f, "lead backend rejected submission: {detail}"),
        }
    }
}

impl Error for LeadCaptureError {}

/// External lead capture backend.
///
/// Implementations live outside the core (HTTP client, test double); the
/// core only owns the contract and the pre-submit validation.
pub trait LeadCaptureBackend {
    fn submit(&self, request: &LeadRequest) -> Result<LeadResponse, LeadCaptureError>;
}

/// Validates a contact form before submission.
pub fn validate_lead(request: &LeadRequest) -> ValidationReport {
    let mut errors = Vec::new();

    if request.first_name.trim().is_empty() {
        errors.push("First name is required".to_string());
    }
    if request.last_name.trim().is_empty() {
        errors.push("Last name is required".to_string());
    }
    if request.email.trim().is_empty() {
        errors.push("Email is required".to_string());
    } else if !EMAIL_RE.is_match(request.email.trim()) {
        errors.push("Please enter a valid email address".to_string());
    }

    ValidationReport::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str) -> LeadRequest {
        LeadRequest {
            email: email.to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            company: String::new(),
            message: String::new(),
        }
    }

    #[test]
    fn complete_request_is_valid() {
        let report = validate_lead(&request("ada@example.com"));
        assert!(report.is_valid, "errors: {:?}", report.errors);
    }

    #[test]
    fn malformed_email_is_reported() {
        let report = validate_lead(&request("not-an-email"));
        assert!(!report.is_valid);
        assert_eq!(report.errors, vec!["Please enter a valid email address"]);
    }

    #[test]
    fn missing_names_and_email_report_all_errors_at_once() {
        let report = validate_lead(&LeadRequest::default());
        assert_eq!(report.errors.len(), 3);
    }

    struct StubBackend {
        fail: bool,
    }

    impl LeadCaptureBackend for StubBackend {
        fn submit(&self, request: &LeadRequest) -> Result<LeadResponse, LeadCaptureError> {
            if self.fail {
                return Err(LeadCaptureError::Network("connection refused".to_string()));
            }
            Ok(LeadResponse {
                success: true,
                message: Some(format!("welcome {}", request.first_name)),
            })
        }
    }

    #[test]
    fn backend_contract_surfaces_network_failures_unretried() {
        let request = request("ada@example.com");

        let ok = StubBackend { fail: false }.submit(&request).unwrap();
        assert!(ok.success);
        assert_eq!(ok.message.as_deref(), Some("welcome Ada"));

        let err = StubBackend { fail: true }.submit(&request).unwrap_err();
        assert!(err.to_string().contains("network error"));
    }
}
