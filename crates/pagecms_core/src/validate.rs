//! Field validation against a section's schema snapshot.
//!
//! # Responsibility
//! - Report every schema violation in one pass as human-readable strings.
//! - Stay advisory at this layer; `SectionService` turns the report into a
//!   gate before field edits are persisted.
//!
//! # Invariants
//! - Validation never fails fast and never returns an `Err`; user input
//!   problems are data, not errors.

use crate::model::section::{DynamicSection, FieldType};
use serde_json::Value;
use url::Url;

/// Outcome of validating one section (or one form).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Checks `section.fields` against `section.schema`.
///
/// Rules:
/// - required fields must be present and non-empty;
/// - present `link` values must parse as an absolute URL, or start with
///   `/` (site-relative) or `#` (in-page anchor);
/// - present `select` values must be one of the spec's declared options.
///   Select values reach inline CSS in the renderers, so free-form text
///   is rejected here rather than trusted downstream.
pub fn validate_section(section: &DynamicSection) -> ValidationReport {
    let mut errors = Vec::new();

    for spec in &section.schema {
        let value = section.fields.get(&spec.name);

        if spec.required && is_empty_value(value) {
            errors.push(format!("{} is required", spec.label));
        }

        if spec.field_type == FieldType::Link {
            if let Some(Value::String(link)) = value {
                if !link.is_empty() && !is_valid_link(link) {
                    errors.push(format!("{} must be a valid URL", spec.label));
                }
            }
        }

        if spec.field_type == FieldType::Select {
            if let (Some(Value::String(choice)), Some(options)) = (value, &spec.options) {
                if !choice.is_empty() && !options.iter().any(|option| option == choice) {
                    errors.push(format!(
                        "{} must be one of: {}",
                        spec.label,
                        options.join(", ")
                    ));
                }
            }
        }
    }

    ValidationReport::from_errors(errors)
}

fn is_empty_value(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.is_empty(),
        Some(_) => false,
    }
}

fn is_valid_link(link: &str) -> bool {
    Url::parse(link).is_ok() || link.starts_with('/') || link.starts_with('#')
}
