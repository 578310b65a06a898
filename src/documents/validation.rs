//! Input validation for document requests.
//!
//! Validation failures block rendering and persistence; the assembled message
//! is returned to the caller verbatim so the form can highlight what to fix.

use chrono::NaiveDate;
use std::fmt;

/// A single field-level validation error.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// Human-readable error message
    pub message: String,
    /// Suggestion for how to fix the error
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn empty_field(field: &str, label: &str) -> Self {
        Self::new(field, format!("{} must not be empty", label))
            .with_suggestion(format!("Please fill in the {}", label.to_lowercase()))
    }

    pub fn invalid_date(field: &str, value: &str) -> Self {
        Self::new(field, format!("'{}' is not a valid date", value))
            .with_suggestion("Use the format YYYY-MM-DD, e.g. 1990-06-15")
    }

    pub fn invalid_amount(field: &str, value: &str) -> Self {
        Self::new(field, format!("'{}' is not a valid amount", value))
            .with_suggestion("Enter a non-negative number, e.g. 100.00")
    }

    pub fn invalid_year(field: &str, value: &str) -> Self {
        Self::new(field, format!("'{}' is not a valid year", value))
            .with_suggestion("Enter a four-digit year not earlier than 1900")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". {}", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors with formatted output.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Formatted multi-line message for the whole batch.
    pub fn to_message(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }

        let mut parts = vec![format!(
            "Validation failed: {} error(s) found\n",
            self.errors.len()
        )];

        for (i, error) in self.errors.iter().enumerate() {
            parts.push(format!("{}. {}", i + 1, error));
        }

        parts.push(String::new());
        parts.push("Please correct the fields above and try again.".to_string());

        parts.join("\n")
    }

    pub fn into_result(self) -> Result<(), String> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.to_message())
        }
    }
}

// ============================================================================
// Validation functions
// ============================================================================

/// Validate that a string is not empty after trimming.
pub fn validate_required(value: &str, field: &str, label: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.add(ValidationError::empty_field(field, label));
    }
}

/// Validate an ISO date string (YYYY-MM-DD).
pub fn validate_date(value: &str, field: &str, errors: &mut ValidationErrors) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(ValidationError::empty_field(field, "Date"));
        return;
    }
    if NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").is_err() {
        errors.add(ValidationError::invalid_date(field, trimmed));
    }
}

/// Validate an ISO date string, skipping empty values.
pub fn validate_date_optional(value: &str, field: &str, errors: &mut ValidationErrors) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return;
    }
    if NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").is_err() {
        errors.add(ValidationError::invalid_date(field, trimmed));
    }
}

/// Validate a peso amount string (non-negative decimal).
pub fn validate_amount(value: &str, field: &str, errors: &mut ValidationErrors) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return; // templates substitute a blank-line placeholder
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v >= 0.0 => {}
        _ => errors.add(ValidationError::invalid_amount(field, trimmed)),
    }
}

/// Validate a four-digit year not earlier than 1900.
pub fn validate_year(value: &str, field: &str, errors: &mut ValidationErrors) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(ValidationError::empty_field(field, "Year"));
        return;
    }
    match trimmed.parse::<i32>() {
        Ok(y) if (1900..=9999).contains(&y) => {}
        _ => errors.add(ValidationError::invalid_year(field, trimmed)),
    }
}
