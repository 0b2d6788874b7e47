//! Validation outcome types.
//!
//! Every validator reports through these structs rather than an error type:
//! all outcomes are recoverable by construction, and the caller decides how
//! to present the `message` to the user.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Payload carried by validators that parse their input (number, date).
/// Only populated on success.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParsedValue {
    Number(f64),
    Date(DateTime<Utc>),
}

impl ParsedValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParsedValue::Number(n) => Some(*n),
            ParsedValue::Date(_) => None,
        }
    }

    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            ParsedValue::Date(d) => Some(*d),
            ParsedValue::Number(_) => None,
        }
    }
}

/// Outcome of a single field validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<ParsedValue>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
            value: None,
        }
    }

    pub fn ok_with(value: ParsedValue) -> Self {
        Self {
            is_valid: true,
            message: String::new(),
            value: Some(value),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
            value: None,
        }
    }
}

/// Per-rule password feedback. Always populated, even on failure, so the UI
/// can render a checklist next to the field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordRequirements {
    pub min_length: bool,
    pub has_upper_case: bool,
    pub has_lower_case: bool,
    pub has_numbers: bool,
    pub has_symbols: bool,
}

impl PasswordRequirements {
    pub fn all_met(&self) -> bool {
        self.min_length
            && self.has_upper_case
            && self.has_lower_case
            && self.has_numbers
            && self.has_symbols
    }

    /// Human-readable names of the requirements that failed, in checklist
    /// order.
    pub fn failed_names(&self) -> Vec<&'static str> {
        let mut failed = Vec::new();
        if !self.min_length {
            failed.push("at least 8 characters");
        }
        if !self.has_upper_case {
            failed.push("an uppercase letter");
        }
        if !self.has_lower_case {
            failed.push("a lowercase letter");
        }
        if !self.has_numbers {
            failed.push("a number");
        }
        if !self.has_symbols {
            failed.push("a special character");
        }
        failed
    }
}

/// Outcome of password validation. Unlike the other validators this reports
/// every failed rule at once, because password feedback must be exhaustive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordReport {
    pub is_valid: bool,
    pub message: String,
    pub requirements: PasswordRequirements,
}

impl PasswordReport {
    /// Flattens the report into a plain `ValidationResult`, dropping the
    /// per-rule breakdown. Used when a password field participates in a
    /// generic rule set.
    pub fn into_result(self) -> ValidationResult {
        ValidationResult {
            is_valid: self.is_valid,
            message: self.message,
            value: None,
        }
    }
}
