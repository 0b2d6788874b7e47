//! Field validators
//!
//! Reusable validation functions for the field types that appear on stock,
//! checkout and account forms. Every validator is a pure, total function
//! over any [`FieldValue`]: it never panics and never returns an error type,
//! all failure is reported through the result struct.
//!
//! Rules run in order and the first failure wins, with one exception: the
//! password validator reports every failed requirement at once so the UI can
//! show exhaustive feedback.

use lazy_static::lazy_static;
use regex::Regex;

use crate::field::FieldValue;
use crate::result::{ParsedValue, PasswordReport, PasswordRequirements, ValidationResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

lazy_static! {
    /// local@domain.tld with a letters-only TLD of at least 2 characters
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap();

    /// Alphanumeric barcode body
    static ref BARCODE_REGEX: Regex = Regex::new(r"^[A-Za-z0-9]+$").unwrap();

    /// Script/event handler pattern for XSS detection
    static ref MALICIOUS_CONTENT_REGEX: Regex =
        Regex::new(r"(?i)(<script|javascript:|on\w+\s*=)").unwrap();
}

/// Characters accepted as password symbols.
const PASSWORD_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Longest accepted email address, per RFC 5321's overall limit.
const EMAIL_MAX_LEN: usize = 254;

/// Validate an email address.
///
/// The pattern is intentionally simpler than RFC 5322; downstream copy
/// depends on the exact accepted set and messages.
pub fn validate_email(value: &FieldValue) -> ValidationResult {
    let rendered = value.render();
    let email = rendered.as_deref().map(str::trim).unwrap_or("");

    if email.is_empty() {
        return ValidationResult::fail("Email is required");
    }
    if email.chars().count() > EMAIL_MAX_LEN {
        return ValidationResult::fail("Email address is too long");
    }
    if !EMAIL_REGEX.is_match(email) {
        return ValidationResult::fail("Please enter a valid email address");
    }
    let local = email.split_once('@').map(|(l, _)| l).unwrap_or(email);
    if email.contains("..") || local.starts_with('.') || local.ends_with('.') {
        return ValidationResult::fail("Invalid email format");
    }
    ValidationResult::ok()
}

/// Validate a password against the five account-creation requirements.
///
/// The requirements breakdown is always populated so the UI can render a
/// per-rule checklist; on failure the message names every unmet rule.
pub fn validate_password(value: &FieldValue) -> PasswordReport {
    let rendered = value.render();
    let password = rendered.as_deref().unwrap_or("");

    if password.is_empty() {
        return PasswordReport {
            is_valid: false,
            message: "Password is required".to_string(),
            requirements: PasswordRequirements::default(),
        };
    }

    let requirements = PasswordRequirements {
        min_length: password.chars().count() >= 8,
        has_upper_case: password.chars().any(|c| c.is_ascii_uppercase()),
        has_lower_case: password.chars().any(|c| c.is_ascii_lowercase()),
        has_numbers: password.chars().any(|c| c.is_ascii_digit()),
        has_symbols: password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)),
    };

    if requirements.all_met() {
        PasswordReport {
            is_valid: true,
            message: String::new(),
            requirements,
        }
    } else {
        PasswordReport {
            is_valid: false,
            message: format!(
                "Password must include {}",
                requirements.failed_names().join(", ")
            ),
            requirements,
        }
    }
}

/// Validate a product name: required, at most 100 characters, no markup or
/// script fragments.
pub fn validate_product_name(value: &FieldValue) -> ValidationResult {
    let rendered = value.render();
    let name = rendered.as_deref().map(str::trim).unwrap_or("");

    if name.is_empty() {
        return ValidationResult::fail("Product name is required");
    }
    if name.chars().count() > 100 {
        return ValidationResult::fail("Product name must be 100 characters or less");
    }
    if MALICIOUS_CONTENT_REGEX.is_match(name) {
        return ValidationResult::fail("Product name contains invalid characters");
    }
    ValidationResult::ok()
}

/// Configuration for [`validate_number`].
#[derive(Debug, Clone)]
pub struct NumberRules {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub required: bool,
    pub label: String,
}

impl Default for NumberRules {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            required: false,
            label: "Value".to_string(),
        }
    }
}

/// Validate a numeric field. Text input is parsed as floating point; a
/// `FieldValue::Number` is used directly. On success the result carries the
/// parsed value.
pub fn validate_number(value: &FieldValue, rules: &NumberRules) -> ValidationResult {
    if value.is_empty() {
        if rules.required {
            return ValidationResult::fail(format!("{} is required", rules.label));
        }
        return ValidationResult::ok();
    }

    let parsed = match value {
        FieldValue::Number(n) => Some(*n),
        FieldValue::Text(s) => s.trim().parse::<f64>().ok(),
        FieldValue::Bool(_) | FieldValue::Absent => None,
    };
    let n = match parsed {
        Some(n) if n.is_finite() => n,
        _ => return ValidationResult::fail(format!("{} must be a valid number", rules.label)),
    };

    if let Some(min) = rules.min {
        if n < min {
            return ValidationResult::fail(format!("{} must be at least {}", rules.label, min));
        }
    }
    if let Some(max) = rules.max {
        if n > max {
            return ValidationResult::fail(format!("{} must be at most {}", rules.label, max));
        }
    }
    ValidationResult::ok_with(ParsedValue::Number(n))
}

/// Configuration for [`validate_text`].
#[derive(Debug, Clone)]
pub struct TextRules {
    pub max_length: usize,
    pub required: bool,
    pub label: String,
}

impl Default for TextRules {
    fn default() -> Self {
        Self {
            max_length: 500,
            required: false,
            label: "Text".to_string(),
        }
    }
}

/// Validate a free-text field: optional by default, length-capped, and
/// rejected when it contains markup or script fragments.
pub fn validate_text(value: &FieldValue, rules: &TextRules) -> ValidationResult {
    if value.is_empty() {
        if rules.required {
            return ValidationResult::fail(format!("{} is required", rules.label));
        }
        return ValidationResult::ok();
    }

    let rendered = value.render();
    let text = rendered.as_deref().unwrap_or("");
    if text.chars().count() > rules.max_length {
        return ValidationResult::fail(format!(
            "{} must be {} characters or less",
            rules.label, rules.max_length
        ));
    }
    if MALICIOUS_CONTENT_REGEX.is_match(text) {
        return ValidationResult::fail(format!("{} contains invalid characters", rules.label));
    }
    ValidationResult::ok()
}

/// Validate a product barcode: alphanumeric, 6 to 50 characters.
pub fn validate_barcode(value: &FieldValue) -> ValidationResult {
    let rendered = value.render();
    let barcode = rendered.as_deref().map(str::trim).unwrap_or("");

    if barcode.is_empty() {
        return ValidationResult::fail("Barcode is required");
    }
    if !BARCODE_REGEX.is_match(barcode) {
        return ValidationResult::fail("Barcode must contain only letters and numbers");
    }
    let len = barcode.chars().count();
    if !(6..=50).contains(&len) {
        return ValidationResult::fail("Barcode must be between 6 and 50 characters");
    }
    ValidationResult::ok()
}

/// Configuration for [`validate_date`].
#[derive(Debug, Clone)]
pub struct DateRules {
    pub required: bool,
    pub label: String,
    pub future_only: bool,
}

impl Default for DateRules {
    fn default() -> Self {
        Self {
            required: false,
            label: "Date".to_string(),
            future_only: false,
        }
    }
}

/// Validate a date field. Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` and bare
/// `YYYY-MM-DD` (interpreted as midnight UTC). On success the result carries
/// the parsed date.
pub fn validate_date(value: &FieldValue, rules: &DateRules) -> ValidationResult {
    if value.is_empty() {
        if rules.required {
            return ValidationResult::fail(format!("{} is required", rules.label));
        }
        return ValidationResult::ok();
    }

    let rendered = value.render();
    let text = rendered.as_deref().map(str::trim).unwrap_or("");
    let date = match parse_date(text) {
        Some(d) => d,
        None => {
            return ValidationResult::fail(format!("Please enter a valid {}", rules.label));
        }
    };

    if rules.future_only && date <= Utc::now() {
        return ValidationResult::fail(format!("{} must be in the future", rules.label));
    }
    ValidationResult::ok_with(ParsedValue::Date(date))
}

fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Some(Utc.from_utc_datetime(&dt));
    }
    if let Ok(d) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0).map(|dt| Utc.from_utc_datetime(&dt));
    }
    None
}
