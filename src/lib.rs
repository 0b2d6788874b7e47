//! Input Validation Library
//!
//! `fieldcheck` validates and sanitizes the user-supplied values that flow
//! through stock, checkout and shopping-list forms.
//!
//! # Overview
//!
//! The crate consists of four pieces:
//!
//! 1. **Field values** - [`FieldValue`], a tagged representation of raw input
//! 2. **Validators** - pure functions for common field types (email,
//!    password, product name, number, free text, barcode, date)
//! 3. **Sanitizers** - functions to neutralize markup and script fragments
//! 4. **Form validation** - a driver applying ordered rules per named field
//!
//! Validators never panic and never return an error type: every outcome is a
//! structured result with a human-readable message, and the caller owns the
//! presentation.
//!
//! # Example
//!
//! ```
//! use fieldcheck::{
//!     rule, validate_email, validate_number, validate_form,
//!     FieldValue, NumberRules, ValidationRules,
//! };
//! use std::collections::BTreeMap;
//!
//! let quantity = NumberRules {
//!     min: Some(1.0),
//!     max: Some(999.0),
//!     required: true,
//!     label: "Quantity".to_string(),
//! };
//! let rules = ValidationRules::new()
//!     .field("email", vec![rule(validate_email)])
//!     .field("quantity", vec![rule(move |v| validate_number(v, &quantity))]);
//!
//! let mut form = BTreeMap::new();
//! form.insert("email".to_string(), FieldValue::from("clinic@example.com"));
//! form.insert("quantity".to_string(), FieldValue::from("12"));
//!
//! let outcome = validate_form(&form, &rules);
//! assert!(outcome.is_valid);
//! ```

pub mod field;
pub mod form;
pub mod result;
pub mod sanitizers;
pub mod validators;

pub use field::FieldValue;
pub use form::{password_rule, rule, validate_form, FormValidation, Rule, ValidationRules};
pub use result::{ParsedValue, PasswordReport, PasswordRequirements, ValidationResult};
pub use sanitizers::{normalize_whitespace, remove_control_chars, sanitize_text, sanitize_value};
pub use validators::{
    validate_barcode, validate_date, validate_email, validate_number, validate_password,
    validate_product_name, validate_text, DateRules, NumberRules, TextRules,
};
