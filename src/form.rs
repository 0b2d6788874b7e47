//! Generic form validation
//!
//! A rule set maps field names to ordered lists of validators. Driving a
//! form through [`validate_form`] runs every field's validators in order,
//! records the first failing message per field, and always checks every
//! field so the UI can highlight all problems at once.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, trace};

use crate::field::FieldValue;
use crate::result::ValidationResult;
use crate::validators::validate_password;

const ABSENT: FieldValue = FieldValue::Absent;

/// A boxed validator, applicable to any field value.
pub type Rule = Box<dyn Fn(&FieldValue) -> ValidationResult + Send + Sync>;

/// Box a function or closure as a [`Rule`].
pub fn rule<F>(f: F) -> Rule
where
    F: Fn(&FieldValue) -> ValidationResult + Send + Sync + 'static,
{
    Box::new(f)
}

/// Password validator adapted for rule sets: the per-requirement breakdown
/// is flattened into the plain result message.
pub fn password_rule() -> Rule {
    rule(|value| validate_password(value).into_result())
}

/// Ordered mapping from field name to that field's validators.
#[derive(Default)]
pub struct ValidationRules {
    fields: Vec<(String, Vec<Rule>)>,
}

impl ValidationRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field and its ordered validators.
    pub fn field(mut self, name: impl Into<String>, rules: Vec<Rule>) -> Self {
        self.fields.push((name.into(), rules));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Result of validating a whole form: overall verdict plus the first failure
/// message for each failing field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValidation {
    pub is_valid: bool,
    pub errors: BTreeMap<String, String>,
}

/// Validate `form` against `rules`. Fields missing from `form` are validated
/// as [`FieldValue::Absent`]; fields in `form` without rules are ignored.
pub fn validate_form(
    form: &BTreeMap<String, FieldValue>,
    rules: &ValidationRules,
) -> FormValidation {
    let mut errors = BTreeMap::new();

    for (field, validators) in &rules.fields {
        let value = form.get(field).unwrap_or(&ABSENT);
        for validator in validators {
            let result = validator(value);
            if !result.is_valid {
                trace!(field = %field, message = %result.message, "field failed validation");
                errors.insert(field.clone(), result.message);
                break;
            }
        }
    }

    let is_valid = errors.is_empty();
    if !is_valid {
        debug!(failed_fields = errors.len(), "form validation failed");
    }
    FormValidation { is_valid, errors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{validate_email, validate_product_name};

    fn form(entries: &[(&str, &str)]) -> BTreeMap<String, FieldValue> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), FieldValue::from(*v)))
            .collect()
    }

    #[test]
    fn test_all_fields_checked() {
        let rules = ValidationRules::new()
            .field("email", vec![rule(validate_email)])
            .field("name", vec![rule(validate_product_name)]);

        let outcome = validate_form(&form(&[("email", ""), ("name", "")]), &rules);
        assert!(!outcome.is_valid);
        assert_eq!(outcome.errors.len(), 2);
        assert_eq!(outcome.errors["email"], "Email is required");
        assert_eq!(outcome.errors["name"], "Product name is required");
    }

    #[test]
    fn test_first_failure_wins_per_field() {
        // Second rule would also fail, but only the first message is kept.
        let rules = ValidationRules::new().field(
            "name",
            vec![
                rule(|_| ValidationResult::fail("first")),
                rule(|_| ValidationResult::fail("second")),
            ],
        );

        let outcome = validate_form(&form(&[("name", "x")]), &rules);
        assert_eq!(outcome.errors["name"], "first");
    }

    #[test]
    fn test_missing_field_validates_as_absent() {
        let rules = ValidationRules::new().field("email", vec![rule(validate_email)]);
        let outcome = validate_form(&BTreeMap::new(), &rules);
        assert_eq!(outcome.errors["email"], "Email is required");
    }

    #[test]
    fn test_valid_form() {
        let rules = ValidationRules::new()
            .field("email", vec![rule(validate_email)])
            .field("name", vec![rule(validate_product_name)]);

        let outcome = validate_form(
            &form(&[("email", "a@b.co"), ("name", "Gauze"), ("extra", "ignored")]),
            &rules,
        );
        assert!(outcome.is_valid);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn test_password_rule_flattens_report() {
        let rules = ValidationRules::new().field("password", vec![password_rule()]);

        let outcome = validate_form(&form(&[("password", "abc")]), &rules);
        assert!(outcome.errors["password"].contains("at least 8 characters"));

        let outcome = validate_form(&form(&[("password", "Abcdef1!")]), &rules);
        assert!(outcome.is_valid);
    }
}
