//! Whole-form scenarios: the rule sets the product and account screens use,
//! driven end to end through `validate_form`.

use std::collections::BTreeMap;

use fieldcheck::{
    password_rule, rule, sanitize_value, validate_barcode, validate_date, validate_email,
    validate_number, validate_product_name, validate_text, DateRules, FieldValue, NumberRules,
    TextRules, ValidationRules,
};

fn product_form_rules() -> ValidationRules {
    let quantity = NumberRules {
        min: Some(0.0),
        max: Some(10_000.0),
        required: true,
        label: "Quantity".to_string(),
    };
    let notes = TextRules {
        max_length: 500,
        required: false,
        label: "Notes".to_string(),
    };
    let expiry = DateRules {
        required: false,
        label: "Expiry date".to_string(),
        future_only: true,
    };
    ValidationRules::new()
        .field("name", vec![rule(validate_product_name)])
        .field("barcode", vec![rule(validate_barcode)])
        .field("quantity", vec![rule(move |v| validate_number(v, &quantity))])
        .field("notes", vec![rule(move |v| validate_text(v, &notes))])
        .field("expiry", vec![rule(move |v| validate_date(v, &expiry))])
}

fn entry(key: &str, value: impl Into<FieldValue>) -> (String, FieldValue) {
    (key.to_string(), value.into())
}

#[test]
fn product_form_accepts_complete_input() {
    let form: BTreeMap<_, _> = [
        entry("name", "Nitrile Gloves (M)"),
        entry("barcode", "0075678164125"),
        entry("quantity", 40),
        entry("notes", "reorder when below 10"),
        entry("expiry", "2999-06-01"),
    ]
    .into_iter()
    .collect();

    let outcome = fieldcheck::validate_form(&form, &product_form_rules());
    assert!(outcome.is_valid, "errors: {:?}", outcome.errors);
}

#[test]
fn product_form_reports_every_failing_field() {
    let form: BTreeMap<_, _> = [
        entry("name", ""),
        entry("barcode", "AB-12"),
        entry("quantity", "lots"),
        entry("notes", "<script>steal()</script>"),
        entry("expiry", "2001-01-01"),
    ]
    .into_iter()
    .collect();

    let outcome = fieldcheck::validate_form(&form, &product_form_rules());
    assert!(!outcome.is_valid);
    assert_eq!(outcome.errors.len(), 5);
    assert_eq!(outcome.errors["name"], "Product name is required");
    assert_eq!(
        outcome.errors["barcode"],
        "Barcode must contain only letters and numbers"
    );
    assert_eq!(outcome.errors["quantity"], "Quantity must be a valid number");
    assert_eq!(outcome.errors["notes"], "Notes contains invalid characters");
    assert_eq!(outcome.errors["expiry"], "Expiry date must be in the future");
}

#[test]
fn product_form_optional_fields_may_be_missing() {
    let form: BTreeMap<_, _> = [
        entry("name", "Gauze Pads"),
        entry("barcode", "GZ400102"),
        entry("quantity", "15"),
    ]
    .into_iter()
    .collect();

    let outcome = fieldcheck::validate_form(&form, &product_form_rules());
    assert!(outcome.is_valid, "errors: {:?}", outcome.errors);
}

#[test]
fn signup_form_flags_weak_credentials() {
    let rules = ValidationRules::new()
        .field("email", vec![rule(validate_email)])
        .field("password", vec![password_rule()]);

    let form: BTreeMap<_, _> = [entry("email", "not-an-email"), entry("password", "abc")]
        .into_iter()
        .collect();

    let outcome = fieldcheck::validate_form(&form, &rules);
    assert!(!outcome.is_valid);
    assert_eq!(outcome.errors["email"], "Please enter a valid email address");
    assert!(outcome.errors["password"].contains("at least 8 characters"));
}

#[test]
fn submitted_payload_sanitizes_before_storage() {
    let mut payload = serde_json::json!({
        "name": "  Composite Kit <A2> ",
        "quantity": 3,
        "tags": ["restorative", "javascript:void(0)"],
        "supplier": { "name": "Dental & Co", "url": null }
    });
    sanitize_value(&mut payload);

    assert_eq!(payload["name"], "Composite Kit &lt;A2&gt;");
    assert_eq!(payload["quantity"], 3);
    assert_eq!(payload["tags"][1], "void(0)");
    assert_eq!(payload["supplier"]["name"], "Dental &amp; Co");
    assert_eq!(payload["supplier"]["url"], serde_json::Value::Null);
}
