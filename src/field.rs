//! Tagged input values.
//!
//! Form layers hand validators whatever the widget produced: a string, a
//! number from a stepper, a checkbox state, or nothing at all. `FieldValue`
//! makes that explicit as a sum type so every validator has one code path per
//! variant instead of branching on a dynamic type at runtime.

use std::borrow::Cow;

/// A single form field's raw value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// The field was never filled in (missing key, null, undefined).
    Absent,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl FieldValue {
    /// Renders the value the way a text input would display it.
    /// `Absent` has no rendering.
    pub fn render(&self) -> Option<Cow<'_, str>> {
        match self {
            FieldValue::Absent => None,
            FieldValue::Text(s) => Some(Cow::Borrowed(s.as_str())),
            FieldValue::Number(n) => Some(Cow::Owned(n.to_string())),
            FieldValue::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
        }
    }

    /// True when the field counts as "not provided" for required checks:
    /// absent, or text that is empty after trimming. Numbers and booleans
    /// are always considered provided.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Absent => true,
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Number(_) | FieldValue::Bool(_) => false,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => FieldValue::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        assert_eq!(FieldValue::from("hello").render().as_deref(), Some("hello"));
        assert_eq!(FieldValue::from(5.0).render().as_deref(), Some("5"));
        assert_eq!(FieldValue::from(2.5).render().as_deref(), Some("2.5"));
        assert_eq!(FieldValue::from(true).render().as_deref(), Some("true"));
        assert_eq!(FieldValue::Absent.render(), None);
    }

    #[test]
    fn test_is_empty() {
        assert!(FieldValue::Absent.is_empty());
        assert!(FieldValue::from("").is_empty());
        assert!(FieldValue::from("   \t ").is_empty());
        assert!(!FieldValue::from("x").is_empty());
        assert!(!FieldValue::from(0.0).is_empty());
        assert!(!FieldValue::from(false).is_empty());
    }

    #[test]
    fn test_option_conversion() {
        let none: Option<&str> = None;
        assert_eq!(FieldValue::from(none), FieldValue::Absent);
        assert_eq!(
            FieldValue::from(Some("abc")),
            FieldValue::Text("abc".to_string())
        );
    }
}
