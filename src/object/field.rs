//! Wire-type checks for individual fields.

use crate::{Error, Result};
use serde_json::Value;
use std::collections::BTreeMap;

/// A type that can appear as an entity field.
///
/// `coerce` receives a present, non-null value and returns it in canonical
/// form; errors leave the field path empty so the caller can prefix it.
pub trait FieldValue {
    /// Whether the field must be present.
    const REQUIRED: bool = true;

    /// Human-readable name of the accepted wire type.
    fn expected() -> String;

    fn coerce(value: &Value) -> Result<Value>;

    /// True when the field holds nothing and must be left out of the wire form.
    fn is_unset(&self) -> bool {
        false
    }
}

impl FieldValue for i64 {
    fn expected() -> String {
        "integer".to_string()
    }

    fn coerce(value: &Value) -> Result<Value> {
        match value.as_i64() {
            Some(n) => Ok(Value::from(n)),
            None => Err(Error::mismatch("", Self::expected(), value)),
        }
    }
}

impl FieldValue for f64 {
    fn expected() -> String {
        "float".to_string()
    }

    // Integers are widened.
    fn coerce(value: &Value) -> Result<Value> {
        match value.as_f64() {
            Some(n) => Ok(Value::from(n)),
            None => Err(Error::mismatch("", Self::expected(), value)),
        }
    }
}

impl FieldValue for bool {
    fn expected() -> String {
        "boolean".to_string()
    }

    fn coerce(value: &Value) -> Result<Value> {
        match value {
            Value::Bool(_) => Ok(value.clone()),
            other => Err(Error::mismatch("", Self::expected(), other)),
        }
    }
}

impl FieldValue for String {
    fn expected() -> String {
        "string".to_string()
    }

    fn coerce(value: &Value) -> Result<Value> {
        match value {
            Value::String(_) => Ok(value.clone()),
            other => Err(Error::mismatch("", Self::expected(), other)),
        }
    }
}

impl FieldValue for Value {
    fn expected() -> String {
        "any JSON value".to_string()
    }

    fn coerce(value: &Value) -> Result<Value> {
        Ok(value.clone())
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    const REQUIRED: bool = false;

    fn expected() -> String {
        T::expected()
    }

    fn coerce(value: &Value) -> Result<Value> {
        T::coerce(value)
    }

    fn is_unset(&self) -> bool {
        self.is_none()
    }
}

impl<T: FieldValue> FieldValue for Box<T> {
    fn expected() -> String {
        T::expected()
    }

    fn coerce(value: &Value) -> Result<Value> {
        T::coerce(value)
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn expected() -> String {
        format!("list of {}", T::expected())
    }

    fn coerce(value: &Value) -> Result<Value> {
        let Value::Array(items) = value else {
            return Err(Error::mismatch("", Self::expected(), value));
        };

        items
            .iter()
            .enumerate()
            .map(|(i, item)| T::coerce(item).map_err(|e| e.nested_in(&format!("[{}]", i))))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array)
    }
}

impl<T: FieldValue> FieldValue for BTreeMap<String, T> {
    fn expected() -> String {
        format!("mapping of {}", T::expected())
    }

    fn coerce(value: &Value) -> Result<Value> {
        let Value::Object(entries) = value else {
            return Err(Error::mismatch("", Self::expected(), value));
        };

        let mut coerced = serde_json::Map::new();
        for (key, item) in entries {
            let item = T::coerce(item).map_err(|e| e.nested_in(key))?;
            coerced.insert(key.clone(), item);
        }
        Ok(Value::Object(coerced))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer_accepts_only_whole_numbers() {
        assert_eq!(i64::coerce(&json!(42)).unwrap(), json!(42));
        assert!(i64::coerce(&json!(4.2)).is_err());
        assert!(i64::coerce(&json!("42")).is_err());
        assert!(i64::coerce(&json!(u64::MAX)).is_err());
    }

    #[test]
    fn test_float_widens_integers() {
        assert_eq!(f64::coerce(&json!(3)).unwrap(), json!(3.0));
        assert!(f64::coerce(&json!(true)).is_err());
    }

    #[test]
    fn test_nested_list_names_inner_type() {
        assert_eq!(<Vec<Vec<String>>>::expected(), "list of list of string");
        match <Vec<Vec<String>>>::coerce(&json!([["a"], ["b", 3]])).unwrap_err() {
            Error::TypeMismatch { field, .. } => assert_eq!(field, "[1][1]"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_mapping_reports_key() {
        match <BTreeMap<String, i64>>::coerce(&json!({"ok": 1, "bad": "x"})).unwrap_err() {
            Error::TypeMismatch { field, .. } => assert_eq!(field, "bad"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_option_is_unset_only_when_none() {
        assert!(None::<i64>.is_unset());
        assert!(!Some(0_i64).is_unset());
        assert!(!0_i64.is_unset());
    }
}
