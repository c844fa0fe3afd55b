//! The contract every Bot API entity implements.
//!
//! Entities travel as plain JSON dictionaries (the "array" form). An entity
//! can turn itself into that form with [`ApiObject::to_array`], and a
//! caller-supplied dictionary is checked field by field with
//! [`ApiObject::validate_array`] before [`ApiObject::from_array`] builds the
//! typed record from it.

#[macro_use]
mod macros;
mod field;

pub use field::FieldValue;

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::ops::Deref;

/// Wire form of an entity: field name to JSON value.
pub type Array = Map<String, Value>;

pub trait ApiObject: Serialize + DeserializeOwned + Sized {
    /// Check `raw` against the declared fields and return the constructor-ready
    /// map.
    ///
    /// Unknown keys are dropped, a present `null` counts as absent, and the
    /// first field that cannot be coerced fails the whole call.
    fn validate_array(raw: &Array) -> Result<Array>;

    /// Serialize into the wire form. Unset optional fields are omitted.
    fn to_array(&self) -> Result<Array> {
        to_map(self)
    }

    /// Build an instance from a caller-supplied map.
    ///
    /// An empty map means "no object" and yields `Ok(None)`.
    fn from_array(raw: &Array) -> Result<Option<Self>> {
        if raw.is_empty() {
            return Ok(None);
        }

        let data = Self::validate_array(raw)?;
        Ok(Some(serde_json::from_value(Value::Object(data))?))
    }

    /// Like [`from_array`](Self::from_array) but for an arbitrary JSON value;
    /// `null` is treated as absent.
    fn from_value(value: &Value) -> Result<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            Value::Object(map) => Self::from_array(map),
            other => Err(Error::mismatch("", "object", other)),
        }
    }

    /// Like [`from_array`](Self::from_array), keeping the input map alongside
    /// the typed record.
    fn from_array_retained(raw: &Array) -> Result<Option<Retained<Self>>> {
        Ok(Self::from_array(raw)?.map(|object| Retained {
            object,
            raw: raw.clone(),
        }))
    }
}

/// A typed record together with the dictionary it was parsed from.
///
/// The raw map is a debugging side channel: [`Retained::to_array`] always
/// re-serializes the typed record, and only
/// [`Retained::to_array_prefer_original`] hands the stored input back.
#[derive(Debug, Clone, PartialEq)]
pub struct Retained<T> {
    object: T,
    raw: Array,
}

impl<T: ApiObject> Retained<T> {
    pub fn object(&self) -> &T {
        &self.object
    }

    pub fn into_inner(self) -> T {
        self.object
    }

    /// The map exactly as it was received, unknown keys included.
    pub fn raw(&self) -> &Array {
        &self.raw
    }

    pub fn to_array(&self) -> Result<Array> {
        self.object.to_array()
    }

    /// Echo the original input verbatim.
    pub fn to_array_prefer_original(&self) -> Array {
        self.raw.clone()
    }
}

impl<T> Deref for Retained<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.object
    }
}

/// Serialize any record into a JSON map.
pub fn to_map<T: Serialize + ?Sized>(value: &T) -> Result<Array> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::mismatch("", "object", &other)),
    }
}

/// `skip_serializing_if` hook: true when an optional field holds nothing.
pub fn is_unset<T: FieldValue>(value: &T) -> bool {
    value.is_unset()
}

/// Validate one declared field of `raw` and copy the coerced value into `data`.
pub fn validate_field<T: FieldValue>(raw: &Array, name: &str, data: &mut Array) -> Result<()> {
    match raw.get(name) {
        None | Some(Value::Null) if T::REQUIRED => Err(Error::missing(name)),
        None | Some(Value::Null) => Ok(()),
        Some(value) => {
            let coerced = T::coerce(value).map_err(|e| e.nested_in(name))?;
            data.insert(name.to_string(), coerced);
            Ok(())
        }
    }
}

/// Read the discriminator of a tagged union.
pub fn read_tag<'a>(raw: &'a Array, key: &str) -> Result<&'a str> {
    match raw.get(key) {
        None | Some(Value::Null) => Err(Error::missing(key)),
        Some(Value::String(tag)) => Ok(tag),
        Some(other) => Err(Error::mismatch(key, "string", other)),
    }
}

/// True when `error` is a required top-level key of a record being absent,
/// which rules that record out rather than pointing inside it.
pub(crate) fn is_absent_key(error: &Error) -> bool {
    matches!(error, Error::MissingField { field } if !field.contains(['.', '[']))
}

/// Check the fixed discriminator of a union case and write it into `data`.
///
/// The discriminator may be left out by the caller; when present it must
/// match.
pub fn validate_tag(raw: &Array, key: &str, expected: &str, data: &mut Array) -> Result<()> {
    match raw.get(key) {
        None | Some(Value::Null) => {}
        Some(Value::String(tag)) if tag == expected => {}
        Some(Value::String(tag)) => return Err(Error::unsupported(key, tag.as_str())),
        Some(other) => return Err(Error::mismatch(key, "string", other)),
    }
    data.insert(key.to_string(), Value::from(expected));
    Ok(())
}
