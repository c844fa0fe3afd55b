//! Error handling and custom error types
//!
//! Provides unified error handling across the crate using thiserror. The
//! validation family (`Validation`, `TypeMismatch`, `MissingField`,
//! `UnsupportedVariant`) always names the offending field so callers can
//! report it back to whoever supplied the payload.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid value for '{field}': {reason}")]
    Validation { field: String, reason: String },

    #[error("Field '{field}' expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("Missing required field '{field}'")]
    MissingField { field: String },

    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("Unsupported variant for '{field}': {value}")]
    UnsupportedVariant { field: String, value: String },

    #[error("Bot API error {code}: {description}")]
    Api {
        code: u16,
        description: String,
        retry_after: Option<i64>,
    },

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] dotenvy::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub(crate) fn mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: &serde_json::Value,
    ) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected: expected.into(),
            actual: describe_value(actual),
        }
    }

    pub(crate) fn unsupported(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnsupportedVariant {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Prefix the field path of a validation error with its enclosing field.
    ///
    /// `prefix` is either a field name (`chat`) or an index segment (`[2]`).
    pub(crate) fn nested_in(self, prefix: &str) -> Self {
        let join = |field: String| {
            if field.is_empty() {
                prefix.to_string()
            } else if field.starts_with('[') {
                format!("{}{}", prefix, field)
            } else {
                format!("{}.{}", prefix, field)
            }
        };

        match self {
            Self::Validation { field, reason } => Self::Validation {
                field: join(field),
                reason,
            },
            Self::TypeMismatch {
                field,
                expected,
                actual,
            } => Self::TypeMismatch {
                field: join(field),
                expected,
                actual,
            },
            Self::MissingField { field } => Self::MissingField { field: join(field) },
            Self::UnsupportedVariant { field, value } => Self::UnsupportedVariant {
                field: join(field),
                value,
            },
            other => other,
        }
    }

    /// True for errors caused by the shape of caller-supplied data.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. }
                | Self::TypeMismatch { .. }
                | Self::MissingField { .. }
                | Self::UnsupportedVariant { .. }
        )
    }

    /// HTTP status a route should answer with when this error reaches it.
    pub fn http_status(&self) -> u16 {
        match self {
            e if e.is_validation() => 400,
            Self::Fetch { .. } => 424,
            Self::Api { code, .. } if (400..500).contains(code) => *code,
            Self::Api { .. } | Self::Http(_) => 502,
            _ => 500,
        }
    }
}

/// Short description of a JSON value used in type mismatch reports.
pub(crate) fn describe_value(value: &serde_json::Value) -> String {
    use serde_json::Value;

    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {}", b),
        Value::Number(n) => format!("number {}", n),
        Value::String(s) if s.chars().count() > 32 => {
            let head: String = s.chars().take(32).collect();
            format!("string \"{}...\"", head)
        }
        Value::String(s) => format!("string \"{}\"", s),
        Value::Array(items) => format!("array of {} items", items.len()),
        Value::Object(map) => format!("object with {} keys", map.len()),
    }
}
