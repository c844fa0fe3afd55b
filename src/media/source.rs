use crate::files::{FileReference, UploadPart};
use crate::object::{Array, FieldValue};
use crate::error::describe_value;
use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Prefix that points a field at a multipart attachment.
pub const ATTACH_SCHEME: &str = "attach://";

/// Content of a media field: something the server can already reach, or bytes
/// that travel with the request.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaSource {
    /// A file id known to the server, or an HTTP URL it can fetch itself.
    Remote(String),
    Upload(FileReference),
}

impl MediaSource {
    pub fn remote(reference: impl Into<String>) -> Self {
        Self::Remote(reference.into())
    }

    pub fn is_upload(&self) -> bool {
        matches!(self, Self::Upload(_))
    }

    /// True for an `http(s)://` remote reference, false for a file id.
    pub fn is_url(&self) -> bool {
        match self {
            Self::Remote(reference) => {
                reference.starts_with("http://") || reference.starts_with("https://")
            }
            Self::Upload(_) => false,
        }
    }

    pub fn as_upload(&self) -> Option<&FileReference> {
        match self {
            Self::Upload(file) => Some(file),
            Self::Remote(_) => None,
        }
    }

    /// Write this source into `fields[key]`.
    ///
    /// A remote reference is written as-is. An upload is written as
    /// `attach://<attach_name>` and its bytes are pushed onto `uploads` under
    /// the same name, so the two never disagree.
    pub fn attach_into(
        &self,
        fields: &mut Array,
        key: &str,
        attach_name: &str,
        uploads: &mut Vec<UploadPart>,
    ) {
        match self {
            Self::Remote(reference) => {
                fields.insert(key.to_string(), Value::String(reference.clone()));
            }
            Self::Upload(file) => {
                fields.insert(
                    key.to_string(),
                    Value::String(format!("{}{}", ATTACH_SCHEME, attach_name)),
                );
                uploads.push(file.to_upload_part(attach_name));
            }
        }
    }
}

impl From<FileReference> for MediaSource {
    fn from(file: FileReference) -> Self {
        Self::Upload(file)
    }
}

impl From<String> for MediaSource {
    fn from(reference: String) -> Self {
        Self::Remote(reference)
    }
}

impl From<&str> for MediaSource {
    fn from(reference: &str) -> Self {
        Self::Remote(reference.to_string())
    }
}

// An upload outside of attach resolution points at its own file name.
impl Serialize for MediaSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Remote(reference) => serializer.serialize_str(reference),
            Self::Upload(file) => {
                serializer.serialize_str(&format!("{}{}", ATTACH_SCHEME, file.name()))
            }
        }
    }
}

impl<'de> Deserialize<'de> for MediaSource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::Remote)
    }
}

impl FieldValue for MediaSource {
    fn expected() -> String {
        "file id or URL string".to_string()
    }

    // Anything but a string is neither a remote reference nor an upload.
    fn coerce(value: &Value) -> Result<Value> {
        match value {
            Value::String(_) => Ok(value.clone()),
            other => Err(Error::unsupported("", describe_value(other))),
        }
    }
}
