//! Declarative generators for entity records and their unions.
//!
//! Every entity lists its fields exactly once; the macros derive the serde
//! representation, the `validate_array` walk and the nesting glue from that
//! single table so the three can never drift apart.

/// Wire name of a field: the explicit rename when given, the Rust name otherwise.
macro_rules! wire_name {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident, $wire:literal) => {
        $wire
    };
}

/// Lets an [`ApiObject`](crate::object::ApiObject) appear as a field of another one.
macro_rules! impl_object_field {
    ($name:ty) => {
        impl $crate::object::FieldValue for $name {
            fn expected() -> String {
                format!("{} object", stringify!($name))
            }

            fn coerce(value: &::serde_json::Value) -> $crate::Result<::serde_json::Value> {
                match value {
                    ::serde_json::Value::Object(map) => Ok(::serde_json::Value::Object(
                        <$name as $crate::object::ApiObject>::validate_array(map)?,
                    )),
                    other => Err($crate::Error::mismatch("", Self::expected(), other)),
                }
            }
        }
    };
}

/// Declares an entity record.
///
/// ```ignore
/// api_object! {
///     /// A point on the map.
///     pub struct Location {
///         pub longitude: f64,
///         pub latitude: f64,
///         pub horizontal_accuracy: Option<f64>,
///     }
/// }
/// ```
///
/// `pub kind: String => "type"` renames a field on the wire. A record that is
/// one case of a tagged union names its discriminator after the type name:
/// `pub struct InlineQueryResultGif ["type" = "gif"] { .. }`.
macro_rules! api_object {
    (
        $(#[$meta:meta])*
        pub struct $name:ident $([$tag_key:literal = $tag_value:literal])? {
            $(
                $(#[$field_meta:meta])*
                pub $field:ident : $ty:ty $(=> $wire:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                $(#[serde(rename = $wire)])?
                #[serde(skip_serializing_if = "crate::object::is_unset")]
                pub $field: $ty,
            )*
        }

        $(
            impl $name {
                /// Discriminator this record carries on the wire.
                pub const TAG: &'static str = $tag_value;
            }
        )?

        impl $crate::object::ApiObject for $name {
            fn validate_array(
                raw: &$crate::object::Array,
            ) -> $crate::Result<$crate::object::Array> {
                #[allow(unused_mut)]
                let mut data = $crate::object::Array::new();
                $( $crate::object::validate_tag(raw, $tag_key, $tag_value, &mut data)?; )?
                $(
                    $crate::object::validate_field::<$ty>(
                        raw,
                        wire_name!($field $(, $wire)?),
                        &mut data,
                    )?;
                )*
                Ok(data)
            }

            fn to_array(&self) -> $crate::Result<$crate::object::Array> {
                #[allow(unused_mut)]
                let mut map = $crate::object::to_map(self)?;
                $( map.insert($tag_key.to_string(), ::serde_json::Value::from($tag_value)); )?
                Ok(map)
            }
        }

        impl_object_field!($name);
    };
}

/// Declares a union discriminated by a string field (`type`, `source`, ...).
///
/// Each case wraps a record declared with the matching `[key = value]` tag.
macro_rules! tagged_union {
    (
        $(#[$meta:meta])*
        pub enum $name:ident [$tag_key:literal] {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident($inner:ty) = $tag:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(tag = $tag_key)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $tag)]
                $variant($inner),
            )*
        }

        impl $name {
            /// Discriminator value of the wrapped case.
            pub fn tag(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => $tag, )*
                }
            }
        }

        impl $crate::object::ApiObject for $name {
            fn validate_array(
                raw: &$crate::object::Array,
            ) -> $crate::Result<$crate::object::Array> {
                match $crate::object::read_tag(raw, $tag_key)? {
                    $( $tag => <$inner as $crate::object::ApiObject>::validate_array(raw), )*
                    other => Err($crate::Error::unsupported($tag_key, other)),
                }
            }
        }

        impl_object_field!($name);

        $(
            impl From<$inner> for $name {
                fn from(value: $inner) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

/// Declares a union without a discriminator.
///
/// Cases are tried in declaration order, so list the most specific first.
/// When none matches, the error of the first case that only failed below
/// its own top-level keys is reported, since that is the case the caller meant.
macro_rules! untagged_union {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident($inner:ty)
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(untagged)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant($inner),
            )*
        }

        impl $crate::object::ApiObject for $name {
            fn validate_array(
                raw: &$crate::object::Array,
            ) -> $crate::Result<$crate::object::Array> {
                // First error from a case whose own keys were all present.
                let mut closest: Option<$crate::Error> = None;
                $(
                    match <$inner as $crate::object::ApiObject>::validate_array(raw) {
                        Ok(data) => return Ok(data),
                        Err(e) if closest.is_none() && !$crate::object::is_absent_key(&e) => {
                            closest = Some(e);
                        }
                        Err(_) => {}
                    }
                )*
                if let Some(e) = closest {
                    return Err(e);
                }
                let keys: Vec<&str> = raw.keys().map(String::as_str).collect();
                Err($crate::Error::unsupported(
                    "",
                    format!(
                        "object with keys [{}] matches no {} case",
                        keys.join(", "),
                        stringify!($name)
                    ),
                ))
            }
        }

        impl_object_field!($name);

        $(
            impl From<$inner> for $name {
                fn from(value: $inner) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}
