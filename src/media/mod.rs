//! InputMedia: media items sent as part of an album or an edit.
//!
//! A media item's `media` (and, where the case has one, `thumb`) field either
//! names something the server already knows or carries bytes to upload.
//! Bytes cannot travel inside the JSON payload, so before sending an item is
//! resolved with [`InputMedia::resolve_for_upload`] into plain fields, where
//! every upload is replaced by an `attach://<name>` placeholder, plus the
//! multipart parts those placeholders point at.

use crate::files::UploadPart;
use crate::object::{to_map, validate_field, validate_tag, Array};
use crate::Result;
use serde::Serialize;
use serde_json::Value;

macro_rules! impl_media_case {
    ($name:ident) => {
        impl $crate::object::ApiObject for $name {
            fn validate_array(
                raw: &$crate::object::Array,
            ) -> $crate::Result<$crate::object::Array> {
                $crate::media::validate_case::<Self>(raw)
            }

            fn to_array(&self) -> $crate::Result<$crate::object::Array> {
                $crate::media::case_to_array(self)
            }
        }

        impl_object_field!($name);

        impl $name {
            /// Discriminator this case carries on the wire.
            pub const TAG: &'static str = <Self as $crate::media::MediaCase>::TAG;

            /// See [`InputMedia::resolve_for_upload`](crate::media::InputMedia::resolve_for_upload).
            pub fn resolve_for_upload(
                &self,
                base_name: &str,
            ) -> $crate::Result<$crate::media::ResolvedMedia> {
                $crate::media::resolve_case(self, base_name)
            }
        }
    };
}

mod cases;
mod source;

pub use cases::{
    Caption, Dimensions, InputMediaAnimation, InputMediaAudio, InputMediaDocument,
    InputMediaPhoto, InputMediaVideo,
};
pub use source::{MediaSource, ATTACH_SCHEME};

tagged_union! {
    /// Any media item accepted by `sendMediaGroup` and `editMessageMedia`.
    pub enum InputMedia ["type"] {
        Photo(InputMediaPhoto) = "photo",
        Video(InputMediaVideo) = "video",
        Animation(InputMediaAnimation) = "animation",
        Audio(InputMediaAudio) = "audio",
        Document(InputMediaDocument) = "document",
    }
}

/// A media item split for a multipart request.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMedia {
    /// Plain JSON fields, uploads replaced by `attach://` placeholders.
    pub fields: Array,
    /// One part per placeholder, named after it.
    pub uploads: Vec<UploadPart>,
}

impl ResolvedMedia {
    pub fn has_uploads(&self) -> bool {
        !self.uploads.is_empty()
    }
}

impl InputMedia {
    /// Replace every uploaded file with an `attach://<base_name>_<field>`
    /// placeholder and collect the matching upload parts.
    ///
    /// Remote references pass through untouched; an unset thumbnail is never
    /// emitted, not even as `null`.
    pub fn resolve_for_upload(&self, base_name: &str) -> Result<ResolvedMedia> {
        match self {
            Self::Photo(media) => resolve_case(media, base_name),
            Self::Video(media) => resolve_case(media, base_name),
            Self::Animation(media) => resolve_case(media, base_name),
            Self::Audio(media) => resolve_case(media, base_name),
            Self::Document(media) => resolve_case(media, base_name),
        }
    }

    pub fn media(&self) -> &MediaSource {
        match self {
            Self::Photo(media) => &media.media,
            Self::Video(media) => &media.media,
            Self::Animation(media) => &media.media,
            Self::Audio(media) => &media.media,
            Self::Document(media) => &media.media,
        }
    }

    /// The `media` source followed by the thumbnail, when one is set.
    pub fn sources_mut(&mut self) -> Vec<&mut MediaSource> {
        let (media, thumb) = match self {
            Self::Photo(media) => (&mut media.media, None),
            Self::Video(media) => (&mut media.media, media.thumb.as_mut()),
            Self::Animation(media) => (&mut media.media, media.thumb.as_mut()),
            Self::Audio(media) => (&mut media.media, media.thumb.as_mut()),
            Self::Document(media) => (&mut media.media, media.thumb.as_mut()),
        };
        std::iter::once(media).chain(thumb).collect()
    }
}

/// What distinguishes one InputMedia case from another.
trait MediaCase: Serialize {
    const TAG: &'static str;
    const HAS_THUMB: bool;
    const HAS_DURATION: bool;
    const HAS_SIZE: bool;

    fn media(&self) -> &MediaSource;

    fn thumb(&self) -> Option<&MediaSource>;

    /// Fields only this case has.
    fn validate_own(_raw: &Array, _data: &mut Array) -> Result<()> {
        Ok(())
    }
}

fn validate_case<T: MediaCase>(raw: &Array) -> Result<Array> {
    let mut data = Array::new();
    validate_tag(raw, "type", T::TAG, &mut data)?;
    validate_field::<MediaSource>(raw, "media", &mut data)?;
    Caption::validate(raw, &mut data)?;
    if T::HAS_THUMB {
        validate_field::<Option<MediaSource>>(raw, "thumb", &mut data)?;
    }
    if T::HAS_DURATION {
        validate_field::<Option<i64>>(raw, "duration", &mut data)?;
    }
    if T::HAS_SIZE {
        Dimensions::validate(raw, &mut data)?;
    }
    T::validate_own(raw, &mut data)?;
    Ok(data)
}

fn case_to_array<T: MediaCase>(case: &T) -> Result<Array> {
    let mut map = to_map(case)?;
    map.insert("type".to_string(), Value::from(T::TAG));
    Ok(map)
}

fn resolve_case<T: MediaCase>(case: &T, base_name: &str) -> Result<ResolvedMedia> {
    let mut fields = case_to_array(case)?;
    let mut uploads = Vec::new();

    case.media()
        .attach_into(&mut fields, "media", &format!("{}_media", base_name), &mut uploads);

    if T::HAS_THUMB {
        match case.thumb() {
            Some(thumb) => {
                thumb.attach_into(&mut fields, "thumb", &format!("{}_thumb", base_name), &mut uploads)
            }
            None => {
                fields.remove("thumb");
            }
        }
    }

    Ok(ResolvedMedia { fields, uploads })
}
