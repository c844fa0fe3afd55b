//! The five InputMedia cases.
//!
//! Each case is a flat record made of the shared groups it supports:
//! every case has `media` and a [`Caption`]; Video, Animation, Audio and
//! Document add a thumbnail; Video, Animation and Audio a duration; Video and
//! Animation [`Dimensions`].

use super::{MediaCase, MediaSource};
use crate::object::{validate_field, Array};
use crate::types::MessageEntity;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Caption text and how to render it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Caption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
}

impl Caption {
    pub fn text(caption: impl Into<String>) -> Self {
        Self {
            caption: Some(caption.into()),
            ..Self::default()
        }
    }

    pub(super) fn validate(raw: &Array, data: &mut Array) -> Result<()> {
        validate_field::<Option<String>>(raw, "caption", data)?;
        validate_field::<Option<String>>(raw, "parse_mode", data)?;
        validate_field::<Option<Vec<MessageEntity>>>(raw, "caption_entities", data)
    }
}

/// Pixel size of a visual media item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
}

impl Dimensions {
    pub fn new(width: i64, height: i64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    pub(super) fn validate(raw: &Array, data: &mut Array) -> Result<()> {
        validate_field::<Option<i64>>(raw, "width", data)?;
        validate_field::<Option<i64>>(raw, "height", data)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputMediaPhoto {
    pub media: MediaSource,
    #[serde(flatten)]
    pub caption: Caption,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputMediaVideo {
    pub media: MediaSource,
    #[serde(flatten)]
    pub caption: Caption,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<MediaSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(flatten)]
    pub size: Dimensions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_streaming: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputMediaAnimation {
    pub media: MediaSource,
    #[serde(flatten)]
    pub caption: Caption,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<MediaSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(flatten)]
    pub size: Dimensions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputMediaAudio {
    pub media: MediaSource,
    #[serde(flatten)]
    pub caption: Caption,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<MediaSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputMediaDocument {
    pub media: MediaSource,
    #[serde(flatten)]
    pub caption: Caption,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<MediaSource>,
    /// Turn off server-side content type detection for uploaded files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_content_type_detection: Option<bool>,
}

impl InputMediaPhoto {
    pub fn new(media: impl Into<MediaSource>) -> Self {
        Self {
            media: media.into(),
            caption: Caption::default(),
        }
    }

    pub fn with_caption(mut self, caption: Caption) -> Self {
        self.caption = caption;
        self
    }
}

impl InputMediaVideo {
    pub fn new(media: impl Into<MediaSource>) -> Self {
        Self {
            media: media.into(),
            caption: Caption::default(),
            thumb: None,
            duration: None,
            size: Dimensions::default(),
            supports_streaming: None,
        }
    }

    pub fn with_caption(mut self, caption: Caption) -> Self {
        self.caption = caption;
        self
    }

    pub fn with_thumb(mut self, thumb: impl Into<MediaSource>) -> Self {
        self.thumb = Some(thumb.into());
        self
    }

    pub fn with_duration(mut self, seconds: i64) -> Self {
        self.duration = Some(seconds);
        self
    }

    pub fn with_size(mut self, width: i64, height: i64) -> Self {
        self.size = Dimensions::new(width, height);
        self
    }

    pub fn with_streaming(mut self, supports_streaming: bool) -> Self {
        self.supports_streaming = Some(supports_streaming);
        self
    }
}

impl InputMediaAnimation {
    pub fn new(media: impl Into<MediaSource>) -> Self {
        Self {
            media: media.into(),
            caption: Caption::default(),
            thumb: None,
            duration: None,
            size: Dimensions::default(),
        }
    }

    pub fn with_caption(mut self, caption: Caption) -> Self {
        self.caption = caption;
        self
    }

    pub fn with_thumb(mut self, thumb: impl Into<MediaSource>) -> Self {
        self.thumb = Some(thumb.into());
        self
    }

    pub fn with_duration(mut self, seconds: i64) -> Self {
        self.duration = Some(seconds);
        self
    }

    pub fn with_size(mut self, width: i64, height: i64) -> Self {
        self.size = Dimensions::new(width, height);
        self
    }
}

impl InputMediaAudio {
    pub fn new(media: impl Into<MediaSource>) -> Self {
        Self {
            media: media.into(),
            caption: Caption::default(),
            thumb: None,
            duration: None,
            performer: None,
            title: None,
        }
    }

    pub fn with_caption(mut self, caption: Caption) -> Self {
        self.caption = caption;
        self
    }

    pub fn with_thumb(mut self, thumb: impl Into<MediaSource>) -> Self {
        self.thumb = Some(thumb.into());
        self
    }

    pub fn with_duration(mut self, seconds: i64) -> Self {
        self.duration = Some(seconds);
        self
    }

    pub fn with_track(mut self, performer: impl Into<String>, title: impl Into<String>) -> Self {
        self.performer = Some(performer.into());
        self.title = Some(title.into());
        self
    }
}

impl InputMediaDocument {
    pub fn new(media: impl Into<MediaSource>) -> Self {
        Self {
            media: media.into(),
            caption: Caption::default(),
            thumb: None,
            disable_content_type_detection: None,
        }
    }

    pub fn with_caption(mut self, caption: Caption) -> Self {
        self.caption = caption;
        self
    }

    pub fn with_thumb(mut self, thumb: impl Into<MediaSource>) -> Self {
        self.thumb = Some(thumb.into());
        self
    }

    pub fn without_content_type_detection(mut self) -> Self {
        self.disable_content_type_detection = Some(true);
        self
    }
}

impl MediaCase for InputMediaPhoto {
    const TAG: &'static str = "photo";
    const HAS_THUMB: bool = false;
    const HAS_DURATION: bool = false;
    const HAS_SIZE: bool = false;

    fn media(&self) -> &MediaSource {
        &self.media
    }

    fn thumb(&self) -> Option<&MediaSource> {
        None
    }
}

impl MediaCase for InputMediaVideo {
    const TAG: &'static str = "video";
    const HAS_THUMB: bool = true;
    const HAS_DURATION: bool = true;
    const HAS_SIZE: bool = true;

    fn media(&self) -> &MediaSource {
        &self.media
    }

    fn thumb(&self) -> Option<&MediaSource> {
        self.thumb.as_ref()
    }

    fn validate_own(raw: &Array, data: &mut Array) -> Result<()> {
        validate_field::<Option<bool>>(raw, "supports_streaming", data)
    }
}

impl MediaCase for InputMediaAnimation {
    const TAG: &'static str = "animation";
    const HAS_THUMB: bool = true;
    const HAS_DURATION: bool = true;
    const HAS_SIZE: bool = true;

    fn media(&self) -> &MediaSource {
        &self.media
    }

    fn thumb(&self) -> Option<&MediaSource> {
        self.thumb.as_ref()
    }
}

impl MediaCase for InputMediaAudio {
    const TAG: &'static str = "audio";
    const HAS_THUMB: bool = true;
    const HAS_DURATION: bool = true;
    const HAS_SIZE: bool = false;

    fn media(&self) -> &MediaSource {
        &self.media
    }

    fn thumb(&self) -> Option<&MediaSource> {
        self.thumb.as_ref()
    }

    fn validate_own(raw: &Array, data: &mut Array) -> Result<()> {
        validate_field::<Option<String>>(raw, "performer", data)?;
        validate_field::<Option<String>>(raw, "title", data)
    }
}

impl MediaCase for InputMediaDocument {
    const TAG: &'static str = "document";
    const HAS_THUMB: bool = true;
    const HAS_DURATION: bool = false;
    const HAS_SIZE: bool = false;

    fn media(&self) -> &MediaSource {
        &self.media
    }

    fn thumb(&self) -> Option<&MediaSource> {
        self.thumb.as_ref()
    }

    fn validate_own(raw: &Array, data: &mut Array) -> Result<()> {
        validate_field::<Option<bool>>(raw, "disable_content_type_detection", data)
    }
}

impl_media_case!(InputMediaPhoto);
impl_media_case!(InputMediaVideo);
impl_media_case!(InputMediaAnimation);
impl_media_case!(InputMediaAudio);
impl_media_case!(InputMediaDocument);
