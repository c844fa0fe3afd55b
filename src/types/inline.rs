//! Inline mode: incoming queries and the results a bot answers them with.

use super::{InlineKeyboardMarkup, Location, MessageEntity, User};

api_object! {
    pub struct InlineQuery {
        pub id: String,
        pub from: User,
        pub location: Option<Location>,
        pub query: String,
        pub offset: String,
    }
}

api_object! {
    /// An inline result the user picked and sent.
    pub struct ChosenInlineResult {
        pub result_id: String,
        pub from: User,
        pub location: Option<Location>,
        pub inline_message_id: Option<String>,
        pub query: String,
    }
}

api_object! {
    pub struct InputTextMessageContent {
        pub message_text: String,
        pub parse_mode: Option<String>,
        pub entities: Option<Vec<MessageEntity>>,
        pub disable_web_page_preview: Option<bool>,
    }
}

api_object! {
    pub struct InputLocationMessageContent {
        pub latitude: f64,
        pub longitude: f64,
        pub horizontal_accuracy: Option<f64>,
        pub live_period: Option<i64>,
        pub heading: Option<i64>,
        pub proximity_alert_radius: Option<i64>,
    }
}

api_object! {
    pub struct InputVenueMessageContent {
        pub latitude: f64,
        pub longitude: f64,
        pub title: String,
        pub address: String,
        pub foursquare_id: Option<String>,
        pub foursquare_type: Option<String>,
        pub google_place_id: Option<String>,
        pub google_place_type: Option<String>,
    }
}

api_object! {
    pub struct InputContactMessageContent {
        pub phone_number: String,
        pub first_name: String,
        pub last_name: Option<String>,
        pub vcard: Option<String>,
    }
}

untagged_union! {
    /// Content sent in place of the result itself.
    ///
    /// A venue is also a valid location, so venues are tried first.
    pub enum InputMessageContent {
        Text(InputTextMessageContent),
        Venue(InputVenueMessageContent),
        Location(InputLocationMessageContent),
        Contact(InputContactMessageContent),
    }
}

api_object! {
    pub struct InlineQueryResultArticle ["type" = "article"] {
        pub id: String,
        pub title: String,
        pub input_message_content: InputMessageContent,
        pub reply_markup: Option<InlineKeyboardMarkup>,
        pub url: Option<String>,
        pub hide_url: Option<bool>,
        pub description: Option<String>,
        pub thumb_url: Option<String>,
        pub thumb_width: Option<i64>,
        pub thumb_height: Option<i64>,
    }
}

api_object! {
    pub struct InlineQueryResultPhoto ["type" = "photo"] {
        pub id: String,
        /// JPEG only, at most 5 MB.
        pub photo_url: String,
        pub thumb_url: String,
        pub photo_width: Option<i64>,
        pub photo_height: Option<i64>,
        pub title: Option<String>,
        pub description: Option<String>,
        pub caption: Option<String>,
        pub parse_mode: Option<String>,
        pub caption_entities: Option<Vec<MessageEntity>>,
        pub reply_markup: Option<InlineKeyboardMarkup>,
        pub input_message_content: Option<InputMessageContent>,
    }
}

api_object! {
    pub struct InlineQueryResultGif ["type" = "gif"] {
        pub id: String,
        pub gif_url: String,
        pub gif_width: Option<i64>,
        pub gif_height: Option<i64>,
        pub gif_duration: Option<i64>,
        pub thumb_url: String,
        pub thumb_mime_type: Option<String>,
        pub title: Option<String>,
        pub caption: Option<String>,
        pub parse_mode: Option<String>,
        pub caption_entities: Option<Vec<MessageEntity>>,
        pub reply_markup: Option<InlineKeyboardMarkup>,
        pub input_message_content: Option<InputMessageContent>,
    }
}

api_object! {
    /// A page embedding a video player, or a video file.
    pub struct InlineQueryResultVideo ["type" = "video"] {
        pub id: String,
        pub video_url: String,
        /// `text/html` or `video/mp4`.
        pub mime_type: String,
        pub thumb_url: String,
        pub title: String,
        pub caption: Option<String>,
        pub parse_mode: Option<String>,
        pub caption_entities: Option<Vec<MessageEntity>>,
        pub video_width: Option<i64>,
        pub video_height: Option<i64>,
        pub video_duration: Option<i64>,
        pub description: Option<String>,
        pub reply_markup: Option<InlineKeyboardMarkup>,
        pub input_message_content: Option<InputMessageContent>,
    }
}

api_object! {
    pub struct InlineQueryResultAudio ["type" = "audio"] {
        pub id: String,
        pub audio_url: String,
        pub title: String,
        pub caption: Option<String>,
        pub parse_mode: Option<String>,
        pub caption_entities: Option<Vec<MessageEntity>>,
        pub performer: Option<String>,
        pub audio_duration: Option<i64>,
        pub reply_markup: Option<InlineKeyboardMarkup>,
        pub input_message_content: Option<InputMessageContent>,
    }
}

api_object! {
    /// Only PDF and ZIP files can be sent this way.
    pub struct InlineQueryResultDocument ["type" = "document"] {
        pub id: String,
        pub title: String,
        pub caption: Option<String>,
        pub parse_mode: Option<String>,
        pub caption_entities: Option<Vec<MessageEntity>>,
        pub document_url: String,
        pub mime_type: String,
        pub description: Option<String>,
        pub reply_markup: Option<InlineKeyboardMarkup>,
        pub input_message_content: Option<InputMessageContent>,
        pub thumb_url: Option<String>,
        pub thumb_width: Option<i64>,
        pub thumb_height: Option<i64>,
    }
}

api_object! {
    pub struct InlineQueryResultLocation ["type" = "location"] {
        pub id: String,
        pub latitude: f64,
        pub longitude: f64,
        pub title: String,
        pub horizontal_accuracy: Option<f64>,
        pub live_period: Option<i64>,
        pub heading: Option<i64>,
        pub proximity_alert_radius: Option<i64>,
        pub reply_markup: Option<InlineKeyboardMarkup>,
        pub input_message_content: Option<InputMessageContent>,
        pub thumb_url: Option<String>,
        pub thumb_width: Option<i64>,
        pub thumb_height: Option<i64>,
    }
}

api_object! {
    pub struct InlineQueryResultVenue ["type" = "venue"] {
        pub id: String,
        pub latitude: f64,
        pub longitude: f64,
        pub title: String,
        pub address: String,
        pub foursquare_id: Option<String>,
        pub foursquare_type: Option<String>,
        pub google_place_id: Option<String>,
        pub google_place_type: Option<String>,
        pub reply_markup: Option<InlineKeyboardMarkup>,
        pub input_message_content: Option<InputMessageContent>,
        pub thumb_url: Option<String>,
        pub thumb_width: Option<i64>,
        pub thumb_height: Option<i64>,
    }
}

api_object! {
    pub struct InlineQueryResultContact ["type" = "contact"] {
        pub id: String,
        pub phone_number: String,
        pub first_name: String,
        pub last_name: Option<String>,
        pub vcard: Option<String>,
        pub reply_markup: Option<InlineKeyboardMarkup>,
        pub input_message_content: Option<InputMessageContent>,
        pub thumb_url: Option<String>,
        pub thumb_width: Option<i64>,
        pub thumb_height: Option<i64>,
    }
}

api_object! {
    /// A sticker already stored on the server.
    pub struct InlineQueryResultCachedSticker ["type" = "sticker"] {
        pub id: String,
        pub sticker_file_id: String,
        pub reply_markup: Option<InlineKeyboardMarkup>,
        pub input_message_content: Option<InputMessageContent>,
    }
}

tagged_union! {
    /// One result of an inline query, discriminated by `type`.
    pub enum InlineQueryResult ["type"] {
        Article(InlineQueryResultArticle) = "article",
        Photo(InlineQueryResultPhoto) = "photo",
        Gif(InlineQueryResultGif) = "gif",
        Video(InlineQueryResultVideo) = "video",
        Audio(InlineQueryResultAudio) = "audio",
        Document(InlineQueryResultDocument) = "document",
        Location(InlineQueryResultLocation) = "location",
        Venue(InlineQueryResultVenue) = "venue",
        Contact(InlineQueryResultContact) = "contact",
        CachedSticker(InlineQueryResultCachedSticker) = "sticker",
    }
}

impl InputTextMessageContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            message_text: text.into(),
            parse_mode: None,
            entities: None,
            disable_web_page_preview: None,
        }
    }
}

impl InlineQueryResultArticle {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<InputMessageContent>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            input_message_content: content.into(),
            reply_markup: None,
            url: None,
            hide_url: None,
            description: None,
            thumb_url: None,
            thumb_width: None,
            thumb_height: None,
        }
    }
}

impl InlineQueryResult {
    /// Identifier of the result, unique within one answer.
    pub fn id(&self) -> &str {
        match self {
            Self::Article(r) => &r.id,
            Self::Photo(r) => &r.id,
            Self::Gif(r) => &r.id,
            Self::Video(r) => &r.id,
            Self::Audio(r) => &r.id,
            Self::Document(r) => &r.id,
            Self::Location(r) => &r.id,
            Self::Venue(r) => &r.id,
            Self::Contact(r) => &r.id,
            Self::CachedSticker(r) => &r.id,
        }
    }
}
