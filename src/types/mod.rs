//! Typed records for the entities the Bot API exchanges.
//!
//! Records are declared through [`api_object!`], so each one validates,
//! serializes and nests the same way. Cyclic references (a [`Message`] that
//! replies to a [`Message`], a [`Chat`] with a pinned [`Message`]) are boxed.

mod attachment;
mod chat;
mod inline;
mod markup;
mod message;
mod passport;
mod poll;
mod update;

pub use attachment::{
    Animation, Audio, Document, File, MaskPosition, PhotoSize, Sticker, StickerSet,
    UserProfilePhotos, Video, VideoNote, Voice,
};
pub use chat::{Chat, ChatId, ChatMember, ChatPermissions, ChatPhoto, User};
pub use inline::{
    ChosenInlineResult, InlineQuery, InlineQueryResult, InlineQueryResultArticle,
    InlineQueryResultAudio, InlineQueryResultCachedSticker, InlineQueryResultContact,
    InlineQueryResultDocument, InlineQueryResultGif, InlineQueryResultLocation,
    InlineQueryResultPhoto, InlineQueryResultVenue, InlineQueryResultVideo,
    InputContactMessageContent, InputLocationMessageContent, InputMessageContent,
    InputTextMessageContent, InputVenueMessageContent,
};
pub use markup::{
    ForceReply, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton,
    KeyboardButtonPollType, LoginUrl, ReplyKeyboardMarkup, ReplyKeyboardRemove, ReplyMarkup,
};
pub use message::{Message, MessageEntity, MessageId};
pub use passport::{
    PassportElementError, PassportElementErrorDataField, PassportElementErrorFile,
    PassportElementErrorFiles, PassportElementErrorFrontSide, PassportElementErrorReverseSide,
    PassportElementErrorSelfie, PassportElementErrorTranslationFile,
    PassportElementErrorTranslationFiles, PassportElementErrorUnspecified,
};
pub use poll::{Contact, Dice, Location, Poll, PollAnswer, PollOption, Venue};
pub use update::{BotCommand, CallbackQuery, ResponseParameters, Update, WebhookInfo};

use chrono::{DateTime, Utc};

/// Unix seconds to UTC; `None` when out of chrono's range.
pub(crate) fn unix_time(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}
