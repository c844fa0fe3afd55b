use super::{
    unix_time, Animation, Audio, Chat, Contact, Dice, Document, InlineKeyboardMarkup, Location,
    PhotoSize, Poll, Sticker, User, Venue, Video, VideoNote, Voice,
};
use chrono::{DateTime, Utc};

api_object! {
    /// A message in a chat.
    pub struct Message {
        pub message_id: i64,
        pub from: Option<User>,
        pub sender_chat: Option<Chat>,
        pub date: i64,
        pub chat: Chat,
        pub forward_from: Option<User>,
        pub forward_from_chat: Option<Chat>,
        pub forward_from_message_id: Option<i64>,
        pub forward_signature: Option<String>,
        pub forward_sender_name: Option<String>,
        pub forward_date: Option<i64>,
        /// The message this one replies to. Never carries its own
        /// `reply_to_message`.
        pub reply_to_message: Option<Box<Message>>,
        pub via_bot: Option<User>,
        pub edit_date: Option<i64>,
        pub media_group_id: Option<String>,
        pub author_signature: Option<String>,
        pub text: Option<String>,
        pub entities: Option<Vec<MessageEntity>>,
        pub animation: Option<Animation>,
        pub audio: Option<Audio>,
        pub document: Option<Document>,
        pub photo: Option<Vec<PhotoSize>>,
        pub sticker: Option<Sticker>,
        pub video: Option<Video>,
        pub video_note: Option<VideoNote>,
        pub voice: Option<Voice>,
        pub caption: Option<String>,
        pub caption_entities: Option<Vec<MessageEntity>>,
        pub contact: Option<Contact>,
        pub dice: Option<Dice>,
        pub poll: Option<Poll>,
        pub venue: Option<Venue>,
        pub location: Option<Location>,
        pub new_chat_members: Option<Vec<User>>,
        pub left_chat_member: Option<User>,
        pub new_chat_title: Option<String>,
        pub new_chat_photo: Option<Vec<PhotoSize>>,
        pub delete_chat_photo: Option<bool>,
        pub group_chat_created: Option<bool>,
        pub supergroup_chat_created: Option<bool>,
        pub channel_chat_created: Option<bool>,
        pub migrate_to_chat_id: Option<i64>,
        pub migrate_from_chat_id: Option<i64>,
        pub pinned_message: Option<Box<Message>>,
        pub connected_website: Option<String>,
        pub reply_markup: Option<InlineKeyboardMarkup>,
    }
}

api_object! {
    /// A special entity in a text: hashtag, mention, URL, formatting, ...
    pub struct MessageEntity {
        pub kind: String => "type",
        /// Offset in UTF-16 code units.
        pub offset: i64,
        /// Length in UTF-16 code units.
        pub length: i64,
        pub url: Option<String>,
        pub user: Option<User>,
        pub language: Option<String>,
    }
}

api_object! {
    /// Identifier of a copied message.
    pub struct MessageId {
        pub message_id: i64,
    }
}

impl Message {
    pub fn date_time(&self) -> Option<DateTime<Utc>> {
        unix_time(self.date)
    }

    pub fn edit_date_time(&self) -> Option<DateTime<Utc>> {
        self.edit_date.and_then(unix_time)
    }

    /// Text of a text message or caption of a media message.
    pub fn text_or_caption(&self) -> Option<&str> {
        self.text.as_deref().or(self.caption.as_deref())
    }
}

impl MessageEntity {
    pub fn new(kind: impl Into<String>, offset: i64, length: i64) -> Self {
        Self {
            kind: kind.into(),
            offset,
            length,
            url: None,
            user: None,
            language: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ApiObject;
    use crate::Error;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn as_map(value: Value) -> crate::object::Array {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    fn reply_payload() -> Value {
        json!({
            "message_id": 7,
            "from": {"id": 1, "is_bot": false, "first_name": "Ada", "username": "ada"},
            "date": 1_600_000_100,
            "chat": {
                "id": -100,
                "type": "group",
                "title": "Devs",
                "pinned_message": {
                    "message_id": 3,
                    "date": 1_600_000_000,
                    "chat": {"id": -100, "type": "group"},
                    "text": "read the rules"
                }
            },
            "reply_to_message": {
                "message_id": 6,
                "date": 1_600_000_050,
                "chat": {"id": -100, "type": "group"},
                "photo": [
                    {"file_id": "a", "file_unique_id": "ua", "width": 90, "height": 90},
                    {"file_id": "b", "file_unique_id": "ub", "width": 800, "height": 800}
                ],
                "caption": "look"
            },
            "text": "/start nice",
            "entities": [{"type": "bot_command", "offset": 0, "length": 6}],
            "reply_markup": {
                "inline_keyboard": [[{"text": "Open", "url": "https://example.com"}]]
            }
        })
    }

    #[test]
    fn test_cyclic_message_round_trip() {
        let raw = as_map(reply_payload());
        let message = Message::from_array(&raw).unwrap().unwrap();

        let reply = message.reply_to_message.as_ref().unwrap();
        assert_eq!(reply.photo.as_ref().unwrap()[1].width, 800);
        assert_eq!(reply.text_or_caption(), Some("look"));

        let pinned = message.chat.pinned_message.as_ref().unwrap();
        assert_eq!(pinned.text.as_deref(), Some("read the rules"));

        let array = message.to_array().unwrap();
        assert_eq!(Value::Object(array.clone()), reply_payload());

        let again = Message::from_array(&array).unwrap().unwrap();
        assert_eq!(again.to_array().unwrap(), array);
    }

    #[test]
    fn test_deep_error_path() {
        let mut payload = reply_payload();
        payload["reply_to_message"]["photo"][1]["width"] = json!("800");

        match Message::validate_array(&as_map(payload)).unwrap_err() {
            Error::TypeMismatch { field, .. } => {
                assert_eq!(field, "reply_to_message.photo[1].width")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_chat() {
        let err =
            Message::validate_array(&as_map(json!({"message_id": 1, "date": 0}))).unwrap_err();
        assert!(matches!(err, Error::MissingField { ref field } if field == "chat"));
    }

    #[test]
    fn test_dates() {
        let message = Message::from_array(&as_map(reply_payload()))
            .unwrap()
            .unwrap();
        assert_eq!(message.date_time().unwrap().timestamp(), 1_600_000_100);
        assert!(message.edit_date_time().is_none());
    }

    #[test]
    fn test_entity_constructor() {
        assert_eq!(
            Value::Object(MessageEntity::new("bold", 2, 5).to_array().unwrap()),
            json!({"type": "bold", "offset": 2, "length": 5})
        );
    }
}
