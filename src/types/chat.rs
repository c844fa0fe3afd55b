use super::{unix_time, Message};
use crate::object::FieldValue;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

api_object! {
    /// A Telegram user or bot.
    pub struct User {
        pub id: i64,
        pub is_bot: bool,
        pub first_name: String,
        pub last_name: Option<String>,
        pub username: Option<String>,
        pub language_code: Option<String>,
        /// Only returned by `getMe`.
        pub can_join_groups: Option<bool>,
        /// Only returned by `getMe`.
        pub can_read_all_group_messages: Option<bool>,
        /// Only returned by `getMe`.
        pub supports_inline_queries: Option<bool>,
    }
}

api_object! {
    /// A private chat, group, supergroup or channel.
    ///
    /// `pinned_message` refers back to a [`Message`], which in turn embeds its
    /// [`Chat`]; both are independent copies of the data the server sent.
    pub struct Chat {
        pub id: i64,
        pub kind: String => "type",
        pub title: Option<String>,
        pub username: Option<String>,
        pub first_name: Option<String>,
        pub last_name: Option<String>,
        pub photo: Option<ChatPhoto>,
        pub bio: Option<String>,
        pub description: Option<String>,
        pub invite_link: Option<String>,
        pub pinned_message: Option<Box<Message>>,
        pub permissions: Option<ChatPermissions>,
        pub slow_mode_delay: Option<i64>,
        pub sticker_set_name: Option<String>,
        pub can_set_sticker_set: Option<bool>,
        pub linked_chat_id: Option<i64>,
    }
}

api_object! {
    pub struct ChatPhoto {
        pub small_file_id: String,
        pub small_file_unique_id: String,
        pub big_file_id: String,
        pub big_file_unique_id: String,
    }
}

api_object! {
    /// What non-administrators may do in a chat.
    pub struct ChatPermissions {
        pub can_send_messages: Option<bool>,
        pub can_send_media_messages: Option<bool>,
        pub can_send_polls: Option<bool>,
        pub can_send_other_messages: Option<bool>,
        pub can_add_web_page_previews: Option<bool>,
        pub can_change_info: Option<bool>,
        pub can_invite_users: Option<bool>,
        pub can_pin_messages: Option<bool>,
    }
}

api_object! {
    /// One member of a chat and their rights.
    pub struct ChatMember {
        pub user: User,
        /// `creator`, `administrator`, `member`, `restricted`, `left` or `kicked`.
        pub status: String,
        pub custom_title: Option<String>,
        pub is_anonymous: Option<bool>,
        pub until_date: Option<i64>,
        pub can_be_edited: Option<bool>,
        pub can_post_messages: Option<bool>,
        pub can_edit_messages: Option<bool>,
        pub can_delete_messages: Option<bool>,
        pub can_restrict_members: Option<bool>,
        pub can_promote_members: Option<bool>,
        pub can_change_info: Option<bool>,
        pub can_invite_users: Option<bool>,
        pub can_pin_messages: Option<bool>,
        pub is_member: Option<bool>,
        pub can_send_messages: Option<bool>,
        pub can_send_media_messages: Option<bool>,
        pub can_send_polls: Option<bool>,
        pub can_send_other_messages: Option<bool>,
        pub can_add_web_page_previews: Option<bool>,
    }
}

impl ChatMember {
    /// When a restriction or ban ends; `None` means forever or not restricted.
    pub fn until(&self) -> Option<DateTime<Utc>> {
        self.until_date.filter(|ts| *ts > 0).and_then(unix_time)
    }
}

impl Chat {
    pub fn is_private(&self) -> bool {
        self.kind == "private"
    }
}

/// Target chat of a request: a numeric id or a channel `@username`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ChatId {
    fn from(username: &str) -> Self {
        Self::Username(username.to_string())
    }
}

impl From<String> for ChatId {
    fn from(username: String) -> Self {
        Self::Username(username)
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{}", id),
            Self::Username(username) => f.write_str(username),
        }
    }
}

impl FieldValue for ChatId {
    fn expected() -> String {
        "integer chat id or @username".to_string()
    }

    fn coerce(value: &Value) -> Result<Value> {
        match value {
            Value::Number(n) if n.is_i64() => Ok(value.clone()),
            Value::String(_) => Ok(value.clone()),
            other => Err(Error::mismatch("", Self::expected(), other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ApiObject;
    use serde_json::json;

    fn as_map(value: Value) -> crate::object::Array {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn test_user_minimal() {
        let user = User::from_array(&as_map(json!({
            "id": 12345,
            "is_bot": false,
            "first_name": "Ada"
        })))
        .unwrap()
        .unwrap();

        assert_eq!(user.first_name, "Ada");
        assert!(user.username.is_none());
        assert_eq!(
            Value::Object(user.to_array().unwrap()),
            json!({"id": 12345, "is_bot": false, "first_name": "Ada"})
        );
    }

    #[test]
    fn test_user_requires_is_bot() {
        let err = User::validate_array(&as_map(json!({"id": 1, "first_name": "Ada"}))).unwrap_err();
        assert!(matches!(err, Error::MissingField { ref field } if field == "is_bot"));
    }

    #[test]
    fn test_chat_type_is_renamed() {
        let chat = Chat::from_array(&as_map(json!({"id": -100, "type": "supergroup", "title": "Devs"})))
            .unwrap()
            .unwrap();
        assert_eq!(chat.kind, "supergroup");
        assert!(!chat.is_private());
        assert_eq!(chat.to_array().unwrap()["type"], json!("supergroup"));
    }

    #[test]
    fn test_chat_member_until() {
        let member = ChatMember::from_array(&as_map(json!({
            "user": {"id": 1, "is_bot": false, "first_name": "A"},
            "status": "kicked",
            "until_date": 1_600_000_000
        })))
        .unwrap()
        .unwrap();
        assert_eq!(member.until().unwrap().timestamp(), 1_600_000_000);

        let forever = ChatMember {
            until_date: Some(0),
            ..member
        };
        assert!(forever.until().is_none());
    }

    #[test]
    fn test_chat_id_shapes() {
        assert_eq!(serde_json::to_value(ChatId::from(-42)).unwrap(), json!(-42));
        assert_eq!(
            serde_json::to_value(ChatId::from("@channel")).unwrap(),
            json!("@channel")
        );
        assert_eq!(ChatId::from("@channel").to_string(), "@channel");
        assert!(ChatId::coerce(&json!(1.5)).is_err());
        assert!(ChatId::coerce(&json!(true)).is_err());
    }
}
