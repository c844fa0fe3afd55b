use super::{ChosenInlineResult, InlineQuery, Message, Poll, PollAnswer, User};

api_object! {
    /// An incoming update. At most one of the optional fields is set.
    pub struct Update {
        pub update_id: i64,
        pub message: Option<Message>,
        pub edited_message: Option<Message>,
        pub channel_post: Option<Message>,
        pub edited_channel_post: Option<Message>,
        pub inline_query: Option<InlineQuery>,
        pub chosen_inline_result: Option<ChosenInlineResult>,
        pub callback_query: Option<CallbackQuery>,
        pub poll: Option<Poll>,
        pub poll_answer: Option<PollAnswer>,
    }
}

api_object! {
    /// A press on an inline keyboard button.
    pub struct CallbackQuery {
        pub id: String,
        pub from: User,
        pub message: Option<Message>,
        pub inline_message_id: Option<String>,
        pub chat_instance: String,
        pub data: Option<String>,
        pub game_short_name: Option<String>,
    }
}

api_object! {
    pub struct WebhookInfo {
        pub url: String,
        pub has_custom_certificate: bool,
        pub pending_update_count: i64,
        pub ip_address: Option<String>,
        pub last_error_date: Option<i64>,
        pub last_error_message: Option<String>,
        pub max_connections: Option<i64>,
        pub allowed_updates: Option<Vec<String>>,
    }
}

api_object! {
    pub struct BotCommand {
        pub command: String,
        pub description: String,
    }
}

api_object! {
    /// Extra details attached to an unsuccessful request.
    pub struct ResponseParameters {
        pub migrate_to_chat_id: Option<i64>,
        /// Seconds to wait before repeating a flood-limited request.
        pub retry_after: Option<i64>,
    }
}

impl Update {
    /// Name of the payload this update carries, as used in `allowed_updates`.
    pub fn kind(&self) -> Option<&'static str> {
        if self.message.is_some() {
            Some("message")
        } else if self.edited_message.is_some() {
            Some("edited_message")
        } else if self.channel_post.is_some() {
            Some("channel_post")
        } else if self.edited_channel_post.is_some() {
            Some("edited_channel_post")
        } else if self.inline_query.is_some() {
            Some("inline_query")
        } else if self.chosen_inline_result.is_some() {
            Some("chosen_inline_result")
        } else if self.callback_query.is_some() {
            Some("callback_query")
        } else if self.poll.is_some() {
            Some("poll")
        } else if self.poll_answer.is_some() {
            Some("poll_answer")
        } else {
            None
        }
    }

    /// The message of any message-like update.
    pub fn any_message(&self) -> Option<&Message> {
        self.message
            .as_ref()
            .or(self.edited_message.as_ref())
            .or(self.channel_post.as_ref())
            .or(self.edited_channel_post.as_ref())
    }
}

impl BotCommand {
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ApiObject;
    use crate::Error;
    use serde_json::{json, Value};

    fn as_map(value: Value) -> crate::object::Array {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn test_update_with_callback_query() {
        let update = Update::from_array(&as_map(json!({
            "update_id": 10,
            "callback_query": {
                "id": "cb1",
                "from": {"id": 5, "is_bot": false, "first_name": "Bo"},
                "chat_instance": "ci",
                "data": "y",
                "message": {"message_id": 1, "date": 0, "chat": {"id": 5, "type": "private"}}
            }
        })))
        .unwrap()
        .unwrap();

        assert_eq!(update.kind(), Some("callback_query"));
        assert!(update.any_message().is_none());
        let query = update.callback_query.as_ref().unwrap();
        assert!(query.message.as_ref().unwrap().chat.is_private());
    }

    #[test]
    fn test_update_message_kinds() {
        let update = Update::from_array(&as_map(json!({
            "update_id": 11,
            "channel_post": {"message_id": 2, "date": 0, "chat": {"id": -1, "type": "channel"}, "text": "hi"}
        })))
        .unwrap()
        .unwrap();

        assert_eq!(update.kind(), Some("channel_post"));
        assert_eq!(update.any_message().unwrap().text.as_deref(), Some("hi"));
    }

    #[test]
    fn test_update_error_path_through_callback() {
        let err = Update::validate_array(&as_map(json!({
            "update_id": 12,
            "callback_query": {"id": "cb", "from": {"id": 1, "is_bot": false, "first_name": "A"}}
        })))
        .unwrap_err();
        assert!(
            matches!(err, Error::MissingField { ref field } if field == "callback_query.chat_instance")
        );
    }

    #[test]
    fn test_webhook_info_lists() {
        let info = WebhookInfo::from_array(&as_map(json!({
            "url": "",
            "has_custom_certificate": false,
            "pending_update_count": 0,
            "allowed_updates": ["message", "poll"]
        })))
        .unwrap()
        .unwrap();
        assert_eq!(info.allowed_updates.as_ref().unwrap().len(), 2);
        assert_eq!(info.to_array().unwrap()["url"], json!(""));
    }

    #[test]
    fn test_response_parameters_all_optional() {
        let params = ResponseParameters::from_array(&as_map(json!({"retry_after": 3})))
            .unwrap()
            .unwrap();
        assert_eq!(params.retry_after, Some(3));
        assert!(params.migrate_to_chat_id.is_none());
    }
}
