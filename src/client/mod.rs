//! Calling the Bot API.
//!
//! [`BotApi`] is the single seam between the typed objects and the remote
//! platform: implementors only provide [`BotApi::call`], and the typed helpers
//! build parameters from objects and parse results back into them.

pub mod http;
pub mod mock;

pub use http::BotClient;
pub use mock::{MockBotApi, RecordedCall};

use crate::files::UploadPart;
use crate::media::{InputMedia, MediaSource};
use crate::object::{ApiObject, Array, FieldValue};
use crate::types::{
    ChatId, File, InlineQueryResult, Message, PassportElementError, ReplyMarkup, Update, User,
};
use crate::{Error, Result};
use async_trait::async_trait;
use serde_json::Value;

/// Albums hold between two and ten items.
pub const MEDIA_GROUP_LIMITS: (usize, usize) = (2, 10);

#[async_trait]
pub trait BotApi: Send + Sync {
    /// Invoke `method` with already-serialized parameters.
    ///
    /// Returns the `result` member of a successful response.
    async fn call(&self, method: &str, params: Array, uploads: Vec<UploadPart>) -> Result<Value>;

    async fn get_me(&self) -> Result<User> {
        let result = self.call("getMe", Array::new(), Vec::new()).await?;
        parse_object("getMe", &result)
    }

    async fn send_message(
        &self,
        chat_id: ChatId,
        text: &str,
        reply_markup: Option<ReplyMarkup>,
    ) -> Result<Message> {
        let mut params = Array::new();
        params.insert("chat_id".to_string(), serde_json::to_value(&chat_id)?);
        params.insert("text".to_string(), Value::from(text));
        if let Some(markup) = reply_markup {
            params.insert("reply_markup".to_string(), Value::Object(markup.to_array()?));
        }

        let result = self.call("sendMessage", params, Vec::new()).await?;
        parse_object("sendMessage", &result)
    }

    /// Send a single photo. An upload travels as the `photo` part itself.
    async fn send_photo(
        &self,
        chat_id: ChatId,
        photo: MediaSource,
        caption: Option<&str>,
    ) -> Result<Message> {
        let mut params = Array::new();
        let mut uploads = Vec::new();
        params.insert("chat_id".to_string(), serde_json::to_value(&chat_id)?);
        match photo {
            MediaSource::Remote(reference) => {
                params.insert("photo".to_string(), Value::String(reference));
            }
            MediaSource::Upload(file) => uploads.push(file.to_upload_part("photo")),
        }
        if let Some(caption) = caption {
            params.insert("caption".to_string(), Value::from(caption));
        }

        let result = self.call("sendPhoto", params, uploads).await?;
        parse_object("sendPhoto", &result)
    }

    /// Send an album. Item `i` attaches its files as `input_media_{i}_media`
    /// and `input_media_{i}_thumb`, all in one request.
    async fn send_media_group(&self, chat_id: ChatId, media: &[InputMedia]) -> Result<Vec<Message>> {
        let (min, max) = MEDIA_GROUP_LIMITS;
        if media.len() < min || media.len() > max {
            return Err(Error::validation(
                "media",
                format!("must include {}-{} items, got {}", min, max, media.len()),
            ));
        }

        let mut items = Vec::with_capacity(media.len());
        let mut uploads = Vec::new();
        for (index, item) in media.iter().enumerate() {
            let resolved = item
                .resolve_for_upload(&format!("input_media_{}", index))
                .map_err(|e| e.nested_in(&format!("media[{}]", index)))?;
            items.push(Value::Object(resolved.fields));
            uploads.extend(resolved.uploads);
        }

        let mut params = Array::new();
        params.insert("chat_id".to_string(), serde_json::to_value(&chat_id)?);
        params.insert("media".to_string(), Value::Array(items));

        let result = self.call("sendMediaGroup", params, uploads).await?;
        parse_list("sendMediaGroup", &result)
    }

    async fn get_file(&self, file_id: &str) -> Result<File> {
        let mut params = Array::new();
        params.insert("file_id".to_string(), Value::from(file_id));

        let result = self.call("getFile", params, Vec::new()).await?;
        parse_object("getFile", &result)
    }

    async fn get_updates(
        &self,
        offset: Option<i64>,
        limit: Option<i64>,
        timeout: Option<i64>,
    ) -> Result<Vec<Update>> {
        let mut params = Array::new();
        for (key, value) in [("offset", offset), ("limit", limit), ("timeout", timeout)] {
            if let Some(value) = value {
                params.insert(key.to_string(), Value::from(value));
            }
        }

        let result = self.call("getUpdates", params, Vec::new()).await?;
        parse_list("getUpdates", &result)
    }

    async fn answer_inline_query(
        &self,
        inline_query_id: &str,
        results: &[InlineQueryResult],
        cache_time: Option<i64>,
    ) -> Result<bool> {
        let mut params = Array::new();
        params.insert("inline_query_id".to_string(), Value::from(inline_query_id));
        params.insert("results".to_string(), objects_to_value(results)?);
        if let Some(cache_time) = cache_time {
            params.insert("cache_time".to_string(), Value::from(cache_time));
        }

        let result = self.call("answerInlineQuery", params, Vec::new()).await?;
        parse_flag("answerInlineQuery", &result)
    }

    async fn set_passport_data_errors(
        &self,
        user_id: i64,
        errors: &[PassportElementError],
    ) -> Result<bool> {
        let mut params = Array::new();
        params.insert("user_id".to_string(), Value::from(user_id));
        params.insert("errors".to_string(), objects_to_value(errors)?);

        let result = self.call("setPassportDataErrors", params, Vec::new()).await?;
        parse_flag("setPassportDataErrors", &result)
    }
}

fn objects_to_value<T: ApiObject>(objects: &[T]) -> Result<Value> {
    objects
        .iter()
        .map(|object| object.to_array().map(Value::Object))
        .collect::<Result<Vec<_>>>()
        .map(Value::Array)
}

/// Parse a `result` holding one object.
pub(crate) fn parse_object<T: ApiObject>(method: &str, result: &Value) -> Result<T> {
    T::from_value(result)
        .map_err(|e| e.nested_in("result"))?
        .ok_or_else(|| Error::validation("result", format!("{} returned no object", method)))
}

/// Parse a `result` holding a list of objects.
pub(crate) fn parse_list<T: ApiObject + FieldValue>(method: &str, result: &Value) -> Result<Vec<T>> {
    let validated = <Vec<T>>::coerce(result).map_err(|e| {
        tracing::error!("Unexpected {} result: {}", method, e);
        e.nested_in("result")
    })?;
    Ok(serde_json::from_value(validated)?)
}

fn parse_flag(method: &str, result: &Value) -> Result<bool> {
    result.as_bool().ok_or_else(|| {
        tracing::error!("Unexpected {} result: {}", method, result);
        Error::mismatch("result", "boolean", result)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::FileReference;
    use crate::media::{InputMediaPhoto, InputMediaVideo};
    use crate::types::{InlineQueryResultArticle, InputTextMessageContent};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];

    fn message(id: i64) -> Value {
        json!({"message_id": id, "date": 0, "chat": {"id": 42, "type": "private"}})
    }

    #[tokio::test]
    async fn test_send_media_group_collects_uploads() {
        let mock = MockBotApi::new().with_result("sendMediaGroup", json!([message(1), message(2)]));
        let upload = FileReference::from_bytes(JPEG, "cat.jpg", None).unwrap();

        let sent = mock
            .send_media_group(
                ChatId::from(42),
                &[
                    InputMedia::from(InputMediaPhoto::new(upload)),
                    InputMedia::from(InputMediaVideo::new("AgADBAAD")),
                ],
            )
            .await
            .unwrap();
        assert_eq!(sent.len(), 2);

        let calls = mock.get_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].params["media"],
            json!([
                {"type": "photo", "media": "attach://input_media_0_media"},
                {"type": "video", "media": "AgADBAAD"}
            ])
        );
        assert_eq!(calls[0].uploads.len(), 1);
        assert_eq!(calls[0].uploads[0].field_name, "input_media_0_media");
        assert_eq!(calls[0].uploads[0].file_name, "cat.jpg");
    }

    #[tokio::test]
    async fn test_send_media_group_size_limits() {
        let mock = MockBotApi::new();
        let err = mock
            .send_media_group(ChatId::from(1), &[InputMedia::from(InputMediaPhoto::new("x"))])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "media"));
        assert_eq!(mock.get_call_count(), 0);
    }

    #[tokio::test]
    async fn test_send_photo_upload_uses_field_itself() {
        let mock = MockBotApi::new().with_result("sendPhoto", message(5));
        let upload = FileReference::from_bytes(JPEG, "cat.jpg", None).unwrap();

        let sent = mock
            .send_photo(ChatId::from("@pets"), upload.into(), Some("meow"))
            .await
            .unwrap();
        assert_eq!(sent.message_id, 5);

        let call = &mock.get_calls()[0];
        assert!(!call.params.contains_key("photo"));
        assert_eq!(call.params["chat_id"], json!("@pets"));
        assert_eq!(call.uploads[0].field_name, "photo");
        assert_eq!(call.uploads[0].mime, "image/jpeg");
    }

    #[tokio::test]
    async fn test_answer_inline_query_serializes_results() {
        let mock = MockBotApi::new().with_result("answerInlineQuery", json!(true));
        let article = InlineQueryResultArticle::new("1", "Hi", InputTextMessageContent::new("hi"));

        assert!(mock
            .answer_inline_query("q1", &[InlineQueryResult::from(article)], Some(0))
            .await
            .unwrap());

        let call = &mock.get_calls()[0];
        assert_eq!(call.params["results"][0]["type"], json!("article"));
        assert_eq!(call.params["cache_time"], json!(0));
    }

    #[tokio::test]
    async fn test_invalid_result_reports_path() {
        let mock = MockBotApi::new().with_result("getUpdates", json!([{"update_id": "x"}]));
        let err = mock.get_updates(None, None, None).await.unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { ref field, .. } if field == "result[0].update_id"));
    }

    #[tokio::test]
    async fn test_flag_result_must_be_boolean() {
        let mock = MockBotApi::new().with_result("setPassportDataErrors", json!("yes"));
        let err = mock.set_passport_data_errors(1, &[]).await.unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }
}
