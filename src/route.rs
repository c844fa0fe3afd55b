//! Glue for exposing Bot API methods behind an HTTP-style route.
//!
//! Object-valued parameters arrive as JSON text and are parsed into typed
//! objects here; results go back out through `to_array` inside the usual
//! `{ok, result}` / `{ok, error_code, description}` envelopes.

use crate::client::BotApi;
use crate::files::FileReference;
use crate::media::{InputMedia, MediaSource, ATTACH_SCHEME};
use crate::object::{ApiObject, FieldValue};
use crate::types::{ChatId, ReplyMarkup};
use crate::{Error, Result};
use serde_json::{json, Value};
use std::collections::HashMap;

fn parse_json(name: &str, text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|e| Error::validation(name, format!("invalid JSON: {}", e)))
}

/// Parse a JSON-encoded object parameter. `{}` and `null` mean "not given".
pub fn parse_json_param<T: ApiObject>(name: &str, text: &str) -> Result<Option<T>> {
    let value = parse_json(name, text)?;
    T::from_value(&value).map_err(|e| e.nested_in(name))
}

/// Parse a JSON-encoded list of objects.
pub fn parse_json_list_param<T: ApiObject + FieldValue>(name: &str, text: &str) -> Result<Vec<T>> {
    let value = parse_json(name, text)?;
    let validated = <Vec<T>>::coerce(&value).map_err(|e| e.nested_in(name))?;
    Ok(serde_json::from_value(validated)?)
}

pub fn success(result: Value) -> Value {
    json!({"ok": true, "result": result})
}

pub fn failure(error: &Error) -> Value {
    json!({
        "ok": false,
        "error_code": error.http_status(),
        "description": error.to_string(),
    })
}

/// Status code and envelope for the outcome of an adapter.
pub fn respond(outcome: Result<Value>) -> (u16, Value) {
    match outcome {
        Ok(envelope) => (200, envelope),
        Err(e) => {
            if !e.is_validation() {
                tracing::error!("Request failed: {}", e);
            }
            (e.http_status(), failure(&e))
        }
    }
}

/// Swap `attach://<name>` sources for the matching local files.
///
/// Every placeholder must be backed by a file, since the request would
/// otherwise reference a part that is never sent.
pub fn attach_local_files(
    media: &mut [InputMedia],
    files: &HashMap<String, FileReference>,
) -> Result<()> {
    for (index, item) in media.iter_mut().enumerate() {
        for source in item.sources_mut() {
            let name = match source {
                MediaSource::Remote(reference) => match reference.strip_prefix(ATTACH_SCHEME) {
                    Some(name) => name.to_string(),
                    None => continue,
                },
                MediaSource::Upload(_) => continue,
            };

            let file = files.get(&name).ok_or_else(|| {
                Error::validation(
                    format!("media[{}]", index),
                    format!("no file supplied for {}{}", ATTACH_SCHEME, name),
                )
            })?;
            *source = MediaSource::Upload(file.clone());
        }
    }
    Ok(())
}

pub async fn get_me(api: &dyn BotApi) -> Result<Value> {
    let me = api.get_me().await?;
    Ok(success(Value::Object(me.to_array()?)))
}

pub async fn send_message(
    api: &dyn BotApi,
    chat_id: ChatId,
    text: &str,
    reply_markup: Option<&str>,
) -> Result<Value> {
    if text.is_empty() {
        return Err(Error::validation("text", "must not be empty"));
    }

    let reply_markup = match reply_markup {
        Some(raw) => parse_json_param::<ReplyMarkup>("reply_markup", raw)?,
        None => None,
    };

    let message = api.send_message(chat_id, text, reply_markup).await?;
    Ok(success(Value::Object(message.to_array()?)))
}

pub async fn send_media_group(
    api: &dyn BotApi,
    chat_id: ChatId,
    media: &str,
    files: &HashMap<String, FileReference>,
) -> Result<Value> {
    let mut media = parse_json_list_param::<InputMedia>("media", media)?;
    attach_local_files(&mut media, files)?;

    let messages = api.send_media_group(chat_id, &media).await?;
    let result = messages
        .iter()
        .map(|message| message.to_array().map(Value::Object))
        .collect::<Result<Vec<_>>>()?;
    Ok(success(Value::Array(result)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockBotApi;
    use crate::types::InlineKeyboardMarkup;
    use pretty_assertions::assert_eq;

    const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    fn message(id: i64) -> Value {
        json!({"message_id": id, "date": 0, "chat": {"id": 1, "type": "private"}})
    }

    #[test]
    fn test_parse_json_param() {
        let markup: InlineKeyboardMarkup = parse_json_param(
            "reply_markup",
            r#"{"inline_keyboard": [[{"text": "a", "callback_data": "b"}]]}"#,
        )
        .unwrap()
        .unwrap();
        assert_eq!(markup.inline_keyboard[0][0].text, "a");

        assert!(parse_json_param::<InlineKeyboardMarkup>("reply_markup", "{}")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_parse_json_param_errors() {
        let err = parse_json_param::<InlineKeyboardMarkup>("reply_markup", "{nope").unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "reply_markup"));

        let err = parse_json_param::<InlineKeyboardMarkup>("reply_markup", r#"{"inline_keyboard": 1}"#)
            .unwrap_err();
        assert!(
            matches!(err, Error::TypeMismatch { ref field, .. } if field == "reply_markup.inline_keyboard")
        );
        assert_eq!(err.http_status(), 400);
    }

    #[test]
    fn test_parse_json_list_param_paths() {
        let err = parse_json_list_param::<InputMedia>(
            "media",
            r#"[{"type": "photo", "media": "a"}, {"type": "video"}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::MissingField { ref field } if field == "media[1].media"));
    }

    #[test]
    fn test_envelopes() {
        assert_eq!(success(json!(true)), json!({"ok": true, "result": true}));

        let (status, body) = respond(Err(Error::Api {
            code: 400,
            description: "Bad Request: chat not found".to_string(),
            retry_after: None,
        }));
        assert_eq!(status, 400);
        assert_eq!(body["ok"], json!(false));
        assert_eq!(body["error_code"], json!(400));
        assert_eq!(body["description"], json!("Bot API error 400: Bad Request: chat not found"));
    }

    #[test]
    fn test_attach_local_files() {
        let file = FileReference::from_bytes(PNG, "dot.png", None).unwrap();
        let files = HashMap::from([("dot".to_string(), file)]);

        let mut media = parse_json_list_param::<InputMedia>(
            "media",
            r#"[
                {"type": "photo", "media": "attach://dot"},
                {"type": "document", "media": "BQAD", "thumb": "attach://dot"}
            ]"#,
        )
        .unwrap();
        attach_local_files(&mut media, &files).unwrap();

        assert!(media[0].media().is_upload());
        assert!(!media[1].media().is_upload());
        let resolved = media[1].resolve_for_upload("input_media_1").unwrap();
        assert_eq!(resolved.fields["thumb"], json!("attach://input_media_1_thumb"));
        assert_eq!(resolved.uploads[0].file_name, "dot.png");
    }

    #[test]
    fn test_attach_local_files_missing() {
        let mut media =
            parse_json_list_param::<InputMedia>("media", r#"[{"type": "photo", "media": "attach://x"}]"#)
                .unwrap();
        let err = attach_local_files(&mut media, &HashMap::new()).unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "media[0]"));
    }

    #[tokio::test]
    async fn test_send_message_adapter() {
        let mock = MockBotApi::new().with_result("sendMessage", message(3));

        let envelope = send_message(
            &mock,
            ChatId::from(1),
            "hi",
            Some(r#"{"remove_keyboard": true}"#),
        )
        .await
        .unwrap();

        assert_eq!(envelope["ok"], json!(true));
        assert_eq!(envelope["result"]["message_id"], json!(3));
        assert_eq!(
            mock.get_calls()[0].params["reply_markup"],
            json!({"remove_keyboard": true})
        );
    }

    #[tokio::test]
    async fn test_send_message_reports_bad_button_path() {
        let mock = MockBotApi::new();
        let err = send_message(
            &mock,
            ChatId::from(1),
            "hi",
            Some(r#"{"inline_keyboard": [[{"text": 5}]]}"#),
        )
        .await
        .unwrap_err();

        assert!(
            matches!(err, Error::TypeMismatch { ref field, .. } if field == "reply_markup.inline_keyboard[0][0].text"),
            "{err:?}"
        );
        assert_eq!(mock.get_call_count(), 0);
    }

    #[tokio::test]
    async fn test_send_message_rejects_empty_text() {
        let mock = MockBotApi::new();
        let (status, _) = respond(send_message(&mock, ChatId::from(1), "", None).await);
        assert_eq!(status, 400);
        assert_eq!(mock.get_call_count(), 0);
    }

    #[tokio::test]
    async fn test_remote_failure_maps_to_status() {
        let mock = MockBotApi::new().with_failure("getMe", 401, "Unauthorized");
        let (status, body) = respond(get_me(&mock).await);
        assert_eq!(status, 401);
        assert_eq!(body["error_code"], json!(401));
    }
}
