use super::BotApi;
use crate::config::Config;
use crate::files::UploadPart;
use crate::object::Array;
use crate::types::ResponseParameters;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::multipart::Form;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.telegram.org";

/// Bot API client over HTTPS.
///
/// Requests without uploads are sent as JSON; requests with uploads as
/// `multipart/form-data`, with every non-string parameter JSON-encoded.
pub struct BotClient {
    client: Client,
    token: String,
    base_url: String,
    timeout: Duration,
}

/// Response envelope shared by every method.
#[derive(Debug, Deserialize)]
struct Envelope {
    ok: bool,
    result: Option<Value>,
    description: Option<String>,
    error_code: Option<u16>,
    parameters: Option<ResponseParameters>,
}

impl BotClient {
    pub fn new(token: String, timeout: Duration) -> Self {
        Self::new_with_client(token, timeout, Client::new())
    }

    pub fn new_with_client(token: String, timeout: Duration, client: Client) -> Self {
        Self {
            client,
            token,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.token.clone(), config.timeout).with_base_url(config.base_url.clone())
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }
}

#[async_trait]
impl BotApi for BotClient {
    async fn call(&self, method: &str, params: Array, uploads: Vec<UploadPart>) -> Result<Value> {
        tracing::debug!(
            "Calling {} with {} parameter(s) and {} upload(s)",
            method,
            params.len(),
            uploads.len()
        );

        let request = self.client.post(self.method_url(method)).timeout(self.timeout);
        let request = if uploads.is_empty() {
            request.json(&params)
        } else {
            request.multipart(build_form(params, uploads)?)
        };

        let response = request.send().await.map_err(|e| {
            // The URL carries the token.
            let e = e.without_url();
            tracing::error!("Failed to send {} request: {}", method, e);
            e
        })?;

        let status = response.status();
        let body = response.text().await?;
        parse_envelope(method, status.as_u16(), &body)
    }
}

fn build_form(params: Array, uploads: Vec<UploadPart>) -> Result<Form> {
    let mut form = Form::new();
    for (key, value) in params {
        let text = match value {
            Value::String(text) => text,
            other => other.to_string(),
        };
        form = form.text(key, text);
    }
    for upload in uploads {
        let name = upload.field_name.clone();
        form = form.part(name, upload.into_multipart()?);
    }
    Ok(form)
}

fn parse_envelope(method: &str, status: u16, body: &str) -> Result<Value> {
    let envelope: Envelope = serde_json::from_str(body).map_err(|e| {
        tracing::error!("Failed to parse {} response: {}\nBody: {}", method, e, body);
        Error::Api {
            code: status,
            description: format!("Unparsable response (status {}): {}", status, e),
            retry_after: None,
        }
    })?;

    if envelope.ok {
        return Ok(envelope.result.unwrap_or(Value::Null));
    }

    let code = envelope.error_code.unwrap_or(status);
    let description = envelope
        .description
        .unwrap_or_else(|| "No description".to_string());
    tracing::error!("Bot API error on {} (status {}): {}", method, code, description);
    Err(Error::Api {
        code,
        description,
        retry_after: envelope.parameters.and_then(|p| p.retry_after),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::FileReference;
    use crate::media::{InputMedia, InputMediaPhoto, InputMediaVideo};
    use crate::types::ChatId;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TOKEN: &str = "123:abc";
    const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00];

    fn client_for(server: &MockServer) -> BotClient {
        BotClient::new(TOKEN.to_string(), Duration::from_secs(5)).with_base_url(server.uri())
    }

    fn message(id: i64) -> Value {
        json!({"message_id": id, "date": 1, "chat": {"id": 7, "type": "private"}})
    }

    #[tokio::test]
    async fn test_get_me() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bot123:abc/getMe"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "result": {"id": 123, "is_bot": true, "first_name": "Bridge", "username": "bridge_bot"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let me = client_for(&server).get_me().await.unwrap();
        assert!(me.is_bot);
        assert_eq!(me.username.as_deref(), Some("bridge_bot"));
    }

    #[tokio::test]
    async fn test_send_message_posts_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bot123:abc/sendMessage"))
            .and(body_json(json!({"chat_id": 7, "text": "hello"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"ok": true, "result": message(9)})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let sent = client_for(&server)
            .send_message(ChatId::from(7), "hello", None)
            .await
            .unwrap();
        assert_eq!(sent.message_id, 9);
    }

    #[tokio::test]
    async fn test_api_error_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bot123:abc/sendMessage"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "ok": false,
                "error_code": 429,
                "description": "Too Many Requests: retry after 3",
                "parameters": {"retry_after": 3}
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .send_message(ChatId::from(7), "hello", None)
            .await
            .unwrap_err();

        match err {
            Error::Api {
                code, retry_after, ..
            } => {
                assert_eq!(code, 429);
                assert_eq!(retry_after, Some(3));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bot123:abc/getMe"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).get_me().await.unwrap_err();
        assert!(matches!(err, Error::Api { code: 502, .. }));
        assert_eq!(err.http_status(), 502);
    }

    #[tokio::test]
    async fn test_media_group_goes_multipart() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bot123:abc/sendMediaGroup"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "result": [message(1), message(2)]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let upload = FileReference::from_bytes(PNG, "dot.png", None).unwrap();
        let sent = client_for(&server)
            .send_media_group(
                ChatId::from(7),
                &[
                    InputMedia::from(InputMediaVideo::new("BAADAgAD").with_thumb(upload)),
                    InputMedia::from(InputMediaPhoto::new("https://example.com/a.jpg")),
                ],
            )
            .await
            .unwrap();
        assert_eq!(sent.len(), 2);

        let requests = server.received_requests().await.unwrap();
        let body = String::from_utf8_lossy(&requests[0].body);
        assert!(body.contains("name=\"chat_id\""));
        assert!(body.contains("attach://input_media_0_thumb"));
        assert!(body.contains("name=\"input_media_0_thumb\"; filename=\"dot.png\""));
        assert!(body.contains("image/png"));
        assert!(!body.contains("input_media_1_media"));
    }

    #[test]
    fn test_ok_without_result_is_null() {
        assert_eq!(parse_envelope("close", 200, r#"{"ok": true}"#).unwrap(), Value::Null);
    }
}
