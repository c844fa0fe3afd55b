use super::BotApi;
use crate::files::UploadPart;
use crate::object::Array;
use crate::{Error, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// One request the mock received.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: String,
    pub params: Array,
    pub uploads: Vec<UploadPart>,
}

#[derive(Debug, Clone)]
enum Canned {
    Result(Value),
    Failure { code: u16, description: String },
}

/// In-memory [`BotApi`] that records calls and replays canned results.
#[derive(Clone, Default)]
pub struct MockBotApi {
    responses: Arc<Mutex<HashMap<String, Canned>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockBotApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method` with `result`.
    pub fn with_result(self, method: &str, result: Value) -> Self {
        lock(&self.responses).insert(method.to_string(), Canned::Result(result));
        self
    }

    /// Answer `method` with an `ok: false` envelope.
    pub fn with_failure(self, method: &str, code: u16, description: &str) -> Self {
        lock(&self.responses).insert(
            method.to_string(),
            Canned::Failure {
                code,
                description: description.to_string(),
            },
        );
        self
    }

    pub fn get_call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    pub fn get_calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }
}

#[async_trait]
impl BotApi for MockBotApi {
    async fn call(&self, method: &str, params: Array, uploads: Vec<UploadPart>) -> Result<Value> {
        lock(&self.calls).push(RecordedCall {
            method: method.to_string(),
            params,
            uploads,
        });

        let canned = lock(&self.responses).get(method).cloned();
        match canned {
            Some(Canned::Result(result)) => Ok(result),
            Some(Canned::Failure { code, description }) => Err(Error::Api {
                code,
                description,
                retry_after: None,
            }),
            None => Err(Error::Api {
                code: 404,
                description: format!("Not Found: method {} is not mocked", method),
                retry_after: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_records_and_replays() {
        let mock = MockBotApi::new().with_result("getMe", json!({"id": 1}));

        let mut params = Array::new();
        params.insert("x".to_string(), json!(1));
        let result = mock.call("getMe", params.clone(), Vec::new()).await.unwrap();

        assert_eq!(result, json!({"id": 1}));
        assert_eq!(mock.get_call_count(), 1);
        assert_eq!(mock.get_calls()[0].method, "getMe");
        assert_eq!(mock.get_calls()[0].params, params);
    }

    #[tokio::test]
    async fn test_mock_failure_and_unknown_method() {
        let mock = MockBotApi::new().with_failure("sendMessage", 403, "Forbidden: bot was blocked");

        let err = mock
            .call("sendMessage", Array::new(), Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Api { code: 403, .. }));
        assert_eq!(err.http_status(), 403);

        let err = mock.call("getChat", Array::new(), Vec::new()).await.unwrap_err();
        assert!(matches!(err, Error::Api { code: 404, .. }));
        assert_eq!(mock.get_call_count(), 2);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let mock = MockBotApi::new().with_result("close", json!(true));
        let clone = mock.clone();
        clone.call("close", Array::new(), Vec::new()).await.unwrap();
        assert_eq!(mock.get_call_count(), 1);
    }
}
