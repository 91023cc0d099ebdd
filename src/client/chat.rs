use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use super::{ApiClient, RequestBody};
use crate::{
    dto::chat::{ChatRequest, ChatResponse},
    error::ClientResult,
};

impl ApiClient {
    pub async fn chat(&self, request: &ChatRequest) -> ClientResult<ChatResponse> {
        let body = RequestBody::json(request)?;
        self.send(Method::POST, &["chat"], body).await
    }

    /// Posts any payload to the chat endpoint and hands back the body untouched.
    pub async fn send_chat<T: Serialize>(&self, payload: &T) -> ClientResult<Value> {
        let body = RequestBody::json(payload)?;
        self.send(Method::POST, &["chat"], body).await
    }
}
