// src/services/api_client.rs
use crate::error::ApiError;
use crate::message::{ChatRequest, ChatResponse};

/// Thin wrapper over the chat endpoint. One POST per turn, no retry,
/// no timeout, no cancellation.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ApiClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub async fn send(
        &self,
        message: &str,
        session_id: Option<&str>,
    ) -> Result<ChatResponse, ApiError> {
        let payload = ChatRequest {
            session_id,
            message,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}
