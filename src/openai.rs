use async_trait::async_trait;
use reqwest::{
    Client,
    header::{ACCEPT, CONTENT_TYPE},
};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::chat::{ChatClient, ChatRequest, ChatResponse};
use crate::credential::ApiKey;
use crate::error::GenerationError;

/// Chat completion client for OpenAI-compatible HTTP APIs
pub struct OpenAiClient {
    http: Client,
    endpoint: String,
}

impl OpenAiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            endpoint: Self::completions_endpoint(base_url),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn completions_endpoint(base_url: &str) -> String {
        format!("{}/chat/completions", base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ChatClient for OpenAiClient {
    async fn complete(
        &self,
        api_key: &ApiKey,
        request: &ChatRequest,
    ) -> Result<ChatResponse, GenerationError> {
        debug!(endpoint = %self.endpoint, model = %request.model, "sending chat completion request");

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key.expose())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(GenerationError::Transport)?;

        let status = response.status();
        debug!(%status, "chat completion response received");

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            let message = api_error_message(&body);
            warn!(%status, "chat completion request rejected");
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await.map_err(GenerationError::Transport)?;
        serde_json::from_str(&body).map_err(|err| GenerationError::MalformedResponse(err.to_string()))
    }
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Prefer the API's own `error.message`, fall back to the raw body
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|parsed| parsed.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}
