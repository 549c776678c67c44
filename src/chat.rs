//! Chat completion request and response types
//!
//! These mirror the OpenAI chat completion JSON contract. Only the fields
//! smartcommit reads are modelled on the response side.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::credential::ApiKey;
use crate::error::GenerationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One role-tagged message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ReplyMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReplyMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    /// Response carrying a single choice with `content`
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            choices: vec![Choice {
                message: ReplyMessage {
                    content: Some(content.into()),
                },
            }],
        }
    }

    /// Text of the first choice, if the API returned any
    pub fn first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
    }
}

/// Client able to answer a chat completion request
///
/// The production implementation is [`crate::openai::OpenAiClient`].
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(
        &self,
        api_key: &ApiKey,
        request: &ChatRequest,
    ) -> Result<ChatResponse, GenerationError>;
}
