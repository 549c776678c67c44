//! Shared test doubles for integration tests.
//!
//! Not every helper is used by every test file.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use smartcommit::GenerationError;
use smartcommit::chat::{ChatClient, ChatRequest, ChatResponse};
use smartcommit::credential::{API_KEY_VAR, ApiKey, CredentialSource};

/// Credential source backed by a fixed map.
pub struct FixedCredentials(HashMap<String, String>);

impl FixedCredentials {
    pub fn with_key(key: &str) -> Self {
        Self(HashMap::from([(API_KEY_VAR.to_string(), key.to_string())]))
    }

    pub fn none() -> Self {
        Self(HashMap::new())
    }
}

impl CredentialSource for FixedCredentials {
    fn lookup(&self, name: &str) -> Option<String> {
        self.0.get(name).cloned()
    }
}

/// Outcome a [`RecordingClient`] replays on every call.
pub enum Reply {
    Text(String),
    ApiError { status: u16, message: String },
    Empty,
}

/// Chat client that counts calls and captures requests.
pub struct RecordingClient {
    reply: Reply,
    call_count: AtomicU32,
    requests: Mutex<Vec<ChatRequest>>,
    keys: Mutex<Vec<String>>,
}

impl RecordingClient {
    pub fn replying(text: &str) -> Self {
        Self::new(Reply::Text(text.to_string()))
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self::new(Reply::ApiError {
            status,
            message: message.to_string(),
        })
    }

    pub fn empty() -> Self {
        Self::new(Reply::Empty)
    }

    fn new(reply: Reply) -> Self {
        Self {
            reply,
            call_count: AtomicU32::new(0),
            requests: Mutex::new(Vec::new()),
            keys: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn keys(&self) -> Vec<String> {
        self.keys.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatClient for RecordingClient {
    async fn complete(
        &self,
        api_key: &ApiKey,
        request: &ChatRequest,
    ) -> Result<ChatResponse, GenerationError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        self.keys.lock().unwrap().push(api_key.expose().to_string());

        match &self.reply {
            Reply::Text(text) => Ok(ChatResponse::with_content(text.clone())),
            Reply::ApiError { status, message } => Err(GenerationError::Api {
                status: *status,
                message: message.clone(),
            }),
            Reply::Empty => Ok(ChatResponse::default()),
        }
    }
}
