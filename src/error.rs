//! Error types for smartcommit modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading the API credential.
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("{var} not found in environment variables")]
    Missing { var: &'static str },
}

/// Errors from resolving the change text argument.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("{} does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No changes given: the change text is empty")]
    Empty,
}

/// Errors from the chat-completion request.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Failed to reach the chat completion API: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Chat completion API responded with {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Chat completion API returned a malformed response: {0}")]
    MalformedResponse(String),

    #[error("Chat completion API returned no message content")]
    EmptyResponse,
}
