//! smartcommit - Git Commit Message Generator
//!
//! This library generates git commit messages by sending a diff, or a plain
//! description of changes, to an OpenAI-compatible chat completion API.
//!
//! # Modules
//!
//! - [`cli`] - Argument parsing and the end-to-end pipeline
//! - [`config`] - Model and endpoint settings from the environment
//! - [`credential`] - API key loading
//! - [`input`] - Literal text or `.diff` file resolution
//! - [`prompt`] - System and user instructions
//! - [`chat`] - Chat completion types and the client trait
//! - [`openai`] - HTTP client for the chat completion API
//! - [`generator`] - Commit message generation
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```no_run
//! use smartcommit::{
//!     config::Settings,
//!     credential::{EnvCredentials, load_credential},
//!     generator::generate_message,
//!     input::resolve_changes,
//!     openai::OpenAiClient,
//! };
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let settings = Settings::from_env();
//! let api_key = load_credential(&EnvCredentials)?;
//! let changes = resolve_changes("changes.diff")?;
//! let client = OpenAiClient::new(&settings.base_url);
//! let message = generate_message(&client, &settings.model, &changes, &api_key).await?;
//! println!("{}", message);
//! # Ok(())
//! # }
//! ```

pub mod chat;
pub mod cli;
pub mod config;
pub mod credential;
pub mod error;
pub mod generator;
pub mod input;
pub mod openai;
pub mod prompt;

pub use error::{CredentialError, GenerationError, InputError};
