//! Commit message generation
//!
//! This module sends the change text to a chat completion API and returns
//! the reply as the commit message.

use tracing::debug;

use crate::chat::{ChatClient, ChatRequest};
use crate::credential::ApiKey;
use crate::error::GenerationError;
use crate::prompt::build_messages;

/// Generate a commit message for `changes`
///
/// Exactly one request is made; failures are not retried. The reply is
/// returned verbatim, without trimming or format checks.
///
/// # Arguments
///
/// * `client` - Chat completion client
/// * `model` - Model identifier for the request
/// * `changes` - Change text (diff contents or a description)
/// * `api_key` - Credential forwarded to the client
///
/// # Returns
///
/// * `Result<String, GenerationError>` - Content of the first choice
///
/// # Errors
///
/// * Transport failure, or the API rejects the request
/// * The response body cannot be decoded
/// * The response has no choices, or the first choice has no content
///
/// # Example
///
/// ```no_run
/// use smartcommit::{
///     config::Settings,
///     credential::{EnvCredentials, load_credential},
///     generator::generate_message,
///     openai::OpenAiClient,
/// };
///
/// # #[tokio::main]
/// # async fn main() -> anyhow::Result<()> {
/// let settings = Settings::from_env();
/// let client = OpenAiClient::new(&settings.base_url);
/// let api_key = load_credential(&EnvCredentials)?;
/// let message = generate_message(&client, &settings.model, "+new line", &api_key).await?;
/// println!("{}", message);
/// # Ok(())
/// # }
/// ```
pub async fn generate_message(
    client: &dyn ChatClient,
    model: &str,
    changes: &str,
    api_key: &ApiKey,
) -> Result<String, GenerationError> {
    let request = ChatRequest {
        model: model.to_string(),
        messages: build_messages(changes),
    };
    debug!(model, change_bytes = changes.len(), "generating commit message");

    let response = client.complete(api_key, &request).await?;

    response
        .first_content()
        .ok_or(GenerationError::EmptyResponse)
}
