//! Command-line driver
//!
//! Wires credential loading, input resolution and generation into one
//! linear pipeline. The binary supplies the real environment, HTTP client
//! and stdout; tests supply their own.

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::chat::ChatClient;
use crate::config::Settings;
use crate::credential::{CredentialSource, load_credential};
use crate::error::InputError;
use crate::generator::generate_message;
use crate::input::resolve_changes;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "smartcommit")]
#[command(about = "Generate a git commit message from a diff or a description of changes", long_about = None)]
pub struct Args {
    /// Changes as a string or path to a .diff file
    pub changes: String,
}

/// Run one invocation
///
/// # Process flow
///
/// 1. Load the API key
/// 2. Resolve the change text (literal or `.diff` file)
/// 3. Generate the commit message
/// 4. Write the message and a trailing newline to `out`
///
/// Nothing is written to `out` unless every step succeeds.
///
/// # Errors
///
/// * `OPENAI_API_KEY` is not set (checked before any network call)
/// * The `.diff` file does not exist or cannot be read
/// * The change text is empty
/// * The chat completion request fails
/// * Writing to `out` fails
pub async fn run<W: Write>(
    args: &Args,
    settings: &Settings,
    credentials: &dyn CredentialSource,
    client: &dyn ChatClient,
    out: &mut W,
) -> Result<()> {
    let api_key = load_credential(credentials)?;

    let changes = resolve_changes(&args.changes)?;
    if changes.trim().is_empty() {
        return Err(InputError::Empty.into());
    }

    let message = generate_message(client, &settings.model, &changes, &api_key).await?;
    debug!(bytes = message.len(), "commit message generated");

    writeln!(out, "{message}")?;
    out.flush()?;

    Ok(())
}
