//! CLI tool to generate git commit messages from a diff or a description
//!
//! The message is printed to stdout so it can be piped into
//! `git commit -F -`. Diagnostics go to stderr.

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use smartcommit::{
    cli::{Args, run},
    config::Settings,
    credential::EnvCredentials,
    openai::OpenAiClient,
};

/// Main entry point
///
/// Any error is returned from `main`, which prints it to stderr and exits
/// with status 1.
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let settings = Settings::from_env();
    let client = OpenAiClient::new(&settings.base_url);

    let mut stdout = io::stdout().lock();
    run(&args, &settings, &EnvCredentials, &client, &mut stdout).await
}

/// Log to stderr, filtered by `RUST_LOG` (default: warn)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
