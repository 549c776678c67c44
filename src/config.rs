//! Configuration management for smartcommit
//!
//! Settings come from environment variables only. Every setting has a
//! default, so loading never fails.

use std::env;

/// Environment variable overriding the model identifier
pub const MODEL_VAR: &str = "SMARTCOMMIT_MODEL";

/// Environment variable overriding the API base URL
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";

/// Default chat completion model
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default OpenAI API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Runtime settings for the chat completion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Model identifier sent with every request
    pub model: String,
    /// Base URL of an OpenAI-compatible API, without `/chat/completions`
    pub base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the environment
    ///
    /// Unset or empty variables fall back to the defaults.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use smartcommit::config::Settings;
    ///
    /// let settings = Settings::from_env();
    /// println!("Model: {}", settings.model);
    /// ```
    pub fn from_env() -> Self {
        Self {
            model: env_or(MODEL_VAR, DEFAULT_MODEL),
            base_url: env_or(BASE_URL_VAR, DEFAULT_BASE_URL),
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
