//! API credential loading
//!
//! The key is looked up through [`CredentialSource`] so the driver can be
//! exercised without touching the process environment.

use std::env;
use std::fmt;

use crate::error::CredentialError;

/// Environment variable holding the chat completion API key
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Source of named secrets
pub trait CredentialSource {
    /// Look up a secret by name, `None` when it is not set
    fn lookup(&self, name: &str) -> Option<String>;
}

/// Reads secrets from the process environment
pub struct EnvCredentials;

impl CredentialSource for EnvCredentials {
    fn lookup(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

/// API key forwarded to the chat completion client
///
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key, for the authorization header only
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

/// Load the API key from `source`
///
/// An empty value counts as missing. The value is otherwise forwarded as-is.
///
/// # Errors
///
/// * `CredentialError::Missing` - `OPENAI_API_KEY` is unset or empty
///
/// # Example
///
/// ```
/// use smartcommit::credential::{load_credential, CredentialSource};
///
/// struct Fixed;
///
/// impl CredentialSource for Fixed {
///     fn lookup(&self, _name: &str) -> Option<String> {
///         Some("sk-test".to_string())
///     }
/// }
///
/// let key = load_credential(&Fixed).unwrap();
/// assert_eq!(key.expose(), "sk-test");
/// ```
pub fn load_credential(source: &dyn CredentialSource) -> Result<ApiKey, CredentialError> {
    match source.lookup(API_KEY_VAR) {
        Some(key) if !key.is_empty() => Ok(ApiKey(key)),
        _ => Err(CredentialError::Missing { var: API_KEY_VAR }),
    }
}
