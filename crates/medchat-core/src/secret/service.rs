//! Secret resolution service.
//!
//! SecretService walks a chain of providers in priority order; the first
//! provider that has the key wins.

use tracing::debug;

use medchat_types::error::{SecretError, StartupError};

use super::DynSecretProvider;

/// Resolves secrets through an ordered provider chain.
pub struct SecretService {
    providers: Vec<DynSecretProvider>,
}

impl SecretService {
    /// Providers should be ordered by precedence (highest priority first).
    pub fn new(providers: Vec<DynSecretProvider>) -> Self {
        Self { providers }
    }

    /// Names of the providers in resolution order.
    pub fn provider_names(&self) -> Vec<String> {
        self.providers.iter().map(|p| p.name().to_string()).collect()
    }

    /// Resolve a secret value; blank values count as missing.
    pub async fn get_secret(&self, key: &str) -> Result<Option<String>, SecretError> {
        for provider in &self.providers {
            if let Some(value) = provider.get_boxed(key).await? {
                if value.trim().is_empty() {
                    continue;
                }
                debug!(key, provider = provider.name(), "secret resolved");
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    /// Resolve a secret the application cannot run without.
    pub async fn require_secret(&self, key: &str) -> Result<String, StartupError> {
        match self.get_secret(key).await? {
            Some(value) => Ok(value),
            None => Err(StartupError::MissingCredential {
                key: key.to_string(),
                searched: self.provider_names(),
            }),
        }
    }
}

/// Mask a secret for display, keeping only the last four characters.
pub fn mask_secret(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 8 {
        "****".to_string()
    } else {
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("****{tail}")
    }
}
