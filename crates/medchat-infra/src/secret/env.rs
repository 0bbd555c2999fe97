//! Environment variable secret provider.
//!
//! Checks `key` directly as an environment variable name. Values that are
//! not valid Unicode are treated as not found.

use medchat_core::secret::SecretProvider;
use medchat_types::error::SecretError;

pub struct EnvSecretProvider;

impl EnvSecretProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvSecretProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretProvider for EnvSecretProvider {
    fn name(&self) -> &str {
        "env"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, SecretError> {
        match std::env::var(key) {
            Ok(val) => Ok(Some(val)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_env_provider_get_existing() {
        // SAFETY: the variable name is unique to this test.
        unsafe { std::env::set_var("MEDCHAT_TEST_SECRET_1", "test-value-123") };

        let provider = EnvSecretProvider::new();
        let result = provider.get("MEDCHAT_TEST_SECRET_1").await.unwrap();
        assert_eq!(result, Some("test-value-123".to_string()));

        // SAFETY: the var was just set above.
        unsafe { std::env::remove_var("MEDCHAT_TEST_SECRET_1") };
    }

    #[tokio::test]
    async fn test_env_provider_get_missing() {
        let provider = EnvSecretProvider::new();
        let result = provider.get("MEDCHAT_NONEXISTENT_VAR_XYZ").await.unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_env_provider_name() {
        assert_eq!(SecretProvider::name(&EnvSecretProvider::new()), "env");
    }
}
