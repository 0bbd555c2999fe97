//! Secrets file provider.
//!
//! Reads a flat TOML table of string values:
//!
//! ```toml
//! HF_API_KEY = "hf_..."
//! ```
//!
//! A missing file is not an error; it simply has no secrets. The file is
//! read on every lookup since lookups only happen at startup.

use std::path::{Path, PathBuf};

use medchat_core::secret::SecretProvider;
use medchat_types::error::SecretError;

pub struct SecretsFileProvider {
    path: PathBuf,
    name: String,
}

impl SecretsFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = format!("secrets_file:{}", path.display());
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_table(&self) -> Result<Option<toml::Table>, SecretError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(SecretError::Read {
                    path: self.path.display().to_string(),
                    message: err.to_string(),
                });
            }
        };

        content
            .parse::<toml::Table>()
            .map(Some)
            .map_err(|err| SecretError::Parse {
                path: self.path.display().to_string(),
                message: err.to_string(),
            })
    }
}

impl SecretProvider for SecretsFileProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn get(&self, key: &str) -> Result<Option<String>, SecretError> {
        let Some(table) = self.read_table().await? else {
            return Ok(None);
        };

        match table.get(key) {
            Some(toml::Value::String(value)) => Ok(Some(value.clone())),
            Some(other) => Err(SecretError::Parse {
                path: self.path.display().to_string(),
                message: format!("{key} must be a string, found {}", other.type_str()),
            }),
            None => Ok(None),
        }
    }
}
