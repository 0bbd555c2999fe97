//! Secret provider chain construction.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use medchat_core::secret::DynSecretProvider;

use super::env::EnvSecretProvider;
use super::file::SecretsFileProvider;

/// Secrets files checked when no `--secrets-file` is given.
pub fn default_secrets_files(data_dir: &Path) -> Vec<PathBuf> {
    vec![
        PathBuf::from(".medchat").join("secrets.toml"),
        data_dir.join("secrets.toml"),
    ]
}

/// Build the provider chain: environment first (when enabled), then each
/// secrets file in the given order.
pub fn build_secret_chain(files: Vec<PathBuf>, include_env: bool) -> Vec<DynSecretProvider> {
    let mut chain: Vec<DynSecretProvider> = Vec::with_capacity(files.len() + 1);

    if include_env {
        chain.push(Arc::new(EnvSecretProvider::new()));
    }

    for path in files {
        chain.push(Arc::new(SecretsFileProvider::new(path)));
    }

    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use medchat_core::secret::service::SecretService;
    use medchat_types::error::StartupError;

    #[test]
    fn test_chain_order() {
        let chain = build_secret_chain(vec![PathBuf::from("/a/secrets.toml")], true);
        let names: Vec<&str> = chain.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["env", "secrets_file:/a/secrets.toml"]);
    }

    #[test]
    fn test_default_files_end_with_data_dir() {
        let files = default_secrets_files(Path::new("/data"));
        assert_eq!(files.len(), 2);
        assert_eq!(files[1], PathBuf::from("/data/secrets.toml"));
    }

    #[tokio::test]
    async fn test_first_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.toml");
        let second = dir.path().join("second.toml");
        std::fs::write(&first, "MEDCHAT_CHAIN_KEY = \"from-first\"\n").unwrap();
        std::fs::write(&second, "MEDCHAT_CHAIN_KEY = \"from-second\"\n").unwrap();

        let service = SecretService::new(build_secret_chain(vec![first, second], false));
        let value = service.get_secret("MEDCHAT_CHAIN_KEY").await.unwrap();
        assert_eq!(value.as_deref(), Some("from-first"));
    }

    #[tokio::test]
    async fn test_missing_everywhere_lists_searched_sources() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("absent.toml");

        let service = SecretService::new(build_secret_chain(vec![absent], true));
        let err = service
            .require_secret("MEDCHAT_CHAIN_KEY_NEVER_SET")
            .await
            .unwrap_err();

        match err {
            StartupError::MissingCredential { key, searched } => {
                assert_eq!(key, "MEDCHAT_CHAIN_KEY_NEVER_SET");
                assert_eq!(searched.len(), 2);
                assert_eq!(searched[0], "env");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
