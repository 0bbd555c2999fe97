//! Secret providers for medchat.
//!
//! Resolution order (highest priority first):
//! 1. Environment variables
//! 2. Secrets files (`./.medchat/secrets.toml`, then `<data_dir>/secrets.toml`)

pub mod chain;
pub mod env;
pub mod file;

pub use chain::{build_secret_chain, default_secrets_files};
pub use env::EnvSecretProvider;
pub use file::SecretsFileProvider;
