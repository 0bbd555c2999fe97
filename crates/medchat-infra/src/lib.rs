//! Infrastructure layer for medchat.
//!
//! Implements the ports defined in `medchat-core`: the HTTP inference
//! backend for the hosted model, environment and secrets-file secret
//! providers, and the `medchat.toml` config loader.

pub mod config;
pub mod inference;
pub mod secret;

use std::path::PathBuf;

/// Resolve the medchat data directory.
///
/// `MEDCHAT_DATA_DIR` wins; otherwise `~/.medchat`; otherwise `./.medchat`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("MEDCHAT_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".medchat");
    }

    PathBuf::from(".medchat")
}
