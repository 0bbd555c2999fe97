//! Configuration file loader.
//!
//! Reads `medchat.toml` and deserializes it into [`AppConfig`]. Falls back to
//! defaults when the file is missing or malformed, so a bad config file never
//! keeps the assistant from starting.

use std::path::Path;

use medchat_types::config::AppConfig;
use medchat_types::error::ConfigError;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "medchat.toml";

/// Read and parse a config file.
///
/// Returns `Ok(None)` when the file does not exist.
pub async fn read_config(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                message: err.to_string(),
            });
        }
    };

    toml::from_str::<AppConfig>(&content)
        .map(Some)
        .map_err(|err| ConfigError::Parse {
            path: path.display().to_string(),
            message: err.to_string(),
        })
}

/// Load configuration from `path`.
///
/// - Missing file: [`AppConfig::default()`], logged at debug.
/// - Unreadable or malformed file: warning, then the default.
pub async fn load_config(path: &Path) -> AppConfig {
    match read_config(path).await {
        Ok(Some(config)) => config,
        Ok(None) => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            AppConfig::default()
        }
        Err(err) => {
            tracing::warn!("{err}, using defaults");
            AppConfig::default()
        }
    }
}
