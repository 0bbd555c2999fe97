//! Configuration types for medchat.
//!
//! `AppConfig` represents `medchat.toml`. Every field has a default, so an
//! empty or missing file yields a working configuration.

use serde::{Deserialize, Serialize};

/// The hosted medical question-answering model the assistant talks to.
pub const DEFAULT_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/GonzaloValdenebro/MedicalQuestionAnswering";

/// Name of the bearer-token secret.
pub const API_KEY_SECRET: &str = "HF_API_KEY";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Inference endpoint URL (receives `POST {"inputs": ...}`).
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Bound on a single inference request, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Sessions idle longer than this are discarded.
    #[serde(default = "default_session_idle_timeout_secs")]
    pub session_idle_timeout_secs: u64,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_session_idle_timeout_secs() -> u64 {
    3600
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            session_idle_timeout_secs: default_session_idle_timeout_secs(),
            host: default_host(),
            port: default_port(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default_values() {
        let config = AppConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.session_idle_timeout_secs, 3600);
        assert_eq!(config.port, 8501);
    }

    #[test]
    fn test_app_config_deserialize_empty_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_app_config_deserialize_partial() {
        let config: AppConfig = toml::from_str(
            r#"
endpoint = "http://localhost:9000/models/test"
timeout_secs = 5
"#,
        )
        .unwrap();
        assert_eq!(config.endpoint, "http://localhost:9000/models/test");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.port, 8501);
    }
}
