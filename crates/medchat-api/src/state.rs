//! Application state wiring the inference client, session registry, and
//! page renderer together.
//!
//! AppState is generic over the inference backend so router tests can run
//! against an in-process fake; the binary pins it to [`HuggingFaceBackend`].

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;

use medchat_core::chat::registry::SessionRegistry;
use medchat_core::inference::{InferenceBackend, InferenceClient};
use medchat_core::secret::service::SecretService;
use medchat_infra::inference::HuggingFaceBackend;
use medchat_infra::secret::build_secret_chain;
use medchat_types::config::{API_KEY_SECRET, AppConfig};
use medchat_types::error::StartupError;

use crate::http::templates::ChatPage;

/// Shared application state handed to every handler.
pub struct AppState<B = HuggingFaceBackend> {
    pub client: Arc<InferenceClient<B>>,
    pub sessions: Arc<SessionRegistry>,
    pub page: Arc<ChatPage>,
}

impl<B> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            sessions: Arc::clone(&self.sessions),
            page: Arc::clone(&self.page),
        }
    }
}

impl<B: InferenceBackend> AppState<B> {
    /// Wire state around an already-constructed backend.
    pub fn new(config: &AppConfig, backend: B) -> anyhow::Result<Self> {
        Ok(Self {
            client: Arc::new(InferenceClient::new(backend)),
            sessions: Arc::new(SessionRegistry::new(Duration::from_secs(
                config.session_idle_timeout_secs,
            ))),
            page: Arc::new(ChatPage::new()?),
        })
    }
}

impl AppState {
    /// Build production state: the hosted inference backend with the resolved key.
    pub fn init(config: &AppConfig, api_key: SecretString) -> anyhow::Result<Self> {
        let backend = HuggingFaceBackend::new(
            api_key,
            config.endpoint.clone(),
            Duration::from_secs(config.timeout_secs),
        )?;
        Self::new(config, backend)
    }
}

/// Resolve the inference API key through env, then the given secrets files.
pub async fn resolve_api_key(secrets_files: Vec<PathBuf>) -> Result<SecretString, StartupError> {
    let secrets = SecretService::new(build_secret_chain(secrets_files, true));
    let key = secrets.require_secret(API_KEY_SECRET).await?;
    Ok(SecretString::from(key))
}
