//! `medchat check` -- confirm the server could start, without starting it.

use secrecy::ExposeSecret;

use medchat_core::secret::service::mask_secret;
use medchat_infra::config::read_config;
use medchat_types::config::{API_KEY_SECRET, AppConfig};
use medchat_types::error::StartupError;

use super::SourceArgs;
use crate::state::resolve_api_key;

/// Resolve the API key and print the effective configuration.
///
/// Does not contact the inference endpoint.
pub async fn run_check(sources: &SourceArgs) -> Result<(), StartupError> {
    let (config, config_note) = match read_config(&sources.config).await {
        Ok(Some(config)) => (config, "loaded".to_string()),
        Ok(None) => (AppConfig::default(), "not found, using defaults".to_string()),
        Err(err) => (AppConfig::default(), format!("{err}, using defaults")),
    };

    let api_key = resolve_api_key(sources.secrets_files()).await?;

    println!();
    println!("  Config file:   {} ({config_note})", sources.config.display());
    println!("  Endpoint:      {}", config.endpoint);
    println!("  Timeout:       {}s", config.timeout_secs);
    println!("  Session idle:  {}s", config.session_idle_timeout_secs);
    println!("  Listen:        {}:{}", config.host, config.port);
    println!(
        "  {API_KEY_SECRET}:    {}",
        mask_secret(api_key.expose_secret())
    );
    println!();

    Ok(())
}
