//! medchat entry point.
//!
//! Binary name: `medchat`
//!
//! Parses CLI arguments, initializes tracing, resolves the inference API key,
//! then either serves the chat page or runs the configuration check.

mod cli;
mod http;
mod state;

use std::time::Duration;

use clap::Parser;
use tracing::{error, info};

use medchat_core::chat::registry::spawn_idle_sweeper;
use medchat_infra::config::load_config;
use medchat_types::error::StartupError;

use cli::{Cli, Commands};
use state::AppState;

/// How often idle sessions are swept.
const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Exit code when a required credential or secret source is unusable.
const EXIT_STARTUP_FAILURE: i32 = 2;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = medchat_observe::verbosity_filter(cli.verbose, cli.quiet);
    medchat_observe::init_tracing(cli.otel, filter).map_err(|e| anyhow::anyhow!(e))?;

    let result = run(cli).await;
    medchat_observe::shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Check { sources } => {
            if let Err(err) = cli::check::run_check(&sources).await {
                refuse_to_start(&err);
            }
        }

        Commands::Serve {
            sources,
            host,
            port,
        } => {
            let mut config = load_config(&sources.config).await;
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }

            // Nothing is bound and no backend exists until the key resolves.
            let api_key = match state::resolve_api_key(sources.secrets_files()).await {
                Ok(key) => key,
                Err(err) => refuse_to_start(&err),
            };

            let state = AppState::init(&config, api_key)?;
            let sweeper = spawn_idle_sweeper(state.sessions.clone(), SESSION_SWEEP_INTERVAL);

            let addr = format!("{}:{}", config.host, config.port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            info!(
                %addr,
                endpoint = %config.endpoint,
                timeout_secs = config.timeout_secs,
                "medchat listening"
            );
            if !cli.quiet {
                println!("  🩺 medchat listening on http://{addr}");
                println!("  Press Ctrl+C to stop");
            }

            let router = http::router::build_router(state);
            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            sweeper.abort();
            info!("server stopped");
        }
    }

    Ok(())
}

/// Log the startup failure, print one diagnostic line, and exit.
fn refuse_to_start(err: &StartupError) -> ! {
    error!(error = %err, "refusing to start");
    eprintln!("medchat: {err}");
    medchat_observe::shutdown_tracing();
    std::process::exit(EXIT_STARTUP_FAILURE);
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
