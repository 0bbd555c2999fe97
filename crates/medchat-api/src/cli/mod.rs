//! CLI command definitions for the `medchat` binary.

pub mod check;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use medchat_infra::config::DEFAULT_CONFIG_FILE;
use medchat_infra::resolve_data_dir;
use medchat_infra::secret::default_secrets_files;

/// A web chat assistant for medical questions.
#[derive(Parser)]
#[command(name = "medchat", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also export spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat server.
    Serve {
        #[command(flatten)]
        sources: SourceArgs,

        /// Host to bind to (overrides the config file).
        #[arg(long, env = "MEDCHAT_HOST")]
        host: Option<String>,

        /// Port to listen on (overrides the config file).
        #[arg(short, long, env = "MEDCHAT_PORT")]
        port: Option<u16>,
    },

    /// Verify the API key resolves and print the effective configuration.
    Check {
        #[command(flatten)]
        sources: SourceArgs,
    },
}

/// Where configuration and secrets are read from.
#[derive(Args)]
pub struct SourceArgs {
    /// Path to the TOML config file.
    #[arg(long, env = "MEDCHAT_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Secrets file to read `HF_API_KEY` from when it is not in the environment.
    #[arg(long, env = "MEDCHAT_SECRETS_FILE")]
    pub secrets_file: Option<PathBuf>,
}

impl SourceArgs {
    /// Secrets files to consult after the environment, in order.
    pub fn secrets_files(&self) -> Vec<PathBuf> {
        match &self.secrets_file {
            Some(path) => vec![path.clone()],
            None => default_secrets_files(&resolve_data_dir()),
        }
    }
}
