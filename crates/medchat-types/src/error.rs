use thiserror::Error;

/// Errors that stop the server before it starts serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(
        "required secret '{key}' not found (searched: {}). Set it in the environment or add it to the secrets file.",
        .searched.join(", ")
    )]
    MissingCredential { key: String, searched: Vec<String> },

    #[error("secret store error: {0}")]
    SecretStore(#[from] SecretError),
}

/// Errors from secret provider lookups.
#[derive(Debug, Error)]
pub enum SecretError {
    #[error("failed to read secrets file {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse secrets file {path}: {message}")]
    Parse { path: String, message: String },
}

/// Errors from loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse config file {path}: {message}")]
    Parse { path: String, message: String },
}

/// Errors from chat session operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("question must not be empty")]
    EmptyQuestion,
}
