//! Inference outcome types.
//!
//! [`InferenceError`] is what a backend reports when the HTTP exchange itself
//! goes wrong. [`InferenceResult`] is the classified outcome of a whole `ask`,
//! after response normalization has had its say.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable tag classifying why a request did not yield a usable reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    Timeout,
    ConnectionError,
    HttpError,
    DecodeError,
    ServiceError,
}

impl FailureKind {
    /// The tag string shown to users and written to logs.
    pub fn tag(&self) -> &'static str {
        match self {
            FailureKind::Timeout => "Timeout",
            FailureKind::ConnectionError => "ConnectionError",
            FailureKind::HttpError => "HttpError",
            FailureKind::DecodeError => "DecodeError",
            FailureKind::ServiceError => "ServiceError",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Classified outcome of one inference request. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InferenceResult {
    /// Text to show as the assistant's reply (including the rephrase fallback).
    Reply(String),
    /// The request failed; `detail` is a short cause for display and logs.
    Failure { kind: FailureKind, detail: String },
}

impl InferenceResult {
    pub fn failure(kind: FailureKind, detail: impl Into<String>) -> Self {
        InferenceResult::Failure {
            kind,
            detail: detail.into(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, InferenceResult::Failure { .. })
    }
}

/// Transport-level failures reported by an inference backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InferenceError {
    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("response could not be decoded: {0}")]
    Decode(String),
}

impl InferenceError {
    pub fn kind(&self) -> FailureKind {
        match self {
            InferenceError::Timeout(_) => FailureKind::Timeout,
            InferenceError::Connection(_) => FailureKind::ConnectionError,
            InferenceError::Http { .. } => FailureKind::HttpError,
            InferenceError::Decode(_) => FailureKind::DecodeError,
        }
    }
}

impl From<InferenceError> for InferenceResult {
    fn from(err: InferenceError) -> Self {
        let kind = err.kind();
        let detail = match err {
            InferenceError::Timeout(cause)
            | InferenceError::Connection(cause)
            | InferenceError::Decode(cause) => cause,
            InferenceError::Http { status, body } => format!("{status}: {body}"),
        };
        InferenceResult::Failure { kind, detail }
    }
}
