//! Per-session chat state.
//!
//! - `transcript`: ordered, append-only record of turns
//! - `session`: one browser session's context (transcript + activity timestamps)
//! - `registry`: the live sessions, each behind its own lock

pub mod registry;
pub mod session;
pub mod transcript;
