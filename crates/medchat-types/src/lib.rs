//! Shared domain types for medchat.
//!
//! Turns, session identifiers, inference outcomes, configuration, and the
//! error enums used across the workspace.
//!
//! Zero infrastructure dependencies -- only serde, uuid, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod inference;
