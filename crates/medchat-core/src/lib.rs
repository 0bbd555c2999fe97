//! Business logic for medchat.
//!
//! Defines the session transcript, prompt construction, response
//! normalization, and the ports (`InferenceBackend`, `SecretProvider`) that
//! the infrastructure layer implements. Depends only on `medchat-types` --
//! never on `medchat-infra` or any HTTP crate.

pub mod chat;
pub mod inference;
pub mod secret;
