//! HTTP layer for medchat.
//!
//! Serves the chat page (`/`, `/ask`, `/clear`) and a small JSON API under
//! `/api/v1/` using the envelope response format.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod router;
pub mod templates;
