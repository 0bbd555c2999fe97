//! Request handlers.
//!
//! - `page`: the server-rendered chat page and its form posts
//! - `chat`: the JSON API over the same per-session transcript

pub mod chat;
pub mod page;
