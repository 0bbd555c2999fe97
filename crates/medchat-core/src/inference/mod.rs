//! Inference client: prompt construction, the backend port, response
//! normalization, and failure-to-message rendering.

pub mod backend;
pub mod client;
pub mod normalize;
pub mod prompt;

pub use backend::InferenceBackend;
pub use client::InferenceClient;
