//! Inference backend implementations.
//!
//! Contains the concrete [`InferenceBackend`](medchat_core::inference::InferenceBackend)
//! for the hosted Hugging Face inference API.

pub mod huggingface;
pub mod types;

pub use huggingface::HuggingFaceBackend;
