//! JSON chat API handlers.
//!
//! Endpoints:
//! - GET  /api/v1/transcript        - The session's turns in order
//! - POST /api/v1/chat              - Submit `{"message": "..."}`, get the reply
//! - POST /api/v1/transcript/clear  - Clear the transcript
//!
//! The session is identified by the same cookie as the page, so the page and
//! the API share one transcript.

use std::time::Instant;

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use medchat_core::inference::InferenceBackend;
use medchat_types::chat::{SessionId, Turn};

use crate::http::error::AppError;
use crate::http::extractors::session::SessionCookie;
use crate::http::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
    /// Transcript length after the exchange.
    pub turns: usize,
}

#[derive(Debug, Serialize)]
pub struct TranscriptView {
    pub session_id: SessionId,
    pub turns: Vec<Turn>,
}

#[derive(Debug, Serialize)]
pub struct Cleared {
    pub cleared: bool,
}

/// GET /api/v1/transcript
pub async fn get_transcript<B: InferenceBackend + 'static>(
    State(state): State<AppState<B>>,
    cookie: SessionCookie,
) -> Result<Response, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let session = state.sessions.get_or_create(cookie.id);
    let mut session = session.lock().await;
    session.touch();

    let view = TranscriptView {
        session_id: cookie.id,
        turns: session.transcript().all().to_vec(),
    };

    let elapsed = start.elapsed().as_millis() as u64;
    let resp = ApiResponse::success(view, request_id, elapsed)
        .with_link("self", "/api/v1/transcript")
        .with_link("chat", "/api/v1/chat")
        .with_link("clear", "/api/v1/transcript/clear");

    Ok(cookie.attach(Json(resp).into_response()))
}

/// POST /api/v1/chat
///
/// Inference failures are not HTTP errors: the reply carries the tagged
/// failure message, exactly as the page would show it.
pub async fn post_chat<B: InferenceBackend + 'static>(
    State(state): State<AppState<B>>,
    cookie: SessionCookie,
    Json(request): Json<ChatRequest>,
) -> Result<Response, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let session = state.sessions.get_or_create(cookie.id);
    let mut session = session.lock().await;
    let reply = session.submit(&request.message, &state.client).await?;

    let body = ChatReply {
        reply,
        turns: session.transcript().len(),
    };

    let elapsed = start.elapsed().as_millis() as u64;
    let resp = ApiResponse::success(body, request_id, elapsed)
        .with_link("transcript", "/api/v1/transcript");

    Ok(cookie.attach(Json(resp).into_response()))
}

/// POST /api/v1/transcript/clear
pub async fn clear_transcript<B: InferenceBackend + 'static>(
    State(state): State<AppState<B>>,
    cookie: SessionCookie,
) -> Result<Response, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let session = state.sessions.get_or_create(cookie.id);
    session.lock().await.clear();

    let elapsed = start.elapsed().as_millis() as u64;
    let resp = ApiResponse::success(Cleared { cleared: true }, request_id, elapsed)
        .with_link("transcript", "/api/v1/transcript");

    Ok(cookie.attach(Json(resp).into_response()))
}
