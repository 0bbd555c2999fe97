//! Chat page handlers.
//!
//! Endpoints:
//! - GET  /       - Render the page with the session's transcript
//! - POST /ask    - Submit a question (form field `question`), then redirect
//! - POST /clear  - Clear the transcript, then redirect
//!
//! Form posts answer with `303 See Other` so a browser refresh never
//! resubmits a question.

use axum::Form;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;
use tracing::debug;

use medchat_core::inference::InferenceBackend;
use medchat_types::error::ChatError;

use crate::http::error::AppError;
use crate::http::extractors::session::SessionCookie;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AskForm {
    #[serde(default)]
    pub question: String,
}

/// GET / - Render the chat page.
pub async fn show<B: InferenceBackend + 'static>(
    State(state): State<AppState<B>>,
    cookie: SessionCookie,
) -> Result<Response, AppError> {
    let session = state.sessions.get_or_create(cookie.id);
    let mut session = session.lock().await;
    session.touch();

    let html = state.page.render(session.transcript().all())?;
    Ok(cookie.attach(Html(html).into_response()))
}

/// POST /ask - Submit a question from the page form.
///
/// A blank question is ignored, the same as pressing enter on an empty input.
pub async fn ask<B: InferenceBackend + 'static>(
    State(state): State<AppState<B>>,
    cookie: SessionCookie,
    Form(form): Form<AskForm>,
) -> Result<Response, AppError> {
    let session = state.sessions.get_or_create(cookie.id);
    let mut session = session.lock().await;

    match session.submit(&form.question, &state.client).await {
        Ok(_) => {}
        Err(ChatError::EmptyQuestion) => debug!(session_id = %cookie.id, "ignored blank question"),
    }

    Ok(cookie.attach(Redirect::to("/").into_response()))
}

/// POST /clear - Empty the transcript.
pub async fn clear<B: InferenceBackend + 'static>(
    State(state): State<AppState<B>>,
    cookie: SessionCookie,
) -> Result<Response, AppError> {
    let session = state.sessions.get_or_create(cookie.id);
    session.lock().await.clear();

    Ok(cookie.attach(Redirect::to("/").into_response()))
}
