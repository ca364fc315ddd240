//! Agent message processing handler.

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{error, info};

use crate::dto::{ProcessRequest, ProcessResponse};
use crate::error::AppError;
use crate::ServerState;

/// Characters of a message kept in the request log line.
const PREVIEW_CHARS: usize = 50;

/// Cuts `message` to at most `max_chars` characters, marking the cut with `...`.
fn preview(message: &str, max_chars: usize) -> String {
    match message.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &message[..end]),
        None => message.to_string(),
    }
}

/// Runs a message through the agent and wraps the reply.
pub async fn process(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<ProcessRequest>, JsonRejection>,
) -> Result<Json<ProcessResponse>, AppError> {
    let Json(req) = payload?;

    info!("Agent request: {}", preview(&req.message, PREVIEW_CHARS));

    let reply = state
        .agent
        .process(&req.message, req.context.as_ref())
        .await
        .map_err(|e| {
            error!("Agent error: {}", e);
            AppError::from(e)
        })?;

    Ok(Json(ProcessResponse::success(reply)))
}
