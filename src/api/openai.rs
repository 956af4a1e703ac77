//! Direct LLM chat route

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::agent::Message;
use super::{AppError, AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/openai/chat", post(chat))
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub response: String,
}

/// One model turn, no tools
async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    let llm = state.llm.as_ref().ok_or_else(|| {
        AppError::ServiceUnavailable("OpenAI API key not configured".to_string())
    })?;

    let reply = llm.chat(&[Message::user(body.message)], &[]).await?;
    Ok(Json(ChatReply {
        response: reply.content.unwrap_or_default(),
    }))
}
