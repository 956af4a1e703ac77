//! Natural-language hotel query route

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::agent::{AgentLoop, Context};
use super::{AppError, AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/agent/hotels", post(hotel_query))
}

#[derive(Debug, Deserialize)]
pub struct AgentQuery {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct AgentAnswer {
    pub query: String,
    pub response: String,
}

async fn hotel_query(
    State(state): State<AppState>,
    Json(body): Json<AgentQuery>,
) -> Result<Json<AgentAnswer>, AppError> {
    let llm = state.llm.clone().ok_or_else(|| {
        AppError::ServiceUnavailable("OpenAI API key not configured".to_string())
    })?;
    if body.query.trim().is_empty() {
        return Err(AppError::BadRequest("query must not be empty".to_string()));
    }

    let ctx = Context::new(state.amadeus.clone());
    let agent = AgentLoop::new(llm, state.max_iterations);
    let response = agent.process_query(&body.query, &ctx).await;

    Ok(Json(AgentAnswer {
        query: body.query,
        response,
    }))
}
