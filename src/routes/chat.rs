use axum::{Json, extract::State};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::reply::process_reply,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let candidates = state.generator.generate(&payload.message).await?;

    // The backend promises an ordered candidate sequence; only the first
    // one is surfaced to the client.
    let first = candidates.first().ok_or(AppError::EmptyGeneration)?;

    let reply = process_reply(&payload.message, &first.generated_text);

    Ok(Json(ChatResponse { reply }))
}
