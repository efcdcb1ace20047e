use axum::{Json, extract::State};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, PackingRequest, PackingResponse},
    services::{
        gateway::{ChatMessage, CompletionRequest},
        prompt,
    },
    state::SharedState,
};

// Generation parameters for packing tips.
const PACKING_TEMPERATURE: f32 = 0.7;
const PACKING_MAX_TOKENS: u32 = 80;

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let trimmed = payload.user_message.trim();

    if trimmed.is_empty() {
        return Err(AppError::BadRequest("Message cannot be empty".to_string()));
    }

    let system_prompt = prompt::chat_system_prompt(&payload.travel_style);
    let request = CompletionRequest::new(
        &state.model,
        vec![
            ChatMessage::system(system_prompt),
            ChatMessage::user(trimmed),
        ],
    );

    let reply = state.gateway.complete(request).await?;

    Ok(Json(ChatResponse { response: reply }))
}

// Unlike the chat endpoint, a gateway failure here stays inside an HTTP 200
// body with `status: "error"`. The client switches on the `status` field.
pub async fn packing_handler(
    State(state): State<SharedState>,
    Json(payload): Json<PackingRequest>,
) -> Json<PackingResponse> {
    let prompt = prompt::packing_prompt(&payload.city, payload.temperature, &payload.condition);
    let request = CompletionRequest::new(&state.model, vec![ChatMessage::user(prompt)])
        .temperature(PACKING_TEMPERATURE)
        .max_tokens(PACKING_MAX_TOKENS);

    match state.gateway.complete(request).await {
        Ok(tip) => Json(PackingResponse::Success { packing_tip: tip }),
        Err(err) => Json(PackingResponse::Error {
            detail: err.to_string(),
        }),
    }
}
