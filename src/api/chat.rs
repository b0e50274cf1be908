use axum::Json;
use tracing::debug;

use crate::api::error::ApiError;
use crate::api::extract::JsonBody;
use crate::core::chatbot::simulate_chatbot_response;
use crate::models::chat::{ChatReply, ChatRequest};

pub async fn chat(JsonBody(payload): JsonBody<ChatRequest>) -> Result<Json<ChatReply>, ApiError> {
    if payload.message.is_empty() {
        return Err(ApiError::MissingField("message"));
    }

    debug!(message_len = payload.message.len(), "chat message received");
    let reply = simulate_chatbot_response(&payload.message);
    Ok(Json(ChatReply::from_chatbot(reply)))
}
