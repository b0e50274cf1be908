use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::error::ApiError;
use crate::api::extract::JsonBody;
use crate::ax_state::AppState;
use crate::models::quiz::{InitQuizRequest, InitQuizResponse};

/// `POST /init-quiz`：校验 transcript 非空后返回固定测验，内容与 transcript 无关
pub async fn init_quiz(
    State(state): State<Arc<AppState>>,
    JsonBody(payload): JsonBody<InitQuizRequest>,
) -> Result<Response, ApiError> {
    if payload.transcript.is_empty() {
        return Err(ApiError::MissingField("transcript"));
    }

    info!(
        transcript_len = payload.transcript.len(),
        questions = state.fixtures.quiz.questions.len(),
        "quiz initialized"
    );

    Ok(Json(InitQuizResponse::success(&state.fixtures.quiz)).into_response())
}
