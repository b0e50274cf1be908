use serde::{Deserialize, Serialize};

use crate::models::Status;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct QuizQuestion {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Quiz {
    pub title: String,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct InitQuizRequest {
    #[serde(default)]
    pub transcript: String,
}

/// `/init-quiz` 的成功响应体，错误统一走 `ErrorBody`
#[derive(Debug, Serialize)]
pub struct InitQuizResponse<'a> {
    pub status: Status,
    pub quiz: &'a Quiz,
}

impl<'a> InitQuizResponse<'a> {
    pub fn success(quiz: &'a Quiz) -> Self {
        Self {
            status: Status::Success,
            quiz,
        }
    }
}
