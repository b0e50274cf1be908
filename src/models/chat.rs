use serde::{Deserialize, Serialize};

pub const CHATBOT_SENDER: &str = "chatbot";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String, // 用户消息，缺省时按空串处理
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChatReply {
    pub message: String,
    pub sender: String,
}

impl ChatReply {
    pub fn from_chatbot(message: String) -> Self {
        Self {
            message,
            sender: CHATBOT_SENDER.to_string(),
        }
    }
}
