const REPLY_PREFIX: &str = "Chatbot received: ";

// 模拟聊天机器人：原样回显用户消息并加上固定前缀
pub fn simulate_chatbot_response(user_message: &str) -> String {
    format!("{REPLY_PREFIX}{user_message}")
}
