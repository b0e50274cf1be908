pub mod chatbot;
pub mod fixtures;
