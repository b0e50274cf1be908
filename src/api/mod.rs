pub mod chat;
pub mod error;
pub mod extract;
pub mod products;
pub mod quiz;

use axum::{
    routing::{any, post},
    Router,
};
use std::sync::Arc;

use crate::ax_state::AppState;
use error::{method_not_allowed, not_found};

/// 商品服务：`/` 与所有未匹配路径都返回商品列表
pub fn product_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/products", any(products::list_products))
        .route("/", any(products::browse_products))
        .fallback(products::browse_products)
        .with_state(state)
}

pub fn chat_router() -> Router {
    Router::new()
        .route("/chat", post(chat::chat).fallback(method_not_allowed))
        .fallback(not_found)
}

pub fn quiz_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/init-quiz", post(quiz::init_quiz).fallback(method_not_allowed))
        .fallback(not_found)
        .with_state(state)
}
