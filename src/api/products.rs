use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::{debug, info};

use crate::ax_state::AppState;
use crate::models::product::ProductQuery;

/// `GET /products`：返回固定商品列表
pub async fn list_products(State(state): State<Arc<AppState>>) -> Response {
    Json(state.fixtures.products.as_slice()).into_response()
}

/// `GET /` 及其他未匹配路径：记录 `product` 参数后同样返回完整列表，
/// 查询串无法解析时也不拒绝请求
pub async fn browse_products(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ProductQuery>, QueryRejection>,
) -> Response {
    let product = match query {
        Ok(Query(query)) => query.product,
        Err(e) => {
            debug!(error = %e, "ignoring unparseable query string");
            None
        }
    };
    info!(
        product = product.as_deref().unwrap_or(""),
        "catalog request received"
    );
    Json(state.fixtures.products.as_slice()).into_response()
}
