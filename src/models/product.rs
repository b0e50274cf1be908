use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub image: String,
}

/// `GET /?product=...` 的查询参数，目前只记录日志，不影响返回内容
#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub product: Option<String>,
}
