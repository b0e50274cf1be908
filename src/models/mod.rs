pub mod chat;
pub mod product;
pub mod quiz;

use serde::{Deserialize, Serialize};

/// 所有服务响应体共用的状态标记
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}
