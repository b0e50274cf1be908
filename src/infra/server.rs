use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::infra::config::ServerConfig;
use crate::infra::telemetry;

/// 加载 `.env` 并初始化日志，每个服务进程启动时调用一次
pub fn bootstrap() {
    dotenvy::dotenv().ok();
    telemetry::init();
}

pub fn with_layers(app: Router) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    app.layer(TraceLayer::new_for_http()).layer(cors)
}

pub async fn serve(service: &'static str, app: Router, config: &ServerConfig) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.addr()).await?;
    info!(service, address = %listener.local_addr()?, "server is listening");
    axum::serve(listener, with_layers(app)).await?;
    Ok(())
}
