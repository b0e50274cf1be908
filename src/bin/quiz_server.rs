use std::sync::Arc;

use mock_servers::api::quiz_router;
use mock_servers::infra::{config::ServerConfig, server};
use mock_servers::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::bootstrap();

    let state = Arc::new(AppState::load()?);
    let config = ServerConfig::from_env(5000);
    server::serve("quiz-server", quiz_router(state), &config).await
}
