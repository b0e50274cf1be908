use mock_servers::api::chat_router;
use mock_servers::infra::{config::ServerConfig, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::bootstrap();

    let config = ServerConfig::from_env(5000);
    server::serve("chat-server", chat_router(), &config).await
}
