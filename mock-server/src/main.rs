use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: &str = "8080";

fn listen_addr(port: Option<String>) -> String {
    format!("127.0.0.1:{}", port.as_deref().unwrap_or(DEFAULT_PORT))
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let addr = listen_addr(std::env::var("PORT").ok());
    let seeded = std::env::var("SEED").is_ok_and(|v| v == "1");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, seeded, "mock Bootcamp API listening");

    let store = if seeded {
        mock_server::Store::seeded()
    } else {
        mock_server::Store::default()
    };
    mock_server::run_with(listener, store).await
}
