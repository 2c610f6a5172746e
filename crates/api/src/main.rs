//! Server entry point.

use hello_service::config::Config;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    let config = Config::from_env();

    // 1. Initialize tracing
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_new(&config.log_level)
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. Build the application
    let app = hello_service::create_app(hello_service::create_default_state());

    // 3. Start server
    let addr = config.addr();
    tracing::info!(%addr, "starting server");
    tracing::info!("available endpoint: GET /       - Hello World with time");
    tracing::info!("available endpoint: GET /health - Health check");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app).await.expect("server error");
}
