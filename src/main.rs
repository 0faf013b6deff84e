use tracing_subscriber::EnvFilter;

use moviemaster_api::config::Config;
use moviemaster_api::routes::create_router;
use moviemaster_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("moviemaster_api=debug,tower_http=info")),
        )
        .init();

    // Initialize application state
    let state = AppState::new();

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Catalog service listening");
    axum::serve(listener, app).await?;

    Ok(())
}
