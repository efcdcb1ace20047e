use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use waypointer_backend::config::Config;
use waypointer_backend::routes::create_router;
use waypointer_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let addr = config.bind_addr.clone();
    let state = Arc::new(AppState::new(&config));

    // The mobile client is served separately.
    let cors = CorsLayer::very_permissive();

    let app = create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("🚀 travel assistant backend running at http://{addr}");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
