use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use marquee_api::{
    config::Config,
    dataset::Dataset,
    routes::{create_router, AppState},
    services::providers::tmdb::TmdbProvider,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // Both artifacts load fully into memory before the server accepts traffic
    let dataset = Dataset::load(&config.catalog_path, &config.similarity_path)?;

    let provider = TmdbProvider::new(
        config.tmdb_api_key.clone(),
        config.tmdb_api_url.clone(),
        config.tmdb_image_url.clone(),
    );

    let state = AppState {
        dataset: Arc::new(dataset),
        provider: Arc::new(provider),
    };

    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(addr = %addr, "Server listening");
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
