use std::sync::Arc;

use anyhow::Context;
use card_game_api::{app, config::AppConfig, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up JWT_SECRET, PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    tracing::info!("Starting Card Game API in {:?} mode", config.environment);
    tracing::info!(
        cards = %config.storage.cards_file.display(),
        users = %config.storage.users_file.display(),
        "using flat-file storage"
    );
    tracing::warn!("user credentials are stored and compared in plaintext");

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let state = Arc::new(AppState::from_config(config));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Server running at http://{}", bind_addr);

    axum::serve(listener, app(state)).await.context("server error")?;

    Ok(())
}
