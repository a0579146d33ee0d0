//! bingo-hub server entry point.
//!
//! Starts the Axum HTTP server with the join, state and WebSocket
//! endpoints, plus the spectator broadcaster.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use bingo_hub::api;
use bingo_hub::app_state::AppState;
use bingo_hub::config::GameConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; LOG_FORMAT=json switches to structured output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")) {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    // Load configuration
    let config = GameConfig::from_env().context("invalid LISTEN_ADDR")?;
    tracing::info!(
        addr = %config.listen_addr,
        player_threshold = config.player_threshold,
        draw_interval_ms = config.draw_interval.as_millis(),
        broadcast_interval_ms = config.broadcast_interval.as_millis(),
        "starting bingo-hub"
    );

    let listen_addr = config.listen_addr;
    let app_state = AppState::new(config);

    // Spectator updates run for the process lifetime
    let _broadcaster = app_state.broadcaster().spawn();

    let app = api::build_app(app_state);

    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("failed to bind {listen_addr}"))?;
    tracing::info!(addr = %listen_addr, "server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
