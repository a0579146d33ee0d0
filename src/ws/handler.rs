//! Axum WebSocket upgrade handler.

use axum::extract::State;
use axum::extract::ws::WebSocketUpgrade;
use axum::response::IntoResponse;

use super::connection::run_connection;
use crate::app_state::AppState;

/// `GET /ws` — Upgrade HTTP connection to a spectator push channel.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    let hub = std::sync::Arc::clone(&state.hub);
    let queue_capacity = state.config.ws_channel_capacity;

    ws.on_upgrade(move |socket| run_connection(socket, hub, queue_capacity))
}
