//! Per-connection read/write loop.
//!
//! The server never interprets inbound frames; reading only keeps the
//! socket serviced so disconnects are noticed. Writes come from the
//! connection's frame queue, fed by [`ConnectionHub::broadcast`].

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};

use super::hub::{ConnectionHub, PushChannel};

/// Runs one WebSocket connection until the peer leaves, a read or write
/// fails, or the hub releases the channel, then unregisters it.
pub async fn run_connection(socket: WebSocket, hub: Arc<ConnectionHub>, queue_capacity: usize) {
    let (channel, mut frames) = PushChannel::open(queue_capacity);
    let connection_id = channel.id();
    let _ = hub.register(channel).await;
    tracing::debug!(%connection_id, "ws connection opened");

    let (mut ws_tx, mut ws_rx) = socket.split();

    loop {
        tokio::select! {
            // Inbound: keep-alive only
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(err)) => {
                        tracing::debug!(%connection_id, error = %err, "ws read failed");
                        break;
                    }
                    Some(Ok(_)) => {}
                }
            }
            // Outbound: frames queued by the hub
            frame = frames.recv() => {
                let Some(frame) = frame else {
                    // Hub dropped us after a failed delivery.
                    break;
                };
                if let Err(err) = ws_tx.send(Message::text(frame.to_string())).await {
                    tracing::debug!(%connection_id, error = %err, "ws write failed");
                    break;
                }
            }
        }
    }

    let _ = hub.unregister(connection_id).await;
    let _ = ws_tx.close().await;
    tracing::debug!(%connection_id, "ws connection closed");
}
