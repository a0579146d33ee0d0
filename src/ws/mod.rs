//! WebSocket layer: spectator connections and the connection hub.
//!
//! The WebSocket endpoint at `/ws` is push-only: the server sends an
//! `update` message on every active broadcast tick and after every draw,
//! and ignores whatever the client sends.

pub mod connection;
pub mod connection_id;
pub mod handler;
pub mod hub;
pub mod messages;

pub use connection_id::ConnectionId;
pub use hub::{BroadcastReport, ConnectionHub, Frame, PushChannel};
pub use messages::ServerMessage;
