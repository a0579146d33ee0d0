//! Opaque identifier for a live push channel.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one WebSocket connection inside the
/// [`super::hub::ConnectionHub`].
///
/// Wraps a UUID v4 generated at handshake. It carries no player identity;
/// spectators are anonymous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionId(uuid::Uuid);

impl ConnectionId {
    /// Creates a new random `ConnectionId`.
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
