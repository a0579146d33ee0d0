//! Membership of live push channels and snapshot fan-out.
//!
//! Each connection owns the receiving half of a bounded frame queue; the
//! hub holds the sending half as a [`PushChannel`]. Broadcasting never
//! awaits a peer: a queue that is closed or full counts as a failed write,
//! and that channel is dropped from membership on the spot. Dropping the
//! sender is what releases the connection, since its task sees the queue
//! close and shuts the socket.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};

use super::connection_id::ConnectionId;
use super::messages::ServerMessage;
use crate::domain::GameSnapshot;
use crate::error::TransportError;

/// A serialized message, shared by every recipient of one broadcast.
pub type Frame = Arc<str>;

/// Hub-side handle to one connection's frame queue.
#[derive(Debug, Clone)]
pub struct PushChannel {
    id: ConnectionId,
    tx: mpsc::Sender<Frame>,
}

impl PushChannel {
    /// Opens a frame queue of `capacity` frames (at least 1) for a new
    /// connection, returning the hub handle and the connection's receiver.
    #[must_use]
    pub fn open(capacity: usize) -> (Self, mpsc::Receiver<Frame>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (
            Self {
                id: ConnectionId::new(),
                tx,
            },
            rx,
        )
    }

    /// Identifier of the connection behind this channel.
    #[must_use]
    pub const fn id(&self) -> ConnectionId {
        self.id
    }

    fn deliver(&self, frame: &Frame) -> Result<(), TransportError> {
        self.tx.try_send(Arc::clone(frame)).map_err(|err| match err {
            mpsc::error::TrySendError::Full(_) => TransportError::Backlogged,
            mpsc::error::TrySendError::Closed(_) => TransportError::Closed,
        })
    }
}

/// Outcome of one [`ConnectionHub::broadcast`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    /// Channels the frame was queued on.
    pub delivered: usize,
    /// Channels dropped because delivery failed.
    pub dropped: usize,
    /// `true` if the snapshot was older than one already broadcast and was
    /// discarded.
    pub stale: bool,
}

#[derive(Debug, Default)]
struct Members {
    channels: HashMap<ConnectionId, PushChannel>,
    last_revision: u64,
}

/// Set of live push channels, guarded by its own lock.
#[derive(Debug, Default)]
pub struct ConnectionHub {
    members: Mutex<Members>,
}

impl ConnectionHub {
    /// Creates a hub with no members.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a channel. Returns `false` if it was already registered, in
    /// which case membership is unchanged.
    pub async fn register(&self, channel: PushChannel) -> bool {
        let mut members = self.members.lock().await;
        if members.channels.contains_key(&channel.id) {
            return false;
        }
        members.channels.insert(channel.id, channel);
        true
    }

    /// Removes a channel and drops its sender. Returns `false` if it was
    /// not registered.
    pub async fn unregister(&self, id: ConnectionId) -> bool {
        self.members.lock().await.channels.remove(&id).is_some()
    }

    #[cfg(test)]
    async fn contains(&self, id: ConnectionId) -> bool {
        self.members.lock().await.channels.contains_key(&id)
    }

    /// Number of registered channels.
    pub async fn len(&self) -> usize {
        self.members.lock().await.channels.len()
    }

    /// Returns `true` if no channel is registered.
    pub async fn is_empty(&self) -> bool {
        self.members.lock().await.channels.is_empty()
    }

    /// Queues `snapshot` as an update message on every registered channel.
    ///
    /// A failed delivery unregisters that channel and moves on to the next.
    /// Calls are serialized by the membership lock, so each channel
    /// receives frames in broadcast order; a snapshot with a lower revision
    /// than the last one broadcast is discarded.
    pub async fn broadcast(&self, snapshot: &GameSnapshot) -> BroadcastReport {
        let mut members = self.members.lock().await;
        if snapshot.revision < members.last_revision {
            return BroadcastReport {
                stale: true,
                ..BroadcastReport::default()
            };
        }
        members.last_revision = snapshot.revision;

        if members.channels.is_empty() {
            return BroadcastReport::default();
        }

        let frame: Frame = match serde_json::to_string(&ServerMessage::from(snapshot)) {
            Ok(json) => json.into(),
            Err(err) => {
                tracing::error!(error = %err, "failed to serialize update");
                return BroadcastReport::default();
            }
        };

        let mut report = BroadcastReport::default();
        members
            .channels
            .retain(|connection_id, channel| match channel.deliver(&frame) {
                Ok(()) => {
                    report.delivered += 1;
                    true
                }
                Err(err) => {
                    tracing::warn!(%connection_id, error = %err, "dropping push channel");
                    report.dropped += 1;
                    false
                }
            });
        report
    }
}
