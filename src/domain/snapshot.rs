//! Point-in-time copy of round and lobby state.

use serde::Serialize;
use utoipa::ToSchema;

/// Immutable snapshot of the game, taken under the engine lock.
///
/// `revision` increases with every state mutation, so two snapshots can be
/// ordered even when they were taken by different tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    /// Numbers called so far in the current (or last finished) round.
    pub called_numbers: Vec<u8>,
    /// Players in the lobby.
    pub players_count: usize,
    /// Whether a round is running.
    pub round_started: bool,
    /// Sequence number of the current (or last finished) round; 0 before
    /// the first round.
    pub round: u64,
    /// Engine mutation counter at the time of the snapshot.
    pub revision: u64,
}
