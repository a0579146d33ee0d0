//! Round lifecycle state machine.
//!
//! [`RoundEngine`] owns the lobby ([`PlayerRegistry`]), the round state and
//! the [`DrawPool`] behind a single [`tokio::sync::Mutex`]. Every
//! transition happens inside one critical section:
//!
//! ```text
//!            join (count reaches threshold)
//!   ┌──────┐ ─────────────────────────────▶ ┌─────────┐
//!   │ Idle │                                │ Running │ ──┐ draw_next
//!   └──────┘ ◀───────────────────────────── └─────────┘ ◀─┘
//!            draw_next (pool exhausted; lobby reset)
//! ```
//!
//! The engine has no timers. The draw loop that calls
//! [`RoundEngine::draw_next`] lives in the service layer.

use tokio::sync::Mutex;

use super::draw_pool::DrawPool;
use super::player_registry::PlayerRegistry;
use super::snapshot::GameSnapshot;
use crate::error::BingoError;

/// Whether the lobby is open or a round is being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundState {
    /// Lobby open; joins accepted.
    #[default]
    Idle,
    /// Numbers are being drawn; joins rejected.
    Running,
}

/// Result of a successful join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinOutcome {
    /// Players in the lobby after this join.
    pub players_count: usize,
    /// Set only for the single join that started a round; carries the new
    /// round number. The caller owns spawning that round's draw loop.
    pub started_round: Option<u64>,
}

/// Result of one draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOutcome {
    /// The number just called.
    pub number: u8,
    /// `true` if this draw emptied the pool and closed the round.
    pub round_finished: bool,
    /// State right after the draw (and the reset, if the round finished).
    pub snapshot: GameSnapshot,
}

#[derive(Debug, Default)]
struct GameTable {
    registry: PlayerRegistry,
    state: RoundState,
    pool: DrawPool,
    round: u64,
    revision: u64,
}

impl GameTable {
    fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            called_numbers: self.pool.called().to_vec(),
            players_count: self.registry.count(),
            round_started: self.state == RoundState::Running,
            round: self.round,
            revision: self.revision,
        }
    }

    fn finish_round(&mut self) {
        self.registry.reset();
        self.state = RoundState::Idle;
    }
}

/// The single-lobby round state machine.
#[derive(Debug)]
pub struct RoundEngine {
    table: Mutex<GameTable>,
    threshold: usize,
}

impl RoundEngine {
    /// Creates an idle engine that starts a round once `threshold` players
    /// have joined. A threshold of 0 is treated as 1.
    #[must_use]
    pub fn new(threshold: usize) -> Self {
        Self {
            table: Mutex::new(GameTable::default()),
            threshold: threshold.max(1),
        }
    }

    /// Admits a player and, if that brings the lobby to the threshold,
    /// starts a round in the same critical section.
    ///
    /// # Errors
    ///
    /// - [`BingoError::RoundInProgress`] while a round is running, whatever
    ///   the identity and card.
    /// - [`BingoError::AlreadyJoined`] / [`BingoError::CardTaken`] from the
    ///   registry.
    ///
    /// # Panics
    ///
    /// Panics if the freshly shuffled pool does not hold every number once.
    pub async fn join(&self, phone_number: &str, card_id: u32) -> Result<JoinOutcome, BingoError> {
        let mut table = self.table.lock().await;
        if table.state == RoundState::Running {
            return Err(BingoError::RoundInProgress);
        }

        let players_count = table.registry.join(phone_number, card_id)?;
        table.revision += 1;

        let started_round = if players_count >= self.threshold {
            let pool = DrawPool::shuffled(&mut rand::rng());
            pool.ensure_consistent();
            table.pool = pool;
            table.round += 1;
            table.state = RoundState::Running;
            table.revision += 1;
            tracing::info!(round = table.round, players_count, "round started");
            Some(table.round)
        } else {
            None
        };

        Ok(JoinOutcome {
            players_count,
            started_round,
        })
    }

    /// Draws the next number of `round`.
    ///
    /// Returns `None` when `round` is not the running round, which tells a
    /// stale draw loop to stop. The draw that empties the pool also resets
    /// the lobby and returns the engine to [`RoundState::Idle`].
    ///
    /// # Panics
    ///
    /// Panics if the running round's pool is empty or no longer partitions
    /// the numbers. Both mean the pool was corrupted.
    #[allow(clippy::panic)]
    pub async fn draw_next(&self, round: u64) -> Option<DrawOutcome> {
        let mut table = self.table.lock().await;
        if table.state != RoundState::Running || table.round != round {
            return None;
        }

        let Some(number) = table.pool.draw() else {
            tracing::error!(round, "running round with an empty pool");
            panic!("running round {round} has an empty draw pool");
        };
        table.revision += 1;

        let round_finished = table.pool.is_exhausted();
        if round_finished {
            table.finish_round();
            tracing::info!(round, "round finished; lobby reopened");
        } else {
            tracing::debug!(round, number, remaining = table.pool.remaining_len(), "number drawn");
        }

        Some(DrawOutcome {
            number,
            round_finished,
            snapshot: table.snapshot(),
        })
    }

    /// Snapshot of the current state, idle or running.
    pub async fn snapshot(&self) -> GameSnapshot {
        self.table.lock().await.snapshot()
    }

    /// Snapshot of the current state if a round is running.
    pub async fn running_snapshot(&self) -> Option<GameSnapshot> {
        let table = self.table.lock().await;
        (table.state == RoundState::Running).then(|| table.snapshot())
    }

    /// Current round state.
    pub async fn state(&self) -> RoundState {
        self.table.lock().await.state
    }

    /// Players currently in the lobby.
    pub async fn players_count(&self) -> usize {
        self.table.lock().await.registry.count()
    }
}

impl Default for RoundEngine {
    fn default() -> Self {
        Self::new(3)
    }
}
