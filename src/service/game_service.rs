//! Game service: admits players and runs the draw loop of each round.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::domain::{GameSnapshot, JoinOutcome, RoundEngine};
use crate::error::BingoError;
use crate::ws::ConnectionHub;

/// Orchestration layer between the HTTP handlers, the [`RoundEngine`] and
/// the [`ConnectionHub`].
///
/// The engine decides when a round starts; this service owns the one
/// draw-loop task per round that the decision implies. The task ends on
/// its own when the round's pool is exhausted.
#[derive(Debug, Clone)]
pub struct GameService {
    engine: Arc<RoundEngine>,
    hub: Arc<ConnectionHub>,
    draw_interval: Duration,
}

impl GameService {
    /// Creates a new `GameService`.
    #[must_use]
    pub fn new(engine: Arc<RoundEngine>, hub: Arc<ConnectionHub>, draw_interval: Duration) -> Self {
        Self {
            engine,
            hub,
            draw_interval,
        }
    }

    /// Returns a reference to the inner [`RoundEngine`].
    #[must_use]
    pub fn engine(&self) -> &Arc<RoundEngine> {
        &self.engine
    }

    /// Admits a player. If this join starts a round, the round's draw loop
    /// is spawned before returning.
    ///
    /// # Errors
    ///
    /// Returns [`BingoError::RoundInProgress`], [`BingoError::AlreadyJoined`]
    /// or [`BingoError::CardTaken`] from the engine.
    pub async fn join(&self, phone_number: &str, card_id: u32) -> Result<JoinOutcome, BingoError> {
        let outcome = self.engine.join(phone_number, card_id).await?;
        tracing::info!(
            phone_number,
            card_id,
            players_count = outcome.players_count,
            "player joined"
        );

        if let Some(round) = outcome.started_round {
            let _ = self.spawn_draw_loop(round);
        }
        Ok(outcome)
    }

    /// Current game state, idle or running.
    pub async fn snapshot(&self) -> GameSnapshot {
        self.engine.snapshot().await
    }

    /// Spawns the draw loop of `round` together with a watcher that takes
    /// the process down if the loop panics. A panic there means the pool
    /// invariant broke, and the round must not be left half-drawn.
    fn spawn_draw_loop(&self, round: u64) -> JoinHandle<()> {
        let draw_loop = tokio::spawn(run_draw_loop(
            Arc::clone(&self.engine),
            Arc::clone(&self.hub),
            self.draw_interval,
            round,
        ));
        tokio::spawn(async move {
            if let Err(err) = draw_loop.await
                && err.is_panic()
            {
                tracing::error!(round, "draw loop panicked; aborting");
                std::process::abort();
            }
        })
    }
}

/// Draws one number of `round` per `draw_interval` and publishes each
/// result, until the round finishes or stops being current.
async fn run_draw_loop(
    engine: Arc<RoundEngine>,
    hub: Arc<ConnectionHub>,
    draw_interval: Duration,
    round: u64,
) {
    let mut ticker = time::interval_at(Instant::now() + draw_interval, draw_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        let Some(outcome) = engine.draw_next(round).await else {
            break;
        };
        let _ = hub.broadcast(&outcome.snapshot).await;
        if outcome.round_finished {
            break;
        }
    }

    tracing::debug!(round, "draw loop stopped");
}
