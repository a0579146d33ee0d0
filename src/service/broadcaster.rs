//! Fixed-interval spectator updates.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::domain::RoundEngine;
use crate::ws::{BroadcastReport, ConnectionHub};

/// Publishes the running round to every spectator once per interval.
///
/// Independent of the draw cadence. While the engine is idle a tick does
/// nothing, so a waiting lobby is not flooded with identical updates.
#[derive(Debug)]
pub struct Broadcaster {
    engine: Arc<RoundEngine>,
    hub: Arc<ConnectionHub>,
    interval: Duration,
}

impl Broadcaster {
    /// Creates a broadcaster ticking every `interval`.
    #[must_use]
    pub fn new(engine: Arc<RoundEngine>, hub: Arc<ConnectionHub>, interval: Duration) -> Self {
        Self {
            engine,
            hub,
            interval,
        }
    }

    /// Runs a single tick. Returns `None` when no round is running.
    pub async fn tick(&self) -> Option<BroadcastReport> {
        let snapshot = self.engine.running_snapshot().await?;
        Some(self.hub.broadcast(&snapshot).await)
    }

    /// Ticks forever. Missed ticks are skipped rather than bursted.
    pub async fn run(self) {
        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            if let Some(report) = self.tick().await
                && report.dropped > 0
            {
                tracing::debug!(
                    delivered = report.delivered,
                    dropped = report.dropped,
                    "broadcast tick dropped channels"
                );
            }
        }
    }

    /// Spawns [`Broadcaster::run`] on the current runtime.
    #[must_use]
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use tokio_test::assert_ok;

    use super::*;
    use crate::ws::{PushChannel, ServerMessage};

    fn setup() -> (Arc<RoundEngine>, Arc<ConnectionHub>, Broadcaster) {
        let engine = Arc::new(RoundEngine::new(3));
        let hub = Arc::new(ConnectionHub::new());
        let broadcaster = Broadcaster::new(
            Arc::clone(&engine),
            Arc::clone(&hub),
            Duration::from_secs(1),
        );
        (engine, hub, broadcaster)
    }

    async fn fill_lobby(engine: &RoundEngine) {
        for (i, phone) in ["+1000", "+1001", "+1002"].into_iter().enumerate() {
            let _ = assert_ok!(engine.join(phone, u32::try_from(i).unwrap_or(0) + 1).await);
        }
    }

    #[tokio::test]
    async fn tick_is_silent_while_idle() {
        let (_engine, hub, broadcaster) = setup();
        let (channel, mut rx) = PushChannel::open(4);
        let _ = hub.register(channel).await;

        assert!(broadcaster.tick().await.is_none());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn tick_publishes_running_round() {
        let (engine, hub, broadcaster) = setup();
        let (channel, mut rx) = PushChannel::open(4);
        let _ = hub.register(channel).await;
        fill_lobby(&engine).await;

        let Some(report) = broadcaster.tick().await else {
            panic!("running round should broadcast");
        };
        assert_eq!(report.delivered, 1);

        let Ok(frame) = rx.try_recv() else {
            panic!("frame expected");
        };
        let Ok(ServerMessage::Update {
            players_count,
            round_started,
            ..
        }) = serde_json::from_str::<ServerMessage>(&frame)
        else {
            panic!("frame should be an update");
        };
        assert_eq!(players_count, 3);
        assert!(round_started);
    }

    #[tokio::test(start_paused = true)]
    async fn spawned_loop_ticks_once_per_interval() {
        let (engine, hub, broadcaster) = setup();
        let (channel, mut rx) = PushChannel::open(16);
        let _ = hub.register(channel).await;
        let handle = broadcaster.spawn();

        time::sleep(Duration::from_millis(5_500)).await;
        assert!(rx.try_recv().is_err());

        fill_lobby(&engine).await;
        time::sleep(Duration::from_secs(3)).await;

        let mut frames = 0;
        while rx.try_recv().is_ok() {
            frames += 1;
        }
        assert_eq!(frames, 3);
        handle.abort();
    }
}
