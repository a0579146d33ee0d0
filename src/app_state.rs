//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::config::GameConfig;
use crate::domain::RoundEngine;
use crate::service::{Broadcaster, GameService};
use crate::ws::ConnectionHub;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Join entry point and draw-loop owner.
    pub game_service: Arc<GameService>,
    /// Live spectator channels.
    pub hub: Arc<ConnectionHub>,
    /// Configuration the service was built with.
    pub config: Arc<GameConfig>,
}

impl AppState {
    /// Builds the engine, hub and service for `config`.
    ///
    /// Nothing is spawned; pair with [`AppState::broadcaster`] to start the
    /// periodic spectator updates.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let engine = Arc::new(RoundEngine::new(config.player_threshold));
        let hub = Arc::new(ConnectionHub::new());
        let game_service = Arc::new(GameService::new(
            engine,
            Arc::clone(&hub),
            config.draw_interval,
        ));
        Self {
            game_service,
            hub,
            config: Arc::new(config),
        }
    }

    /// Broadcaster wired to this state's engine and hub.
    #[must_use]
    pub fn broadcaster(&self) -> Broadcaster {
        Broadcaster::new(
            Arc::clone(self.game_service.engine()),
            Arc::clone(&self.hub),
            self.config.broadcast_interval,
        )
    }
}
