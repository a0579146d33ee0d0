//! Domain layer: lobby registry, draw pool, and the round state machine.
//!
//! Everything here is transport-agnostic. The registry and the pool are
//! plain data structures; [`RoundEngine`] wraps them in the single lock
//! that serializes joins, round start, draws and round end.

pub mod draw_pool;
pub mod player_registry;
pub mod round_engine;
pub mod snapshot;

pub use draw_pool::{BINGO_MAX, DrawPool};
pub use player_registry::{Player, PlayerRegistry};
pub use round_engine::{DrawOutcome, JoinOutcome, RoundEngine, RoundState};
pub use snapshot::GameSnapshot;
