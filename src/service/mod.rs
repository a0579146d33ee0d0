//! Service layer: join orchestration and background publishing.
//!
//! [`GameService`] admits players and owns each round's draw loop;
//! [`Broadcaster`] pushes the running round to spectators on its own
//! fixed cadence.

pub mod broadcaster;
pub mod game_service;

pub use broadcaster::Broadcaster;
pub use game_service::GameService;
