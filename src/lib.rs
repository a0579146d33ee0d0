//! # bingo-hub
//!
//! Real-time number-bingo coordination service. Players join a single
//! lobby over HTTP; once enough have joined a round starts, a number is
//! drawn on a fixed cadence, and every connected WebSocket spectator is
//! pushed the live state.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP join, WebSocket spectators)
//!     │
//!     ├── REST Handlers (api/)
//!     ├── WS Handler + ConnectionHub (ws/)
//!     │
//!     ├── GameService: draw loop per round (service/)
//!     ├── Broadcaster: periodic fan-out (service/)
//!     │
//!     └── RoundEngine ── PlayerRegistry + DrawPool (domain/)
//! ```
//!
//! Two independent locks exist: the engine's (lobby, round state, pool)
//! and the hub's (connection membership). No code path holds both.

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod ws;
