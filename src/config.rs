//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). Every key has a default, so an empty
//! environment yields the classic game: three players start a round,
//! a number every three seconds, a spectator update every second.

use std::net::SocketAddr;
use std::time::Duration;

/// Top-level service configuration.
///
/// Loaded once at startup via [`GameConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:8080`).
    pub listen_addr: SocketAddr,

    /// Players required to start a round.
    pub player_threshold: usize,

    /// Time between two draws of a running round.
    pub draw_interval: Duration,

    /// Time between two spectator broadcast ticks.
    pub broadcast_interval: Duration,

    /// Frames a spectator may fall behind before it is dropped.
    pub ws_channel_capacity: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            player_threshold: 3,
            draw_interval: Duration::from_millis(3_000),
            broadcast_interval: Duration::from_millis(1_000),
            ws_channel_capacity: 32,
        }
    }
}

impl GameConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to [`GameConfig::default`] values when a variable is not
    /// set or cannot be parsed. Zero counts and intervals are raised to 1.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, std::net::AddrParseError> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr = match std::env::var("LISTEN_ADDR") {
            Ok(raw) => raw.parse()?,
            Err(_) => defaults.listen_addr,
        };

        let player_threshold = parse_env("PLAYER_THRESHOLD", defaults.player_threshold).max(1);
        let draw_interval = parse_env_millis("DRAW_INTERVAL_MS", defaults.draw_interval);
        let broadcast_interval =
            parse_env_millis("BROADCAST_INTERVAL_MS", defaults.broadcast_interval);
        let ws_channel_capacity =
            parse_env("WS_CHANNEL_CAPACITY", defaults.ws_channel_capacity).max(1);

        Ok(Self {
            listen_addr,
            player_threshold,
            draw_interval,
            broadcast_interval,
            ws_channel_capacity,
        })
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parses an environment variable as a millisecond duration of at least
/// 1 ms. Returns `default` on missing or invalid values.
fn parse_env_millis(key: &str, default: Duration) -> Duration {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map_or(default, |ms| Duration::from_millis(ms.max(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_game() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.player_threshold, 3);
        assert_eq!(cfg.draw_interval, Duration::from_secs(3));
        assert_eq!(cfg.broadcast_interval, Duration::from_secs(1));
        assert_eq!(cfg.listen_addr.port(), 8080);
    }

    #[test]
    fn missing_keys_fall_back() {
        assert_eq!(parse_env("BINGO_HUB_TEST_UNSET_KEY", 7usize), 7);
        assert_eq!(
            parse_env_millis("BINGO_HUB_TEST_UNSET_KEY", Duration::from_millis(5)),
            Duration::from_millis(5)
        );
    }
}
