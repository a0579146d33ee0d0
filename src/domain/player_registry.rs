//! Lobby membership for the current round.
//!
//! [`PlayerRegistry`] holds no lock of its own. It lives inside the
//! [`super::RoundEngine`] table so that joins, the round-start decision and
//! the round-end reset all share one critical section.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::BingoError;

/// A player admitted to the lobby.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Unique player identity (a phone number for chat-bridge players).
    pub phone_number: String,
    /// Bingo card held by this player, unique within the lobby.
    pub card_id: u32,
}

/// Identity → player mapping with a card index.
///
/// # Invariants
///
/// - No two entries share an identity.
/// - No two entries share a card.
/// - `cards` is exactly the inverse of `players` on `card_id`.
#[derive(Debug, Default)]
pub struct PlayerRegistry {
    players: HashMap<String, Player>,
    cards: HashMap<u32, String>,
}

impl PlayerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Admits a player, returning the new player count.
    ///
    /// # Errors
    ///
    /// - [`BingoError::AlreadyJoined`] if `phone_number` is already present.
    /// - [`BingoError::CardTaken`] if `card_id` belongs to another player.
    pub fn join(&mut self, phone_number: &str, card_id: u32) -> Result<usize, BingoError> {
        if self.players.contains_key(phone_number) {
            return Err(BingoError::AlreadyJoined(phone_number.to_string()));
        }
        if self.cards.contains_key(&card_id) {
            return Err(BingoError::CardTaken(card_id));
        }

        self.cards.insert(card_id, phone_number.to_string());
        self.players.insert(
            phone_number.to_string(),
            Player {
                phone_number: phone_number.to_string(),
                card_id,
            },
        );
        Ok(self.players.len())
    }

    /// Returns the number of joined players.
    #[must_use]
    pub fn count(&self) -> usize {
        self.players.len()
    }

    /// Removes every player. Only the round engine calls this, at round end.
    pub fn reset(&mut self) {
        self.players.clear();
        self.cards.clear();
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn join_returns_running_count() {
        let mut registry = PlayerRegistry::new();
        assert_eq!(registry.join("+1000", 1), Ok(1));
        assert_eq!(registry.join("+1001", 2), Ok(2));
        assert_eq!(registry.count(), 2);
        let Some(player) = registry.players.get("+1001") else {
            panic!("player should be registered");
        };
        assert_eq!(player.card_id, 2);
    }

    #[test]
    fn duplicate_identity_rejected() {
        let mut registry = PlayerRegistry::new();
        let _ = registry.join("+1000", 1);
        assert_eq!(
            registry.join("+1000", 1),
            Err(BingoError::AlreadyJoined("+1000".to_string()))
        );
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn duplicate_identity_wins_over_card_conflict() {
        let mut registry = PlayerRegistry::new();
        let _ = registry.join("+1000", 1);
        let _ = registry.join("+1001", 2);
        assert_eq!(
            registry.join("+1000", 2),
            Err(BingoError::AlreadyJoined("+1000".to_string()))
        );
    }

    #[test]
    fn taken_card_rejected() {
        let mut registry = PlayerRegistry::new();
        let _ = registry.join("+1000", 1);
        assert_eq!(registry.join("+1001", 1), Err(BingoError::CardTaken(1)));
        assert!(!registry.players.contains_key("+1001"));
        assert!(!registry.cards.values().any(|owner| owner == "+1001"));
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn reset_frees_identities_and_cards() {
        let mut registry = PlayerRegistry::new();
        let _ = registry.join("+1000", 1);
        let _ = registry.join("+1001", 2);
        registry.reset();
        assert_eq!(registry.count(), 0);
        assert!(registry.cards.is_empty());
        assert_eq!(registry.join("+1001", 1), Ok(1));
    }

    #[test]
    fn many_joins_never_duplicate() {
        let mut registry = PlayerRegistry::new();
        for i in 0..200u32 {
            let identity = format!("+{}", 1000 + i % 50);
            let _ = registry.join(&identity, i % 37 + 1);
        }
        assert!(registry.count() <= 37);
        let mut cards: Vec<u32> = registry.players.values().map(|p| p.card_id).collect();
        cards.sort_unstable();
        cards.dedup();
        assert_eq!(cards.len(), registry.count());
        assert_eq!(registry.cards.len(), registry.count());
    }
}
