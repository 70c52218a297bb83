//! Player identity and accumulated statistics.
//!
//! A player is identified by name, the unique key in the persisted store.
//! Score and round counts are mutated in place while a round runs and are
//! flushed through `PlayerStore::update` after every change.

use serde::{Deserialize, Serialize};

/// Maximum accepted player name length (characters, not bytes).
///
/// Enforced at the UI boundary: over-long names are rejected with a
/// re-prompt before a player is ever created.
pub const MAX_NAME_LEN: usize = 15;

/// A player with accumulated score and won-round count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique player name.
    pub name: String,

    /// Total points from correct guesses across all rounds.
    pub score: u64,

    /// Number of rounds won. Lost rounds do not count.
    pub rounds: u64,
}

impl Player {
    /// Create a fresh player with zeroed statistics.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            rounds: 0,
        }
    }

    /// Check a candidate name against the length bound.
    #[must_use]
    pub fn name_fits(name: &str) -> bool {
        name.chars().count() <= MAX_NAME_LEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_starts_at_zero() {
        let player = Player::new("Alice");

        assert_eq!(player.name, "Alice");
        assert_eq!(player.score, 0);
        assert_eq!(player.rounds, 0);
    }

    #[test]
    fn test_name_fits_boundary() {
        assert!(Player::name_fits(""));
        assert!(Player::name_fits("abcdefghijklmno")); // exactly 15
        assert!(!Player::name_fits("abcdefghijklmnop")); // 16
    }

    #[test]
    fn test_name_fits_counts_chars_not_bytes() {
        // 15 characters, far more than 15 bytes
        assert!(Player::name_fits("ééééééééééééééé"));
    }

    #[test]
    fn test_player_serialization() {
        let player = Player {
            name: "Bob".to_string(),
            score: 30,
            rounds: 2,
        };

        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();

        assert_eq!(player, deserialized);
    }
}
