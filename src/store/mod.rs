//! File-backed player storage.
//!
//! ## Record format
//!
//! A single JSON document mapping player name to
//! `{"Score": <int>, "Rounds": <int>}`. The capitalized field names are
//! part of the on-disk format: record files written by earlier versions
//! of the game must read back identically.
//!
//! ## Consistency model
//!
//! Every mutating operation is a full read-modify-write of the whole
//! mapping. The process is single-user and synchronous, so no locking or
//! transaction discipline is attempted; a crash mid-write can corrupt
//! the file (known limitation).
//!
//! A missing record file is an empty store. Malformed content surfaces
//! as `StorageError::Malformed` rather than being treated as empty, so a
//! damaged file cannot be silently wiped by the next write.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Player;

/// Default record file, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "player.json";

/// Persisted per-player statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Total score.
    #[serde(rename = "Score")]
    pub score: u64,

    /// Rounds won.
    #[serde(rename = "Rounds")]
    pub rounds: u64,
}

impl From<&Player> for PlayerRecord {
    fn from(player: &Player) -> Self {
        Self {
            score: player.score,
            rounds: player.rounds,
        }
    }
}

/// The full persisted mapping, keyed by player name.
pub type PlayerTable = FxHashMap<String, PlayerRecord>;

/// Storage failures.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The record file exists but could not be read or written.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The record file exists but does not parse as a player table.
    #[error("player record is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// File-backed store for player statistics.
///
/// The store is a plain service object; pass it by reference to whoever
/// needs it. It holds no cache: every operation goes back to the file,
/// which stays the single source of truth.
pub struct PlayerStore {
    path: PathBuf,
}

impl PlayerStore {
    /// Create a store backed by the given file. The file is not touched
    /// until the first operation.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full persisted mapping.
    ///
    /// A missing file yields an empty table.
    pub fn load_all(&self) -> Result<PlayerTable, StorageError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("no record file at {}, starting empty", self.path.display());
                return Ok(PlayerTable::default());
            }
            Err(err) => return Err(err.into()),
        };

        let table: PlayerTable = serde_json::from_str(&text)?;
        log::debug!("loaded {} player records", table.len());
        Ok(table)
    }

    /// Check whether a player name is already taken.
    pub fn exists(&self, name: &str) -> Result<bool, StorageError> {
        Ok(self.load_all()?.contains_key(name))
    }

    /// Create a player with zeroed statistics and persist it.
    ///
    /// No uniqueness check: creating a name that already exists silently
    /// overwrites the stored entry. Callers gate on `exists` first.
    pub fn create(&self, name: &str) -> Result<Player, StorageError> {
        let player = Player::new(name);

        let mut table = self.load_all()?;
        table.insert(player.name.clone(), PlayerRecord::from(&player));
        self.persist(&table)?;

        log::info!("created player {name:?}");
        Ok(player)
    }

    /// Rewrite the stored entry for `player` with its current
    /// statistics. Idempotent; call after every score or round change.
    pub fn update(&self, player: &Player) -> Result<(), StorageError> {
        let mut table = self.load_all()?;
        table.insert(player.name.clone(), PlayerRecord::from(player));
        self.persist(&table)?;

        log::debug!(
            "updated player {:?}: score={} rounds={}",
            player.name,
            player.score,
            player.rounds
        );
        Ok(())
    }

    /// Replace the persisted record with an empty mapping.
    pub fn clear_all(&self) -> Result<(), StorageError> {
        self.persist(&PlayerTable::default())?;
        log::info!("cleared all player records");
        Ok(())
    }

    /// Overwrite the whole record file with `table`.
    fn persist(&self, table: &PlayerTable) -> Result<(), StorageError> {
        let text = serde_json::to_string_pretty(table)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}
