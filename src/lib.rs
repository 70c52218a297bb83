//! # hangman
//!
//! A terminal Hangman word-guessing game with persistent, file-backed
//! player statistics.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: The round state machine (`core::round`) never
//!    performs I/O. Applying a guess returns plain data (`GuessReport`,
//!    `BoardView`) that a frontend renders however it likes.
//!
//! 2. **Explicit storage**: Player statistics live in a `PlayerStore`
//!    service object passed by reference to whoever needs it. No ambient
//!    or static state.
//!
//! 3. **Single source of truth**: The persisted JSON mapping is
//!    authoritative. In-memory `Player` objects are flushed through
//!    `PlayerStore::update` after every score or round change.
//!
//! ## Modules
//!
//! - `core`: Players, guess validation, the round state machine, RNG
//! - `words`: The fixed word list and random selection
//! - `store`: File-backed player storage
//! - `session`: Round orchestration and the `Frontend` seam
//! - `ui`: Crossterm terminal frontend (menu, prompts, gallows art)

pub mod core;
pub mod session;
pub mod store;
pub mod ui;
pub mod words;

// Re-export commonly used types
pub use crate::core::{
    BoardView, GameRng, Guess, GuessError, GuessReport, Player, RoundPhase, RoundState,
    ATTEMPT_LIMIT, CORRECT_REWARD, MAX_NAME_LEN,
};

pub use crate::session::{Frontend, GameSession, RoundOutcome, SessionError};

pub use crate::store::{PlayerRecord, PlayerStore, PlayerTable, StorageError};
