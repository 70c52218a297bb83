//! Core game types: players, guess validation, the round state machine, RNG.
//!
//! Everything in this module is pure: no file or terminal I/O. The store
//! and UI layers sit on top and consume the plain data produced here.

pub mod guess;
pub mod player;
pub mod rng;
pub mod round;

pub use guess::{Guess, GuessError};
pub use player::{Player, MAX_NAME_LEN};
pub use rng::GameRng;
pub use round::{BoardView, GuessReport, RoundPhase, RoundState, ATTEMPT_LIMIT, CORRECT_REWARD};
