//! The round state machine.
//!
//! ## RoundState
//!
//! Owns the secret word, the revealed board, the wrong-guess list and the
//! attempt counter. Transitions are pure: applying a guess performs no
//! I/O and returns a `GuessReport` describing what happened. Rendering
//! consumes `BoardView` snapshots and the stage indices carried by the
//! report.
//!
//! ## Terminal evaluation
//!
//! `phase()` checks the win condition strictly before the attempt limit,
//! so a completed word wins even when the attempt counter sits at its
//! cap.
//!
//! ## Stage indexing
//!
//! A wrong guess reports the stage for the attempt count *before* the
//! increment (0..=6). The loss path therefore draws stage
//! `attempts - 1`, which is the art for the seventh wrong guess.

use smallvec::SmallVec;

use super::guess::{Guess, GuessError};

/// Wrong guesses before a round is lost.
pub const ATTEMPT_LIMIT: u32 = 7;

/// Points awarded per accepted correct guess.
pub const CORRECT_REWARD: u64 = 10;

/// Lifecycle of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    /// Guessing continues.
    InProgress,
    /// Every position is revealed.
    Won,
    /// The attempt limit was reached with positions still hidden.
    Lost,
}

/// What a single accepted guess did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessReport {
    /// The letter occurs in the word; every matching position is now
    /// revealed. `newly_revealed` is zero when the letter had already
    /// been revealed (re-guessing a correct letter is accepted, and its
    /// reward re-triggers).
    Correct { newly_revealed: usize },

    /// The letter does not occur in the word. `stage` is the gallows
    /// stage to draw: the attempt count before this guess was charged.
    Wrong { stage: usize },
}

/// Display snapshot handed to a renderer: plain data, no formatting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardView {
    /// One entry per word position; unrevealed positions hold `'_'`.
    pub revealed: Vec<char>,

    /// Wrong guesses in the order they were made.
    pub wrong: Vec<char>,
}

/// State of one word-guessing round.
#[derive(Clone, Debug)]
pub struct RoundState {
    word: String,
    revealed: Vec<Option<char>>,
    wrong: SmallVec<[char; ATTEMPT_LIMIT as usize]>,
    attempts: u32,
}

impl RoundState {
    /// Start a round over the given secret word with every position
    /// hidden.
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        let word = word.into();
        assert!(!word.is_empty(), "Round word must be non-empty");

        let positions = word.chars().count();
        Self {
            word,
            revealed: vec![None; positions],
            wrong: SmallVec::new(),
            attempts: 0,
        }
    }

    /// The secret word. Callers must only surface this after a loss.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Wrong guesses charged so far.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Current phase.
    ///
    /// The win check precedes the attempt-limit check: a completed word
    /// is a win even at the cap.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        if self.revealed.iter().all(Option::is_some) {
            RoundPhase::Won
        } else if self.attempts >= ATTEMPT_LIMIT {
            RoundPhase::Lost
        } else {
            RoundPhase::InProgress
        }
    }

    /// Apply a validated guess.
    ///
    /// A letter already on the wrong-guess list is rejected with
    /// `DuplicateGuess` and charges nothing. A letter already revealed
    /// re-triggers the correct branch; correct guesses are deliberately
    /// not de-duplicated.
    pub fn apply(&mut self, guess: Guess) -> Result<GuessReport, GuessError> {
        let letter = guess.letter();

        if self.wrong.contains(&letter) {
            return Err(GuessError::DuplicateGuess);
        }

        if self.word.chars().any(|c| c == letter) {
            let mut newly_revealed = 0;
            for (slot, c) in self.revealed.iter_mut().zip(self.word.chars()) {
                if c == letter && slot.is_none() {
                    *slot = Some(c);
                    newly_revealed += 1;
                }
            }
            Ok(GuessReport::Correct { newly_revealed })
        } else {
            let stage = self.attempts as usize;
            self.wrong.push(letter);
            self.attempts += 1;
            Ok(GuessReport::Wrong { stage })
        }
    }

    /// Snapshot of the board for rendering.
    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView {
            revealed: self
                .revealed
                .iter()
                .map(|slot| slot.unwrap_or('_'))
                .collect(),
            wrong: self.wrong.to_vec(),
        }
    }
}
