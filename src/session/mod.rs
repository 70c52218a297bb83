//! Round orchestration.
//!
//! `GameSession` couples the pure round state machine to a `Frontend`
//! (input and display collaborator) and the player store. The session
//! owns the guess loop: prompt, validate, apply, persist after every
//! score or round change, and report how the round ended.
//!
//! Terminal checks run at the top of every iteration, win before loss,
//! so a guess that completes the word always wins regardless of the
//! attempt counter.

use std::io;

use thiserror::Error;

use crate::core::{
    BoardView, Guess, GuessError, GuessReport, Player, RoundPhase, RoundState, CORRECT_REWARD,
};
use crate::store::{PlayerStore, StorageError};

/// How a round ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// All positions revealed. The word is not exposed.
    Won,

    /// Attempt limit reached. The secret word is exposed for display.
    Lost { word: String },
}

/// Session failures: the store or the input stream gave out.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Input and display collaborator for a round.
///
/// The state machine hands over plain data (stage indices, letter
/// lists); implementations decide how it looks. Tests drive rounds with
/// a scripted frontend.
pub trait Frontend {
    /// Read one line of guess input.
    fn read_guess(&mut self) -> io::Result<String>;

    /// A guess was rejected; nothing changed, the caller re-prompts.
    fn rejected(&mut self, err: &GuessError);

    /// Draw the gallows stage with the given index (0-based).
    fn stage(&mut self, stage: usize);

    /// Show the current wrong-guess list and revealed board.
    fn board(&mut self, view: &BoardView);
}

/// Drives rounds for one player against one store.
pub struct GameSession<'a> {
    player: &'a mut Player,
    store: &'a PlayerStore,
}

impl<'a> GameSession<'a> {
    #[must_use]
    pub fn new(player: &'a mut Player, store: &'a PlayerStore) -> Self {
        Self { player, store }
    }

    /// Run one round to completion.
    ///
    /// On a win the player's round count is incremented; on a loss the
    /// stats accumulated so far stand. Both terminal paths persist the
    /// player, as does every score change along the way.
    pub fn play_round(
        &mut self,
        mut round: RoundState,
        frontend: &mut impl Frontend,
    ) -> Result<RoundOutcome, SessionError> {
        loop {
            match round.phase() {
                RoundPhase::Won => {
                    self.player.rounds += 1;
                    self.store.update(self.player)?;
                    log::info!("{} won on {:?}", self.player.name, round.word());
                    return Ok(RoundOutcome::Won);
                }
                RoundPhase::Lost => {
                    // The final stage belongs to the seventh wrong guess.
                    frontend.stage((round.attempts() - 1) as usize);
                    self.store.update(self.player)?;
                    log::info!("{} lost on {:?}", self.player.name, round.word());
                    return Ok(RoundOutcome::Lost {
                        word: round.word().to_string(),
                    });
                }
                RoundPhase::InProgress => {}
            }

            let line = frontend.read_guess()?;
            let guess = match Guess::parse(&line) {
                Ok(guess) => guess,
                Err(err) => {
                    frontend.rejected(&err);
                    continue;
                }
            };

            match round.apply(guess) {
                Ok(GuessReport::Correct { .. }) => {
                    self.player.score += CORRECT_REWARD;
                    self.store.update(self.player)?;
                    frontend.board(&round.view());
                }
                Ok(GuessReport::Wrong { stage }) => {
                    frontend.stage(stage);
                    frontend.board(&round.view());
                }
                Err(err) => frontend.rejected(&err),
            }
        }
    }
}
