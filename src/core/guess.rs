//! Guess input validation.
//!
//! Raw line input is parsed into a `Guess` before it reaches the state
//! machine. Rejected input never consumes an attempt or mutates the
//! round; the frontend re-prompts.

use thiserror::Error;

/// Reasons a guess is rejected. Both are recovered locally with a
/// re-prompt and leave the round untouched.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GuessError {
    /// Input was not exactly one alphabetic character.
    #[error("please enter exactly one alphabetic character")]
    InvalidInput,

    /// The letter is already on the wrong-guess list.
    #[error("you have already guessed that letter")]
    DuplicateGuess,
}

/// A validated single-letter guess.
///
/// Case is preserved: the word list is all lowercase, so an uppercase
/// guess simply never matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Guess(char);

impl Guess {
    /// Validate raw input.
    ///
    /// Surrounding whitespace is trimmed (line input carries a newline);
    /// what remains must be exactly one alphabetic character.
    ///
    /// ```
    /// use hangman::core::{Guess, GuessError};
    ///
    /// assert_eq!(Guess::parse(" a\n").unwrap().letter(), 'a');
    /// assert_eq!(Guess::parse("ab"), Err(GuessError::InvalidInput));
    /// assert_eq!(Guess::parse("3"), Err(GuessError::InvalidInput));
    /// assert_eq!(Guess::parse(""), Err(GuessError::InvalidInput));
    /// ```
    pub fn parse(input: &str) -> Result<Self, GuessError> {
        let mut chars = input.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_alphabetic() => Ok(Self(c)),
            _ => Err(GuessError::InvalidInput),
        }
    }

    /// The guessed letter.
    #[must_use]
    pub fn letter(self) -> char {
        self.0
    }
}
