//! Session integration tests.
//!
//! Full rounds driven through a scripted frontend: win and loss flows,
//! persistence coupling, and the check ordering that lets a completed
//! word win at the attempt cap.

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::sync::atomic::{AtomicU32, Ordering};

use hangman::core::{BoardView, GuessError, RoundState};
use hangman::session::{Frontend, GameSession, RoundOutcome, SessionError};
use hangman::store::PlayerStore;

/// Frontend fed from a script, recording everything it was told.
struct Scripted {
    guesses: VecDeque<String>,
    stages: Vec<usize>,
    boards: Vec<BoardView>,
    rejections: Vec<GuessError>,
}

impl Scripted {
    fn new(guesses: &[&str]) -> Self {
        Self {
            guesses: guesses.iter().map(|s| s.to_string()).collect(),
            stages: Vec::new(),
            boards: Vec::new(),
            rejections: Vec::new(),
        }
    }
}

impl Frontend for Scripted {
    fn read_guess(&mut self) -> io::Result<String> {
        self.guesses
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }

    fn rejected(&mut self, err: &GuessError) {
        self.rejections.push(*err);
    }

    fn stage(&mut self, stage: usize) {
        self.stages.push(stage);
    }

    fn board(&mut self, view: &BoardView) {
        self.boards.push(view.clone());
    }
}

/// A store over a unique temp file, removed on drop.
struct TempStore {
    store: PlayerStore,
}

impl TempStore {
    fn new() -> Self {
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let path = std::env::temp_dir().join(format!(
            "hangman-session-it-{}-{}.json",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        Self {
            store: PlayerStore::new(path),
        }
    }
}

impl Drop for TempStore {
    fn drop(&mut self) {
        let _ = fs::remove_file(self.store.path());
    }
}

// =============================================================================
// Win Flow
// =============================================================================

/// Word "cat", guesses c, a, t: round won, 30 points, one round, all
/// persisted.
#[test]
fn test_full_win_flow() {
    let tmp = TempStore::new();
    let mut player = tmp.store.create("Alice").unwrap();
    let mut frontend = Scripted::new(&["c", "a", "t"]);

    let outcome = GameSession::new(&mut player, &tmp.store)
        .play_round(RoundState::new("cat"), &mut frontend)
        .unwrap();

    assert_eq!(outcome, RoundOutcome::Won);
    assert_eq!(player.score, 30);
    assert_eq!(player.rounds, 1);

    let table = tmp.store.load_all().unwrap();
    assert_eq!(table["Alice"].score, 30);
    assert_eq!(table["Alice"].rounds, 1);

    // No misses: no stage was ever drawn, one board per correct guess.
    assert!(frontend.stages.is_empty());
    assert_eq!(frontend.boards.len(), 3);
    assert_eq!(frontend.boards[2].revealed, vec!['c', 'a', 't']);
}

/// A word completed on the sixth miss still wins: the win check runs
/// before the attempt-limit check.
#[test]
fn test_win_at_the_attempt_cap() {
    let tmp = TempStore::new();
    let mut player = tmp.store.create("Bob").unwrap();
    let mut frontend = Scripted::new(&["x", "y", "z", "q", "w", "e", "a", "b"]);

    let outcome = GameSession::new(&mut player, &tmp.store)
        .play_round(RoundState::new("ab"), &mut frontend)
        .unwrap();

    assert_eq!(outcome, RoundOutcome::Won);
    assert_eq!(player.rounds, 1);
    assert_eq!(frontend.stages, vec![0, 1, 2, 3, 4, 5]);
}

/// Re-guessing an already revealed letter is accepted again and its
/// reward re-triggers.
#[test]
fn test_repeated_correct_guess_scores_again() {
    let tmp = TempStore::new();
    let mut player = tmp.store.create("Carol").unwrap();
    let mut frontend = Scripted::new(&["c", "c", "a", "t"]);

    let outcome = GameSession::new(&mut player, &tmp.store)
        .play_round(RoundState::new("cat"), &mut frontend)
        .unwrap();

    assert_eq!(outcome, RoundOutcome::Won);
    assert_eq!(player.score, 40);
    assert!(frontend.rejections.is_empty());
}

// =============================================================================
// Loss Flow
// =============================================================================

/// Word "dog", seven distinct misses: lost after the seventh, with the
/// word exposed and accumulated stats persisted without a round
/// increment.
#[test]
fn test_full_loss_flow() {
    let tmp = TempStore::new();
    let mut player = tmp.store.create("Dave").unwrap();
    let mut frontend = Scripted::new(&["d", "x", "y", "z", "q", "w", "e", "r"]);

    let outcome = GameSession::new(&mut player, &tmp.store)
        .play_round(RoundState::new("dog"), &mut frontend)
        .unwrap();

    assert_eq!(
        outcome,
        RoundOutcome::Lost {
            word: "dog".to_string()
        }
    );
    // One correct guess before going down.
    assert_eq!(player.score, 10);
    assert_eq!(player.rounds, 0);

    let table = tmp.store.load_all().unwrap();
    assert_eq!(table["Dave"].score, 10);
    assert_eq!(table["Dave"].rounds, 0);

    // Stages 0..=6 for the misses, then stage 6 again at the loss
    // transition (the art for the seventh miss).
    assert_eq!(frontend.stages, vec![0, 1, 2, 3, 4, 5, 6, 6]);
}

// =============================================================================
// Persistence Coupling
// =============================================================================

/// Score changes hit the file as they happen, not just at round end: a
/// round abandoned mid-way leaves the points it earned behind.
#[test]
fn test_score_persisted_during_the_round() {
    let tmp = TempStore::new();
    let mut player = tmp.store.create("Erin").unwrap();
    let mut frontend = Scripted::new(&["c", "a"]);

    let result = GameSession::new(&mut player, &tmp.store)
        .play_round(RoundState::new("cat"), &mut frontend);

    assert!(matches!(result, Err(SessionError::Io(_))));

    let table = tmp.store.load_all().unwrap();
    assert_eq!(table["Erin"].score, 20);
    assert_eq!(table["Erin"].rounds, 0);
}

/// Rejected guesses change nothing: no attempts, no score, no board
/// updates.
#[test]
fn test_rejections_are_free() {
    let tmp = TempStore::new();
    let mut player = tmp.store.create("Frank").unwrap();
    let mut frontend = Scripted::new(&["ab", "", "7", "x", "x", "d", "o", "g"]);

    let outcome = GameSession::new(&mut player, &tmp.store)
        .play_round(RoundState::new("dog"), &mut frontend)
        .unwrap();

    assert_eq!(outcome, RoundOutcome::Won);
    assert_eq!(
        frontend.rejections,
        vec![
            GuessError::InvalidInput,
            GuessError::InvalidInput,
            GuessError::InvalidInput,
            GuessError::DuplicateGuess,
        ]
    );
    assert_eq!(frontend.stages, vec![0]);
    assert_eq!(player.score, 30);
}
