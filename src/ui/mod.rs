//! Terminal presentation: menu, prompts, colors, gallows art.
//!
//! Everything here is glue. Game logic lives in `core` and `session`;
//! this module turns the plain data they emit into colored terminal
//! output and feeds lines of input back in.

use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;

use crate::core::{BoardView, GameRng, GuessError, Player, RoundState};
use crate::session::{Frontend, GameSession, RoundOutcome, SessionError};
use crate::store::{PlayerStore, PlayerTable};
use crate::words;

/// Gallows art, one entry per stage. Stage 0 is drawn for the first
/// wrong guess; stage 6 is the complete figure.
pub const STAGES: [&str; 7] = [
    r#"
   -----
   |   |
       |
       |
       |
       |
=========
"#,
    r#"
   -----
   |   |
   O   |
       |
       |
       |
=========
"#,
    r#"
   -----
   |   |
   O   |
   |   |
       |
       |
=========
"#,
    r#"
   -----
   |   |
   O   |
  /|   |
       |
       |
=========
"#,
    r#"
   -----
   |   |
   O   |
  /|\  |
       |
       |
=========
"#,
    r#"
   -----
   |   |
   O   |
  /|\  |
  /    |
       |
=========
"#,
    r#"
   -----
   |   |
   O   |
  /|\  |
  / \  |
       |
=========
"#,
];

/// Column widths of the highscore table.
const NAME_COL: usize = 15;
const STAT_COL: usize = 10;

/// Whether the interactive loop should keep going.
enum Flow {
    Continue,
    Quit,
}

/// Line-oriented terminal frontend over stdin/stdout.
pub struct Terminal;

impl Terminal {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Print `prompt`, then read one line. `None` means end of input.
    /// The trailing newline is stripped; the rest of the line is kept
    /// verbatim.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    fn print_menu(&mut self) {
        println!("\n");
        println!("<=================== Welcome to Hangman ===================>");
        let gallows = r#"
                       _______
                      |       |
                      |       O
                      |      /|\
                      |      / \
                      | "#;
        println!("{}", gallows.dark_yellow());
        println!(
            "{}            \\o/  \\o/  \\o/",
            "         =====================".dark_yellow()
        );
        println!(
            "{}            |    |    |",
            "        / | 1. Start Game   | \\".dark_yellow()
        );
        println!(
            "{}          / \\  / \\  / \\",
            "       /  | 2. Quit Game    |  \\".dark_yellow()
        );
        println!("{}", "      /   | 3. Highscores   |   \\".dark_yellow());
        println!(
            "{}         \\o/  \\o/  \\o/",
            "     /   ======================  \\".dark_yellow()
        );
        println!("                                            |    |    |");
        println!("                                           / \\  / \\  / \\");
        println!("\n");
        println!("          (Press C to Clear the Highscore List)");
        println!("<==========================================================>");
    }

    fn won_banner(&mut self) {
        println!("{}", "=================================".green());
        println!("{}", "=== Congratulations, You won! ===".green());
        println!("{}", "=================================".green());
    }

    fn lost_banner(&mut self, word: &str) {
        println!("{}", "==================".dark_yellow());
        println!("{}", "=== Game Over! ===".dark_yellow());
        println!("{}", "==================".dark_yellow());
        println!("{}", format!("\nThe Word was: {word}").dark_yellow());
    }

    fn highscores(&mut self, table: &PlayerTable) {
        if table.is_empty() {
            println!("\n");
            println!("{}", "========================".dark_yellow());
            println!("{}", "===  No Entries Yet  ===".dark_yellow());
            println!("{}", "========================".dark_yellow());
            return;
        }

        println!("========== Highscore List =========\n");
        println!(
            "{}",
            format!("{:<NAME_COL$}{:<STAT_COL$}{:<STAT_COL$}", "Name", "Score", "Rounds")
                .dark_yellow()
        );
        println!("{}", "-".repeat(NAME_COL + 2 * STAT_COL).dark_yellow());

        for (name, record) in table {
            println!(
                "{:<NAME_COL$}{:<STAT_COL$}{:<STAT_COL$}",
                name, record.score, record.rounds
            );
        }

        println!("\n===================================");
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontend for Terminal {
    fn read_guess(&mut self) -> io::Result<String> {
        match self.prompt("Enter a letter to guess: ")? {
            Some(line) => Ok(line),
            None => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input")),
        }
    }

    fn rejected(&mut self, err: &GuessError) {
        let msg = match err {
            GuessError::InvalidInput => "Please enter exactly one alphabetic character!",
            GuessError::DuplicateGuess => "You have already guessed that letter!",
        };
        println!("{}", format!("\n{msg}\n").dark_yellow());
    }

    fn stage(&mut self, stage: usize) {
        println!("{}", STAGES[stage]);
    }

    fn board(&mut self, view: &BoardView) {
        let wrong: Vec<String> = view.wrong.iter().map(char::to_string).collect();
        println!(
            "{}",
            format!("Wrong Guesses: {}\n", wrong.join(" ")).dark_yellow()
        );

        let revealed: Vec<String> = view.revealed.iter().map(char::to_string).collect();
        println!(
            "{}",
            format!("Correct Guesses: {}\n", revealed.join(" ")).green()
        );
    }
}

/// Run the interactive menu loop until the player quits or input ends.
pub fn run(store: &PlayerStore) -> Result<(), SessionError> {
    let mut terminal = Terminal::new();
    let mut rng = GameRng::from_entropy();

    loop {
        terminal.print_menu();

        let Some(option) = terminal.prompt("\nSelect Your Option: ")? else {
            return Ok(());
        };

        match option.as_str() {
            "1" => {
                if let Flow::Quit = start_game(store, &mut terminal, &mut rng)? {
                    return Ok(());
                }
            }
            "2" => return Ok(()),
            "3" => terminal.highscores(&store.load_all()?),
            // Clear trigger is case-sensitive: only lowercase 'c'.
            "c" => store.clear_all()?,
            _ => {}
        }
    }
}

/// Create a player, then play rounds until a loss or a declined replay.
fn start_game(
    store: &PlayerStore,
    terminal: &mut Terminal,
    rng: &mut GameRng,
) -> Result<Flow, SessionError> {
    let Some(mut player) = create_player(store, terminal)? else {
        return Ok(Flow::Quit);
    };

    loop {
        let round = RoundState::new(words::random_word(rng));
        let outcome = match GameSession::new(&mut player, store).play_round(round, terminal) {
            Ok(outcome) => outcome,
            Err(SessionError::Io(err)) if err.kind() == io::ErrorKind::UnexpectedEof => {
                return Ok(Flow::Quit);
            }
            Err(err) => return Err(err),
        };

        match outcome {
            RoundOutcome::Won => {
                terminal.won_banner();

                let Some(again) = terminal.prompt("\nPlay Again? (y/n):\n ")? else {
                    return Ok(Flow::Quit);
                };
                if again.to_lowercase() != "y" {
                    return Ok(Flow::Continue);
                }
            }
            RoundOutcome::Lost { word } => {
                terminal.lost_banner(&word);
                return Ok(Flow::Continue);
            }
        }
    }
}

/// Ask for a name until one fits and is free, then create the player.
fn create_player(
    store: &PlayerStore,
    terminal: &mut Terminal,
) -> Result<Option<Player>, SessionError> {
    loop {
        let Some(name) = terminal.prompt("\nEnter Your Name (Max. 15 Letters): ")? else {
            return Ok(None);
        };

        if !Player::name_fits(&name) {
            println!("{}", "\nYour name is too long! Try again!\n".dark_yellow());
            continue;
        }

        if store.exists(&name)? {
            println!("{}", "\nPlayer Already Exists!\n".dark_yellow());
            continue;
        }

        return Ok(Some(store.create(&name)?));
    }
}
