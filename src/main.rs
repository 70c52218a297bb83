use hangman::store::{PlayerStore, DEFAULT_STORE_FILE};
use hangman::ui;

fn main() {
    env_logger::init();

    let store = PlayerStore::new(DEFAULT_STORE_FILE);
    if let Err(err) = ui::run(&store) {
        eprintln!("hangman: {err}");
    }
}
