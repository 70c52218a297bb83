//! The fixed word list and random selection.
//!
//! Roughly a hundred lowercase entries across mixed everyday categories.
//! The list is static by design; pluggable word sources are a non-goal.

use crate::core::GameRng;

/// Every word a round can start with.
pub const WORDS: &[&str] = &[
    // Fruit
    "apple", "banana", "orange", "grape", "pear", "peach", "cherry", "lemon", "lime", "mango",
    // School
    "book", "pen", "paper", "notebook", "pencil", "eraser", "ruler", "desk", "chair", "lamp",
    // Animals
    "dog", "cat", "bird", "fish", "horse", "cow", "sheep", "goat", "pig", "rabbit",
    // Verbs
    "run", "jump", "swim", "fly", "write", "read", "draw", "sing", "dance", "play",
    // Feelings
    "happy", "sad", "angry", "tired", "excited", "scared", "brave", "funny", "kind", "smart",
    // Places
    "house", "school", "office", "shop", "park", "garden", "street", "city", "village", "country",
    // Vehicles
    "car", "bike", "bus", "train", "plane", "boat", "truck", "scooter", "taxi", "subway",
    // Colors
    "red", "blue", "green", "yellow", "orange", "purple", "black", "white", "pink", "brown",
    // Time
    "day", "night", "morning", "evening", "week", "month", "year", "hour", "minute", "second",
    // Food
    "food", "water", "milk", "bread", "cheese", "meat", "rice", "soup", "fruit", "vegetable",
    // Adjectives
    "light", "dark", "hot", "cold", "warm", "cool", "strong", "weak", "big", "small",
];

/// Draw a word uniformly at random.
#[must_use]
pub fn random_word(rng: &mut GameRng) -> &'static str {
    WORDS[rng.gen_range_usize(0..WORDS.len())]
}
