//! The word game behind the tile input.
//!
//! Six guesses at a five-letter word. Each accepted guess is graded letter by
//! letter; [`Game::keyboard`] keeps the best grade seen for each letter.

use hashbrown::{HashMap, HashSet};
use tracing::debug;

use crate::tiles::{TileInput, TILE_COUNT};

pub const MAX_GUESSES: usize = 6;
pub const LETTERS: &str = "qwertyuiopasdfghjklzxcvbnm";

/// Grade of a single letter. Ordered so that a better grade compares greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterState {
    Empty,
    Wrong,
    WrongPlace,
    Correct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letter {
    pub ch: char,
    pub state: LetterState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordState {
    pub letters: Vec<Letter>,
}

impl WordState {
    pub fn empty() -> Self {
        Self {
            letters: vec![
                Letter {
                    ch: crate::tiles::PLACEHOLDER,
                    state: LetterState::Empty,
                };
                TILE_COUNT
            ],
        }
    }

    /// Exact matches are `Correct`. A misplaced letter is `WrongPlace` the
    /// first time it occurs in the guess and `Wrong` afterwards.
    pub fn grade(guess: &str, word: &str) -> Self {
        let word: Vec<char> = word.chars().collect();
        let mut seen_misplaced = HashSet::new();
        let letters = guess
            .to_lowercase()
            .chars()
            .enumerate()
            .map(|(pos, ch)| {
                let state = if word.get(pos) == Some(&ch) {
                    LetterState::Correct
                } else if word.contains(&ch) && seen_misplaced.insert(ch) {
                    LetterState::WrongPlace
                } else {
                    LetterState::Wrong
                };
                Letter { ch, state }
            })
            .collect();
        Self { letters }
    }

    pub fn is_solved(&self) -> bool {
        !self.letters.is_empty() && self.letters.iter().all(|l| l.state == LetterState::Correct)
    }
}

/// Accepted guess words.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// One word per line. Lines that are not five ASCII letters are skipped.
    pub fn from_lines(raw: &str) -> Self {
        let words = raw
            .lines()
            .map(|l| l.trim().to_ascii_lowercase())
            .filter(|w| w.len() == TILE_COUNT && w.bytes().all(|b| b.is_ascii_lowercase()))
            .collect();
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Fewer than five letters entered.
    Incomplete,
    NotInDictionary(String),
    /// The game already ended.
    GameOver,
    Accepted(WordState),
}

#[derive(Debug, Clone)]
pub struct Game {
    word: String,
    guesses: Vec<String>,
}

impl Game {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into().to_lowercase(),
            guesses: Vec::with_capacity(MAX_GUESSES),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    pub fn guesses_left(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.guesses.len())
    }

    pub fn is_victory(&self) -> bool {
        self.guesses.iter().any(|g| *g == self.word)
    }

    pub fn is_loss(&self) -> bool {
        self.guesses.len() >= MAX_GUESSES && !self.is_victory()
    }

    pub fn is_complete(&self) -> bool {
        self.guesses.len() >= MAX_GUESSES || self.is_victory()
    }

    /// Submits what the tile input holds. Accepted guesses clear the tiles;
    /// rejected ones leave them so the player can correct the word.
    pub fn submit(&mut self, input: &mut TileInput, dict: &Dictionary) -> GuessOutcome {
        if self.is_complete() {
            return GuessOutcome::GameOver;
        }
        if !input.sequence().is_full() {
            return GuessOutcome::Incomplete;
        }
        let guess = input.combine();
        if !dict.contains(&guess) {
            debug!(%guess, "guess rejected");
            return GuessOutcome::NotInDictionary(guess);
        }

        let state = WordState::grade(&guess, &self.word);
        self.guesses.push(guess);
        input.clear();
        debug!(guesses = self.guesses.len(), solved = state.is_solved(), "guess accepted");
        GuessOutcome::Accepted(state)
    }

    /// Best grade seen so far for every letter of the alphabet.
    pub fn keyboard(&self) -> HashMap<char, LetterState> {
        let mut best: HashMap<char, LetterState> =
            LETTERS.chars().map(|c| (c, LetterState::Empty)).collect();
        for guess in &self.guesses {
            for letter in WordState::grade(guess, &self.word).letters {
                let slot = best.entry(letter.ch).or_insert(LetterState::Empty);
                if letter.state > *slot {
                    *slot = letter.state;
                }
            }
        }
        best
    }
}
