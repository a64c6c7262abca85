//! Five-letter tile input.
//!
//! The sequence only ever holds single lowercase characters and never more
//! than [`TILE_COUNT`] of them. Input that would break either rule is ignored
//! rather than reported: a key press of `"Shift"` or a sixth letter simply
//! does nothing.

use tracing::trace;

pub const TILE_COUNT: usize = 5;
pub const PLACEHOLDER: char = '-';

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterSequence {
    letters: Vec<char>,
}

impl LetterSequence {
    pub fn new() -> Self {
        Self {
            letters: Vec::with_capacity(TILE_COUNT),
        }
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.letters.len() >= TILE_COUNT
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Appends `value` lowercased, if that is exactly one UTF-16 code unit and
    /// there is room. Returns whether the sequence changed.
    ///
    /// Length is measured the way the browser reports `key.length`, so
    /// characters outside the Basic Multilingual Plane (emoji) are refused.
    pub fn add_letter(&mut self, value: &str) -> bool {
        let lower = value.to_lowercase();
        if lower.encode_utf16().count() != 1 || self.is_full() {
            return false;
        }
        let Some(letter) = lower.chars().next() else {
            return false;
        };
        self.letters.push(letter);
        true
    }

    pub fn remove_letter(&mut self) -> bool {
        self.letters.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }

    pub fn combine(&self) -> String {
        self.letters.iter().collect()
    }

    /// Always [`TILE_COUNT`] characters: the letters, then `-` padding.
    pub fn fill(&self) -> String {
        self.tiles().iter().map(|t| t.glyph()).collect()
    }

    pub fn tiles(&self) -> [Tile; TILE_COUNT] {
        let mut out = [Tile::Empty; TILE_COUNT];
        for (slot, &c) in out.iter_mut().zip(&self.letters) {
            *slot = Tile::Filled(c);
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Filled(char),
    Empty,
}

impl Tile {
    pub fn glyph(self) -> char {
        match self {
            Tile::Filled(c) => c,
            Tile::Empty => PLACEHOLDER,
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Tile::Empty)
    }
}

/// UI input routed to the tile input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileCommand {
    /// A physical key press, by its DOM `key` name.
    Key(String),
    /// An on-screen letter button.
    Letter(String),
    /// The on-screen erase button.
    Erase,
    /// The on-screen submit button.
    Submit,
}

/// What the caller has to do after a command was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileEffect {
    /// Nothing changed.
    None,
    /// The letters changed; re-render the tiles.
    Changed,
    /// The player asked to submit the current guess.
    Submit,
}

#[derive(Debug, Clone, Default)]
pub struct TileInput {
    sequence: LetterSequence,
}

impl TileInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sequence(&self) -> &LetterSequence {
        &self.sequence
    }

    pub fn add_letter(&mut self, value: &str) -> bool {
        self.sequence.add_letter(value)
    }

    pub fn remove_letter(&mut self) -> bool {
        self.sequence.remove_letter()
    }

    pub fn clear(&mut self) {
        self.sequence.clear();
    }

    pub fn combine(&self) -> String {
        self.sequence.combine()
    }

    pub fn fill(&self) -> String {
        self.sequence.fill()
    }

    pub fn tiles(&self) -> [Tile; TILE_COUNT] {
        self.sequence.tiles()
    }

    pub fn handle(&mut self, cmd: TileCommand) -> TileEffect {
        let changed = match &cmd {
            TileCommand::Key(key) => match key.as_str() {
                "Backspace" => self.remove_letter(),
                "Enter" => return TileEffect::Submit,
                _ => self.add_letter(key),
            },
            TileCommand::Letter(letter) => self.add_letter(letter),
            TileCommand::Erase => self.remove_letter(),
            TileCommand::Submit => return TileEffect::Submit,
        };
        trace!(?cmd, changed, letters = %self.fill(), "tile command");
        if changed {
            TileEffect::Changed
        } else {
            TileEffect::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_letter_lowercases_and_appends() {
        for c in ['a', 'Q', 'z', 'M'] {
            let mut s = LetterSequence::new();
            s.add_letter("x");
            assert!(s.add_letter(&c.to_string()));
            assert_eq!(s.len(), 2);
            assert!(s.combine().ends_with(c.to_ascii_lowercase()));
        }
    }

    #[test]
    fn add_letter_ignores_multi_char_and_empty_input() {
        let mut s = LetterSequence::new();
        s.add_letter("c");
        assert!(!s.add_letter("ab"));
        assert!(!s.add_letter(""));
        assert!(!s.add_letter("Shift"));
        assert_eq!(s.combine(), "c");
    }

    #[test]
    fn add_letter_counts_utf16_units() {
        let mut s = LetterSequence::new();
        assert!(s.add_letter("É"));
        assert!(s.add_letter("ß"));
        assert!(!s.add_letter("😀"));
        assert!(!s.add_letter("𝔸"));
        assert_eq!(s.combine(), "éß");
    }

    #[test]
    fn six_adds_stop_at_five() {
        let mut s = LetterSequence::new();
        for c in ["a", "b", "c", "d", "e"] {
            assert!(s.add_letter(c));
        }
        assert!(!s.add_letter("f"));
        assert_eq!(s.len(), TILE_COUNT);
        assert_eq!(s.combine(), "abcde");
        assert!(s.is_full());
    }

    #[test]
    fn remove_on_empty_is_noop() {
        let mut s = LetterSequence::new();
        assert!(!s.remove_letter());
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn fill_pads_at_the_end() {
        let mut s = LetterSequence::new();
        assert_eq!(s.fill(), "-----");
        for c in ["c", "a", "t"] {
            s.add_letter(c);
        }
        assert_eq!(s.fill(), "cat--");
        for c in ["s", "x"] {
            s.add_letter(c);
        }
        assert_eq!(s.fill(), "catsx");
        assert_eq!(s.fill().chars().count(), TILE_COUNT);
    }

    #[test]
    fn clear_then_combine_is_empty() {
        let mut s = LetterSequence::new();
        s.add_letter("h");
        s.add_letter("i");
        s.clear();
        assert_eq!(s.combine(), "");
        assert_eq!(s.fill(), "-----");
    }

    #[test]
    fn cat_scenario() {
        let mut input = TileInput::new();
        input.add_letter("C");
        input.add_letter("a");
        input.add_letter("t");
        assert_eq!(input.combine(), "cat");
        assert_eq!(input.fill(), "cat--");
        input.remove_letter();
        assert_eq!(input.combine(), "ca");
    }

    #[test]
    fn tiles_mark_filled_and_empty_slots() {
        let mut input = TileInput::new();
        input.add_letter("o");
        input.add_letter("k");
        let tiles = input.tiles();
        assert_eq!(tiles[0], Tile::Filled('o'));
        assert_eq!(tiles[1], Tile::Filled('k'));
        assert!(tiles[2..].iter().all(|t| t.is_empty()));
    }

    #[test]
    fn key_commands_map_to_operations() {
        let mut input = TileInput::new();
        assert_eq!(input.handle(TileCommand::Key("W".into())), TileEffect::Changed);
        assert_eq!(input.handle(TileCommand::Key("Shift".into())), TileEffect::None);
        assert_eq!(input.handle(TileCommand::Letter("o".into())), TileEffect::Changed);
        assert_eq!(input.handle(TileCommand::Key("Backspace".into())), TileEffect::Changed);
        assert_eq!(input.combine(), "w");
        assert_eq!(input.handle(TileCommand::Erase), TileEffect::Changed);
        assert_eq!(input.handle(TileCommand::Erase), TileEffect::None);
        assert_eq!(input.handle(TileCommand::Key("Enter".into())), TileEffect::Submit);
        assert_eq!(input.handle(TileCommand::Submit), TileEffect::Submit);
    }
}
