//! Bidirectional lookup tables between Spanish characters and Braille cells.
//!
//! The canonical cell representation is a Unicode code point in the Braille
//! Patterns block (see [`cell`]).  Characters fall into three disjoint
//! lookup domains, each with its own forward and inverse table:
//!
//! - **letters**: a–z, ñ, the accented vowels and the space (blank cell)
//! - **digits**: 0–9, sharing the a–j shapes and relying on the number sign
//! - **punctuation**: `. , ; : ? ¿ ! ¡ - _ ( ) " + = ÷ / * x`
//!
//! Two control cells sit outside all three domains: [`NUMBER_MARKER`] and
//! [`CAPITAL_MARKER`].

pub mod cell;
pub mod tables;

use std::collections::HashMap;
use std::sync::OnceLock;

pub use cell::{is_braille_cell, Cell, BRAILLE_BASE, BRAILLE_LAST};
pub use tables::{BLANK_CELL, CAPITAL_MARKER, NUMBER_MARKER};

// ── CharacterMap ──────────────────────────────────────────────────────────────

/// Immutable character ↔ cell tables.
///
/// Build one with [`CharacterMap::new`] and hand a reference to each
/// [`Transcoder`](crate::transcoder::Transcoder), or use the lazily built
/// process-wide instance from [`CharacterMap::shared`].  All lookups take
/// `&self`, so one map can be read from any number of threads at once.
#[derive(Debug, Clone)]
pub struct CharacterMap {
    letter_to_cell: HashMap<char, char>,
    digit_to_cell: HashMap<char, char>,
    punctuation_to_cell: HashMap<char, char>,
    cell_to_letter: HashMap<char, char>,
    cell_to_digit: HashMap<char, char>,
    cell_to_punctuation: HashMap<char, char>,
}

impl CharacterMap {
    /// Builds the six lookup tables from the static Spanish tables.
    pub fn new() -> Self {
        let (letter_to_cell, cell_to_letter) = build_pair(tables::LETTERS);
        let (digit_to_cell, cell_to_digit) = build_pair(tables::DIGITS);
        let (punctuation_to_cell, cell_to_punctuation) = build_pair(tables::PUNCTUATION);

        Self {
            letter_to_cell,
            digit_to_cell,
            punctuation_to_cell,
            cell_to_letter,
            cell_to_digit,
            cell_to_punctuation,
        }
    }

    /// Returns the process-wide map, building it on first use.
    pub fn shared() -> &'static CharacterMap {
        static SHARED: OnceLock<CharacterMap> = OnceLock::new();
        SHARED.get_or_init(CharacterMap::new)
    }

    /// Cell for a letter or the space.  Case-insensitive.
    pub fn cell_for_letter(&self, c: char) -> Option<char> {
        fold_case(c).and_then(|lower| self.letter_to_cell.get(&lower).copied())
    }

    /// Cell for a digit.  The caller is responsible for the number sign.
    pub fn cell_for_digit(&self, d: char) -> Option<char> {
        self.digit_to_cell.get(&d).copied()
    }

    /// Cell for a punctuation or arithmetic sign.
    pub fn cell_for_punctuation(&self, p: char) -> Option<char> {
        self.punctuation_to_cell.get(&p).copied()
    }

    /// Lowercase letter (or space) for a cell.
    pub fn letter_for_cell(&self, cell: char) -> Option<char> {
        self.cell_to_letter.get(&cell).copied()
    }

    /// Digit for a cell, meaningful only after a number sign.
    pub fn digit_for_cell(&self, cell: char) -> Option<char> {
        self.cell_to_digit.get(&cell).copied()
    }

    /// Canonical punctuation character for a cell.
    pub fn punctuation_for_cell(&self, cell: char) -> Option<char> {
        self.cell_to_punctuation.get(&cell).copied()
    }

    /// Returns `true` if `c` can be written in Braille by this map.
    pub fn is_supported_spanish_character(&self, c: char) -> bool {
        self.cell_for_letter(c).is_some()
            || self.digit_to_cell.contains_key(&c)
            || self.punctuation_to_cell.contains_key(&c)
    }

    /// Returns `true` if `c` is in the Unicode Braille Patterns block.
    pub fn is_braille_cell(&self, c: char) -> bool {
        is_braille_cell(c)
    }

    /// Reflects a cell's dot pattern left-to-right.
    ///
    /// Returns `None` if `c` is not a Braille cell.
    pub fn mirror_cell(&self, c: char) -> Option<char> {
        Cell::from_char(c).map(|cell| cell.mirrored().as_char())
    }
}

impl Default for CharacterMap {
    fn default() -> Self {
        Self::new()
    }
}

// ── Table helpers ─────────────────────────────────────────────────────────────

/// Builds a forward map and its inverse.  For shared cells the first pair wins.
fn build_pair(pairs: &[(char, char)]) -> (HashMap<char, char>, HashMap<char, char>) {
    let mut forward = HashMap::with_capacity(pairs.len());
    let mut inverse = HashMap::with_capacity(pairs.len());
    for &(character, cell) in pairs {
        forward.insert(character, cell);
        inverse.entry(cell).or_insert(character);
    }
    (forward, inverse)
}

/// Lower-cases `c` when that yields exactly one character.
///
/// Characters such as `İ` lower-case to two code points and have no single
/// Braille letter, so they are rejected rather than silently truncated.
fn fold_case(c: char) -> Option<char> {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => Some(single),
        _ => None,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
