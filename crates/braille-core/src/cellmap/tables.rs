//! Spanish character ↔ Braille cell tables.
//!
//! Reference: Comisión Braille Española, *Signografía básica* (letters,
//! accented vowels, digits and common punctuation).
//!
//! # How these tables work
//!
//! Each table is a compile-time slice of `(character, cell)` pairs.  The
//! [`CharacterMap`](super::CharacterMap) turns them into hash maps once, in
//! both directions, when it is built.
//!
//! Order matters in [`PUNCTUATION`]: several characters share one cell (the
//! opening and closing question marks are the same cell in Spanish Braille,
//! for example).  When the inverse map is built, the **first** pair that uses
//! a cell wins, so it is the character produced when decoding that cell.

/// Number sign (dots 3-4-5-6).  Precedes a run of digits.
pub const NUMBER_MARKER: char = '⠼';

/// Capital sign (dots 4-6).  Precedes one uppercase letter.
pub const CAPITAL_MARKER: char = '⠨';

/// Cell with no dots raised.  Stands for the space.
pub const BLANK_CELL: char = '\u{2800}';

/// Lowercase letters, accented vowels and the space (blank cell).
pub const LETTERS: &[(char, char)] = &[
    // ── a–j: first decade (dots 1, 2, 4, 5 only) ─────────────────────────────
    ('a', '⠁'),
    ('b', '⠃'),
    ('c', '⠉'),
    ('d', '⠙'),
    ('e', '⠑'),
    ('f', '⠋'),
    ('g', '⠛'),
    ('h', '⠓'),
    ('i', '⠊'),
    ('j', '⠚'),
    // ── k–t: second decade (first decade + dot 3) ────────────────────────────
    ('k', '⠅'),
    ('l', '⠇'),
    ('m', '⠍'),
    ('n', '⠝'),
    ('o', '⠕'),
    ('p', '⠏'),
    ('q', '⠟'),
    ('r', '⠗'),
    ('s', '⠎'),
    ('t', '⠞'),
    // ── u–z (third decade, dots 3 + 6) and w ─────────────────────────────────
    ('u', '⠥'),
    ('v', '⠧'),
    ('w', '⠺'),
    ('x', '⠭'),
    ('y', '⠽'),
    ('z', '⠵'),
    // ── Spanish-specific letters ─────────────────────────────────────────────
    ('ñ', '⠻'),
    ('á', '⠷'),
    ('é', '⠮'),
    ('í', '⠌'),
    ('ó', '⠬'),
    ('ú', '⠾'),
    ('ü', '⠳'),
    // ── Blank cell ───────────────────────────────────────────────────────────
    (' ', BLANK_CELL),
];

/// Digits.  They reuse the a–j shapes and depend on [`NUMBER_MARKER`].
pub const DIGITS: &[(char, char)] = &[
    ('1', '⠁'),
    ('2', '⠃'),
    ('3', '⠉'),
    ('4', '⠙'),
    ('5', '⠑'),
    ('6', '⠋'),
    ('7', '⠛'),
    ('8', '⠓'),
    ('9', '⠊'),
    ('0', '⠚'),
];

/// Punctuation and arithmetic signs, canonical character first for shared cells.
pub const PUNCTUATION: &[(char, char)] = &[
    ('.', '⠄'),
    (',', '⠂'),
    (';', '⠆'),
    (':', '⠒'),
    ('?', '⠢'),
    ('¿', '⠢'),
    ('!', '⠖'),
    ('¡', '⠖'),
    ('-', '⠤'),
    ('_', '⠤'),
    ('(', '⠣'),
    (')', '⠜'),
    ('"', '⠶'),
    ('+', '⠖'),
    ('=', '⠶'),
    ('÷', '⠦'),
    ('/', '⠦'),
    ('*', '⠔'),
    // Multiplication sign.  Takes precedence over the letter when encoding.
    ('x', '⠲'),
];
