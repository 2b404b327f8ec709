//! Braille cells as dot patterns inside the Unicode Braille Patterns block.
//!
//! Unicode reserves 256 code points, U+2800 through U+28FF, for every possible
//! combination of the eight Braille dots.  The offset from U+2800 is a bit
//! mask: dot *n* is bit *n − 1*.
//!
//! # Dot numbering (for beginners)
//!
//! A six-dot cell is two columns of three dots.  Eight-dot Braille adds a
//! fourth row below.  Dots are numbered down the left column first:
//!
//! ```text
//!  1 4
//!  2 5
//!  3 6
//!  7 8
//! ```
//!
//! | Cell | Dots    | Offset | Meaning in Spanish Braille |
//! |------|---------|--------|----------------------------|
//! | ⠁    | 1       | 0x01   | letter a / digit 1         |
//! | ⠨    | 4 6     | 0x28   | capital sign               |
//! | ⠼    | 3 4 5 6 | 0x3C   | number sign                |
//! | ⠀    | none    | 0x00   | blank (space)              |
//!
//! # Mirroring
//!
//! With a slate and stylus the writer punches dots from the back of the
//! paper, so every cell must be written as its left-to-right reflection:
//! dot 1 swaps with dot 4, 2 with 5, 3 with 6, and 7 with 8.

// ── Block range ───────────────────────────────────────────────────────────────

/// First code point of the Unicode Braille Patterns block (U+2800).
pub const BRAILLE_BASE: u32 = 0x2800;

/// Last code point of the Unicode Braille Patterns block (U+28FF).
pub const BRAILLE_LAST: u32 = 0x28FF;

/// Bits for dots 1, 2 and 3 (left column, six-dot rows).
const LEFT_COLUMN: u8 = 0b0000_0111;
/// Bits for dots 4, 5 and 6 (right column, six-dot rows).
const RIGHT_COLUMN: u8 = 0b0011_1000;
/// Bit for dot 7 (bottom-left, eight-dot extension).
const DOT_7: u8 = 0b0100_0000;
/// Bit for dot 8 (bottom-right, eight-dot extension).
const DOT_8: u8 = 0b1000_0000;

// ── Cell ──────────────────────────────────────────────────────────────────────

/// One Braille cell, stored as its eight-bit dot mask.
///
/// Every `u8` is a valid pattern, so a `Cell` can always be turned back into
/// a `char` in the Braille block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(u8);

impl Cell {
    /// The empty cell (U+2800), used for the space character.
    pub const BLANK: Cell = Cell(0);

    /// Builds a cell from a raw dot mask (bit *n − 1* set means dot *n* raised).
    pub const fn from_dots(dots: u8) -> Self {
        Cell(dots)
    }

    /// Returns the cell for `c`, or `None` if `c` is outside U+2800..=U+28FF.
    pub fn from_char(c: char) -> Option<Self> {
        let code = c as u32;
        if (BRAILLE_BASE..=BRAILLE_LAST).contains(&code) {
            Some(Cell((code - BRAILLE_BASE) as u8))
        } else {
            None
        }
    }

    /// Returns the raw dot mask.
    pub const fn dots(self) -> u8 {
        self.0
    }

    /// Returns `true` if dot `n` (1..=8) is raised.  Out-of-range dots are never raised.
    pub fn has_dot(self, n: u8) -> bool {
        (1..=8).contains(&n) && self.0 & (1 << (n - 1)) != 0
    }

    /// Returns the Unicode code point for this cell.
    pub fn as_char(self) -> char {
        // Every offset 0x00..=0xFF lands inside the Braille block, which holds
        // only valid scalar values.
        char::from_u32(BRAILLE_BASE + u32::from(self.0)).unwrap_or('\u{2800}')
    }

    /// Returns the left-to-right reflection of this cell.
    ///
    /// Swaps dots 1↔4, 2↔5, 3↔6 and 7↔8.  Applying it twice yields the
    /// original cell.
    pub const fn mirrored(self) -> Self {
        let d = self.0;
        let columns = ((d & LEFT_COLUMN) << 3) | ((d & RIGHT_COLUMN) >> 3);
        let extension = ((d & DOT_7) << 1) | ((d & DOT_8) >> 1);
        Cell(columns | extension)
    }
}

impl From<Cell> for char {
    fn from(cell: Cell) -> char {
        cell.as_char()
    }
}

/// Returns `true` iff `c` lies in the Unicode Braille Patterns block.
pub fn is_braille_cell(c: char) -> bool {
    Cell::from_char(c).is_some()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
