//! # braille-core
//!
//! Conversion between Spanish text and six-dot Braille written as Unicode
//! Braille Patterns (U+2800..U+28FF), plus a mirrored variant for writing with
//! a slate and stylus.
//!
//! The crate is pure computation: no I/O, no global mutable state.  Transport
//! concerns (CLI, JSON lines) live in `braille-bridge`.
//!
//! # Architecture overview (for beginners)
//!
//! - **`cellmap`** – The lookup tables.  A [`CharacterMap`] knows which cell
//!   stands for each letter, digit and punctuation sign, which cell stands for
//!   which character when reading back, and how to reflect a cell.
//!
//! - **`transcoder`** – The algorithms.  A [`Transcoder`] borrows a map and
//!   runs a single left-to-right scan per conversion, carrying a little mode
//!   state (number mode, pending capital).
//!
//! - **`domain`** – The [`Translation`] entity that a caller creates, executes
//!   once, and inspects afterwards, together with the [`TranslationError`]
//!   taxonomy.
//!
//! ```
//! use braille_core::{translate, TranslationDirection};
//!
//! let braille = translate("hola", TranslationDirection::ToBraille).unwrap();
//! assert_eq!(braille, "⠓⠕⠇⠁");
//! ```

pub mod cellmap;
pub mod domain;
pub mod transcoder;

// Re-export the most-used types so callers can write `braille_core::Translation`
// instead of `braille_core::domain::translation::Translation`.
pub use cellmap::{Cell, CharacterMap, CAPITAL_MARKER, NUMBER_MARKER};
pub use domain::translation::{
    translate, Translation, TranslationDirection, TranslationError, TranslationStatus,
};
pub use transcoder::{normalize, TranscodeError, Transcoder};
