//! Stateful single-pass conversion between Spanish text and Braille cells.
//!
//! [`Transcoder::transcode`] is the pipeline used by
//! [`Translation::execute`](crate::domain::translation::Translation::execute):
//!
//! ```text
//! input ─▶ normalize ─▶ validate ─▶ encode | decode | encode_mirrored ─▶ output
//! ```
//!
//! - **normalize**: trim both ends, collapse runs of space/tab/CR/FF into one
//!   space.  Newlines are kept; they are hard segment breaks.
//! - **validate**: reject the first character outside the source alphabet.
//!   Newlines are always accepted.
//! - the algorithm: a left-to-right scan carrying a little mode state
//!   (see [`encode`], [`decode`] and [`mirror`]).
//!
//! The transcoder borrows a [`CharacterMap`] and holds nothing else, so it is
//! `Copy` and may be shared freely between threads.

pub mod decode;
pub mod encode;
pub mod mirror;

use std::collections::TryReserveError;

use thiserror::Error;

use crate::cellmap::CharacterMap;
use crate::domain::translation::{TranslationDirection, TranslationError};

/// Emitted in place of a character that has no cell.  Unreachable after validation.
pub const PLACEHOLDER: char = '?';

// ── Errors ────────────────────────────────────────────────────────────────────

/// Failures inside a scan, as opposed to bad input.
#[derive(Debug, Error)]
pub enum TranscodeError {
    /// The worst-case output size does not fit in `usize`.
    #[error("output for {input_len} input bytes exceeds addressable memory")]
    OutputTooLarge { input_len: usize },

    /// The output buffer could not be allocated.
    #[error("could not allocate output buffer: {0}")]
    Allocation(#[from] TryReserveError),
}

impl From<TranscodeError> for TranslationError {
    fn from(e: TranscodeError) -> Self {
        TranslationError::Conversion(e.to_string())
    }
}

// ── Transcoder ────────────────────────────────────────────────────────────────

/// Runs the conversion algorithms against an injected [`CharacterMap`].
#[derive(Debug, Clone, Copy)]
pub struct Transcoder<'a> {
    map: &'a CharacterMap,
}

impl<'a> Transcoder<'a> {
    /// Creates a transcoder reading from `map`.
    pub fn new(map: &'a CharacterMap) -> Self {
        Self { map }
    }

    /// The map this transcoder reads from.
    pub fn map(&self) -> &'a CharacterMap {
        self.map
    }

    /// Normalises, validates and converts `text` in the given direction.
    ///
    /// # Errors
    ///
    /// [`TranslationError::Validation`] for a character outside the source
    /// alphabet, [`TranslationError::Conversion`] if the scan fails.
    pub fn transcode(
        &self,
        text: &str,
        direction: TranslationDirection,
    ) -> Result<String, TranslationError> {
        let normalized = normalize(text);
        self.validate(&normalized, direction)?;

        let output = match direction {
            TranslationDirection::ToBraille => self.encode(&normalized)?,
            TranslationDirection::ToText => self.decode(&normalized)?,
            TranslationDirection::ToBrailleMirrored => self.encode_mirrored(&normalized)?,
        };
        Ok(output)
    }

    /// Checks every character against the source alphabet of `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::Validation`] naming the first offending character.
    pub fn validate(&self, text: &str, direction: TranslationDirection) -> Result<(), TranslationError> {
        let spanish = direction.reads_spanish();
        let accepts = |c: char| {
            if spanish {
                self.map.is_supported_spanish_character(c)
            } else {
                self.map.is_braille_cell(c)
            }
        };
        let expected = if spanish {
            "a Spanish letter, digit or punctuation sign"
        } else {
            "a Braille cell (U+2800..U+28FF)"
        };

        match text.chars().find(|&c| c != '\n' && !accepts(c)) {
            Some(character) => Err(TranslationError::Validation { character, expected }),
            None => Ok(()),
        }
    }
}

// ── Text preparation ──────────────────────────────────────────────────────────

/// Trims `text` and collapses horizontal whitespace runs to one space.
///
/// Space, tab, carriage return and form feed count as horizontal whitespace.
/// `\n` is never collapsed.
pub fn normalize(text: &str) -> String {
    let trimmed = text.trim();
    let mut out = String::with_capacity(trimmed.len());
    let mut in_run = false;

    for c in trimmed.chars() {
        if is_horizontal_whitespace(c) {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

fn is_horizontal_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\u{000C}')
}

// ── Buffers ───────────────────────────────────────────────────────────────────

/// Allocates an output buffer for `input_len` bytes of input growing by at
/// most `expansion` bytes per input byte.
fn output_buffer(input_len: usize, expansion: usize) -> Result<String, TranscodeError> {
    let needed = input_len
        .checked_mul(expansion)
        .ok_or(TranscodeError::OutputTooLarge { input_len })?;
    let mut out = String::new();
    out.try_reserve(needed)?;
    Ok(out)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
