//! Braille cells → Spanish text.
//!
//! Two flags drive the scan:
//!
//! - `pending_capital`, set by [`CAPITAL_MARKER`], upper-cases the next letter
//!   only.
//! - `number_mode`, set by [`NUMBER_MARKER`], reads a–j shapes as digits until
//!   a blank cell, a newline, or a cell that is not a digit.
//!
//! A cell that leaves number mode is not consumed by it; it is decoded again
//! as punctuation or a letter.  Cells with no meaning are dropped.

use crate::cellmap::{CAPITAL_MARKER, NUMBER_MARKER};

use super::{output_buffer, TranscodeError, Transcoder};

/// Each cell decodes to at most one character of at most its own width.
const DECODE_EXPANSION: usize = 1;

// ── Braille to text ───────────────────────────────────────────────────────────

impl Transcoder<'_> {
    /// Decodes Braille cells into Spanish text.
    ///
    /// # Errors
    ///
    /// Returns [`TranscodeError`] if the output buffer cannot be allocated.
    pub fn decode(&self, braille: &str) -> Result<String, TranscodeError> {
        let map = self.map();
        let mut out = output_buffer(braille.len(), DECODE_EXPANSION)?;
        let mut pending_capital = false;
        let mut number_mode = false;

        for cell in braille.chars() {
            if cell == '\n' {
                out.push('\n');
                pending_capital = false;
                number_mode = false;
                continue;
            }
            if cell == CAPITAL_MARKER {
                pending_capital = true;
                continue;
            }
            if cell == NUMBER_MARKER {
                number_mode = true;
                continue;
            }
            if map.letter_for_cell(cell) == Some(' ') {
                out.push(' ');
                pending_capital = false;
                number_mode = false;
                continue;
            }

            if number_mode {
                if let Some(digit) = map.digit_for_cell(cell) {
                    out.push(digit);
                    continue;
                }
                number_mode = false;
            }

            if let Some(sign) = map.punctuation_for_cell(cell) {
                out.push(sign);
            } else if let Some(letter) = map.letter_for_cell(cell) {
                if pending_capital {
                    out.extend(letter.to_uppercase());
                    pending_capital = false;
                } else {
                    out.push(letter);
                }
            }
        }

        Ok(out)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
