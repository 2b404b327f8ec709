//! Spanish text → Braille cells.
//!
//! Rules, applied to each character left to right:
//!
//! | Input                 | Output                                          |
//! |-----------------------|-------------------------------------------------|
//! | `\n`                  | `\n`; number mode ends                          |
//! | digit                 | number sign if not in number mode, then digit   |
//! | `,` in number mode    | comma cell; number mode continues (`1,000`)     |
//! | space                 | blank cell; number mode ends                    |
//! | uppercase letter      | capital sign, then the lowercase letter's cell  |
//! | anything else         | punctuation cell, else letter cell, else `?`    |
//!
//! The capital sign covers a single letter, so `DOME` gets four of them.

use crate::cellmap::{CAPITAL_MARKER, NUMBER_MARKER};

use super::{output_buffer, TranscodeError, Transcoder, PLACEHOLDER};

/// Worst case: one ASCII byte becomes two three-byte cells (sign + cell).
const ENCODE_EXPANSION: usize = 6;

// ── Text to Braille ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Normal,
    Number,
}

impl Transcoder<'_> {
    /// Encodes normalised Spanish text as Braille cells.
    ///
    /// Characters without a cell become [`PLACEHOLDER`]; run
    /// [`Transcoder::validate`] first to rule that out.
    ///
    /// # Errors
    ///
    /// Returns [`TranscodeError`] if the output buffer cannot be allocated.
    pub fn encode(&self, text: &str) -> Result<String, TranscodeError> {
        let map = self.map();
        let mut out = output_buffer(text.len(), ENCODE_EXPANSION)?;
        let mut mode = Mode::Normal;

        for c in text.chars() {
            if c == '\n' {
                out.push('\n');
                mode = Mode::Normal;
                continue;
            }

            if c.is_ascii_digit() {
                if mode == Mode::Normal {
                    out.push(NUMBER_MARKER);
                    mode = Mode::Number;
                }
                out.push(map.cell_for_digit(c).unwrap_or(PLACEHOLDER));
                continue;
            }

            if mode == Mode::Number {
                if c == ',' {
                    out.push(map.cell_for_punctuation(c).unwrap_or(PLACEHOLDER));
                    continue;
                }
                mode = Mode::Normal;
            }

            if c == ' ' {
                out.push(map.cell_for_letter(c).unwrap_or(PLACEHOLDER));
                continue;
            }

            if c.is_alphabetic() && c.is_uppercase() {
                out.push(CAPITAL_MARKER);
                out.push(map.cell_for_letter(c).unwrap_or(PLACEHOLDER));
                continue;
            }

            let cell = map
                .cell_for_punctuation(c)
                .or_else(|| map.cell_for_letter(c))
                .unwrap_or(PLACEHOLDER);
            out.push(cell);
        }

        Ok(out)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
