//! Mirrored Braille for writing with a slate and stylus.
//!
//! Dots are punched from the back of the sheet, so every line is written
//! right to left and each cell is reflected left to right.  Lines stay in
//! reading order.
//!
//! ```text
//!  hola   ⠓⠕⠇⠁  ──mirror cells──▶ ⠚⠪⠸⠈ ──reverse line──▶ ⠈⠸⠪⠚
//! ```

use super::{TranscodeError, Transcoder};

// ── Mirroring ─────────────────────────────────────────────────────────────────

impl Transcoder<'_> {
    /// Encodes `text` as Braille and mirrors the result.
    ///
    /// # Errors
    ///
    /// Returns [`TranscodeError`] if an output buffer cannot be allocated.
    pub fn encode_mirrored(&self, text: &str) -> Result<String, TranscodeError> {
        let braille = self.encode(text)?;
        Ok(self.mirror(&braille))
    }

    /// Reflects every cell and reverses every line of `braille`.
    ///
    /// Characters outside the Braille block are kept as they are, though they
    /// still move with the line reversal.
    pub fn mirror(&self, braille: &str) -> String {
        let map = self.map();
        let mut out = String::with_capacity(braille.len());

        for (i, line) in braille.split('\n').enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(
                line.chars()
                    .rev()
                    .map(|c| map.mirror_cell(c).unwrap_or(c)),
            );
        }
        out
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use crate::cellmap::{Cell, CharacterMap};
    use crate::transcoder::Transcoder;

    fn transcoder() -> Transcoder<'static> {
        Transcoder::new(CharacterMap::shared())
    }

    #[test]
    fn test_single_letter() {
        assert_eq!(transcoder().encode_mirrored("a").unwrap(), "⠈");
    }

    #[test]
    fn test_cells_are_reflected_and_line_is_reversed() {
        // Arrange
        let t = transcoder();

        // Act
        let mirrored = t.encode_mirrored("hola").unwrap();

        // Assert: ⠓⠕⠇⠁ reflected is ⠚⠪⠸⠈, read backwards.
        assert_eq!(mirrored, "⠈⠸⠪⠚");
    }

    #[test]
    fn test_markers_follow_their_cells() {
        // The capital sign ends up after the letter it modifies.
        assert_eq!(transcoder().encode_mirrored("Ab").unwrap(), "⠘⠈⠅");
    }

    #[test]
    fn test_line_order_is_preserved() {
        let t = transcoder();
        let mirrored = t.encode_mirrored("ab\nc").unwrap();
        assert_eq!(mirrored, "⠘⠈\n⠉");
    }

    #[test]
    fn test_empty_lines_survive() {
        assert_eq!(transcoder().mirror("⠁\n\n⠃"), "⠈\n\n⠘");
    }

    #[test]
    fn test_non_braille_characters_are_not_reflected() {
        assert_eq!(transcoder().mirror("?⠁"), "⠈?");
    }

    #[test]
    fn test_mirroring_twice_restores_the_input() {
        let t = transcoder();
        let braille = t.encode("Hola 123,\nmundo").unwrap();
        assert_eq!(t.mirror(&t.mirror(&braille)), braille);
    }

    #[test]
    fn test_mirror_matches_cell_reflection() {
        let t = transcoder();
        for dots in [0x01u8, 0x07, 0x2A, 0x3F, 0x41, 0xC0] {
            let cell = Cell::from_dots(dots);
            let expected = cell.mirrored().as_char().to_string();
            assert_eq!(t.mirror(&cell.as_char().to_string()), expected);
        }
    }
}
