//! Translation domain entity.
//!
//! A [`Translation`] is one conversion attempt: the original text, the
//! direction, and, once executed, either the translated text or a failure.
//!
//! # Lifecycle
//!
//! ```text
//!             execute() ok
//!  Pending ─────────────────▶ Completed
//!     │
//!     │ execute() err
//!     ▼
//!   Failed
//! ```
//!
//! Both `Completed` and `Failed` are terminal.  A translation is created only
//! through [`Translation::new`] (or [`Translation::create`]), which validates
//! the input first, so an instance with blank text cannot exist.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::cellmap::CharacterMap;
use crate::transcoder::Transcoder;

// ── Errors ────────────────────────────────────────────────────────────────────

/// Errors produced while creating or executing a [`Translation`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TranslationError {
    /// Missing or blank text, or a missing/unknown direction token.
    #[error("{0}")]
    InvalidArgument(String),

    /// The text contains a character outside the source alphabet.
    #[error("unsupported character '{character}': expected {expected}")]
    Validation {
        /// The first offending character.
        character: char,
        /// Description of the alphabet the direction accepts.
        expected: &'static str,
    },

    /// The operation is not allowed in the translation's current status.
    #[error("{0}")]
    IllegalState(String),

    /// The scan itself failed.  Carries the underlying cause's message.
    #[error("translation failed: {0}")]
    Conversion(String),
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// Which algorithm a translation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TranslationDirection {
    /// Spanish text → Braille cells.
    #[serde(alias = "ESPANOL_A_BRAILLE")]
    ToBraille,
    /// Braille cells → Spanish text.
    #[serde(alias = "BRAILLE_A_ESPANOL")]
    ToText,
    /// Spanish text → Braille cells mirrored for slate-and-stylus writing.
    #[serde(alias = "ESPANOL_A_BRAILLE_ESPEJO")]
    ToBrailleMirrored,
}

impl TranslationDirection {
    /// All directions, in declaration order.
    pub const ALL: [TranslationDirection; 3] = [
        TranslationDirection::ToBraille,
        TranslationDirection::ToText,
        TranslationDirection::ToBrailleMirrored,
    ];

    /// Returns the wire token (`"TO_BRAILLE"`, `"TO_TEXT"`, `"TO_BRAILLE_MIRRORED"`).
    pub fn as_token(self) -> &'static str {
        match self {
            TranslationDirection::ToBraille => "TO_BRAILLE",
            TranslationDirection::ToText => "TO_TEXT",
            TranslationDirection::ToBrailleMirrored => "TO_BRAILLE_MIRRORED",
        }
    }

    /// Returns `true` for the directions whose input is Spanish text.
    pub fn reads_spanish(self) -> bool {
        !matches!(self, TranslationDirection::ToText)
    }

    /// Parses an optional direction token as received from a request.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::InvalidArgument`] when the token is absent,
    /// blank, or not a known direction.
    pub fn parse_token(token: Option<&str>) -> Result<Self, TranslationError> {
        match token.map(str::trim) {
            None | Some("") => Err(TranslationError::InvalidArgument(
                "direction is required".to_string(),
            )),
            Some(t) => t.parse(),
        }
    }
}

impl fmt::Display for TranslationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl FromStr for TranslationDirection {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TO_BRAILLE" | "ESPANOL_A_BRAILLE" => Ok(TranslationDirection::ToBraille),
            "TO_TEXT" | "BRAILLE_A_ESPANOL" => Ok(TranslationDirection::ToText),
            "TO_BRAILLE_MIRRORED" | "ESPANOL_A_BRAILLE_ESPEJO" => {
                Ok(TranslationDirection::ToBrailleMirrored)
            }
            other => Err(TranslationError::InvalidArgument(format!(
                "invalid direction '{other}': use TO_BRAILLE, TO_TEXT or TO_BRAILLE_MIRRORED"
            ))),
        }
    }
}

// ── Lifecycle ─────────────────────────────────────────────────────────────────

/// Where a [`Translation`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationStatus {
    /// Created, not yet executed.
    Pending,
    /// Executed successfully; the translated text is available.
    Completed,
    /// Execution failed.
    Failed,
}

/// One conversion attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    original_text: String,
    direction: TranslationDirection,
    translated_text: Option<String>,
    status: TranslationStatus,
}

impl Translation {
    /// Creates a pending translation after validating the text.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::InvalidArgument`] if `text` is empty or
    /// whitespace-only.
    pub fn new(text: impl Into<String>, direction: TranslationDirection) -> Result<Self, TranslationError> {
        let original_text = text.into();
        if original_text.trim().is_empty() {
            return Err(TranslationError::InvalidArgument(
                "text must not be empty".to_string(),
            ));
        }
        Ok(Self {
            original_text,
            direction,
            translated_text: None,
            status: TranslationStatus::Pending,
        })
    }

    /// Like [`Translation::new`], for callers whose fields may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::InvalidArgument`] if the text is absent or
    /// blank, or the direction is absent.
    pub fn create(
        text: Option<&str>,
        direction: Option<TranslationDirection>,
    ) -> Result<Self, TranslationError> {
        let text = text.ok_or_else(|| {
            TranslationError::InvalidArgument("text must not be empty".to_string())
        })?;
        let direction = direction.ok_or_else(|| {
            TranslationError::InvalidArgument("direction is required".to_string())
        })?;
        Self::new(text, direction)
    }

    /// Runs the translation once.
    ///
    /// On success the status becomes [`TranslationStatus::Completed`] and the
    /// translated text is returned.  On failure the status becomes
    /// [`TranslationStatus::Failed`] and the error is returned.
    ///
    /// # Errors
    ///
    /// - [`TranslationError::IllegalState`] if already completed or failed.
    /// - [`TranslationError::Validation`] if the text has a character outside
    ///   the direction's source alphabet.
    /// - [`TranslationError::Conversion`] if the scan fails.
    pub fn execute(&mut self, transcoder: &Transcoder<'_>) -> Result<&str, TranslationError> {
        match self.status {
            TranslationStatus::Pending => {}
            TranslationStatus::Completed => {
                return Err(TranslationError::IllegalState(
                    "translation has already been completed".to_string(),
                ))
            }
            TranslationStatus::Failed => {
                return Err(TranslationError::IllegalState(
                    "translation has already failed".to_string(),
                ))
            }
        }

        match transcoder.transcode(&self.original_text, self.direction) {
            Ok(output) => {
                debug!(
                    direction = %self.direction,
                    input_chars = self.original_text.chars().count(),
                    output_chars = output.chars().count(),
                    "translation completed"
                );
                self.status = TranslationStatus::Completed;
                Ok(self.translated_text.insert(output).as_str())
            }
            Err(e) => {
                debug!(direction = %self.direction, error = %e, "translation failed");
                self.status = TranslationStatus::Failed;
                Err(e)
            }
        }
    }

    /// The text as supplied at creation, before trimming or normalisation.
    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    /// The direction chosen at creation.
    pub fn direction(&self) -> TranslationDirection {
        self.direction
    }

    /// The current lifecycle status.
    pub fn status(&self) -> TranslationStatus {
        self.status
    }

    /// The translated text.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::IllegalState`] unless the translation has completed.
    pub fn translated_text(&self) -> Result<&str, TranslationError> {
        match (&self.status, &self.translated_text) {
            (TranslationStatus::Completed, Some(text)) => Ok(text),
            _ => Err(TranslationError::IllegalState(
                "translation has not been completed".to_string(),
            )),
        }
    }

    /// Returns `true` if the translation completed successfully.
    pub fn is_completed(&self) -> bool {
        self.status == TranslationStatus::Completed
    }

    /// Returns `true` if execution failed.
    pub fn has_failed(&self) -> bool {
        self.status == TranslationStatus::Failed
    }
}

// ── Convenience ───────────────────────────────────────────────────────────────

/// Creates and executes a translation against the shared [`CharacterMap`].
///
/// # Errors
///
/// Any [`TranslationError`] from creation or execution.
///
/// # Example
///
/// ```rust
/// use braille_core::{translate, TranslationDirection};
///
/// assert_eq!(translate("hola", TranslationDirection::ToBraille).unwrap(), "⠓⠕⠇⠁");
/// assert_eq!(translate("⠓⠕⠇⠁", TranslationDirection::ToText).unwrap(), "hola");
/// ```
pub fn translate(text: &str, direction: TranslationDirection) -> Result<String, TranslationError> {
    let transcoder = Transcoder::new(CharacterMap::shared());
    let mut translation = Translation::new(text, direction)?;
    translation.execute(&transcoder).map(str::to_owned)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn transcoder() -> Transcoder<'static> {
        Transcoder::new(CharacterMap::shared())
    }

    #[test]
    fn test_new_translation_is_pending() {
        // Arrange / Act
        let t = Translation::new("hola", TranslationDirection::ToBraille).unwrap();

        // Assert
        assert_eq!(t.original_text(), "hola");
        assert_eq!(t.direction(), TranslationDirection::ToBraille);
        assert_eq!(t.status(), TranslationStatus::Pending);
        assert!(!t.is_completed());
        assert!(!t.has_failed());
    }

    #[test]
    fn test_blank_text_is_rejected() {
        for text in ["", "   ", "\t\n "] {
            let err = Translation::new(text, TranslationDirection::ToBraille).unwrap_err();
            assert_eq!(
                err,
                TranslationError::InvalidArgument("text must not be empty".to_string()),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_create_rejects_absent_fields() {
        let no_text = Translation::create(None, Some(TranslationDirection::ToText)).unwrap_err();
        assert_eq!(no_text.to_string(), "text must not be empty");

        let no_direction = Translation::create(Some("hola"), None).unwrap_err();
        assert_eq!(no_direction.to_string(), "direction is required");
    }

    #[test]
    fn test_execute_completes_and_exposes_result() {
        // Arrange
        let mut t = Translation::new("hola", TranslationDirection::ToBraille).unwrap();

        // Act
        let out = t.execute(&transcoder()).unwrap().to_string();

        // Assert
        assert_eq!(out, "⠓⠕⠇⠁");
        assert!(t.is_completed());
        assert_eq!(t.translated_text().unwrap(), "⠓⠕⠇⠁");
    }

    #[test]
    fn test_translated_text_before_execution_is_illegal_state() {
        let t = Translation::new("hola", TranslationDirection::ToBraille).unwrap();
        assert!(matches!(
            t.translated_text(),
            Err(TranslationError::IllegalState(_))
        ));
    }

    #[test]
    fn test_second_execution_is_rejected() {
        // Arrange
        let mut t = Translation::new("hola", TranslationDirection::ToBraille).unwrap();
        t.execute(&transcoder()).unwrap();

        // Act
        let second = t.execute(&transcoder());

        // Assert
        assert_eq!(
            second.unwrap_err(),
            TranslationError::IllegalState("translation has already been completed".to_string())
        );
        assert!(t.is_completed(), "a rejected re-run must not change the status");
    }

    #[test]
    fn test_validation_failure_marks_translation_failed() {
        // Arrange
        let mut t = Translation::new("precio 5€", TranslationDirection::ToBraille).unwrap();

        // Act
        let err = t.execute(&transcoder()).unwrap_err();

        // Assert
        assert!(matches!(err, TranslationError::Validation { character: '€', .. }));
        assert!(err.to_string().contains('€'));
        assert!(t.has_failed());
        assert!(t.translated_text().is_err());
    }

    #[test]
    fn test_failed_translation_cannot_be_retried() {
        let mut t = Translation::new("abc", TranslationDirection::ToText).unwrap();
        assert!(t.execute(&transcoder()).is_err());

        let retry = t.execute(&transcoder());
        assert_eq!(
            retry.unwrap_err(),
            TranslationError::IllegalState("translation has already failed".to_string())
        );
    }

    #[test]
    fn test_direction_tokens_round_trip_through_display_and_parse() {
        for direction in TranslationDirection::ALL {
            let parsed: TranslationDirection = direction.to_string().parse().unwrap();
            assert_eq!(parsed, direction);
        }
    }

    #[test]
    fn test_legacy_direction_tokens_are_accepted() {
        assert_eq!(
            "ESPANOL_A_BRAILLE".parse::<TranslationDirection>().unwrap(),
            TranslationDirection::ToBraille
        );
        assert_eq!(
            "BRAILLE_A_ESPANOL".parse::<TranslationDirection>().unwrap(),
            TranslationDirection::ToText
        );
        assert_eq!(
            "ESPANOL_A_BRAILLE_ESPEJO".parse::<TranslationDirection>().unwrap(),
            TranslationDirection::ToBrailleMirrored
        );
    }

    #[test]
    fn test_parse_token_reports_missing_and_unknown_directions() {
        assert_eq!(
            TranslationDirection::parse_token(None).unwrap_err().to_string(),
            "direction is required"
        );
        assert_eq!(
            TranslationDirection::parse_token(Some("  ")).unwrap_err().to_string(),
            "direction is required"
        );
        let unknown = TranslationDirection::parse_token(Some("SIDEWAYS")).unwrap_err();
        assert!(matches!(unknown, TranslationError::InvalidArgument(_)));
        assert!(unknown.to_string().contains("SIDEWAYS"));
    }

    #[test]
    fn test_direction_serde_uses_screaming_snake_case() {
        let json = serde_json::to_string(&TranslationDirection::ToBrailleMirrored).unwrap();
        assert_eq!(json, "\"TO_BRAILLE_MIRRORED\"");

        let legacy: TranslationDirection = serde_json::from_str("\"BRAILLE_A_ESPANOL\"").unwrap();
        assert_eq!(legacy, TranslationDirection::ToText);
    }

    #[test]
    fn test_translate_helper() {
        assert_eq!(translate("hola mundo", TranslationDirection::ToBraille).unwrap(), "⠓⠕⠇⠁⠀⠍⠥⠝⠙⠕");
        assert!(translate("", TranslationDirection::ToBraille).is_err());
    }
}
