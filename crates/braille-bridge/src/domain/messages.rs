//! JSON request/response messages.
//!
//! These are the bridge's "language": one [`TranslationRequest`] in, one
//! [`TranslationResponse`] out.  Field names are camelCase on the wire.
//!
//! ```json
//! {"text":"hola","direction":"TO_BRAILLE"}
//! {"success":true,"originalText":"hola","translatedText":"⠓⠕⠇⠁","direction":"TO_BRAILLE"}
//! {"success":false,"error":"direction is required"}
//! ```
//!
//! # Why is every request field optional? (for beginners)
//!
//! Requests come from outside the process.  If `text` were a plain `String`,
//! a request without it would fail to deserialise and the caller would get a
//! generic JSON error.  Keeping the fields optional lets the service answer
//! with the precise reason ("text must not be empty") instead.

use braille_core::TranslationDirection;
use serde::{Deserialize, Serialize};

/// One translation request.
///
/// `direction` stays a raw string so that an unknown token is reported by the
/// service as a translation error rather than a JSON error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    /// The text to convert.  Spanish for `TO_BRAILLE*`, Braille for `TO_TEXT`.
    #[serde(default)]
    pub text: Option<String>,

    /// Direction token, e.g. `"TO_BRAILLE"`.
    #[serde(default)]
    pub direction: Option<String>,
}

impl TranslationRequest {
    /// Builds a request with both fields present.
    pub fn new(text: impl Into<String>, direction: TranslationDirection) -> Self {
        Self {
            text: Some(text.into()),
            direction: Some(direction.as_token().to_string()),
        }
    }
}

/// The outcome of one request.
///
/// Exactly one of two shapes is produced: a success carrying the original
/// text, the translated text and the direction, or a failure carrying only an
/// error message.  Absent fields are omitted from the JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResponse {
    /// `true` when the translation completed.
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translated_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<TranslationDirection>,

    /// Human-readable failure reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TranslationResponse {
    /// Builds a success response.
    pub fn success(
        original_text: impl Into<String>,
        translated_text: impl Into<String>,
        direction: TranslationDirection,
    ) -> Self {
        Self {
            success: true,
            original_text: Some(original_text.into()),
            translated_text: Some(translated_text.into()),
            direction: Some(direction),
            error: None,
        }
    }

    /// Builds a failure response.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            original_text: None,
            translated_text: None,
            direction: None,
            error: Some(error.into()),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
