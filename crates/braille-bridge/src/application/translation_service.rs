//! Request handling: [`TranslationRequest`] in, [`TranslationResponse`] out.
//!
//! The service is the only place where translation failures turn into data.
//! Every [`TranslationError`] becomes a `{ success: false, error }` response,
//! so callers (the CLI, the JSON-lines server) never see a Rust error for
//! bad input.
//!
//! ```text
//! request ─▶ parse direction ─▶ check length ─▶ Translation::create ─▶ execute
//!                  │                  │                  │                │
//!                  └──────────────────┴──── failure ─────┴────────────────┘
//! ```

use std::sync::Arc;

use braille_core::{CharacterMap, Transcoder, Translation, TranslationDirection, TranslationError};
use tracing::{debug, warn};

use crate::domain::{BridgeConfig, TranslationRequest, TranslationResponse};

/// Answers translation requests against one [`CharacterMap`].
///
/// Cheap to clone; clones share the map.
#[derive(Debug, Clone)]
pub struct TranslationService {
    config: BridgeConfig,
    map: Arc<CharacterMap>,
}

impl TranslationService {
    /// Creates a service with a freshly built map.
    pub fn new(config: BridgeConfig) -> Self {
        Self::with_map(config, Arc::new(CharacterMap::new()))
    }

    /// Creates a service reading from `map`.
    pub fn with_map(config: BridgeConfig, map: Arc<CharacterMap>) -> Self {
        Self { config, map }
    }

    /// The configuration this service enforces.
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Runs one request to completion and describes the outcome.
    pub fn process(&self, request: &TranslationRequest) -> TranslationResponse {
        self.run(request).unwrap_or_else(|e| {
            warn!(error = %e, "request rejected");
            TranslationResponse::failure(e.to_string())
        })
    }

    fn run(&self, request: &TranslationRequest) -> Result<TranslationResponse, TranslationError> {
        let direction = TranslationDirection::parse_token(request.direction.as_deref())?;

        if let (Some(limit), Some(text)) = (self.config.input_limit(), request.text.as_deref()) {
            let chars = text.chars().count();
            if chars > limit {
                return Err(TranslationError::InvalidArgument(format!(
                    "text has {chars} characters; the limit is {limit}"
                )));
            }
        }

        let mut translation = Translation::create(request.text.as_deref(), Some(direction))?;
        let translated = translation.execute(&Transcoder::new(&self.map))?.to_owned();
        debug!(
            direction = %direction,
            input_chars = translation.original_text().chars().count(),
            "request translated"
        );
        Ok(TranslationResponse::success(
            translation.original_text(),
            translated,
            direction,
        ))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
