//! braille-bridge library crate.
//!
//! The thin outer layer around `braille-core`: it accepts translation
//! requests from a command line or a JSON-lines stream and answers with the
//! success/failure response contract.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! CLI args / JSON lines on stdin
//!         ↕
//! [braille-bridge]
//!   ├── domain/           Pure types: request/response messages, BridgeConfig
//!   ├── application/      TranslationService: request → response
//!   └── infrastructure/
//!         ├── config_store/ Optional TOML config file
//!         └── line_server/  JSON-lines loop over stdin/stdout (tokio)
//!         ↕
//! [braille-core]  CharacterMap, Transcoder, Translation
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no I/O and no async.
//! - `application` depends on `domain` and `braille-core` only.
//! - `infrastructure` depends on all other layers plus `tokio` and `toml`.

/// Domain layer: request/response messages and configuration (no I/O).
pub mod domain;

/// Application layer: the translation service.
pub mod application;

/// Infrastructure layer: config file loading and the JSON-lines server.
pub mod infrastructure;
