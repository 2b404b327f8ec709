//! Application layer for braille-bridge.
//!
//! Knows *what* to do with a request: validate it, run the translation, and
//! shape the response.  It never touches stdin, stdout or files.

pub mod translation_service;

pub use translation_service::TranslationService;
