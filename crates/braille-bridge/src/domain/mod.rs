//! Domain layer for braille-bridge.
//!
//! Plain data types with no I/O: the request/response messages and the
//! configuration struct.
//!
//! # What does NOT belong here?
//!
//! - Any `tokio` types
//! - File I/O or environment variable reading
//! - The translation itself (that is the application layer, backed by
//!   `braille-core`)

pub mod config;
pub mod messages;

pub use config::BridgeConfig;
pub use messages::{TranslationRequest, TranslationResponse};
