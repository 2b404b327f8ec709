//! Infrastructure layer for braille-bridge.
//!
//! Everything that touches the outside world: reading the optional TOML
//! config file and running the JSON-lines loop over stdin/stdout.
//!
//! # What does NOT belong here?
//!
//! - Request validation and response shaping (that is the application layer)
//! - Message type definitions (that is the domain layer)
//! - Argument parsing (that is done in `main.rs`)

pub mod config_store;
pub mod line_server;

pub use config_store::{load_config, ConfigError};
pub use line_server::{run_stdio, serve_channel, serve_lines, spawn_line_reader, ServeStats};
