//! Loading [`BridgeConfig`] from a TOML file.
//!
//! The file is optional.  No path, or a path that does not exist, gives
//! [`BridgeConfig::default()`]; fields missing from the file take their
//! defaults too (see `#[serde(default)]` on the struct).

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::domain::BridgeConfig;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads the configuration at `path`, or the defaults when there is none.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(path: Option<&Path>) -> Result<BridgeConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(BridgeConfig::default());
    };

    match std::fs::read_to_string(path) {
        Ok(content) => {
            let cfg = parse_config(&content)?;
            debug!(path = %path.display(), "loaded config");
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "config file not found; using defaults");
            Ok(BridgeConfig::default())
        }
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Parses TOML text into a [`BridgeConfig`].
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the TOML is malformed or a field has the
/// wrong type.
pub fn parse_config(content: &str) -> Result<BridgeConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// A path under the system temp dir unique to this process and test.
    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("braille-bridge-{}-{name}.toml", std::process::id()))
    }

    #[test]
    fn test_no_path_gives_defaults() {
        assert_eq!(load_config(None).unwrap(), BridgeConfig::default());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        // Arrange
        let path = temp_path("missing");
        let _ = std::fs::remove_file(&path);

        // Act
        let cfg = load_config(Some(&path)).unwrap();

        // Assert
        assert_eq!(cfg, BridgeConfig::default());
    }

    #[test]
    fn test_file_values_are_loaded() {
        // Arrange
        let path = temp_path("values");
        std::fs::write(&path, "log_level = \"debug\"\nmax_input_chars = 64\n").expect("write");

        // Act
        let result = load_config(Some(&path));
        let _ = std::fs::remove_file(&path);

        // Assert
        let cfg = result.unwrap();
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.max_input_chars, 64);
        assert!(!cfg.pretty);
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let err = parse_config("pretty = \"very\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_directory_path_is_an_io_error() {
        // Reading a directory as a file fails with something other than NotFound.
        let dir = std::env::temp_dir();
        let err = load_config(Some(&dir)).unwrap_err();
        match err {
            ConfigError::Io { path, .. } => assert_eq!(path, dir),
            other => panic!("expected Io, got {other:?}"),
        }
    }
}
