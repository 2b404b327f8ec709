//! Bridge configuration types.
//!
//! [`BridgeConfig`] holds every runtime setting.  It comes from an optional
//! TOML file (see [`crate::infrastructure::config_store`]) with CLI overrides
//! applied on top in `main.rs`.
//!
//! ```toml
//! log_level = "debug"
//! pretty = true
//! max_input_chars = 2000
//! ```
//!
//! Every field has a default, so an empty file and a missing file both give
//! [`BridgeConfig::default()`].

use serde::{Deserialize, Serialize};

/// All runtime configuration for the bridge.
///
/// # Example
///
/// ```rust
/// use braille_bridge::domain::BridgeConfig;
///
/// let cfg = BridgeConfig::default();
/// assert_eq!(cfg.max_input_chars, 10_000);
/// assert_eq!(cfg.input_limit(), Some(10_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// `tracing` level used when `RUST_LOG` is not set: `"error"`, `"warn"`,
    /// `"info"`, `"debug"` or `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Pretty-print the JSON written by `translate --json`.
    ///
    /// `serve` always writes one compact object per line.
    #[serde(default)]
    pub pretty: bool,

    /// Longest accepted input, in characters.  `0` disables the limit.
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
}

impl BridgeConfig {
    /// The input limit, or `None` when unlimited.
    pub fn input_limit(&self) -> Option<usize> {
        (self.max_input_chars > 0).then_some(self.max_input_chars)
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_max_input_chars() -> usize {
    10_000
}

impl Default for BridgeConfig {
    /// | Field           | Default   |
    /// |-----------------|-----------|
    /// | log_level       | `"info"`  |
    /// | pretty          | `false`   |
    /// | max_input_chars | `10000`   |
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            pretty: false,
            max_input_chars: default_max_input_chars(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level_is_info() {
        // Arrange / Act
        let cfg = BridgeConfig::default();
        // Assert
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn test_default_is_compact_output() {
        assert!(!BridgeConfig::default().pretty);
    }

    #[test]
    fn test_zero_limit_means_unlimited() {
        let cfg = BridgeConfig {
            max_input_chars: 0,
            ..BridgeConfig::default()
        };
        assert_eq!(cfg.input_limit(), None);
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let cfg: BridgeConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, BridgeConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        // Arrange
        let raw = "pretty = true\n";

        // Act
        let cfg: BridgeConfig = toml::from_str(raw).unwrap();

        // Assert
        assert!(cfg.pretty);
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.max_input_chars, 10_000);
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let cfg = BridgeConfig {
            log_level: "debug".to_string(),
            pretty: true,
            max_input_chars: 42,
        };
        let text = toml::to_string_pretty(&cfg).expect("serialize");
        let restored: BridgeConfig = toml::from_str(&text).expect("deserialize");
        assert_eq!(cfg, restored);
    }
}
