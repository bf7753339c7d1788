//! Tracker configuration.
//!
//! The tile set and hand size are configured at startup. Everything else
//! (pool counts, hand contents) derives from these two numbers.
//!
//! Configuration can be built in code with the builder methods or loaded
//! from a JSON document; missing fields take their defaults.
//!
//! ```
//! use tile_tracker::core::TrackerConfig;
//!
//! let config = TrackerConfig::from_json_str(r#"{ "start_count": 4 }"#).unwrap();
//! assert_eq!(config.start_count, 4);
//! assert_eq!(config.hand_size, 7);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tiles per letter in a fresh pool.
pub const DEFAULT_START_COUNT: u32 = 10;

/// Slots in each hand before the game starts.
pub const DEFAULT_HAND_SIZE: usize = 7;

/// Complete tracker configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackerConfig {
    /// Count every letter starts with (and returns to on reset).
    pub start_count: u32,

    /// Number of slots in each starting hand.
    pub hand_size: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            start_count: DEFAULT_START_COUNT,
            hand_size: DEFAULT_HAND_SIZE,
        }
    }
}

impl TrackerConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-letter start count.
    #[must_use]
    pub fn with_start_count(mut self, count: u32) -> Self {
        self.start_count = count;
        self
    }

    /// Set the starting hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Check that the configuration describes a playable table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hand_size == 0 {
            return Err(ConfigError::ZeroHandSize);
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}
