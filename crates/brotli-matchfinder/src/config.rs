//! Match finder configuration.

use brotli_matchfinder_core::{CompressionLevel, Error, Result};
use serde::{Deserialize, Serialize};

use crate::constants::MAX_ALLOWED_DISTANCE;

/// Default maximum backward distance.
pub const DEFAULT_MAX_DISTANCE: usize = 65535;

/// Default shortest match worth emitting.
pub const DEFAULT_MIN_LENGTH: usize = 4;

/// Default number of bytes hashed per position.
pub const DEFAULT_HASH_LEN: usize = 6;

/// Largest supported hash length (one 64-bit load).
pub const MAX_HASH_LEN: usize = 8;

/// Configuration for the [`M4`](crate::M4) match finder.
///
/// Missing fields deserialize to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct M4Config {
    /// Maximum distance (in bytes) to look back for a match.
    pub max_distance: usize,
    /// Length of the shortest match to return.
    pub min_length: usize,
    /// Number of bytes used to calculate the hashes.
    pub hash_len: usize,
}

impl Default for M4Config {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            min_length: DEFAULT_MIN_LENGTH,
            hash_len: DEFAULT_HASH_LEN,
        }
    }
}

impl M4Config {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset for a compression level.
    ///
    /// Faster levels hash longer windows, which skips short candidates,
    /// and keep a smaller history. Stronger levels hash shorter windows and
    /// look further back.
    pub fn from_level(level: CompressionLevel) -> Self {
        let (max_distance, hash_len) = match level.quality() {
            0..=3 => (32 * 1024 - 1, 8),
            4..=7 => (DEFAULT_MAX_DISTANCE, DEFAULT_HASH_LEN),
            8..=10 => (256 * 1024 - 1, 5),
            _ => ((1 << 22) - 16, 4),
        };
        Self {
            max_distance,
            min_length: DEFAULT_MIN_LENGTH,
            hash_len,
        }
    }

    /// Set the maximum backward distance.
    pub fn with_max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Set the minimum emitted match length.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Set the number of bytes hashed per position.
    pub fn with_hash_len(mut self, hash_len: usize) -> Self {
        self.hash_len = hash_len;
        self
    }

    /// Check every parameter against its supported range.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_HASH_LEN).contains(&self.hash_len) {
            return Err(Error::invalid_config("hash_len", self.hash_len, 1, MAX_HASH_LEN));
        }
        if self.min_length == 0 {
            return Err(Error::invalid_config(
                "min_length",
                self.min_length,
                1,
                usize::MAX,
            ));
        }
        if !(1..=MAX_ALLOWED_DISTANCE).contains(&self.max_distance) {
            return Err(Error::invalid_config(
                "max_distance",
                self.max_distance,
                1,
                MAX_ALLOWED_DISTANCE,
            ));
        }
        Ok(())
    }
}
