use crate::util::env::{self, ConfigError};

use serde::{Deserialize, Serialize};

/// Construction options of a [`ShortestPathIndex`](crate::ShortestPathIndex).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexOptions {
    /// Routes longer than this are not recorded, and their targets are
    /// treated as unreachable from the source.
    pub threshold: f64,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            threshold: f64::INFINITY,
        }
    }
}

impl IndexOptions {
    pub const THRESHOLD_VAR: &'static str = "FRECHET_INDEX_THRESHOLD";

    /// Reads the options from the environment, loading a `.env` file first
    /// when one is present. Unset variables keep their default.
    pub fn from_env() -> Result<Self, ConfigError> {
        env::load();

        let mut options = Self::default();
        if let Some(threshold) = env::read(Self::THRESHOLD_VAR)? {
            options.threshold = threshold;
        }

        Ok(options)
    }
}
