//! Difficulty levels and the depth table they map to.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Deepest search a config may request, in plies.
pub const MAX_DEPTH: u8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    /// Level tokens are matched case-insensitively; anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownDifficulty(s.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown difficulty `{0}` (expected easy, medium or hard)")]
    UnknownDifficulty(String),

    #[error("{level} depth {depth} exceeds the maximum of {max} plies", max = MAX_DEPTH)]
    DepthTooLarge { level: Difficulty, depth: u8 },

    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Search depth in plies for each level. Depth 0 means a uniformly random move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DepthTable {
    pub easy: u8,
    pub medium: u8,
    pub hard: u8,
}

impl Default for DepthTable {
    fn default() -> Self {
        Self {
            easy: 0,
            medium: 1,
            hard: 3,
        }
    }
}

/// Engine settings, loadable from TOML:
///
/// ```toml
/// [depths]
/// easy = 0
/// medium = 1
/// hard = 3
/// ```
///
/// Missing keys fall back to the defaults above.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub depths: DepthTable,
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for level in Difficulty::ALL {
            let depth = self.depth(level);
            if depth > MAX_DEPTH {
                return Err(ConfigError::DepthTooLarge { level, depth });
            }
        }
        Ok(())
    }

    pub fn depth(&self, level: Difficulty) -> u8 {
        match level {
            Difficulty::Easy => self.depths.easy,
            Difficulty::Medium => self.depths.medium,
            Difficulty::Hard => self.depths.hard,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
