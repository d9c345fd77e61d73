//! Error types for configuration loading.
//!
//! The tick itself cannot fail; everything here belongs to the setup path
//! the driver runs before the first tick.

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum GameError {
    /// The config file could not be read.
    ConfigRead { path: PathBuf, source: io::Error },

    /// The config file is not valid TOML for `SimConfig`.
    ConfigParse { source: toml::de::Error },

    /// A config value is outside the range the simulation can run with.
    InvalidConfig {
        /// Field name as spelled in the TOML file.
        name: &'static str,
        value: i64,
        expected: &'static str,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::ConfigRead { path, source } => {
                write!(f, "cannot read config '{}': {}", path.display(), source)
            }
            GameError::ConfigParse { source } => write!(f, "invalid config: {}", source),
            GameError::InvalidConfig {
                name,
                value,
                expected,
            } => write!(f, "config '{}' = {} must be {}", name, value, expected),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::ConfigRead { source, .. } => Some(source),
            GameError::ConfigParse { source } => Some(source),
            GameError::InvalidConfig { .. } => None,
        }
    }
}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;
