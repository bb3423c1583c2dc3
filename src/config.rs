use std::env;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_TICK_MS: u64 = 16;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("FAKEOUT_TICK_MS must be a whole number of milliseconds between 1 and 1000, got {0:?}")]
    TickRate(String),
    #[error("FAKEOUT_SOUND must be one of bell, on, 1, off, 0, got {0:?}")]
    Sound(String),
}

/// Runtime settings read from the environment. Physics is fixed; only the
/// shell around the game is tunable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tick_ms: u64,
    pub log_file: Option<PathBuf>,
    pub bell: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            log_file: None,
            bell: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(raw) = lookup("FAKEOUT_TICK_MS") {
            config.tick_ms = match raw.trim().parse::<u64>() {
                Ok(ms) if (1..=1000).contains(&ms) => ms,
                _ => return Err(ConfigError::TickRate(raw)),
            };
        }

        config.log_file = lookup("FAKEOUT_LOG")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        if let Some(raw) = lookup("FAKEOUT_SOUND") {
            config.bell = match raw.trim().to_ascii_lowercase().as_str() {
                "bell" | "on" | "1" => true,
                "off" | "0" | "" => false,
                _ => return Err(ConfigError::Sound(raw)),
            };
        }

        Ok(config)
    }
}
