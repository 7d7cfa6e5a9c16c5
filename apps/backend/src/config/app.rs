use std::env;

use crate::error::AppError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;

/// Process configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Base seed for reproducible dice. `None` seeds every game from the OS.
    pub dice_seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            dice_seed: None,
        }
    }
}

impl AppConfig {
    /// Builds the configuration from `LUDO_HOST`, `LUDO_PORT` and `LUDO_DICE_SEED`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("LUDO_HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("LUDO_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("LUDO_PORT must be a valid port number, got '{raw}'"))
            })?,
            None => DEFAULT_PORT,
        };

        let dice_seed = lookup("LUDO_DICE_SEED")
            .map(|raw| {
                raw.trim().parse::<u64>().map_err(|_| {
                    AppError::config(format!("LUDO_DICE_SEED must be an unsigned integer, got '{raw}'"))
                })
            })
            .transpose()?;

        Ok(Self {
            host,
            port,
            dice_seed,
        })
    }
}
