use crate::config::AppConfig;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    config: Option<AppConfig>,
    dice_seed: Option<u64>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            dice_seed: None,
        }
    }

    /// Use an explicit configuration instead of the defaults.
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Read the configuration from the process environment.
    pub fn with_env(mut self) -> Result<Self, AppError> {
        self.config = Some(AppConfig::from_env()?);
        Ok(self)
    }

    /// Overrides whatever dice seed the configuration carries.
    pub fn with_dice_seed(mut self, seed: u64) -> Self {
        self.dice_seed = Some(seed);
        self
    }

    pub fn build(self) -> AppState {
        let mut config = self.config.unwrap_or_default();
        if let Some(seed) = self.dice_seed {
            config.dice_seed = Some(seed);
        }
        AppState::new(config)
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
