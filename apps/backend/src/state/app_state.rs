use std::sync::Arc;

use crate::config::AppConfig;
use crate::state::game_registry::GameRegistry;

/// Application state shared by every worker.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Running games, keyed by id
    pub games: Arc<GameRegistry>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let games = match config.dice_seed {
            Some(seed) => GameRegistry::with_dice_seed(seed),
            None => GameRegistry::new(),
        };
        Self {
            games: Arc::new(games),
            config,
        }
    }

    pub fn registry(&self) -> &GameRegistry {
        &self.games
    }
}
