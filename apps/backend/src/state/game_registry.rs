//! In-memory registry of running games.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::domain::{derive_dice_seed, Board, Dice};

/// Shared, lockable board. Hold the guard for one request at most and never
/// across an `.await`.
pub type GameHandle = Arc<Mutex<Board>>;

#[derive(Debug, Default)]
pub struct GameRegistry {
    games: DashMap<Uuid, GameHandle>,
    dice_seed: Option<u64>,
    created: AtomicU64,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Boards created by this registry roll dice seeded from `seed`.
    pub fn with_dice_seed(seed: u64) -> Self {
        Self {
            dice_seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn create_game(&self) -> Uuid {
        let ordinal = self.created.fetch_add(1, Ordering::Relaxed);
        let dice = match self.dice_seed {
            Some(base) => Dice::seeded(derive_dice_seed(base, ordinal)),
            None => Dice::new(),
        };
        self.insert(Board::with_dice(dice))
    }

    /// Registers an already-built board under a fresh id.
    pub fn insert(&self, board: Board) -> Uuid {
        let id = Uuid::new_v4();
        self.games.insert(id, Arc::new(Mutex::new(board)));
        info!(game_id = %id, "game created");
        id
    }

    pub fn get(&self, id: &Uuid) -> Option<GameHandle> {
        self.games.get(id).map(|entry| Arc::clone(entry.value()))
    }

    /// All known game ids, sorted for stable output.
    pub fn list(&self) -> Vec<Uuid> {
        let mut ids: Vec<Uuid> = self.games.iter().map(|entry| *entry.key()).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
