//! The single six-sided die shared by every player at a board.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::rules::{is_valid_roll, Roll, DIE_FACES};

enum Source {
    Random(ChaCha8Rng),
    /// Fixed faces replayed in order, wrapping around at the end.
    Scripted { faces: Vec<Roll>, next: usize },
}

impl Source {
    fn roll(&mut self) -> Roll {
        match self {
            Source::Random(rng) => rng.random_range(DIE_FACES),
            Source::Scripted { faces, next } => {
                let face = faces[*next];
                *next = (*next + 1) % faces.len();
                face
            }
        }
    }
}

/// Handle to a die.
///
/// Cloning the handle does not create a new die: all clones draw from the
/// same underlying source, which is how a board hands one fair die to each
/// of its players.
#[derive(Clone)]
pub struct Dice {
    source: Arc<Mutex<Source>>,
}

impl Dice {
    /// A die seeded from the thread-local generator.
    pub fn new() -> Self {
        Self::from_source(Source::Random(ChaCha8Rng::from_rng(&mut rand::rng())))
    }

    /// A reproducible die: the same seed yields the same sequence of rolls.
    pub fn seeded(seed: u64) -> Self {
        Self::from_source(Source::Random(ChaCha8Rng::seed_from_u64(seed)))
    }

    /// A die that replays `faces` in order, cycling forever.
    ///
    /// Returns `None` when `faces` is empty or contains a value outside 1..=6.
    pub fn scripted(faces: impl IntoIterator<Item = Roll>) -> Option<Self> {
        let faces: Vec<Roll> = faces.into_iter().collect();
        if faces.is_empty() || !faces.iter().all(|&f| is_valid_roll(f)) {
            return None;
        }
        Some(Self::from_source(Source::Scripted { faces, next: 0 }))
    }

    fn from_source(source: Source) -> Self {
        Self {
            source: Arc::new(Mutex::new(source)),
        }
    }

    pub fn roll(&self) -> Roll {
        self.source.lock().roll()
    }
}

impl Default for Dice {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &*self.source.lock() {
            Source::Random(_) => "random",
            Source::Scripted { .. } => "scripted",
        };
        f.debug_struct("Dice").field("source", &kind).finish()
    }
}
