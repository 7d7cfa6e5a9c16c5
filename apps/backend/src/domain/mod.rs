//! Domain layer: pure game rules, no I/O and no logging.

pub mod board;
pub mod dice;
pub mod piece;
pub mod player;
pub mod rules;
pub mod seed_derivation;
pub mod snapshot;

#[cfg(test)]
mod tests_props_movement;

// Re-exports for ergonomics
pub use board::{Board, Phase};
pub use dice::Dice;
pub use piece::Piece;
pub use player::Player;
pub use rules::{PieceId, Position, Roll};
pub use seed_derivation::derive_dice_seed;
pub use snapshot::{snapshot, BoardSnapshot};
