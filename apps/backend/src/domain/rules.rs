//! Fixed board geometry and table limits.

use std::ops::RangeInclusive;

pub type PieceId = u8; // 1..=4
pub type Position = u8;
pub type Roll = u8; // 1..=6

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;
pub const PIECES_PER_PLAYER: usize = 4;

pub const DIE_FACES: RangeInclusive<Roll> = 1..=6;
/// The only roll that lets a piece leave the yard.
pub const ENTRY_ROLL: Roll = 6;

pub const YARD: Position = 0;
pub const TRACK_START: Position = 1;
/// Last square of the shared track. Anything beyond is the home stretch.
pub const TRACK_END: Position = 56;
/// Last square of the home stretch. Anything beyond is the goal.
pub const HOME_STRETCH_END: Position = 62;
pub const GOAL: Position = HOME_STRETCH_END + 1;

pub const PIECE_IDS: [PieceId; PIECES_PER_PLAYER] = [1, 2, 3, 4];

#[inline]
pub fn is_valid_roll(roll: Roll) -> bool {
    DIE_FACES.contains(&roll)
}

/// True when a piece at `position` must land exactly on the goal.
#[inline]
pub fn in_home_stretch(position: Position) -> bool {
    position > TRACK_END
}
