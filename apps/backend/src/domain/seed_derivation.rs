//! Seed derivation for reproducible dice.
//!
//! A server started with a base seed hands every new board its own seed, so
//! a replayed sequence of requests produces the same rolls per game while
//! no two games share a roll sequence.

/// Derive the dice seed for the `ordinal`-th board created from `base`.
pub fn derive_dice_seed(base: u64, ordinal: u64) -> u64 {
    // Golden-ratio stride keeps neighbouring ordinals far apart
    base.wrapping_add(ordinal.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}
