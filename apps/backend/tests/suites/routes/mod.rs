pub mod error_shape;
pub mod player_turns;
