pub mod app_state;
pub mod game_registry;

pub use app_state::AppState;
pub use game_registry::{GameHandle, GameRegistry};
