#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod trace_ctx;

// Re-exports for public API
pub use config::AppConfig;
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use extractors::{GameRef, ValidatedJson};
pub use infra::state::{build_state, StateBuilder};
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use services::GameFlowService;
pub use state::app_state::AppState;
pub use state::game_registry::{GameHandle, GameRegistry};

// Prelude for test convenience
pub mod prelude {
    pub use super::domain::{Board, Dice, Phase, Piece, Player};
    pub use super::error::AppError;
    pub use super::errors::{DomainError, ErrorCode};
    pub use super::state::{AppState, GameRegistry};
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
