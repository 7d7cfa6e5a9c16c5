//! Error codes for the Ludo game API.
//!
//! Every code the API can emit is listed here; never pass ad-hoc strings as
//! error codes. Codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Game id in the path is not a UUID
    InvalidGameId,
    /// Color is empty or too long
    InvalidColor,
    /// Malformed request body or query
    BadRequest,

    // Move / roll rules
    /// A roll is already pending
    AlreadyRolled,
    /// Piece entry requires a six
    MustRollSix,
    /// Piece is in the yard or in the goal
    IllegalPieceState,
    /// Inexact roll inside the home stretch
    OvershootViolation,
    /// Move without a pending roll
    NoPendingRoll,
    /// Start with fewer than two players
    InsufficientPlayers,

    // Resource Not Found
    GameNotFound,
    PlayerNotFound,
    PieceNotFound,
    NotFound,

    // Lifecycle conflicts
    /// Color already seated at this board
    DuplicateColor,
    /// Four players already seated
    PlayerLimitExceeded,
    /// Table is closed once play begins
    GameAlreadyStarted,
    /// Action requires a started game
    GameNotStarted,
    /// A winner has been declared
    GameOver,
    /// Another player holds the turn
    NotYourTurn,

    // System Errors
    Internal,
    ConfigError,
}

impl ErrorCode {
    pub const ALL: &'static [ErrorCode] = &[
        Self::InvalidGameId,
        Self::InvalidColor,
        Self::BadRequest,
        Self::AlreadyRolled,
        Self::MustRollSix,
        Self::IllegalPieceState,
        Self::OvershootViolation,
        Self::NoPendingRoll,
        Self::InsufficientPlayers,
        Self::GameNotFound,
        Self::PlayerNotFound,
        Self::PieceNotFound,
        Self::NotFound,
        Self::DuplicateColor,
        Self::PlayerLimitExceeded,
        Self::GameAlreadyStarted,
        Self::GameNotStarted,
        Self::GameOver,
        Self::NotYourTurn,
        Self::Internal,
        Self::ConfigError,
    ];

    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    ///
    /// This is the exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Request Validation
            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::InvalidColor => "INVALID_COLOR",
            Self::BadRequest => "BAD_REQUEST",

            // Move / roll rules
            Self::AlreadyRolled => "ALREADY_ROLLED",
            Self::MustRollSix => "MUST_ROLL_SIX",
            Self::IllegalPieceState => "ILLEGAL_PIECE_STATE",
            Self::OvershootViolation => "OVERSHOOT_VIOLATION",
            Self::NoPendingRoll => "NO_PENDING_ROLL",
            Self::InsufficientPlayers => "INSUFFICIENT_PLAYERS",

            // Resource Not Found
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::PieceNotFound => "PIECE_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            // Lifecycle conflicts
            Self::DuplicateColor => "DUPLICATE_COLOR",
            Self::PlayerLimitExceeded => "PLAYER_LIMIT_EXCEEDED",
            Self::GameAlreadyStarted => "GAME_ALREADY_STARTED",
            Self::GameNotStarted => "GAME_NOT_STARTED",
            Self::GameOver => "GAME_OVER",
            Self::NotYourTurn => "NOT_YOUR_TURN",

            // System Errors
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
