use serde::{Deserialize, Serialize};

use crate::domain::dice::Dice;
use crate::domain::player::Player;
use crate::domain::rules::{MAX_PLAYERS, MIN_PLAYERS};
use crate::errors::domain::DomainError;

/// Lifecycle of a board. There is no way back to an earlier phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Players may still join.
    Setup,
    /// Turns are being played; the table is closed.
    Started,
    /// A winner has been declared.
    Completed,
}

/// One independent game: the players in turn order, the die they share and
/// whose turn it is.
#[derive(Debug)]
pub struct Board {
    players: Vec<Player>,
    dice: Dice,
    turn: usize,
    phase: Phase,
    winner: Option<String>,
}

impl Board {
    pub fn new() -> Self {
        Self::with_dice(Dice::new())
    }

    pub fn with_dice(dice: Dice) -> Self {
        Self {
            players: Vec::with_capacity(MAX_PLAYERS),
            dice,
            turn: 0,
            phase: Phase::Setup,
            winner: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn dice(&self) -> &Dice {
        &self.dice
    }

    /// Seats a new player at the end of the turn order.
    pub fn add_player(&mut self, color: impl Into<String>) -> Result<(), DomainError> {
        let color = color.into();
        if self.phase != Phase::Setup {
            return Err(DomainError::GameAlreadyStarted);
        }
        if self.player(&color).is_some() {
            return Err(DomainError::DuplicateColor(color));
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(DomainError::PlayerLimitExceeded);
        }
        self.players.push(Player::new(color, self.dice.clone()));
        Ok(())
    }

    pub fn start_game(&mut self) -> Result<(), DomainError> {
        if self.players.len() < MIN_PLAYERS {
            return Err(DomainError::InsufficientPlayers {
                present: self.players.len(),
            });
        }
        if self.phase == Phase::Setup {
            self.phase = Phase::Started;
        }
        Ok(())
    }

    pub fn is_game_started(&self) -> bool {
        self.phase != Phase::Setup
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::Completed
    }

    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    pub fn player(&self, color: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.color() == color)
    }

    /// The player whose turn it is. `None` only while nobody has joined.
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.turn)
    }

    pub fn current_player_mut(&mut self) -> Option<&mut Player> {
        self.players.get_mut(self.turn)
    }

    /// Ends the current turn: drops any unused roll and passes play on.
    pub fn next_turn(&mut self) {
        let Some(current) = self.players.get_mut(self.turn) else {
            return;
        };
        current.reset_dice_roll();
        self.turn = (self.turn + 1) % self.players.len();
    }

    /// Records `color` as the winner and closes the game.
    ///
    /// Whether that player actually has all pieces home is not checked here.
    pub fn declare_winner(&mut self, color: impl Into<String>) {
        self.winner = Some(color.into());
        self.phase = Phase::Completed;
    }

    #[cfg(test)]
    pub(crate) fn player_mut_for_test(&mut self, color: &str) -> &mut Player {
        self.players
            .iter_mut()
            .find(|p| p.color() == color)
            .expect("test board should seat this color")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
