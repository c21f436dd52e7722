//! Turn and status types.

use core::fmt;

use crate::result::GameResult;

/// Whose turn it is.
///
/// Play only moves forward, from [`Turn::PlayerTurn`] to [`Turn::DealerTurn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// The player has stood; the dealer's hand is final.
    DealerTurn,
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayerTurn => f.write_str("player_turn"),
            Self::DealerTurn => f.write_str("dealer_turn"),
        }
    }
}

/// What a consumer should show as the game's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// No decision yet; shows the current turn.
    InProgress(Turn),
    /// The round is decided.
    Decided(GameResult),
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress(turn) => fmt::Display::fmt(turn, f),
            Self::Decided(result) => fmt::Display::fmt(result, f),
        }
    }
}
