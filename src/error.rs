//! Error types for game commands
//!
//! Illegal actions are rejected synchronously with no state mutated;
//! nothing here is allowed to crash the turn loop.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Side;

/// Errors returned by game commands
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameError {
    /// Not enough Fear Points to pay a deployment cost
    #[error("not enough fear points: have {have}, need {need}")]
    NotEnoughFear { have: i32, need: i32 },
    /// The acting side does not own the current turn
    #[error("it is not the {side:?} side's turn")]
    NotYourTurn { side: Side },
    /// Target slot already holds a unit
    #[error("slot {index} on the {side:?} side is occupied")]
    SlotOccupied { side: Side, index: usize },
    /// Slot index outside the configured board
    #[error("slot index {index} is out of range")]
    InvalidSlot { index: usize },
    /// Deployment aimed at the opposing side's slots
    #[error("cannot deploy onto the opposing side")]
    WrongSide,
    /// The unit is not in the hand
    #[error("unit is not in hand")]
    NotInHand,
    /// The game-over latch is set; no further actions are accepted
    #[error("the game is over")]
    GameOver,
    /// advance_enemy called outside an enemy turn
    #[error("no enemy turn is in progress")]
    NoEnemyTurn,
}

/// Result type alias for game commands
pub type FearResult<T> = Result<T, GameError>;
