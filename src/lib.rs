//! Rules engine for Fearpoints, a two-player lane-based card battler.
//!
//! The crate is a pure state machine over an abstract board: a fixed
//! front/back slot topology per side, a Fear Point economy that scales
//! with the round, alternating single-phase turns, and a combat
//! resolution pass (movement, support, attack) that runs when a turn
//! ends. Presentation is a collaborator, not a dependency: hosts drive
//! the session through [`GameSession::deploy`], [`GameSession::end_turn`]
//! and the paced enemy stepping, and mirror state through the
//! [`GameObserver`] hooks and [`GameView`] snapshots.

mod battle;
mod board;
mod bot;
mod catalog;
mod config;
mod deck;
mod error;
mod events;
mod hand;
mod ledger;
mod session;
mod state;
mod types;
mod view;

#[cfg(test)]
mod tests;

pub use board::{Board, Line, Slot, SlotId, SlotSpec};
pub use bot::EnemyAction;
pub use catalog::Catalog;
pub use config::{lane_layout, GameConfig};
pub use deck::Deck;
pub use error::{FearResult, GameError};
pub use events::{GameObserver, NullObserver};
pub use hand::Hand;
pub use ledger::FearLedger;
pub use session::GameSession;
pub use state::{GameState, HealthPool, TurnState, UnitPool};
pub use types::*;
pub use view::{GameView, HandCardView, SlotView, UnitView};
