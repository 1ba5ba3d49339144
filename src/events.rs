//! Visual-sync hooks
//!
//! The engine commits every rule synchronously, then fires these
//! notifications. They carry no return value and every method defaults
//! to a no-op, so a missing subscriber degrades to "state changed but
//! not displayed" and never to a fault. Animation is a non-authoritative
//! replay of state that has already been decided.

use crate::board::SlotId;
use crate::types::{BuffKind, CardId, Side, UnitId};

#[allow(unused_variables)]
pub trait GameObserver {
    /// A unit's HP changed (damage or heal)
    fn hp_changed(&mut self, unit: UnitId, hp: i32) {}

    /// A buff was granted or consumed
    fn buff_changed(&mut self, unit: UnitId, buff: BuffKind, active: bool) {}

    /// A unit's effective attack changed (ignite)
    fn attack_changed(&mut self, unit: UnitId, attack: i32) {}

    /// A side's base health pool changed
    fn base_health_changed(&mut self, side: Side, health: i32) {}

    /// A side's current Fear Points changed
    fn fear_changed(&mut self, side: Side, current: i32) {}

    /// A card was drawn into the hand
    fn card_drawn(&mut self, unit: UnitId, card: CardId) {}

    /// A unit entered a slot from the hand or the bot's reserve
    fn unit_deployed(&mut self, unit: UnitId, slot: SlotId) {}

    /// A unit advanced during the movement phase
    fn unit_moved(&mut self, unit: UnitId, from: SlotId, to: SlotId) {}

    /// A unit died; its slot is already cleared and the roster updated.
    /// Hosts may delay the visual removal as long as they like.
    fn unit_died(&mut self, unit: UnitId) {}

    /// A new turn began for the given side
    fn turn_started(&mut self, side: Side, round: i32) {}

    /// A side's base health hit zero
    fn game_over(&mut self, winner: Side) {}
}

/// The default subscriber: ignores everything
#[derive(Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {}
