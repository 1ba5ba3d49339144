//! Composed session state
//!
//! One `GameState` per game: board, deck, hand, ledger, unit pool,
//! roster, turn counter and base health, owned together instead of
//! scattered across global managers.

use crate::board::{Board, SlotId};
use crate::config::GameConfig;
use crate::deck::Deck;
use crate::hand::Hand;
use crate::ledger::FearLedger;
use crate::types::{CardDefinition, DeployedUnit, Side, UnitId};

/// Owns every unit instance of the session (in hand or on the board)
/// and allocates their ids.
#[derive(Debug, Clone, Default)]
pub struct UnitPool {
    units: Vec<DeployedUnit>,
    next_id: u32,
}

impl UnitPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, def: &CardDefinition, owner: Side) -> UnitId {
        self.next_id += 1;
        let id = UnitId(self.next_id);
        self.units.push(DeployedUnit::from_definition(id, def, owner));
        id
    }

    pub fn get(&self, id: UnitId) -> Option<&DeployedUnit> {
        self.units.iter().find(|u| u.id == id)
    }

    pub fn get_mut(&mut self, id: UnitId) -> Option<&mut DeployedUnit> {
        self.units.iter_mut().find(|u| u.id == id)
    }

    /// Drop a unit from the pool entirely; idempotent
    pub fn remove(&mut self, id: UnitId) -> Option<DeployedUnit> {
        let idx = self.units.iter().position(|u| u.id == id)?;
        Some(self.units.remove(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeployedUnit> {
        self.units.iter()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Per-side base health: the pool attackers hit when no unit target
/// exists.
#[derive(Debug, Clone)]
pub struct HealthPool {
    player: i32,
    enemy: i32,
    max: i32,
}

impl HealthPool {
    pub fn new(max: i32) -> Self {
        Self {
            player: max,
            enemy: max,
            max,
        }
    }

    pub fn current(&self, side: Side) -> i32 {
        match side {
            Side::Player => self.player,
            Side::Enemy => self.enemy,
        }
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Subtract damage; returns the new total
    pub fn damage(&mut self, side: Side, amount: i32) -> i32 {
        let hp = match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        };
        *hp -= amount;
        *hp
    }

    pub fn depleted(&self, side: Side) -> bool {
        self.current(side) <= 0
    }
}

/// Whose turn it is and how many rounds have begun. The round counter
/// increments when control returns to the player.
#[derive(Debug, Clone, Copy)]
pub struct TurnState {
    pub round: i32,
    pub owner: Side,
}

/// The complete rules-side state of one game
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub deck: Deck,
    pub hand: Hand,
    pub ledger: FearLedger,
    pub units: UnitPool,
    /// Deployed units in registration order, both sides interleaved
    pub roster: Vec<UnitId>,
    pub turn: TurnState,
    pub health: HealthPool,
    pub game_over: bool,
    pub winner: Option<Side>,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            board: Board::new(&config.slots),
            deck: Deck::new(),
            hand: Hand::new(config.hand_capacity),
            ledger: FearLedger::new(config.fear_cap),
            units: UnitPool::new(),
            roster: Vec::new(),
            turn: TurnState {
                round: 0,
                owner: Side::Player,
            },
            health: HealthPool::new(config.base_health),
            game_over: false,
            winner: None,
        }
    }

    /// Record a deployment for combat participation; keeps registration
    /// order and never double-registers.
    pub fn register_deployment(&mut self, unit: UnitId) {
        if !self.roster.contains(&unit) {
            self.roster.push(unit);
        }
    }

    /// Drop a destroyed unit from the combat roster; idempotent
    pub fn deregister(&mut self, unit: UnitId) {
        self.roster.retain(|&u| u != unit);
    }

    /// Snapshot of one side's deployed units in registration order.
    /// Combat iterates this copy so mid-resolution roster mutations
    /// cannot skip or double-visit anyone.
    pub fn roster_snapshot(&self, side: Side) -> Vec<UnitId> {
        self.roster
            .iter()
            .copied()
            .filter(|&id| {
                self.units
                    .get(id)
                    .map(|u| u.owner == side)
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Latch the end of the game; suppresses all further transitions
    pub fn set_game_over(&mut self, winner: Side) {
        if !self.game_over {
            self.game_over = true;
            self.winner = Some(winner);
            log::info!("game over, {winner:?} wins");
        }
    }

    /// Occupant of a slot, resolved to the unit
    pub fn unit_at(&self, slot: SlotId) -> Option<&DeployedUnit> {
        self.board.occupant(slot).and_then(|id| self.units.get(id))
    }
}
