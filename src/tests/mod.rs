mod bot;
mod targeting;

use crate::board::SlotId;
use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::events::GameObserver;
use crate::session::GameSession;
use crate::state::GameState;
use crate::types::*;

// ==========================================
// HELPER FUNCTIONS (Boilerplate Reduction)
// ==========================================

pub fn test_def(id: u32, name: &str, pattern: AttackPattern) -> CardDefinition {
    CardDefinition::new(id, name, CardClass::Plush, pattern, 1, 2, 5)
}

pub fn test_config() -> GameConfig {
    // Default layout: 3 lanes, interleaved [F, B, F, B, F, B] per side
    GameConfig::default()
}

pub fn empty_state() -> GameState {
    GameState::new(&test_config())
}

/// Spawn a unit straight onto the board, bypassing hand and ledger
pub fn place(state: &mut GameState, def: &CardDefinition, side: Side, index: usize) -> UnitId {
    let unit = state.units.spawn(def, side);
    state
        .board
        .set_occupant(SlotId::new(side, index), unit)
        .expect("test slot should be free");
    state
        .units
        .get_mut(unit)
        .expect("unit just spawned")
        .slot = Some(index);
    state.register_deployment(unit);
    unit
}

pub fn session_with(catalog: Catalog, seed: u64) -> GameSession {
    GameSession::new(catalog, test_config(), seed)
}

pub fn starter_session(seed: u64) -> GameSession {
    session_with(Catalog::starter(), seed)
}

// ==========================================
// RECORDING OBSERVER
// ==========================================

#[derive(Debug, Default)]
pub struct Recorder {
    pub hp: Vec<(UnitId, i32)>,
    pub buffs: Vec<(UnitId, BuffKind, bool)>,
    pub attacks: Vec<(UnitId, i32)>,
    pub base: Vec<(Side, i32)>,
    pub moves: Vec<(UnitId, usize, usize)>,
    pub deaths: Vec<UnitId>,
    pub winners: Vec<Side>,
}

impl GameObserver for Recorder {
    fn hp_changed(&mut self, unit: UnitId, hp: i32) {
        self.hp.push((unit, hp));
    }

    fn buff_changed(&mut self, unit: UnitId, buff: BuffKind, active: bool) {
        self.buffs.push((unit, buff, active));
    }

    fn attack_changed(&mut self, unit: UnitId, attack: i32) {
        self.attacks.push((unit, attack));
    }

    fn base_health_changed(&mut self, side: Side, health: i32) {
        self.base.push((side, health));
    }

    fn unit_moved(&mut self, unit: UnitId, from: SlotId, to: SlotId) {
        self.moves.push((unit, from.index, to.index));
    }

    fn unit_died(&mut self, unit: UnitId) {
        self.deaths.push(unit);
    }

    fn game_over(&mut self, winner: Side) {
        self.winners.push(winner);
    }
}
