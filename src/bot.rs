//! The scripted opponent
//!
//! An `EnemyPlan` is a resumable step sequence: the host calls back in
//! after each pacing delay and exactly one committed action happens per
//! step. State is authoritative the moment a step returns; the delays
//! are cosmetic. Every step re-checks the game-over latch so an
//! in-flight plan aborts cleanly.

use rand::rngs::StdRng;
use rand::Rng;

use crate::board::SlotId;
use crate::catalog::Catalog;
use crate::events::GameObserver;
use crate::state::GameState;
use crate::types::{CardId, Side, UnitId};

/// Outcome of one opponent step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyAction {
    /// A card was paid for and placed; more steps may follow
    Deployed {
        unit: UnitId,
        slot: SlotId,
        card: CardId,
    },
    /// Budget, slots or the per-turn cap ran out; the turn should end
    Finished,
    /// The game-over latch was set mid-sequence
    Aborted,
}

/// Walks the enemy slots once, playing random affordable cards up to
/// the per-turn cap.
#[derive(Debug, Clone, Default)]
pub struct EnemyPlan {
    cursor: usize,
    played: u32,
}

impl EnemyPlan {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn advance(
        &mut self,
        state: &mut GameState,
        catalog: &Catalog,
        rng: &mut StdRng,
        observer: &mut dyn GameObserver,
        plays_per_turn: u32,
    ) -> EnemyAction {
        if state.game_over {
            log::info!("enemy plan aborted: game over");
            return EnemyAction::Aborted;
        }
        while self.played < plays_per_turn && self.cursor < state.board.side_len() {
            let slot = SlotId::new(Side::Enemy, self.cursor);
            self.cursor += 1;
            if state.board.is_occupied(slot) {
                continue;
            }
            if catalog.is_empty() {
                log::warn!("enemy plan: catalog is empty, nothing to play");
                break;
            }
            let pick = rng.gen_range(0..catalog.len());
            let def = catalog.cards()[pick].clone();
            match state
                .ledger
                .try_spend(Side::Enemy, def.cost, state.turn.owner)
            {
                Ok(()) => {
                    let unit = state.units.spawn(&def, Side::Enemy);
                    if let Err(err) = state.board.set_occupant(slot, unit) {
                        // Slot was just checked empty; only a bug lands here
                        log::error!("enemy deploy rejected: {err}");
                        state.units.remove(unit);
                        continue;
                    }
                    if let Some(u) = state.units.get_mut(unit) {
                        u.slot = Some(slot.index);
                    }
                    state.register_deployment(unit);
                    self.played += 1;
                    log::info!(
                        "enemy deployed {} into slot {} ({}/{plays_per_turn})",
                        def.name,
                        slot.index,
                        self.played
                    );
                    observer.unit_deployed(unit, slot);
                    observer.fear_changed(Side::Enemy, state.ledger.current(Side::Enemy));
                    return EnemyAction::Deployed {
                        unit,
                        slot,
                        card: def.id,
                    };
                }
                Err(_) => {
                    if state.ledger.current(Side::Enemy) <= 0 {
                        log::debug!("enemy plan: budget exhausted");
                        return EnemyAction::Finished;
                    }
                    // This pick was too expensive; try the next slot
                    continue;
                }
            }
        }
        EnemyAction::Finished
    }
}
