//! Fear Point ledger: the per-turn deployment budget
//!
//! Both sides refill from the same `min(round, cap)` formula at the
//! start of every turn, tracked independently.

use serde::{Deserialize, Serialize};

use crate::error::{FearResult, GameError};
use crate::types::Side;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FearLedger {
    player: i32,
    enemy: i32,
    max: i32,
    cap: i32,
}

impl FearLedger {
    pub fn new(cap: i32) -> Self {
        Self {
            player: 0,
            enemy: 0,
            max: 0,
            cap,
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

    /// Refill both sides to `min(round, cap)`
    pub fn refill(&mut self, round: i32) {
        self.max = round.min(self.cap);
        self.player = self.max;
        self.enemy = self.max;
        log::debug!("fear refilled to {} (round {round})", self.max);
    }

    /// Spend from one side's budget. Fails without mutation when the
    /// side does not own the turn or cannot cover the cost.
    pub fn try_spend(&mut self, side: Side, cost: i32, turn_owner: Side) -> FearResult<()> {
        if side != turn_owner {
            return Err(GameError::NotYourTurn { side });
        }
        let current = match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        };
        if cost > *current {
            return Err(GameError::NotEnoughFear {
                have: *current,
                need: cost,
            });
        }
        *current -= cost;
        log::debug!("{side:?} spent {cost} fear, {} left", *current);
        Ok(())
    }

    /// Drop both budgets to zero (restart path)
    pub fn drain(&mut self) {
        self.player = 0;
        self.enemy = 0;
        self.max = 0;
    }
}
