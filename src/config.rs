//! Startup configuration: board topology and tuning constants
//!
//! Supplied once at session start and treated as read-only thereafter.

use serde::{Deserialize, Serialize};

use crate::board::{Line, SlotSpec};

/// Fear Point ceiling; the per-turn budget is min(round, cap)
pub const FP_CAP: i32 = 10;
/// Base health each side starts with
pub const BASE_HEALTH: i32 = 20;
/// Maximum cards held in hand
pub const HAND_CAPACITY: usize = 10;
/// Cards dealt before the first player turn
pub const STARTING_HAND: usize = 4;
/// Copies of each catalog entry in a fresh deck
pub const DECK_COPIES: usize = 3;
/// Lanes per side in the default layout
pub const DEFAULT_LANES: usize = 3;
/// Cards the opponent policy plays per turn at most
pub const ENEMY_PLAYS_PER_TURN: u32 = 3;
/// Spacing between hand card anchors
pub const CARD_SPACING: f32 = 1.5;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    /// Ordered slot layout, identical for both sides; opposite and
    /// forward links are resolved by position
    pub slots: Vec<SlotSpec>,
    pub base_health: i32,
    pub fear_cap: i32,
    pub hand_capacity: usize,
    pub starting_hand: usize,
    pub deck_copies: usize,
    pub enemy_plays_per_turn: u32,
    /// Hand layout constants, consumed by the presentation layer
    pub card_spacing: f32,
    pub hand_origin: f32,
    /// Suggested pacing delays for the host driving the enemy plan;
    /// never a gate on rules state
    pub enemy_action_delay_ms: u64,
    pub enemy_play_delay_ms: u64,
}

impl GameConfig {
    pub fn lanes(&self) -> usize {
        self.slots.iter().filter(|s| s.line == Line::Front).count()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            slots: lane_layout(DEFAULT_LANES),
            base_health: BASE_HEALTH,
            fear_cap: FP_CAP,
            hand_capacity: HAND_CAPACITY,
            starting_hand: STARTING_HAND,
            deck_copies: DECK_COPIES,
            enemy_plays_per_turn: ENEMY_PLAYS_PER_TURN,
            card_spacing: CARD_SPACING,
            hand_origin: 0.0,
            enemy_action_delay_ms: 1000,
            enemy_play_delay_ms: 500,
        }
    }
}

/// Interleaved front/back layout: `[F, B, F, B, ...]`, one pair per
/// lane, so a front slot's list neighbours are the adjacent back slots.
pub fn lane_layout(lanes: usize) -> Vec<SlotSpec> {
    let mut slots = Vec::with_capacity(lanes * 2);
    for _ in 0..lanes {
        slots.push(SlotSpec { line: Line::Front });
        slots.push(SlotSpec { line: Line::Back });
    }
    slots
}
