//! View types for presentation layers
//!
//! A `GameView` is a read-only serialization of everything a frontend
//! needs to draw one frame: hand with affordability, both board sides,
//! resources, health and phase flags.

use serde::{Deserialize, Serialize};

use crate::board::{Line, SlotId};
use crate::config::GameConfig;
use crate::state::GameState;
use crate::types::{AttackPattern, Buffs, CardClass, CardId, Side, UnitId};

/// A unit as the frontend sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitView {
    pub unit: UnitId,
    pub card: CardId,
    pub name: String,
    pub class: CardClass,
    pub pattern: AttackPattern,
    pub owner: Side,
    /// Attack including any ignite bonus
    pub attack: i32,
    pub hp: i32,
    pub max_hp: i32,
    pub buffs: Buffs,
}

/// A held card plus its layout anchor and affordability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandCardView {
    pub unit: UnitId,
    pub card: CardId,
    pub name: String,
    pub cost: i32,
    pub attack: i32,
    pub max_hp: i32,
    pub can_afford: bool,
    pub anchor: f32,
}

/// One board position and its occupant, if any
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotView {
    pub index: usize,
    pub line: Line,
    pub unit: Option<UnitView>,
}

/// The complete per-frame game view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub round: i32,
    pub turn: Side,
    pub fear: i32,
    pub fear_max: i32,
    pub player_health: i32,
    pub enemy_health: i32,
    pub base_health_max: i32,
    pub hand: Vec<HandCardView>,
    pub player_board: Vec<SlotView>,
    pub enemy_board: Vec<SlotView>,
    pub deck_remaining: usize,
    pub game_over: bool,
    pub winner: Option<Side>,
}

impl GameView {
    pub fn from_state(state: &GameState, config: &GameConfig) -> Self {
        let fear = state.ledger.current(Side::Player);
        let anchors = state
            .hand
            .layout_positions(config.hand_origin, config.card_spacing);
        let hand = state
            .hand
            .cards()
            .iter()
            .zip(anchors)
            .filter_map(|(&unit_id, anchor)| {
                state.units.get(unit_id).map(|u| HandCardView {
                    unit: u.id,
                    card: u.card,
                    name: u.name.clone(),
                    cost: u.cost,
                    attack: u.attack,
                    max_hp: u.max_hp,
                    can_afford: fear >= u.cost,
                    anchor,
                })
            })
            .collect();

        Self {
            round: state.turn.round,
            turn: state.turn.owner,
            fear,
            fear_max: state.ledger.max(),
            player_health: state.health.current(Side::Player),
            enemy_health: state.health.current(Side::Enemy),
            base_health_max: state.health.max(),
            hand,
            player_board: side_view(state, Side::Player),
            enemy_board: side_view(state, Side::Enemy),
            deck_remaining: state.deck.remaining(),
            game_over: state.game_over,
            winner: state.winner,
        }
    }
}

fn side_view(state: &GameState, side: Side) -> Vec<SlotView> {
    state
        .board
        .slot_ids(side)
        .map(|slot_id| SlotView {
            index: slot_id.index,
            line: line_of(state, slot_id),
            unit: state.unit_at(slot_id).map(|u| UnitView {
                unit: u.id,
                card: u.card,
                name: u.name.clone(),
                class: u.class,
                pattern: u.pattern,
                owner: u.owner,
                attack: u.effective_attack(),
                hp: u.hp,
                max_hp: u.max_hp,
                buffs: u.buffs,
            }),
        })
        .collect()
}

fn line_of(state: &GameState, slot_id: SlotId) -> Line {
    state.board.line(slot_id).unwrap_or(Line::Front)
}
