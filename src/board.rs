//! Slot graph: lines, forward links, opposite mapping, occupancy
//!
//! The topology is fixed at setup from the configured layout; only
//! occupancy changes afterwards. Occupancy is exclusive: a slot never
//! silently holds two units.

use serde::{Deserialize, Serialize};

use crate::error::{FearResult, GameError};
use crate::types::{Side, UnitId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Line {
    Front,
    Back,
}

/// One entry of the configured per-side layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotSpec {
    pub line: Line,
}

/// A board position: side plus index into that side's slot list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotId {
    pub side: Side,
    pub index: usize,
}

impl SlotId {
    pub fn new(side: Side, index: usize) -> Self {
        Self { side, index }
    }

    /// The directly-opposite slot: same index on the other side
    pub fn opposite(&self) -> SlotId {
        SlotId::new(self.side.opponent(), self.index)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub line: Line,
    /// Same-side front slot ahead of this one; back-line slots only
    pub forward: Option<usize>,
    occupant: Option<UnitId>,
}

/// Both sides' slots. Layouts mirror each other, so the opposite of a
/// slot is the same index on the other side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    player: Vec<Slot>,
    enemy: Vec<Slot>,
}

impl Board {
    /// Build both sides from one layout. Forward links resolve by
    /// position: each back slot points at the nearest preceding front
    /// slot in the list.
    pub fn new(layout: &[SlotSpec]) -> Self {
        let mut side = Vec::with_capacity(layout.len());
        let mut last_front = None;
        for spec in layout {
            let forward = match spec.line {
                Line::Front => None,
                Line::Back => last_front,
            };
            side.push(Slot {
                line: spec.line,
                forward,
                occupant: None,
            });
            if spec.line == Line::Front {
                last_front = Some(side.len() - 1);
            }
        }
        Self {
            player: side.clone(),
            enemy: side,
        }
    }

    pub fn side_len(&self) -> usize {
        self.player.len()
    }

    fn slots(&self, side: Side) -> &[Slot] {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    fn slots_mut(&mut self, side: Side) -> &mut Vec<Slot> {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }

    pub fn slot(&self, id: SlotId) -> Option<&Slot> {
        self.slots(id.side).get(id.index)
    }

    pub fn line(&self, id: SlotId) -> Option<Line> {
        self.slot(id).map(|s| s.line)
    }

    /// Same-side front slot this back slot advances into
    pub fn forward_of(&self, id: SlotId) -> Option<SlotId> {
        self.slot(id)
            .and_then(|s| s.forward)
            .map(|index| SlotId::new(id.side, index))
    }

    pub fn is_occupied(&self, id: SlotId) -> bool {
        self.occupant(id).is_some()
    }

    pub fn occupant(&self, id: SlotId) -> Option<UnitId> {
        self.slot(id).and_then(|s| s.occupant)
    }

    /// Place a unit. Fails on an out-of-range or occupied slot without
    /// mutating anything; the caller updates the unit's own slot field.
    pub fn set_occupant(&mut self, id: SlotId, unit: UnitId) -> FearResult<()> {
        let slot = self
            .slots_mut(id.side)
            .get_mut(id.index)
            .ok_or(GameError::InvalidSlot { index: id.index })?;
        if let Some(current) = slot.occupant {
            if current != unit {
                return Err(GameError::SlotOccupied {
                    side: id.side,
                    index: id.index,
                });
            }
            return Ok(());
        }
        slot.occupant = Some(unit);
        Ok(())
    }

    /// Empty a slot; returns the previous occupant, if any
    pub fn clear_occupant(&mut self, id: SlotId) -> Option<UnitId> {
        self.slots_mut(id.side)
            .get_mut(id.index)
            .and_then(|s| s.occupant.take())
    }

    /// Slot ids of one side in layout order
    pub fn slot_ids(&self, side: Side) -> impl Iterator<Item = SlotId> + '_ {
        (0..self.slots(side).len()).map(move |index| SlotId::new(side, index))
    }

    /// First occupied slot of the given line, scanning in layout order
    pub fn first_occupied_in_line(&self, side: Side, line: Line) -> Option<UnitId> {
        self.slots(side)
            .iter()
            .find(|s| s.line == line && s.occupant.is_some())
            .and_then(|s| s.occupant)
    }
}
