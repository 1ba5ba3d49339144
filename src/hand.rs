//! The human side's hand: drawable-but-unplayed cards
//!
//! The bot has no hand; it deploys straight to the board.

use crate::catalog::Catalog;
use crate::deck::Deck;
use crate::state::UnitPool;
use crate::types::{Side, UnitId};

#[derive(Debug, Clone)]
pub struct Hand {
    cards: Vec<UnitId>,
    capacity: usize,
}

impl Hand {
    pub fn new(capacity: usize) -> Self {
        Self {
            cards: Vec::new(),
            capacity,
        }
    }

    /// Draw one card into the hand. A full hand or an empty deck is a
    /// no-op, not an error. A card id the catalog cannot resolve is
    /// logged and skipped.
    pub fn draw(
        &mut self,
        deck: &mut Deck,
        catalog: &Catalog,
        units: &mut UnitPool,
    ) -> Option<UnitId> {
        if self.cards.len() >= self.capacity {
            log::debug!("draw skipped: hand at capacity ({})", self.capacity);
            return None;
        }
        let card = deck.draw_top()?;
        let def = match catalog.get(card) {
            Some(def) => def,
            None => {
                log::error!("draw aborted: no catalog definition for card {card}");
                return None;
            }
        };
        let unit = units.spawn(def, Side::Player);
        self.cards.push(unit);
        Some(unit)
    }

    /// Remove a unit from the hand; idempotent when absent
    pub fn remove(&mut self, unit: UnitId) -> bool {
        match self.cards.iter().position(|&u| u == unit) {
            Some(idx) => {
                self.cards.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Re-insert a unit after a failed deployment; no-op if present
    pub fn return_to_hand(&mut self, unit: UnitId) {
        if !self.cards.contains(&unit) {
            self.cards.push(unit);
        }
    }

    pub fn contains(&self, unit: UnitId) -> bool {
        self.cards.contains(&unit)
    }

    /// Held units in draw order
    pub fn cards(&self) -> &[UnitId] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Evenly spaced placement anchors centered on `origin`, one per
    /// held card in order. Pure in hand size and spacing; the
    /// presentation layer applies them to whatever axis it likes.
    pub fn layout_positions(&self, origin: f32, spacing: f32) -> Vec<f32> {
        let count = self.cards.len();
        if count == 0 {
            return Vec::new();
        }
        let total_width = (count - 1) as f32 * spacing;
        let start = origin - total_width / 2.0;
        (0..count).map(|i| start + i as f32 * spacing).collect()
    }
}
