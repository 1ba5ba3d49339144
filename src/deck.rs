//! The play deck: built from the catalog, shuffled, drawn from the top

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::catalog::Catalog;
use crate::types::CardId;

#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<CardId>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear and refill: every catalog entry `copies` times, then
    /// shuffle. An empty catalog leaves an empty deck and logs it.
    pub fn build(&mut self, catalog: &Catalog, copies: usize, rng: &mut StdRng) {
        self.cards.clear();
        if catalog.is_empty() {
            log::warn!("deck build: catalog is empty, deck stays empty");
            return;
        }
        for def in catalog.cards() {
            for _ in 0..copies {
                self.cards.push(def.id);
            }
        }
        self.shuffle(rng);
        log::info!("deck built: {} cards", self.cards.len());
    }

    pub fn shuffle(&mut self, rng: &mut StdRng) {
        self.cards.shuffle(rng);
    }

    /// Remove and return the top card; None when the deck is exhausted
    pub fn draw_top(&mut self) -> Option<CardId> {
        if self.cards.is_empty() {
            return None;
        }
        Some(self.cards.remove(0))
    }

    /// Rebuild from the catalog; used on restart
    pub fn reset(&mut self, catalog: &Catalog, copies: usize, rng: &mut StdRng) {
        self.build(catalog, copies, rng);
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn cards(&self) -> &[CardId] {
        &self.cards
    }
}
