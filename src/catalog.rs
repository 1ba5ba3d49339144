//! The immutable card catalog
//!
//! Loaded once at startup and shared read-only for the life of the
//! session. The built-in roster covers every class and attack pattern;
//! the support table is resolved here, at load time, so the support
//! phase never matches on display names.

use crate::types::{AttackPattern, CardClass, CardDefinition, CardId, SupportEffect};

#[derive(Debug, Clone)]
pub struct Catalog {
    cards: Vec<CardDefinition>,
}

impl Catalog {
    pub fn new(cards: Vec<CardDefinition>) -> Self {
        Self { cards }
    }

    /// The built-in five-card roster
    pub fn starter() -> Self {
        Self::new(vec![
            CardDefinition::new(
                1,
                "Winnie",
                CardClass::Plush,
                AttackPattern::StandardFront,
                2,
                2,
                6,
            )
            .with_support_effect(SupportEffect::Block),
            CardDefinition::new(
                2,
                "Buratino",
                CardClass::Wood,
                AttackPattern::FlexibleFront,
                2,
                3,
                4,
            )
            .with_support_effect(SupportEffect::Ignite { bonus: 2 }),
            CardDefinition::new(
                3,
                "Malvina",
                CardClass::Glass,
                AttackPattern::TargetThroughLine,
                3,
                2,
                3,
            )
            .with_support_effect(SupportEffect::Mend),
            CardDefinition::new(
                4,
                "Tin Soldier",
                CardClass::Mechanical,
                AttackPattern::StandardFront,
                1,
                1,
                4,
            )
            .with_support_effect(SupportEffect::Rebirth),
            CardDefinition::new(
                5,
                "Calcifer",
                CardClass::Elemental,
                AttackPattern::SupportOnly,
                2,
                0,
                3,
            )
            .with_support_heal(2),
        ])
    }

    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn cards(&self) -> &[CardDefinition] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
