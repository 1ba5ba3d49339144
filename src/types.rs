use serde::{Deserialize, Serialize};

/// Unique identifier for catalog cards
pub type CardId = u32;

/// Unique identifier for a unit instance within one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub u32);

/// Which player a slot, unit or resource belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

/// Card class. The discriminant doubles as the priority tier
/// (0 = highest), kept from the catalog data even though combat
/// processes units in registration order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum CardClass {
    Elemental = 0,
    Glass = 1,
    Wood = 2,
    Mechanical = 3,
    Plush = 4,
}

/// How a unit moves, targets and supports during combat resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttackPattern {
    /// Attacks the directly-opposite slot only
    StandardFront,
    /// Attacks the opposite slot, or an adjacent lane's back line when
    /// its own lane is clear
    FlexibleFront,
    /// Attacks the line opposite its own (front unit hits the enemy
    /// back line and vice versa); exempt from movement
    TargetThroughLine,
    /// Never attacks or moves; buffs the unit in its forward slot
    SupportOnly,
}

impl AttackPattern {
    /// SupportOnly and TargetThroughLine units hold their slot; the
    /// rest advance when the lane opens.
    pub fn advances(&self) -> bool {
        !matches!(
            self,
            AttackPattern::SupportOnly | AttackPattern::TargetThroughLine
        )
    }
}

/// What a supporter grants a given card. Resolved once at catalog load;
/// the support phase never inspects display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SupportEffect {
    /// No effect; supporters skip this card
    None,
    /// One-shot negation of the next incoming damage instance
    Block,
    /// Heal by the supporter's configured heal amount
    Mend,
    /// One-shot survive-a-lethal-hit-at-1-HP
    Rebirth,
    /// Flat bonus damage added to every attack while active
    Ignite { bonus: i32 },
}

impl Default for SupportEffect {
    fn default() -> Self {
        SupportEffect::None
    }
}

/// Buff labels reported through the observer hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BuffKind {
    Block,
    Rebirth,
    Ignite,
}

/// An immutable card definition, owned by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDefinition {
    pub id: CardId,
    pub name: String,
    pub class: CardClass,
    pub pattern: AttackPattern,
    /// Deployment cost in Fear Points
    pub cost: i32,
    pub attack: i32,
    pub max_hp: i32,
    /// Heal granted per support application when this card is the supporter
    pub support_heal: i32,
    /// Buff granted when this card is the support target
    pub support_effect: SupportEffect,
}

impl CardDefinition {
    pub fn new(
        id: CardId,
        name: &str,
        class: CardClass,
        pattern: AttackPattern,
        cost: i32,
        attack: i32,
        max_hp: i32,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            class,
            pattern,
            cost,
            attack,
            max_hp,
            support_heal: 0,
            support_effect: SupportEffect::None,
        }
    }

    pub fn with_support_heal(mut self, amount: i32) -> Self {
        self.support_heal = amount;
        self
    }

    pub fn with_support_effect(mut self, effect: SupportEffect) -> Self {
        self.support_effect = effect;
        self
    }
}

/// Transient buff flags on a deployed unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buffs {
    /// One-shot damage negation
    pub block: bool,
    /// One-shot revive-at-1-HP
    pub rebirth: bool,
    /// Bonus-damage magnitude while ignited
    pub ignite: Option<i32>,
}

/// Result of applying one damage instance to a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// A block buff absorbed the hit entirely
    Blocked,
    /// The unit survived with the given HP
    Harmed { hp: i32 },
    /// The hit was lethal but a pending rebirth kept the unit at 1 HP
    Rebirthed,
    /// The hit was lethal; the death latch is now set
    Lethal,
}

/// A card instance in play: in hand (slot = None) or deployed.
/// Stats are copied out of the definition at instantiation; HP and
/// buffs are mutated only by the combat engine and support effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployedUnit {
    pub id: UnitId,
    pub card: CardId,
    pub name: String,
    pub class: CardClass,
    pub pattern: AttackPattern,
    pub owner: Side,
    pub cost: i32,
    pub attack: i32,
    pub max_hp: i32,
    pub hp: i32,
    pub support_heal: i32,
    pub support_effect: SupportEffect,
    /// Board slot index on the owner's side; None while in hand
    pub slot: Option<usize>,
    pub buffs: Buffs,
    /// Idempotent death latch; a dead unit is never destroyed twice
    pub died: bool,
}

impl DeployedUnit {
    pub fn from_definition(id: UnitId, def: &CardDefinition, owner: Side) -> Self {
        Self {
            id,
            card: def.id,
            name: def.name.clone(),
            class: def.class,
            pattern: def.pattern,
            owner,
            cost: def.cost,
            attack: def.attack,
            max_hp: def.max_hp,
            hp: def.max_hp,
            support_heal: def.support_heal,
            support_effect: def.support_effect,
            slot: None,
            buffs: Buffs::default(),
            died: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.died && self.hp > 0
    }

    /// Attack including the ignite bonus, if any
    pub fn effective_attack(&self) -> i32 {
        self.attack + self.buffs.ignite.unwrap_or(0)
    }

    /// Apply one damage instance. Consumes block or rebirth when they
    /// fire; on a lethal hit the death latch is set exactly once and
    /// slot/roster cleanup is left to the caller.
    pub fn apply_damage(&mut self, amount: i32) -> DamageOutcome {
        if self.died {
            return DamageOutcome::Lethal;
        }
        if self.buffs.block {
            self.buffs.block = false;
            return DamageOutcome::Blocked;
        }
        let new_hp = self.hp - amount;
        if new_hp <= 0 {
            if self.buffs.rebirth {
                self.buffs.rebirth = false;
                self.hp = 1;
                return DamageOutcome::Rebirthed;
            }
            self.hp = new_hp;
            self.died = true;
            return DamageOutcome::Lethal;
        }
        self.hp = new_hp;
        DamageOutcome::Harmed { hp: new_hp }
    }

    /// Heal, clamped to max HP. Returns the new HP.
    pub fn heal(&mut self, amount: i32) -> i32 {
        self.hp = (self.hp + amount).min(self.max_hp);
        self.hp
    }
}
