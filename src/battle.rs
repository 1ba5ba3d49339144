//! Combat resolution: movement, support and attack sub-phases
//!
//! Runs once per ended turn over the acting side's units. The roster is
//! snapshotted up front and iterated in registration order; occupancy
//! and roster mutations go to the live state, never the snapshot. Every
//! mutation is committed synchronously before its observer notification
//! fires.

use crate::board::{Board, Line, SlotId};
use crate::events::GameObserver;
use crate::state::GameState;
use crate::types::{AttackPattern, BuffKind, DamageOutcome, DeployedUnit, Side, SupportEffect, UnitId};

/// Resolve the ended turn for `side`: movement, then support, then
/// attacks, in that order.
pub(crate) fn resolve_turn(state: &mut GameState, side: Side, observer: &mut dyn GameObserver) {
    let snapshot = state.roster_snapshot(side);
    log::info!(
        "combat resolution for {side:?}: {} unit(s)",
        snapshot.len()
    );
    movement_phase(state, &snapshot, observer);
    support_phase(state, &snapshot, observer);
    attack_phase(state, &snapshot, observer);
}

/// Back-line units with an advancing pattern step into their forward
/// slot when the lane is open.
fn movement_phase(state: &mut GameState, snapshot: &[UnitId], observer: &mut dyn GameObserver) {
    for &id in snapshot {
        let from = match state.units.get(id) {
            Some(u) if u.is_alive() && u.pattern.advances() => match u.slot {
                Some(index) => SlotId::new(u.owner, index),
                None => continue,
            },
            _ => continue,
        };
        let to = match state.board.forward_of(from) {
            Some(to) if !state.board.is_occupied(to) => to,
            _ => continue,
        };
        state.board.clear_occupant(from);
        if let Err(err) = state.board.set_occupant(to, id) {
            // Topology is static and the slot was just checked; only a
            // bug lands here. Put the unit back and keep the turn alive.
            log::error!("movement rejected for {id:?}: {err}");
            let _ = state.board.set_occupant(from, id);
            continue;
        }
        if let Some(unit) = state.units.get_mut(id) {
            unit.slot = Some(to.index);
        }
        log::debug!("{id:?} advanced {} -> {}", from.index, to.index);
        observer.unit_moved(id, from, to);
    }
}

/// Supporters buff the occupant of their forward slot. The effect is
/// the target's load-time support entry; one application per supporter.
fn support_phase(state: &mut GameState, snapshot: &[UnitId], observer: &mut dyn GameObserver) {
    for &id in snapshot {
        let (slot, heal_amount) = match state.units.get(id) {
            Some(u) if u.is_alive() && u.pattern == AttackPattern::SupportOnly => match u.slot {
                Some(index) => (SlotId::new(u.owner, index), u.support_heal),
                None => continue,
            },
            _ => continue,
        };
        let target_id = match state
            .board
            .forward_of(slot)
            .and_then(|fwd| state.board.occupant(fwd))
        {
            Some(t) => t,
            None => continue,
        };
        let target = match state.units.get_mut(target_id) {
            Some(t) if t.is_alive() => t,
            _ => continue,
        };
        match target.support_effect {
            SupportEffect::Block => {
                target.buffs.block = true;
                observer.buff_changed(target_id, BuffKind::Block, true);
            }
            SupportEffect::Mend => {
                let hp = target.heal(heal_amount);
                observer.hp_changed(target_id, hp);
            }
            SupportEffect::Rebirth => {
                target.buffs.rebirth = true;
                observer.buff_changed(target_id, BuffKind::Rebirth, true);
            }
            SupportEffect::Ignite { bonus } => {
                target.buffs.ignite = Some(bonus);
                let attack = target.effective_attack();
                observer.buff_changed(target_id, BuffKind::Ignite, true);
                observer.attack_changed(target_id, attack);
            }
            SupportEffect::None => {}
        }
        log::debug!("{id:?} supported {target_id:?}");
    }
}

/// Every non-support unit attacks its resolved target, or the opposing
/// base when no unit target exists. Stops once the game-over latch is
/// set.
fn attack_phase(state: &mut GameState, snapshot: &[UnitId], observer: &mut dyn GameObserver) {
    for &id in snapshot {
        if state.game_over {
            break;
        }
        let (attacker_side, amount, target) = match state.units.get(id) {
            Some(u)
                if u.is_alive()
                    && u.pattern != AttackPattern::SupportOnly
                    && u.slot.is_some() =>
            {
                (u.owner, u.effective_attack(), find_target(&state.board, u))
            }
            _ => continue,
        };
        match target {
            Some(target_id) => deal_damage(state, target_id, amount, observer),
            None => deal_base_damage(state, attacker_side.opponent(), amount, observer),
        }
    }
}

/// Resolve an attacker's target per its pattern.
///
/// TargetThroughLine scans the line opposite the attacker's own and
/// never falls back to standard targeting. Standard and flexible
/// attackers hit the directly-opposite slot; a flexible attacker whose
/// lane is clear probes its list neighbours on the opposing side and
/// takes the first occupied back-line slot. No target means the damage
/// goes to the opposing base.
pub(crate) fn find_target(board: &Board, attacker: &DeployedUnit) -> Option<UnitId> {
    let index = attacker.slot?;
    let own = SlotId::new(attacker.owner, index);
    let foe = attacker.owner.opponent();

    match attacker.pattern {
        AttackPattern::SupportOnly => None,
        AttackPattern::TargetThroughLine => {
            let scan_line = match board.line(own)? {
                Line::Front => Line::Back,
                Line::Back => Line::Front,
            };
            board.first_occupied_in_line(foe, scan_line)
        }
        AttackPattern::StandardFront | AttackPattern::FlexibleFront => {
            let opposite = own.opposite();
            if let Some(target) = board.occupant(opposite) {
                return Some(target);
            }
            if attacker.pattern == AttackPattern::FlexibleFront {
                for probe_index in [index.checked_sub(1), index.checked_add(1)]
                    .into_iter()
                    .flatten()
                {
                    let probe = SlotId::new(foe, probe_index);
                    if board.line(probe) == Some(Line::Back) {
                        if let Some(target) = board.occupant(probe) {
                            return Some(target);
                        }
                    }
                }
            }
            None
        }
    }
}

/// Apply one damage instance to a unit and run death cleanup when it
/// turns lethal.
pub(crate) fn deal_damage(
    state: &mut GameState,
    target_id: UnitId,
    amount: i32,
    observer: &mut dyn GameObserver,
) {
    let outcome = match state.units.get_mut(target_id) {
        Some(target) => target.apply_damage(amount),
        None => return,
    };
    match outcome {
        DamageOutcome::Blocked => {
            log::debug!("{target_id:?} blocked {amount} damage");
            observer.buff_changed(target_id, BuffKind::Block, false);
        }
        DamageOutcome::Harmed { hp } => {
            observer.hp_changed(target_id, hp);
        }
        DamageOutcome::Rebirthed => {
            log::debug!("{target_id:?} survived a lethal hit through rebirth");
            observer.buff_changed(target_id, BuffKind::Rebirth, false);
            observer.hp_changed(target_id, 1);
        }
        DamageOutcome::Lethal => {
            observer.hp_changed(target_id, 0);
            destroy_unit(state, target_id, observer);
        }
    }
}

/// Remove a dead unit from its slot, the roster and the pool. The death
/// latch in `apply_damage` plus the pool removal make this safe to hit
/// more than once.
fn destroy_unit(state: &mut GameState, id: UnitId, observer: &mut dyn GameObserver) {
    if let Some(slot) = state
        .units
        .get(id)
        .and_then(|u| u.slot.map(|index| SlotId::new(u.owner, index)))
    {
        state.board.clear_occupant(slot);
    }
    state.deregister(id);
    if state.units.remove(id).is_some() {
        log::info!("{id:?} destroyed");
        observer.unit_died(id);
    }
}

/// Damage a side's base health; depletion latches game over.
fn deal_base_damage(
    state: &mut GameState,
    defender: Side,
    amount: i32,
    observer: &mut dyn GameObserver,
) {
    if state.game_over {
        return;
    }
    let hp = state.health.damage(defender, amount);
    log::debug!("{defender:?} base took {amount} damage, {hp} left");
    observer.base_health_changed(defender, hp);
    if state.health.depleted(defender) {
        let winner = defender.opponent();
        state.set_game_over(winner);
        observer.game_over(winner);
    }
}
