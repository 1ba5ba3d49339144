use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::SlotId;
use crate::bot::{EnemyAction, EnemyPlan};
use crate::catalog::Catalog;
use crate::events::NullObserver;
use crate::state::GameState;
use crate::tests::{place, test_config, test_def};
use crate::types::{AttackPattern, Side};

fn enemy_turn_state(round: i32) -> GameState {
    let mut state = GameState::new(&test_config());
    state.turn.owner = Side::Enemy;
    state.turn.round = round;
    state.ledger.refill(round);
    state
}

fn cheap_catalog() -> Catalog {
    Catalog::new(vec![test_def(1, "Cheap", AttackPattern::StandardFront)])
}

fn drive(
    plan: &mut EnemyPlan,
    state: &mut GameState,
    catalog: &Catalog,
    rng: &mut StdRng,
) -> (usize, EnemyAction) {
    let mut deployed = 0;
    loop {
        let action = plan.advance(state, catalog, rng, &mut NullObserver, 3);
        match action {
            EnemyAction::Deployed { .. } => deployed += 1,
            _ => return (deployed, action),
        }
    }
}

#[test]
fn plays_up_to_the_per_turn_cap() {
    let mut state = enemy_turn_state(10);
    let catalog = cheap_catalog();
    let mut rng = StdRng::seed_from_u64(1);
    let mut plan = EnemyPlan::new();

    let (deployed, last) = drive(&mut plan, &mut state, &catalog, &mut rng);

    assert_eq!(deployed, 3);
    assert_eq!(last, EnemyAction::Finished);
    assert_eq!(state.roster_snapshot(Side::Enemy).len(), 3);
    assert_eq!(state.ledger.current(Side::Enemy), 7);
    // First three empty slots, in order
    for index in 0..3 {
        assert!(state.board.is_occupied(SlotId::new(Side::Enemy, index)));
    }
}

#[test]
fn stops_when_the_budget_runs_dry() {
    let mut state = enemy_turn_state(1);
    let catalog = cheap_catalog();
    let mut rng = StdRng::seed_from_u64(1);
    let mut plan = EnemyPlan::new();

    let (deployed, last) = drive(&mut plan, &mut state, &catalog, &mut rng);

    assert_eq!(deployed, 1);
    assert_eq!(last, EnemyAction::Finished);
    assert_eq!(state.ledger.current(Side::Enemy), 0);
}

#[test]
fn unaffordable_picks_are_skipped_not_fatal() {
    let mut state = enemy_turn_state(3);
    let mut expensive = test_def(1, "Pricey", AttackPattern::StandardFront);
    expensive.cost = 5;
    let catalog = Catalog::new(vec![expensive]);
    let mut rng = StdRng::seed_from_u64(1);
    let mut plan = EnemyPlan::new();

    let (deployed, last) = drive(&mut plan, &mut state, &catalog, &mut rng);

    assert_eq!(deployed, 0);
    assert_eq!(last, EnemyAction::Finished);
    // Budget untouched
    assert_eq!(state.ledger.current(Side::Enemy), 3);
}

#[test]
fn occupied_slots_are_passed_over() {
    let mut state = enemy_turn_state(10);
    let def = test_def(9, "Sitter", AttackPattern::StandardFront);
    place(&mut state, &def, Side::Enemy, 0);
    place(&mut state, &def, Side::Enemy, 1);

    let catalog = cheap_catalog();
    let mut rng = StdRng::seed_from_u64(1);
    let mut plan = EnemyPlan::new();
    let (deployed, _) = drive(&mut plan, &mut state, &catalog, &mut rng);

    assert_eq!(deployed, 3);
    for index in 2..5 {
        assert!(state.board.is_occupied(SlotId::new(Side::Enemy, index)));
    }
    assert!(!state.board.is_occupied(SlotId::new(Side::Enemy, 5)));
}

#[test]
fn aborts_when_the_game_over_latch_is_set() {
    let mut state = enemy_turn_state(10);
    state.set_game_over(Side::Player);

    let catalog = cheap_catalog();
    let mut rng = StdRng::seed_from_u64(1);
    let mut plan = EnemyPlan::new();
    let action = plan.advance(&mut state, &catalog, &mut rng, &mut NullObserver, 3);

    assert_eq!(action, EnemyAction::Aborted);
    assert!(state.roster_snapshot(Side::Enemy).is_empty());
}

#[test]
fn empty_catalog_finishes_without_playing() {
    let mut state = enemy_turn_state(10);
    let catalog = Catalog::new(vec![]);
    let mut rng = StdRng::seed_from_u64(1);
    let mut plan = EnemyPlan::new();

    let (deployed, last) = drive(&mut plan, &mut state, &catalog, &mut rng);

    assert_eq!(deployed, 0);
    assert_eq!(last, EnemyAction::Finished);
}
