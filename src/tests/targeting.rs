use crate::battle::find_target;
use crate::tests::{empty_state, place, test_def};
use crate::types::{AttackPattern, Side};

#[test]
fn standard_front_hits_the_directly_opposite_slot() {
    let mut state = empty_state();
    let attacker_def = test_def(1, "Attacker", AttackPattern::StandardFront);
    let target_def = test_def(2, "Target", AttackPattern::StandardFront);

    let attacker = place(&mut state, &attacker_def, Side::Player, 0);
    let target = place(&mut state, &target_def, Side::Enemy, 0);
    // A back-line enemy in the same lane is not considered
    place(&mut state, &target_def, Side::Enemy, 1);

    let unit = state.units.get(attacker).expect("attacker placed");
    assert_eq!(find_target(&state.board, unit), Some(target));
}

#[test]
fn standard_front_with_empty_opposite_has_no_target() {
    let mut state = empty_state();
    let attacker_def = test_def(1, "Attacker", AttackPattern::StandardFront);
    let bystander_def = test_def(2, "Bystander", AttackPattern::StandardFront);

    let attacker = place(&mut state, &attacker_def, Side::Player, 0);
    // Enemies exist, just not opposite
    place(&mut state, &bystander_def, Side::Enemy, 1);
    place(&mut state, &bystander_def, Side::Enemy, 2);

    let unit = state.units.get(attacker).expect("attacker placed");
    assert_eq!(find_target(&state.board, unit), None);
}

#[test]
fn through_line_front_attacker_scans_the_enemy_back_line() {
    let mut state = empty_state();
    let attacker_def = test_def(1, "Piercer", AttackPattern::TargetThroughLine);
    let front_def = test_def(2, "Wall", AttackPattern::StandardFront);
    let back_def = test_def(3, "Lurker", AttackPattern::StandardFront);

    let attacker = place(&mut state, &attacker_def, Side::Player, 0);
    // The directly-opposite slot is occupied but must be skipped
    place(&mut state, &front_def, Side::Enemy, 0);
    let back = place(&mut state, &back_def, Side::Enemy, 3);

    let unit = state.units.get(attacker).expect("attacker placed");
    assert_eq!(find_target(&state.board, unit), Some(back));
}

#[test]
fn through_line_back_attacker_scans_the_enemy_front_line() {
    let mut state = empty_state();
    let attacker_def = test_def(1, "Piercer", AttackPattern::TargetThroughLine);
    let front_def = test_def(2, "Wall", AttackPattern::StandardFront);

    let attacker = place(&mut state, &attacker_def, Side::Player, 1);
    place(&mut state, &front_def, Side::Enemy, 1);
    let front = place(&mut state, &front_def, Side::Enemy, 4);

    let unit = state.units.get(attacker).expect("attacker placed");
    // First occupied front slot in layout order is index 4
    assert_eq!(find_target(&state.board, unit), Some(front));
}

#[test]
fn through_line_never_falls_back_to_standard_targeting() {
    let mut state = empty_state();
    let attacker_def = test_def(1, "Piercer", AttackPattern::TargetThroughLine);
    let front_def = test_def(2, "Wall", AttackPattern::StandardFront);

    let attacker = place(&mut state, &attacker_def, Side::Player, 0);
    // Only front-line enemies; the back line is empty
    place(&mut state, &front_def, Side::Enemy, 0);
    place(&mut state, &front_def, Side::Enemy, 2);

    let unit = state.units.get(attacker).expect("attacker placed");
    assert_eq!(find_target(&state.board, unit), None);
}

#[test]
fn flexible_front_prefers_the_opposite_slot() {
    let mut state = empty_state();
    let attacker_def = test_def(1, "Flexible", AttackPattern::FlexibleFront);
    let target_def = test_def(2, "Target", AttackPattern::StandardFront);

    let attacker = place(&mut state, &attacker_def, Side::Player, 2);
    let opposite = place(&mut state, &target_def, Side::Enemy, 2);
    place(&mut state, &target_def, Side::Enemy, 1);

    let unit = state.units.get(attacker).expect("attacker placed");
    assert_eq!(find_target(&state.board, unit), Some(opposite));
}

#[test]
fn flexible_front_probes_adjacent_back_slots_when_its_lane_is_clear() {
    let mut state = empty_state();
    let attacker_def = test_def(1, "Flexible", AttackPattern::FlexibleFront);
    let target_def = test_def(2, "Target", AttackPattern::StandardFront);

    let attacker = place(&mut state, &attacker_def, Side::Player, 2);
    let lower = place(&mut state, &target_def, Side::Enemy, 1);
    place(&mut state, &target_def, Side::Enemy, 3);

    let unit = state.units.get(attacker).expect("attacker placed");
    // Index 1 is probed before index 3
    assert_eq!(find_target(&state.board, unit), Some(lower));
}

#[test]
fn flexible_front_ignores_adjacent_front_slots() {
    let mut state = empty_state();
    let attacker_def = test_def(1, "Flexible", AttackPattern::FlexibleFront);
    let target_def = test_def(2, "Target", AttackPattern::StandardFront);

    // Attacker on the lane-0 back slot: neighbours 0 and 2 are fronts
    let attacker = place(&mut state, &attacker_def, Side::Player, 1);
    place(&mut state, &target_def, Side::Enemy, 0);
    place(&mut state, &target_def, Side::Enemy, 2);

    let unit = state.units.get(attacker).expect("attacker placed");
    assert_eq!(find_target(&state.board, unit), None);
}

#[test]
fn flexible_front_with_nothing_adjacent_deals_base_damage() {
    let mut state = empty_state();
    let attacker_def = test_def(1, "Flexible", AttackPattern::FlexibleFront);

    let attacker = place(&mut state, &attacker_def, Side::Player, 2);

    let unit = state.units.get(attacker).expect("attacker placed");
    assert_eq!(find_target(&state.board, unit), None);
}

#[test]
fn support_only_never_targets() {
    let mut state = empty_state();
    let support_def = test_def(1, "Helper", AttackPattern::SupportOnly);
    let target_def = test_def(2, "Target", AttackPattern::StandardFront);

    let supporter = place(&mut state, &support_def, Side::Player, 0);
    place(&mut state, &target_def, Side::Enemy, 0);

    let unit = state.units.get(supporter).expect("supporter placed");
    assert_eq!(find_target(&state.board, unit), None);
}

#[test]
fn edge_slot_probe_does_not_wrap() {
    let mut state = empty_state();
    let attacker_def = test_def(1, "Flexible", AttackPattern::FlexibleFront);
    let target_def = test_def(2, "Target", AttackPattern::StandardFront);

    // Front slot 0: only neighbour is index 1
    let attacker = place(&mut state, &attacker_def, Side::Player, 0);
    place(&mut state, &target_def, Side::Enemy, 5);

    let unit = state.units.get(attacker).expect("attacker placed");
    assert_eq!(find_target(&state.board, unit), None);

    let neighbour = place(&mut state, &target_def, Side::Enemy, 1);
    let unit = state.units.get(attacker).expect("attacker placed");
    assert_eq!(find_target(&state.board, unit), Some(neighbour));
}
