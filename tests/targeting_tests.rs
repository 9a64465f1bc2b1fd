use std::collections::HashSet;

use salvo::{optimal_attack_coordinate, Coordinate, TargetMode, Targeting, BOARD_CELLS};

fn coords(list: &[(i32, i32)]) -> Vec<Coordinate> {
    list.iter().copied().map(Coordinate::from).collect()
}

fn as_set(list: &[Coordinate]) -> HashSet<Coordinate> {
    list.iter().copied().collect()
}

/// Picker that records every slice it is offered and returns `items[index]`.
struct MockPicker {
    index: usize,
    calls: Vec<Vec<Coordinate>>,
}

impl MockPicker {
    fn returning(index: usize) -> Self {
        Self { index, calls: Vec::new() }
    }

    fn pick(&mut self) -> impl FnMut(&[Coordinate]) -> Option<Coordinate> + '_ {
        move |items: &[Coordinate]| {
            self.calls.push(items.to_vec());
            items.get(self.index).copied()
        }
    }
}

#[test]
fn test_hunt_picks_from_whole_pool() {
    let pool = coords(&[(2, 2), (2, 3), (2, 4), (9, 2), (9, 3)]);
    let mut found = Vec::new();
    let mut picker = MockPicker::returning(1);
    let target = optimal_attack_coordinate(&pool, &mut found, picker.pick());
    assert_eq!(target, Some(Coordinate::new(2, 3)));
    assert_eq!(picker.calls, vec![pool.clone()]);
}

#[test]
fn test_single_hit_probes_neighbours() {
    let neighbours = coords(&[(2, 3), (3, 2), (3, 4), (4, 3)]);
    let mut pool = coords(&[(0, 0), (0, 1), (0, 2), (5, 3)]);
    pool.extend(&neighbours);
    let mut found = coords(&[(3, 3)]);
    let mut picker = MockPicker::returning(1);
    let target = optimal_attack_coordinate(&pool, &mut found, picker.pick()).unwrap();
    assert_eq!(picker.calls.len(), 1);
    assert_eq!(as_set(&picker.calls[0]), as_set(&neighbours));
    assert!(neighbours.contains(&target));
    assert_eq!(found.len(), 1);
}

#[test]
fn test_single_hit_without_open_neighbours_returns_to_hunt() {
    let pool = coords(&[(0, 0), (0, 1), (0, 2)]);
    let mut found = coords(&[(3, 3)]);
    let mut picker = MockPicker::returning(0);
    let target = optimal_attack_coordinate(&pool, &mut found, picker.pick());
    assert_eq!(target, Some(Coordinate::new(0, 0)));
    assert!(found.is_empty());
    assert_eq!(picker.calls, vec![pool.clone()]);
}

#[test]
fn test_vertical_line_extends_both_ends() {
    let pool = coords(&[(0, 0), (0, 1), (0, 2), (4, 1), (4, 2), (2, 3), (5, 3)]);
    let mut found = coords(&[(3, 3), (4, 3)]);
    let mut picker = MockPicker::returning(0);
    let target = optimal_attack_coordinate(&pool, &mut found, picker.pick()).unwrap();
    assert_eq!(picker.calls.len(), 1);
    assert_eq!(as_set(&picker.calls[0]), as_set(&coords(&[(2, 3), (5, 3)])));
    assert!([Coordinate::new(2, 3), Coordinate::new(5, 3)].contains(&target));
}

#[test]
fn test_line_without_extensions_is_sunk() {
    let pool = coords(&[(0, 0), (0, 1), (0, 2), (4, 1), (4, 2)]);
    let mut found = coords(&[(3, 3), (4, 3)]);
    let mut picker = MockPicker::returning(0);
    let target = optimal_attack_coordinate(&pool, &mut found, picker.pick());
    assert!(found.is_empty());
    assert_eq!(picker.calls, vec![pool.clone()]);
    assert_eq!(target, Some(Coordinate::new(0, 0)));
}

#[test]
fn test_horizontal_line_extends_both_ends() {
    let pool = coords(&[(0, 0), (0, 1), (0, 2), (4, 1), (5, 3), (4, 2), (4, 5)]);
    let mut found = coords(&[(4, 3), (4, 4)]);
    let mut picker = MockPicker::returning(0);
    optimal_attack_coordinate(&pool, &mut found, picker.pick()).unwrap();
    assert_eq!(picker.calls.len(), 1);
    assert_eq!(as_set(&picker.calls[0]), as_set(&coords(&[(4, 2), (4, 5)])));
}

#[test]
fn test_single_extension_skips_picker() {
    let pool = coords(&[(0, 0), (0, 1), (0, 2), (4, 1), (5, 3), (4, 5)]);
    let mut found = coords(&[(4, 3), (4, 4)]);
    let mut picker = MockPicker::returning(0);
    let target = optimal_attack_coordinate(&pool, &mut found, picker.pick());
    assert_eq!(target, Some(Coordinate::new(4, 5)));
    assert!(picker.calls.is_empty());
    assert_eq!(found.len(), 2);
}

#[test]
fn test_extension_uses_line_ends_not_insertion_order() {
    let pool = coords(&[(1, 6), (1, 2), (0, 0)]);
    // hit in the middle first, then either side
    let mut found = coords(&[(1, 4), (1, 5), (1, 3)]);
    let mut picker = MockPicker::returning(1);
    optimal_attack_coordinate(&pool, &mut found, picker.pick()).unwrap();
    assert_eq!(as_set(&picker.calls[0]), as_set(&coords(&[(1, 6), (1, 2)])));
}

#[test]
fn test_max_length_ship_is_done() {
    let pool = coords(&[(0, 0), (0, 1), (0, 2), (4, 5)]);
    let mut found = coords(&[(4, 0), (4, 1), (4, 2), (4, 3), (4, 4)]);
    let mut picker = MockPicker::returning(0);
    let target = optimal_attack_coordinate(&pool, &mut found, picker.pick());
    assert!(found.is_empty());
    assert_eq!(picker.calls, vec![pool.clone()]);
    assert_eq!(target, Some(Coordinate::new(0, 0)));
}

#[test]
fn test_extreme_coordinates_do_not_overflow() {
    let far = Coordinate::new(i32::MIN, i32::MIN);
    let pool = vec![far, Coordinate::new(0, 0)];

    let mut found = vec![Coordinate::new(i32::MAX, i32::MAX)];
    let mut picker = MockPicker::returning(0);
    let target = optimal_attack_coordinate(&pool, &mut found, picker.pick());
    assert_eq!(target, Some(far));
    assert!(found.is_empty());

    let mut found = vec![
        Coordinate::new(i32::MAX, i32::MAX),
        Coordinate::new(i32::MAX - 1, i32::MAX),
    ];
    let mut picker = MockPicker::returning(1);
    let target = optimal_attack_coordinate(&pool, &mut found, picker.pick());
    assert_eq!(target, Some(Coordinate::new(0, 0)));
    assert!(found.is_empty());

    let mut found = vec![
        Coordinate::new(i32::MIN, i32::MIN + 1),
        Coordinate::new(i32::MIN, i32::MIN + 2),
    ];
    let mut picker = MockPicker::returning(0);
    let target = optimal_attack_coordinate(&pool, &mut found, picker.pick());
    assert_eq!(target, Some(far));
    assert_eq!(found.len(), 2);
    assert!(picker.calls.is_empty());
}

#[test]
fn test_empty_pool_yields_none() {
    let mut found = Vec::new();
    let mut picker = MockPicker::returning(0);
    assert_eq!(optimal_attack_coordinate(&[], &mut found, picker.pick()), None);
}

#[test]
fn test_update_attack_history_hit() {
    let mut targeting = Targeting::new();
    let target = Coordinate::new(0, 1);
    targeting.update_attack_history(target, true);
    assert_eq!(targeting.found_ship_coordinates(), &[target]);
    assert!(!targeting.attackable_coordinates().contains(&target));
    assert_eq!(targeting.attackable_coordinates().len(), BOARD_CELLS - 1);
    assert_eq!(targeting.mode(), TargetMode::TargetUnknownOrientation);
}

#[test]
fn test_update_attack_history_miss() {
    let mut targeting = Targeting::new();
    let target = Coordinate::new(0, 1);
    targeting.update_attack_history(target, false);
    assert!(targeting.found_ship_coordinates().is_empty());
    assert!(!targeting.attackable_coordinates().contains(&target));
    assert_eq!(targeting.attackable_coordinates().len(), BOARD_CELLS - 1);
    assert_eq!(targeting.mode(), TargetMode::Hunt);
}

#[test]
fn test_mode_transitions() {
    let mut targeting = Targeting::new();
    targeting.update_attack_history(Coordinate::new(5, 5), true);
    targeting.update_attack_history(Coordinate::new(5, 6), true);
    assert_eq!(targeting.mode(), TargetMode::TargetKnownOrientation);

    // both ends already tried
    targeting.update_attack_history(Coordinate::new(5, 4), false);
    targeting.update_attack_history(Coordinate::new(5, 7), false);
    let mut picker = MockPicker::returning(0);
    let next = targeting.next_target(picker.pick());
    assert_eq!(targeting.mode(), TargetMode::Hunt);
    assert_eq!(next, Some(Coordinate::new(0, 0)));
    assert_eq!(picker.calls[0].len(), BOARD_CELLS - 4);
}
