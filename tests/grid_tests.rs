//! Grid tests - occupancy, bounds and removal

use factory_game::core::{Building, Grid};
use factory_game::types::{BuildingType, GRID_HEIGHT, GRID_WIDTH};

fn out_of_bounds_cells() -> Vec<(i32, i32)> {
    vec![
        (-1, 0),
        (0, -1),
        (-1, -1),
        (GRID_WIDTH, 0),
        (0, GRID_HEIGHT),
        (GRID_WIDTH, GRID_HEIGHT),
        (100, 100),
        (i32::MIN, 0),
        (0, i32::MAX),
    ]
}

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new();
    assert_eq!(grid.width(), GRID_WIDTH);
    assert_eq!(grid.height(), GRID_HEIGHT);

    for y in 0..GRID_HEIGHT {
        for x in 0..GRID_WIDTH {
            assert!(!grid.is_cell_occupied(x, y), "Cell ({}, {}) should be empty", x, y);
            assert_eq!(grid.get_building(x, y), None);
        }
    }
    assert_eq!(grid.occupied_count(), 0);
}

#[test]
fn test_out_of_bounds_is_never_occupied_and_rejects_placement() {
    let mut grid = Grid::new();
    for (x, y) in out_of_bounds_cells() {
        assert!(!grid.in_bounds(x, y));
        assert!(!grid.is_cell_occupied(x, y));
        assert!(!grid.place_building(Building::new(BuildingType::Factory, x, y)));
        assert_eq!(grid.get_building(x, y), None);
        assert!(!grid.remove_building(x, y));
    }
    assert_eq!(grid, Grid::new(), "grid must be unchanged");
}

#[test]
fn test_place_then_query_every_valid_cell() {
    for y in 0..GRID_HEIGHT {
        for x in 0..GRID_WIDTH {
            let mut grid = Grid::new();
            let kind = if (x + y) % 2 == 0 {
                BuildingType::Factory
            } else {
                BuildingType::Conveyor
            };
            assert!(grid.place_building(Building::new(kind, x, y)));
            assert!(grid.is_cell_occupied(x, y));
            assert_eq!(grid.get_building(x, y).map(|b| b.kind()), Some(kind));
            assert_eq!(grid.occupied_count(), 1);
        }
    }
}

#[test]
fn test_place_succeeds_when_cell_is_empty() {
    let mut grid = Grid::new();
    let building = Building::new(BuildingType::Factory, 0, 0);
    assert!(grid.place_building(building));
    assert!(grid.is_cell_occupied(0, 0));
    assert_eq!(grid.get_building(0, 0), Some(building));
}

#[test]
fn test_second_placement_is_rejected_and_first_kept() {
    let mut grid = Grid::new();
    let first = Building::new(BuildingType::Factory, 0, 0);
    let second = Building::new(BuildingType::Conveyor, 0, 0);
    assert!(grid.place_building(first));
    assert!(!grid.place_building(second));
    assert_eq!(grid.get_building(0, 0), Some(first));
    assert_eq!(grid.occupied_count(), 1);
}

#[test]
fn test_place_fails_when_out_of_bounds() {
    let mut grid = Grid::new();
    let building = Building::new(BuildingType::Factory, -1, 0);
    assert!(!grid.place_building(building));
    assert!(!grid.is_cell_occupied(-1, 0));
}

#[test]
fn test_remove_occupied_cell() {
    let mut grid = Grid::new();
    grid.place_building(Building::new(BuildingType::Conveyor, 7, 4));
    assert!(grid.remove_building(7, 4));
    assert!(!grid.is_cell_occupied(7, 4));
    assert_eq!(grid.get_building(7, 4), None);
}

#[test]
fn test_remove_empty_cell_is_a_no_op() {
    let mut grid = Grid::new();
    grid.place_building(Building::new(BuildingType::Factory, 1, 1));
    let before = grid.clone();

    assert!(!grid.remove_building(4, 4));
    assert_eq!(grid, before);
}

#[test]
fn test_cell_can_be_reused_after_removal() {
    let mut grid = Grid::new();
    grid.place_building(Building::new(BuildingType::Factory, 19, 14));
    assert!(grid.remove_building(19, 14));
    assert!(grid.place_building(Building::new(BuildingType::Conveyor, 19, 14)));
    assert_eq!(
        grid.get_building(19, 14).map(|b| b.kind()),
        Some(BuildingType::Conveyor)
    );
}

#[test]
fn test_stored_building_matches_its_cell() {
    let mut grid = Grid::new();
    grid.place_building(Building::new(BuildingType::Factory, 3, 9));
    grid.place_building(Building::new(BuildingType::Conveyor, 12, 0));

    for y in 0..GRID_HEIGHT {
        for x in 0..GRID_WIDTH {
            if let Some(b) = grid.get_building(x, y) {
                assert_eq!(b.position(), (x, y));
            }
        }
    }
}
