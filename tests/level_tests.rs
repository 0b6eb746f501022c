//! Level builder determinism tests.

use tui_tanks::core::build_level;
use tui_tanks::types::{Rect, TILE_SIZE};

#[test]
fn test_build_level_is_deterministic_as_a_set() {
    let mut first = build_level();
    let mut second = build_level();

    // Order-independent set equality.
    let key = |r: &Rect| (r.x, r.y);
    first.sort_by_key(key);
    second.sort_by_key(key);
    assert_eq!(first, second);

    // And no duplicate tiles.
    first.dedup();
    assert_eq!(first.len(), 83);
}

#[test]
fn test_spawn_corridor_is_open() {
    // Row 1 between the border columns is floor; this is where the enemy
    // random-walks.
    let walls = build_level();
    for col in 1..12 {
        let tile = Rect::new(col * TILE_SIZE, TILE_SIZE, TILE_SIZE, TILE_SIZE);
        assert!(
            !walls.iter().any(|w| *w == tile),
            "expected floor at column {col}, row 1"
        );
    }
}
