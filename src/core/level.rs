//! Level builder: fixed ASCII maze layout to static wall rects.

use crate::types::{Rect, TILE_SIZE};

/// The maze. `#` is an indestructible wall tile, `.` is floor.
/// 13 rows of 13 columns; the outer ring is solid.
pub const LAYOUT: [&str; 13] = [
    "#############",
    "#...........#",
    "#.###.###.#.#",
    "#...........#",
    "#.###.#.###.#",
    "#...........#",
    "#.###.###.#.#",
    "#...........#",
    "#.#.###.###.#",
    "#...........#",
    "#.###.#.###.#",
    "#...........#",
    "#############",
];

/// Build the obstacle set for the fixed layout: one tile-sized rect per
/// `#` cell at (col * 32, row * 32). Deterministic; produces the same set
/// on every call.
pub fn build_level() -> Vec<Rect> {
    let mut obstacles = Vec::new();
    for (row, line) in LAYOUT.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            if ch == '#' {
                obstacles.push(Rect::new(
                    col as i32 * TILE_SIZE,
                    row as i32 * TILE_SIZE,
                    TILE_SIZE,
                    TILE_SIZE,
                ));
            }
        }
    }
    obstacles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GRID_HEIGHT, GRID_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};

    #[test]
    fn test_layout_is_13_by_13() {
        assert_eq!(LAYOUT.len(), GRID_HEIGHT as usize);
        for row in LAYOUT {
            assert_eq!(row.len(), GRID_WIDTH as usize);
        }
    }

    #[test]
    fn test_documented_layout_has_83_walls() {
        assert_eq!(build_level().len(), 83);
    }

    #[test]
    fn test_walls_are_tile_aligned_and_in_bounds() {
        for wall in build_level() {
            assert_eq!(wall.w, TILE_SIZE);
            assert_eq!(wall.h, TILE_SIZE);
            assert_eq!(wall.x % TILE_SIZE, 0);
            assert_eq!(wall.y % TILE_SIZE, 0);
            assert!(wall.x >= 0 && wall.x + wall.w <= SCREEN_WIDTH);
            assert!(wall.y >= 0 && wall.y + wall.h <= SCREEN_HEIGHT);
        }
    }

    #[test]
    fn test_outer_ring_is_solid() {
        let walls = build_level();
        for i in 0..GRID_WIDTH {
            assert!(walls.contains(&Rect::new(i * TILE_SIZE, 0, TILE_SIZE, TILE_SIZE)));
            assert!(walls.contains(&Rect::new(
                i * TILE_SIZE,
                (GRID_HEIGHT - 1) * TILE_SIZE,
                TILE_SIZE,
                TILE_SIZE
            )));
            assert!(walls.contains(&Rect::new(0, i * TILE_SIZE, TILE_SIZE, TILE_SIZE)));
            assert!(walls.contains(&Rect::new(
                (GRID_WIDTH - 1) * TILE_SIZE,
                i * TILE_SIZE,
                TILE_SIZE,
                TILE_SIZE
            )));
        }
    }
}
