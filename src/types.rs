//! Core types shared across the application
//! This module contains pure data types and tuning constants with no
//! external dependencies.

/// World geometry. All simulation coordinates are in world units;
/// one maze tile is 32x32 units on a 13x13 grid.
pub const TILE_SIZE: i32 = 32;
pub const GRID_WIDTH: i32 = 13;
pub const GRID_HEIGHT: i32 = 13;
pub const SCREEN_WIDTH: i32 = GRID_WIDTH * TILE_SIZE;
pub const SCREEN_HEIGHT: i32 = GRID_HEIGHT * TILE_SIZE;

/// Game timing constants
pub const TICKS_PER_SECOND: u32 = 60;
pub const TICK_MS: u64 = 16;

/// Entity tuning (units per tick, ticks)
pub const TANK_SPEED: i32 = 2;
pub const BULLET_SPEED: i32 = 8;
pub const BULLET_SIZE: i32 = 8;
pub const FIRE_COOLDOWN_TICKS: u32 = TICKS_PER_SECOND / 2;
pub const ENEMY_DECISION_TICKS: u32 = TICKS_PER_SECOND / 4;
pub const ENEMY_FIRE_CHANCE: f64 = 0.02;

/// Cardinal facing/movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order used for indexing and for the player
    /// movement precedence (Up > Down > Left > Right).
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit movement vector for this direction.
    pub fn vector(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Index into [`Direction::ALL`].
    pub fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

/// Integer axis-aligned rectangle.
///
/// Intersection is strict overlap: rectangles that only share an edge do
/// not collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Square rect identified by its center point.
    pub fn from_center(cx: i32, cy: i32, size: i32) -> Self {
        Self::new(cx - size / 2, cy - size / 2, size, size)
    }

    /// This rect translated by (dx, dy).
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

/// Per-tick player commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Fire,
}

impl GameAction {
    /// Movement direction of this action, `None` for `Fire`.
    pub fn direction(self) -> Option<Direction> {
        match self {
            GameAction::MoveUp => Some(Direction::Up),
            GameAction::MoveDown => Some(Direction::Down),
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::Fire => None,
        }
    }

    pub fn from_direction(direction: Direction) -> Self {
        match direction {
            Direction::Up => GameAction::MoveUp,
            Direction::Down => GameAction::MoveDown,
            Direction::Left => GameAction::MoveLeft,
            Direction::Right => GameAction::MoveRight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_vectors_are_unit_steps() {
        assert_eq!(Direction::Up.vector(), (0, -1));
        assert_eq!(Direction::Down.vector(), (0, 1));
        assert_eq!(Direction::Left.vector(), (-1, 0));
        assert_eq!(Direction::Right.vector(), (1, 0));
    }

    #[test]
    fn test_direction_index_round_trips_through_all() {
        for dir in Direction::ALL {
            assert_eq!(Direction::ALL[dir.index()], dir);
        }
    }

    #[test]
    fn test_rect_overlap_is_strict() {
        let a = Rect::new(0, 0, 32, 32);
        let b = Rect::new(16, 16, 32, 32);
        let touching = Rect::new(32, 0, 32, 32);
        let apart = Rect::new(100, 100, 32, 32);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&touching), "shared edge must not collide");
        assert!(!a.intersects(&apart));
    }

    #[test]
    fn test_rect_from_center() {
        let r = Rect::from_center(100, 50, 8);
        assert_eq!(r, Rect::new(96, 46, 8, 8));
        assert_eq!(r.center(), (100, 50));
    }

    #[test]
    fn test_screen_covers_grid() {
        assert_eq!(SCREEN_WIDTH, 416);
        assert_eq!(SCREEN_HEIGHT, 416);
    }

    #[test]
    fn test_action_direction_round_trip() {
        for dir in Direction::ALL {
            assert_eq!(GameAction::from_direction(dir).direction(), Some(dir));
        }
        assert_eq!(GameAction::Fire.direction(), None);
    }
}
