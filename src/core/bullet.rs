//! Bullet entity and its owning arena.
//!
//! Bullets never remove themselves from a collection: they mark
//! themselves dead and [`BulletSet::compact`] purges dead entries once per
//! tick, so iteration order and indices stay stable within a tick.

use crate::types::{Direction, Rect, BULLET_SIZE, BULLET_SPEED, SCREEN_HEIGHT, SCREEN_WIDTH};

/// A fired projectile: an 8x8 box identified by its center, moving 8
/// units per tick along a fixed direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bullet {
    pub rect: Rect,
    pub direction: Direction,
    pub alive: bool,
}

impl Bullet {
    pub fn new(center_x: i32, center_y: i32, direction: Direction) -> Self {
        Self {
            rect: Rect::from_center(center_x, center_y, BULLET_SIZE),
            direction,
            alive: true,
        }
    }

    /// Move one full speed step, then mark dead when fully outside the
    /// screen or overlapping any obstacle.
    ///
    /// The step is applied once, not sub-stepped: a bullet can tunnel
    /// through an obstacle thinner than its per-tick travel. Not
    /// observable with 32-unit tiles, and deliberately kept that way.
    pub fn advance(&mut self, obstacles: &[Rect]) {
        let (dx, dy) = self.direction.vector();
        self.rect = self.rect.offset(dx * BULLET_SPEED, dy * BULLET_SPEED);

        let off_screen = self.rect.x + self.rect.w < 0
            || self.rect.x > SCREEN_WIDTH
            || self.rect.y + self.rect.h < 0
            || self.rect.y > SCREEN_HEIGHT;
        if off_screen || obstacles.iter().any(|ob| self.rect.intersects(ob)) {
            self.alive = false;
        }
    }
}

/// Arena of active bullets.
#[derive(Debug, Clone, Default)]
pub struct BulletSet {
    bullets: Vec<Bullet>,
}

impl BulletSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bullet centered at (cx, cy). Unbounded: callers gate firing
    /// through the tank cooldown, not through this arena.
    pub fn spawn(&mut self, cx: i32, cy: i32, direction: Direction) {
        self.bullets.push(Bullet::new(cx, cy, direction));
    }

    pub fn live(&self) -> impl Iterator<Item = &Bullet> {
        self.bullets.iter().filter(|b| b.alive)
    }

    pub fn live_mut(&mut self) -> impl Iterator<Item = &mut Bullet> {
        self.bullets.iter_mut().filter(|b| b.alive)
    }

    pub fn live_count(&self) -> usize {
        self.live().count()
    }

    /// Purge dead entries. Called once per tick, after the collision
    /// sweep, so nothing is removed while anything iterates.
    pub fn compact(&mut self) {
        self.bullets.retain(|b| b.alive);
    }

    /// Total entries including dead ones awaiting compaction.
    pub fn len(&self) -> usize {
        self.bullets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bullets.is_empty()
    }
}
