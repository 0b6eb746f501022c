//! Tank capability set and the controller that drives it.
//!
//! There is one `Tank` type for both combatants; what differs is the
//! attached [`Controller`] variant, chosen once at construction. No
//! trait objects, no inheritance-style specialization.

use crate::core::bullet::BulletSet;
use crate::core::rng::SimpleRng;
use crate::types::{
    Direction, Rect, ENEMY_DECISION_TICKS, ENEMY_FIRE_CHANCE, FIRE_COOLDOWN_TICKS, TANK_SPEED,
    TILE_SIZE,
};

/// A grid-aligned tank: tile-sized box, facing direction, fire cooldown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tank {
    pub rect: Rect,
    pub facing: Direction,
    pub cooldown: u32,
    pub alive: bool,
}

impl Tank {
    /// New tank with its top-left corner at (x, y), facing up, ready to
    /// fire.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            rect: Rect::new(x, y, TILE_SIZE, TILE_SIZE),
            facing: Direction::Up,
            cooldown: 0,
            alive: true,
        }
    }

    /// Try to move one speed step in `direction`.
    ///
    /// The move is all-or-nothing: if the candidate box overlaps any
    /// obstacle the tank keeps both its position and its facing. Facing
    /// only turns on an accepted move.
    pub fn attempt_move(&mut self, direction: Direction, obstacles: &[Rect]) -> bool {
        let (dx, dy) = direction.vector();
        let candidate = self.rect.offset(dx * TANK_SPEED, dy * TANK_SPEED);
        if obstacles.iter().any(|ob| candidate.intersects(ob)) {
            return false;
        }
        self.rect = candidate;
        self.facing = direction;
        true
    }

    /// Fire one bullet from the tank center along the current facing.
    ///
    /// A no-op while the cooldown is running. The cooldown is independent
    /// of the bullet's lifetime: it reopens after half a second whether or
    /// not the previous bullet is still in flight.
    pub fn try_fire(&mut self, bullets: &mut BulletSet) -> bool {
        if self.cooldown > 0 {
            return false;
        }
        let (cx, cy) = self.rect.center();
        bullets.spawn(cx, cy, self.facing);
        self.cooldown = FIRE_COOLDOWN_TICKS;
        true
    }

    /// Per-tick cooldown decrement, floored at zero.
    pub fn tick_cooldown(&mut self) {
        self.cooldown = self.cooldown.saturating_sub(1);
    }
}

/// Update path selector for a tank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    /// Driven externally through `GameAction`s; the per-tick update only
    /// runs the cooldown.
    Player,
    /// Random-walk AI: every `ENEMY_DECISION_TICKS` ticks pick a uniform
    /// random direction to move and independently fire with a small
    /// probability.
    RandomWalk { decision_timer: u32 },
}

impl Controller {
    /// Random-walk controller with the timer at zero: the first decision
    /// happens on the very first tick, not after a full interval.
    pub fn random_walk() -> Self {
        Controller::RandomWalk { decision_timer: 0 }
    }

    /// Advance `tank` one tick. Draw order is fixed (direction first,
    /// then the fire chance) so a seed fully determines the AI.
    pub fn update(
        &mut self,
        tank: &mut Tank,
        obstacles: &[Rect],
        bullets: &mut BulletSet,
        rng: &mut SimpleRng,
    ) {
        tank.tick_cooldown();
        match self {
            Controller::Player => {}
            Controller::RandomWalk { decision_timer } => {
                if *decision_timer == 0 {
                    let direction = Direction::ALL[rng.next_range(4) as usize];
                    // A blocked move is silent: no retry this tick.
                    tank.attempt_move(direction, obstacles);
                    if rng.chance(ENEMY_FIRE_CHANCE) {
                        tank.try_fire(bullets);
                    }
                    *decision_timer = ENEMY_DECISION_TICKS;
                } else {
                    *decision_timer -= 1;
                }
            }
        }
    }
}
