//! Game state module - the complete per-tick simulation.
//!
//! `GameState` owns every entity for the whole session and advances them
//! in a fixed order, so collision outcomes are deterministic for a given
//! seed and action stream. Pacing, input and rendering live in the shell
//! around it.

use crate::core::bullet::BulletSet;
use crate::core::level::build_level;
use crate::core::rng::SimpleRng;
use crate::core::tank::{Controller, Tank};
use crate::types::{GameAction, Rect, TILE_SIZE};

/// Player spawn tile (6, 12) and enemy spawn (6 * 32, 32). The player
/// spawn overlaps the bottom wall row; that quirk is deliberate and
/// pinned by tests.
const PLAYER_SPAWN: (i32, i32) = (6 * TILE_SIZE, 12 * TILE_SIZE);
const ENEMY_SPAWN: (i32, i32) = (6 * TILE_SIZE, TILE_SIZE);

/// Complete game state.
#[derive(Debug, Clone)]
pub struct GameState {
    pub obstacles: Vec<Rect>,
    pub player: Tank,
    pub enemy: Tank,
    pub bullets: BulletSet,
    /// Completed ticks since the session started.
    pub tick_count: u64,
    player_ctl: Controller,
    enemy_ctl: Controller,
    rng: SimpleRng,
}

impl GameState {
    /// Create a session with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        Self {
            obstacles: build_level(),
            player: Tank::new(PLAYER_SPAWN.0, PLAYER_SPAWN.1),
            enemy: Tank::new(ENEMY_SPAWN.0, ENEMY_SPAWN.1),
            bullets: BulletSet::new(),
            tick_count: 0,
            player_ctl: Controller::Player,
            enemy_ctl: Controller::random_walk(),
            rng: SimpleRng::new(seed),
        }
    }

    /// Apply one player command. Movement is an `attempt_move` (silently
    /// rejected on walls), `Fire` a `try_fire` (silently rejected on
    /// cooldown). Called before [`GameState::tick`]; the shell passes at
    /// most one movement per tick.
    pub fn apply_action(&mut self, action: GameAction) {
        match action.direction() {
            Some(direction) => {
                self.player.attempt_move(direction, &self.obstacles);
            }
            None => {
                self.player.try_fire(&mut self.bullets);
            }
        }
    }

    /// Advance the simulation one tick, in fixed order:
    /// bullets, player cooldown, enemy AI, collision sweep, compaction.
    pub fn tick(&mut self) {
        for bullet in self.bullets.live_mut() {
            bullet.advance(&self.obstacles);
        }

        self.player_ctl.update(
            &mut self.player,
            &self.obstacles,
            &mut self.bullets,
            &mut self.rng,
        );

        if self.enemy.alive {
            self.enemy_ctl.update(
                &mut self.enemy,
                &self.obstacles,
                &mut self.bullets,
                &mut self.rng,
            );
        }

        self.resolve_bullet_hits();
        self.bullets.compact();
        self.tick_count += 1;
    }

    /// Collision sweep: every live bullet overlapping the live enemy
    /// destroys both. The sweep has no ownership exemption: a bullet
    /// spawned at the enemy's own center counts too.
    fn resolve_bullet_hits(&mut self) {
        if !self.enemy.alive {
            return;
        }
        for bullet in self.bullets.live_mut() {
            if bullet.rect.intersects(&self.enemy.rect) {
                bullet.alive = false;
                self.enemy.alive = false;
                log::info!("enemy destroyed at tick {}", self.tick_count);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    #[test]
    fn test_new_session_matches_documented_spawns() {
        let state = GameState::new(1);
        assert_eq!(state.player.rect, Rect::new(192, 384, 32, 32));
        assert_eq!(state.enemy.rect, Rect::new(192, 32, 32, 32));
        assert_eq!(state.player.facing, Direction::Up);
        assert_eq!(state.enemy.facing, Direction::Up);
        assert!(state.bullets.is_empty());
        assert_eq!(state.tick_count, 0);
        assert_eq!(state.obstacles.len(), 83);
    }

    #[test]
    fn test_tick_increments_counter() {
        let mut state = GameState::new(1);
        for _ in 0..10 {
            state.tick();
        }
        assert_eq!(state.tick_count, 10);
    }

    #[test]
    fn test_same_seed_same_session() {
        let mut a = GameState::new(777);
        let mut b = GameState::new(777);
        for _ in 0..200 {
            a.tick();
            b.tick();
        }
        assert_eq!(a.enemy.rect, b.enemy.rect);
        assert_eq!(a.enemy.facing, b.enemy.facing);
        assert_eq!(a.enemy.alive, b.enemy.alive);
        assert_eq!(a.bullets.live_count(), b.bullets.live_count());
    }

    #[test]
    fn test_player_spawn_is_wall_locked() {
        // The player spawns inside the bottom wall row, so every move is
        // rejected. Deliberate.
        let mut state = GameState::new(1);
        for direction in Direction::ALL {
            state.apply_action(GameAction::from_direction(direction));
            assert_eq!(state.player.rect, Rect::new(192, 384, 32, 32));
            assert_eq!(state.player.facing, Direction::Up);
        }
    }
}
