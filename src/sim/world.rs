//! World orchestration: movement, spawning, enemy AI
//!
//! One `update` advances a single frame in a fixed order: player movement,
//! projectile advection, the spawn roll, then enemy AI. Collision resolution
//! is a separate pass (see `collision.rs`) that the driver runs after
//! `update`, once everything has moved.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entities::{Enemy, Player, Pool, Projectile, ENEMY_SHOT_COLOR, PLAYER_SHOT_COLOR};
use crate::audio::{AudioSink, SoundEffect};
use crate::config::WorldConfig;
use crate::input::InputSnapshot;
use crate::time::Clock;
use crate::{aim_angle, aim_vector, unit_from_angle};

/// Signal that the current run has ended. Returned by
/// [`World::check_collisions`]; an ordinary state transition, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalSignal {
    /// Player is out of lives.
    GameOver,
}

/// The entire gameplay state: player, entity pools, score and difficulty.
///
/// The world exclusively owns all entity storage. Pool sizes are fixed at
/// construction and a slot's pool index is its identity.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub config: WorldConfig,
    pub player: Player,
    pub projectiles: Pool<Projectile>,
    pub enemies: Pool<Enemy>,
    pub score: u32,
    /// Difficulty scalar applied to enemy velocities. Constant for now, but
    /// kept as run state so a driver can ramp it.
    pub enemy_speed_multiplier: f32,
    /// Run seed, kept so `reset` restarts the same reproducible run.
    seed: u64,
    rng: Pcg32,
}

impl World {
    /// Build a world for the given seed. Pools are allocated once here and
    /// never again.
    pub fn new(config: WorldConfig, seed: u64) -> Self {
        let mut world = Self {
            player: Player::default(),
            projectiles: Pool::new(config.max_projectiles),
            enemies: Pool::new(config.max_enemies),
            score: 0,
            enemy_speed_multiplier: config.enemy_speed_multiplier,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            config,
        };
        world.reset();
        world
    }

    /// Restart the run: player centered with full lives, empty pools, zero
    /// score, RNG back at the seed.
    pub fn reset(&mut self) {
        self.player = Player {
            pos: Vec2::new(
                self.config.logical_width / 2.0,
                self.config.logical_height / 2.0,
            ),
            radius: self.config.player_radius,
            lives: self.config.player_start_lives,
        };
        self.projectiles.clear();
        self.enemies.clear();
        self.score = 0;
        self.enemy_speed_multiplier = self.config.enemy_speed_multiplier;
        self.rng = Pcg32::seed_from_u64(self.seed);
        log::info!("world reset (seed {})", self.seed);
    }

    /// Advance one frame of simulation.
    pub fn update(&mut self, input: &InputSnapshot, clock: &dyn Clock, audio: &mut dyn AudioSink) {
        let now = clock.now_ms();
        self.update_player(input);
        self.update_projectiles();
        self.spawn_enemy(now);
        self.update_enemies(now, audio);
    }

    /// Fire a player projectile from the ship toward `aim` (logical
    /// coordinates). Silently drops the shot when the pool is exhausted.
    pub fn fire_player_projectile(&mut self, aim: Vec2, audio: &mut dyn AudioSink) {
        let origin = self.player.pos;
        let vel = aim_vector(origin, aim) * self.config.projectile_speed;
        let radius = self.config.projectile_radius;

        let Some(p) = self.projectiles.acquire() else {
            return;
        };
        *p = Projectile {
            pos: origin,
            vel,
            radius,
            active: true,
            is_enemy: false,
            color: PLAYER_SHOT_COLOR,
        };
        audio.play(SoundEffect::PlayerLaser);
    }

    fn update_player(&mut self, input: &InputSnapshot) {
        // Normalize so diagonals are no faster than cardinals.
        let dir = input.direction();
        self.player.pos += dir.normalize_or_zero() * self.config.player_speed;

        // The ship never clips off-screen.
        let r = self.player.radius as f32;
        let max = Vec2::new(
            self.config.logical_width - r,
            self.config.logical_height - r,
        );
        self.player.pos = self.player.pos.clamp(Vec2::splat(r), max);
    }

    fn update_projectiles(&mut self) {
        let margin = self.config.projectile_destroy_offset;
        let w = self.config.logical_width;
        let h = self.config.logical_height;

        for p in self.projectiles.active_mut() {
            p.pos += p.vel;

            // Reclaim the slot once the shot is well past the arena.
            if p.pos.x < -margin || p.pos.x > w + margin || p.pos.y < -margin || p.pos.y > h + margin
            {
                p.active = false;
            }
        }
    }

    /// One spawn roll per frame; at most one enemy activates regardless of
    /// how many slots are free.
    fn spawn_enemy(&mut self, now: u64) {
        if self.rng.random::<f32>() >= self.config.enemy_spawn_rate {
            return;
        }

        let target = self.player.pos;
        let w = self.config.logical_width;
        let h = self.config.logical_height;
        let offset = self.config.enemy_spawn_offset;

        let Some(slot) = self.enemies.acquire() else {
            return;
        };

        let pos = match self.rng.random_range(0..4) {
            0 => Vec2::new(-offset, self.rng.random_range(0.0..h)), // left
            1 => Vec2::new(w + offset, self.rng.random_range(0.0..h)), // right
            2 => Vec2::new(self.rng.random_range(0.0..w), -offset), // top
            _ => Vec2::new(self.rng.random_range(0.0..w), h + offset), // bottom
        };

        *slot = Enemy {
            pos,
            vel: aim_vector(pos, target) * self.enemy_speed_multiplier,
            radius: self.config.enemy_radius,
            active: true,
            next_fire_at: self.config.enemy_shoot_cooldown.schedule(now, &mut self.rng),
            next_retarget_at: self
                .config
                .enemy_retarget_cooldown
                .schedule(now, &mut self.rng),
        };
        log::trace!("enemy spawned at {pos}");
    }

    fn update_enemies(&mut self, now: u64, audio: &mut dyn AudioSink) {
        let target = self.player.pos;
        let speed = self.enemy_speed_multiplier;
        let margin = self.config.enemy_destroy_offset;
        let w = self.config.logical_width;
        let h = self.config.logical_height;

        for e in self.enemies.active_mut() {
            // Periodically re-aim at wherever the player is now.
            if now > e.next_retarget_at {
                e.vel = aim_vector(e.pos, target) * speed;
                e.next_retarget_at = self
                    .config
                    .enemy_retarget_cooldown
                    .schedule(now, &mut self.rng);
            }

            e.pos += e.vel;

            // Reclaim drifters well past the arena so they don't clog the
            // pool forever.
            if e.pos.x < -margin || e.pos.x > w + margin || e.pos.y < -margin || e.pos.y > h + margin
            {
                e.active = false;
                continue;
            }

            if now > e.next_fire_at {
                let mut angle = aim_angle(e.pos, target);
                if let Some(accuracy) = self.config.enemy_accuracy {
                    let spread = (1.0 - accuracy) * std::f32::consts::FRAC_PI_4;
                    if spread > 0.0 {
                        angle += self.rng.random_range(-spread..spread);
                    }
                }

                if let Some(p) = self.projectiles.acquire() {
                    *p = Projectile {
                        pos: e.pos,
                        vel: unit_from_angle(angle) * self.config.enemy_projectile_speed,
                        radius: self.config.projectile_radius,
                        active: true,
                        is_enemy: true,
                        color: ENEMY_SHOT_COLOR,
                    };
                    audio.play(SoundEffect::EnemyLaser);
                }
                // The cooldown restarts whether or not a slot was free.
                e.next_fire_at = self.config.enemy_shoot_cooldown.schedule(now, &mut self.rng);
            }
        }
    }
}
