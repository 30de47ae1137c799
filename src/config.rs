//! Data-driven gameplay constants
//!
//! Every tunable the simulation reads lives in [`WorldConfig`]. The defaults
//! are the shipped balance; a driver can load a custom balance file as JSON.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A `[min, max)` cooldown window in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooldownMs {
    pub min: u64,
    pub max: u64,
}

impl CooldownMs {
    /// Next absolute deadline: `now + min + uniform(0, max - min)`.
    pub fn schedule(&self, now_ms: u64, rng: &mut impl Rng) -> u64 {
        let span = self.max.saturating_sub(self.min);
        let jitter = if span > 0 {
            rng.random_range(0..span)
        } else {
            0
        };
        now_ms + self.min + jitter
    }
}

/// Gameplay configuration.
///
/// Pool capacities are fixed at [`World::new`](crate::World::new); changing
/// them afterwards has no effect on an existing world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Fixed internal horizontal resolution, independent of window size.
    pub logical_width: f32,
    /// Fixed internal vertical resolution.
    pub logical_height: f32,

    pub player_radius: i32,
    /// Player movement in units per frame, identical on every heading.
    pub player_speed: f32,
    pub player_start_lives: i32,

    /// Projectile pool capacity (player and enemy shots share it).
    pub max_projectiles: usize,
    pub projectile_radius: i32,
    /// Speed of player shots in units per frame.
    pub projectile_speed: f32,
    /// Speed of enemy shots in units per frame.
    pub enemy_projectile_speed: f32,
    /// Extra off-screen margin before a projectile slot is reclaimed.
    pub projectile_destroy_offset: f32,

    /// Enemy pool capacity.
    pub max_enemies: usize,
    pub enemy_radius: i32,
    /// Chance in `[0, 1]` of one spawn attempt succeeding each frame.
    pub enemy_spawn_rate: f32,
    /// How far outside a screen edge enemies appear.
    pub enemy_spawn_offset: f32,
    /// Extra off-screen margin before a drifting enemy is reclaimed.
    pub enemy_destroy_offset: f32,
    /// Base speed scalar applied to enemy velocities.
    pub enemy_speed_multiplier: f32,
    pub enemy_shoot_cooldown: CooldownMs,
    pub enemy_retarget_cooldown: CooldownMs,

    /// Score awarded per enemy destroyed by a player shot.
    pub kill_score: u32,

    /// Optional aim refinement: `Some(a)` spreads enemy shots by a uniform
    /// angle in `±(1 - a)·π/4` radians. `None` means perfect aim and burns
    /// no RNG draws.
    pub enemy_accuracy: Option<f32>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            logical_width: 1280.0,
            logical_height: 720.0,

            player_radius: 12,
            player_speed: 5.0,
            player_start_lives: 5,

            max_projectiles: 200,
            projectile_radius: 4,
            projectile_speed: 16.0,
            enemy_projectile_speed: 4.0,
            projectile_destroy_offset: 50.0,

            max_enemies: 50,
            enemy_radius: 12,
            enemy_spawn_rate: 0.03,
            enemy_spawn_offset: 20.0,
            enemy_destroy_offset: 100.0,
            enemy_speed_multiplier: 1.5,
            enemy_shoot_cooldown: CooldownMs { min: 1500, max: 4000 },
            enemy_retarget_cooldown: CooldownMs { min: 2000, max: 5000 },

            kill_score: 10,

            enemy_accuracy: None,
        }
    }
}

impl WorldConfig {
    /// Parse a balance file. The only fallible API in the crate.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Dump the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
