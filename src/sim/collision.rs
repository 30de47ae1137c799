//! Collision detection and resolution
//!
//! Discrete circle-circle overlap on already-moved positions — no sweeping,
//! no substeps. Resolution runs in a fixed priority so scoring and life loss
//! stay deterministic: enemy-vs-player, then enemy-vs-player-shots, then
//! enemy-shots-vs-player.

use glam::Vec2;

use super::world::{TerminalSignal, World};
use crate::audio::{AudioSink, SoundEffect};

/// Circle overlap on squared distances, skipping the square root. Strict
/// inequality: circles that exactly touch do not collide.
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: i32, b: Vec2, b_radius: i32) -> bool {
    let radii = (a_radius + b_radius) as f32;
    a.distance_squared(b) < radii * radii
}

impl World {
    /// Resolve every pairwise interaction for the frame and report whether
    /// the run ended. The driver calls this right after [`World::update`].
    ///
    /// "No collision" is the common case and produces no side effects at
    /// all; this pass is fully deterministic given the frame's positions.
    pub fn check_collisions(&mut self, audio: &mut dyn AudioSink) -> Option<TerminalSignal> {
        let kill_score = self.config.kill_score;

        for enemy in self.enemies.active_mut() {
            // 1. Enemy rams the player. The enemy dies doing it, and skips
            //    its projectile checks this frame.
            if circles_overlap(enemy.pos, enemy.radius, self.player.pos, self.player.radius) {
                self.player.lives -= 1;
                enemy.active = false;
                audio.play(SoundEffect::Explosion);
                continue;
            }

            // 2. Player shots vs this enemy. First hit wins.
            for p in self.projectiles.active_mut() {
                if p.is_enemy {
                    continue;
                }
                if circles_overlap(enemy.pos, enemy.radius, p.pos, p.radius) {
                    enemy.active = false;
                    p.active = false;
                    self.score += kill_score;
                    audio.play(SoundEffect::Explosion);
                    break;
                }
            }
        }

        // 3. Enemy shots vs the player.
        for p in self.projectiles.active_mut() {
            if !p.is_enemy {
                continue;
            }
            if circles_overlap(p.pos, p.radius, self.player.pos, self.player.radius) {
                self.player.lives -= 1;
                p.active = false;
                audio.play(SoundEffect::Explosion);
            }
        }

        if self.player.lives <= 0 {
            log::info!("game over at score {}", self.score);
            return Some(TerminalSignal::GameOver);
        }
        None
    }
}
