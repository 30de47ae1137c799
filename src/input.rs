//! Per-frame input commands
//!
//! The driver polls the platform and hands the simulation one decoded
//! snapshot per frame. WASD/arrow aggregation and window-to-logical cursor
//! conversion happen upstream; the core only ever sees booleans and logical
//! coordinates.

use glam::Vec2;

/// Input state for a single simulation frame (deterministic).
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Fire trigger (click/space). The driver reads this and calls
    /// [`World::fire_player_projectile`](crate::World::fire_player_projectile);
    /// `update` itself does not consume it.
    pub fire: bool,
    /// Aim point in logical coordinates.
    pub aim: Vec2,
}

impl InputSnapshot {
    /// Raw movement direction before normalization. Opposing keys cancel.
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.up {
            dir.y -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir
    }
}
