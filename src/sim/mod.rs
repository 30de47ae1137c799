//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Injected monotonic clock only
//! - Fixed-capacity pools, no allocation after world construction
//! - No rendering or platform dependencies

pub mod collision;
pub mod entities;
pub mod world;

pub use collision::circles_overlap;
pub use entities::{Enemy, Player, Pool, Projectile, Rgb, Slot, ENEMY_SHOT_COLOR, PLAYER_SHOT_COLOR};
pub use world::{TerminalSignal, World};
