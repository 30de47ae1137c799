//! Starfall simulation core
//!
//! The headless gameplay heart of Starfall, a 2D arena shooter: a lone ship
//! dodges waves of enemies that chase and shoot, scored by kills, until lives
//! run out.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entity pools, movement/AI, collisions)
//! - `config`: Data-driven gameplay constants
//! - `input` / `audio` / `time`: seams to the driver — decoded input
//!   snapshots in, fire-and-forget sound requests out, monotonic
//!   milliseconds in
//!
//! Rendering, audio playback, event polling, and frame pacing live in the
//! driver, not here. The driver's loop each frame is:
//!
//! ```no_run
//! use starfall_core::{InputSnapshot, ManualClock, NullAudio, World, WorldConfig};
//!
//! let mut world = World::new(WorldConfig::default(), 0xC0FFEE);
//! let clock = ManualClock::default();
//! let mut audio = NullAudio;
//!
//! loop {
//!     let input = InputSnapshot::default(); // polled by the driver
//!     world.update(&input, &clock, &mut audio);
//!     if input.fire {
//!         world.fire_player_projectile(input.aim, &mut audio);
//!     }
//!     if world.check_collisions(&mut audio).is_some() {
//!         break; // game over screen
//!     }
//! }
//! ```

pub mod audio;
pub mod config;
pub mod input;
pub mod sim;
pub mod time;

pub use audio::{AudioSink, NullAudio, SoundEffect};
pub use config::{CooldownMs, WorldConfig};
pub use input::InputSnapshot;
pub use sim::{TerminalSignal, World};
pub use time::{Clock, ManualClock, MonotonicClock};

use glam::Vec2;

/// Heading angle in radians from `from` toward `to`.
#[inline]
pub fn aim_angle(from: Vec2, to: Vec2) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Unit vector for a heading angle.
#[inline]
pub fn unit_from_angle(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Unit vector pointing from `from` toward `to`.
///
/// Goes through `atan2` + `cos`/`sin` rather than vector normalization so
/// that plain aiming and accuracy-perturbed aiming (which nudges the angle
/// before rebuilding the vector) agree bit-for-bit on the unperturbed path.
#[inline]
pub fn aim_vector(from: Vec2, to: Vec2) -> Vec2 {
    unit_from_angle(aim_angle(from, to))
}
