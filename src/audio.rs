//! Audio side-effect requests
//!
//! The core never touches an audio device. It emits fire-and-forget
//! [`SoundEffect`] requests through whatever sink the driver supplies and
//! never observes completion. There is no process-wide audio state.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player fired a projectile
    PlayerLaser,
    /// An enemy fired a projectile
    EnemyLaser,
    /// Something blew up (enemy destroyed or player hit)
    Explosion,
}

/// Receiver for sound requests, implemented by the driver's audio system.
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Sink that drops every request. For headless runs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}
