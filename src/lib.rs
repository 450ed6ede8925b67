#![no_std]

pub mod animator;
pub mod clock;
pub mod config;
pub mod controller;
pub mod cue;
pub mod easing;
pub mod keyframe;
pub mod profile;
pub mod sampler;
pub mod scheduler;
pub mod tracks;

pub use animator::{ActuatorCommand, BeakAnimator, QueueError};
pub use clock::Timestamp;
pub use config::{BeakConfig, ConfigError, IdlePolicy};
pub use controller::{BeakController, TickResult};
pub use cue::{Cue, CueChannel, CueReceiver, CueSender};
pub use easing::{EasingCurve, EasingLut};
pub use keyframe::{Animation, AnimationError, AnimationRegistry, Keyframe};
pub use profile::{BeakProfile, ProfileError};
pub use scheduler::{AnimationScheduler, PlaybackState};

pub use embassy_time::{Duration, Instant};

/// Abstract servo driver trait
///
/// Implement this trait to support different hardware platforms.
/// The controller is generic over this trait.
pub trait ServoDriver {
    /// Output a pulse of `pulse_us` microseconds on every servo frame
    fn write_pulse(&mut self, pulse_us: u16);

    /// Start generating pulses. Called after the first write.
    fn attach(&mut self) {}

    /// Stop generating pulses, letting the servo go limp.
    fn detach(&mut self) {}
}
