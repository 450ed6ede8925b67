//! Beak engine: scheduling, easing and write de-duplication
//!
//! [`BeakAnimator`] is the whole playback engine as one value. The host loop
//! owns it, queues animations when audio starts, and calls
//! [`BeakAnimator::update`] every cycle.

use core::fmt;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::clock::Timestamp;
use crate::config::{BeakConfig, ConfigError};
use crate::easing::{EasingCurve, EasingLut};
use crate::keyframe::AnimationRegistry;
use crate::scheduler::AnimationScheduler;

/// What the servo should do after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCommand {
    /// Send a new pulse width, in microseconds
    Write(u16),
    /// Animation running but the pulse width did not change
    Unchanged,
    /// Animation just ended. The servo may be parked.
    Release,
    /// Nothing playing
    Idle,
}

impl ActuatorCommand {
    /// Check whether this update produced a servo write
    pub const fn wrote(self) -> bool {
        matches!(self, Self::Write(_))
    }
}

/// Rejected queue request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// No animation with this id in the registry
    UnknownAnimation(u8),
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAnimation(id) => write!(f, "no animation for track {id}"),
        }
    }
}

/// Keyframe playback engine for one beak servo
#[derive(Debug, Clone)]
pub struct BeakAnimator<'a> {
    // Configuration
    registry: AnimationRegistry<'a>,
    config: BeakConfig,

    // Internal state
    scheduler: AnimationScheduler<'a>,
    lut: EasingLut,
    last_sent: Option<u16>,
}

impl<'a> BeakAnimator<'a> {
    /// Create an engine over a validated registry
    ///
    /// The configuration is expected to be validated by the caller, see
    /// [`BeakConfig::validate`] and [`crate::BeakProfile::build`].
    pub const fn new(registry: AnimationRegistry<'a>, config: BeakConfig) -> Self {
        Self {
            registry,
            config,
            scheduler: AnimationScheduler::new(),
            lut: EasingLut::new(),
            last_sent: None,
        }
    }

    pub const fn registry(&self) -> &AnimationRegistry<'a> {
        &self.registry
    }

    pub const fn config(&self) -> &BeakConfig {
        &self.config
    }

    pub const fn scheduler(&self) -> &AnimationScheduler<'a> {
        &self.scheduler
    }

    /// Last pulse width sent to the servo, if any since the engine went idle
    pub const fn last_sent(&self) -> Option<u16> {
        self.last_sent
    }

    /// Check whether an animation is pending or playing
    pub const fn is_busy(&self) -> bool {
        !self.scheduler.is_idle()
    }

    /// Replace the easing curve. The table is rebuilt on the next update.
    ///
    /// A curve that fails [`BeakConfig::validate`] is rejected and the
    /// current one stays in use.
    pub fn set_curve(&mut self, curve: EasingCurve) -> Result<(), ConfigError> {
        let candidate = BeakConfig {
            curve,
            ..self.config
        };
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }

    /// Queue the animation for track `id` to start at `start`
    ///
    /// Replaces anything pending or playing. Unknown ids leave the engine
    /// untouched.
    pub fn queue_animation(&mut self, id: u8, start: Timestamp) -> Result<(), QueueError> {
        let Some(animation) = self.registry.get(id) else {
            #[cfg(feature = "esp32-log")]
            println!("[BeakAnimator.queue_animation] unknown track {:?}", id);
            return Err(QueueError::UnknownAnimation(id));
        };
        self.scheduler.queue(animation, start);
        Ok(())
    }

    /// Queue the animation for track `id` to start after the sync delay
    pub fn queue_after_sync(&mut self, id: u8, now: Timestamp) -> Result<(), QueueError> {
        self.queue_animation(id, now.wrapping_add(self.config.sync_delay))
    }

    /// Current beak position (0-100) at `now`, or `None` if nothing plays
    pub fn sample(&mut self, now: Timestamp) -> Option<u8> {
        self.scheduler.poll(now)
    }

    /// Pulse width for the position at `now`, or `None` if nothing plays
    pub fn pulse(&mut self, now: Timestamp) -> Option<u16> {
        let position = self.sample(now)?;
        Some(self.lut.lookup(&self.config.curve, position))
    }

    /// Run one engine cycle
    pub fn update(&mut self, now: Timestamp) -> ActuatorCommand {
        let Some(pulse) = self.pulse(now) else {
            if self.last_sent.take().is_some() {
                #[cfg(feature = "esp32-log")]
                println!("[BeakAnimator.update] animation ended, releasing servo");
                return ActuatorCommand::Release;
            }
            return ActuatorCommand::Idle;
        };

        if self.last_sent == Some(pulse) {
            return ActuatorCommand::Unchanged;
        }
        self.last_sent = Some(pulse);
        ActuatorCommand::Write(pulse)
    }
}
