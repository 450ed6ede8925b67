//! Animation scheduling with audio sync delay
//!
//! Audio takes a while between "play" and actually being audible, so an
//! animation is first queued with a start time in the future and only begins
//! once that time is reached. A new request always replaces the current one.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::clock::Timestamp;
use crate::keyframe::Animation;
use crate::sampler::{Playback, Sample};

/// Scheduler state
#[derive(Debug, Clone, Copy, Default)]
pub enum PlaybackState<'a> {
    /// Nothing to play
    #[default]
    Idle,
    /// Queued, waiting for the sync delay to elapse
    Pending {
        animation: &'a Animation<'a>,
        start: Timestamp,
    },
    /// Playing
    Active(Playback<'a>),
}

/// Idle / pending / active state machine
#[derive(Debug, Clone, Default)]
pub struct AnimationScheduler<'a> {
    state: PlaybackState<'a>,
}

impl<'a> AnimationScheduler<'a> {
    pub const fn new() -> Self {
        Self {
            state: PlaybackState::Idle,
        }
    }

    pub const fn state(&self) -> &PlaybackState<'a> {
        &self.state
    }

    pub const fn is_idle(&self) -> bool {
        matches!(self.state, PlaybackState::Idle)
    }

    pub const fn is_pending(&self) -> bool {
        matches!(self.state, PlaybackState::Pending { .. })
    }

    pub const fn is_active(&self) -> bool {
        matches!(self.state, PlaybackState::Active(_))
    }

    /// Keyframe cursor of the active playback
    pub const fn cursor(&self) -> Option<usize> {
        match &self.state {
            PlaybackState::Active(playback) => Some(playback.cursor()),
            _ => None,
        }
    }

    /// Queue `animation` to start at `start`
    ///
    /// Discards whatever was pending or playing.
    pub fn queue(&mut self, animation: &'a Animation<'a>, start: Timestamp) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[AnimationScheduler.queue] queued {:?} (track {:?}) for {:?}ms",
            animation.name,
            animation.id,
            start.as_millis()
        );
        self.state = PlaybackState::Pending { animation, start };
    }

    /// Advance the state machine and sample the position at `now`
    ///
    /// Returns `None` while idle or still waiting for the start time.
    pub fn poll(&mut self, now: Timestamp) -> Option<u8> {
        self.activate_pending(now);

        let PlaybackState::Active(playback) = &mut self.state else {
            return None;
        };

        let sample = playback.sample(now);
        if let Sample::Finished(_) = sample {
            #[cfg(feature = "esp32-log")]
            println!(
                "[AnimationScheduler.poll] finished {:?}",
                playback.animation().name
            );
            self.state = PlaybackState::Idle;
        }
        Some(sample.position())
    }

    /// Start the pending animation once its start time is reached
    fn activate_pending(&mut self, now: Timestamp) {
        let PlaybackState::Pending { animation, start } = self.state else {
            return;
        };
        if !now.has_reached(start) {
            return;
        }
        #[cfg(feature = "esp32-log")]
        println!(
            "[AnimationScheduler.activate_pending] starting {:?} at {:?}ms",
            animation.name,
            now.as_millis()
        );
        self.state = PlaybackState::Active(Playback::new(animation, now));
    }
}
