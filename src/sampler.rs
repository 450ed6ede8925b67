//! Keyframe interpolation for a running animation

use crate::clock::Timestamp;
use crate::keyframe::Animation;

/// Result of sampling a playback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// Position between two keyframes
    Moving(u8),
    /// Final keyframe reached. The playback is over.
    Finished(u8),
}

impl Sample {
    pub const fn position(self) -> u8 {
        match self {
            Self::Moving(position) | Self::Finished(position) => position,
        }
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

/// Playback cursor over one animation
///
/// The cursor only moves forward, so sampling costs O(1) amortized as long
/// as ticks are frequent compared to keyframe spacing.
#[derive(Debug, Clone, Copy)]
pub struct Playback<'a> {
    animation: &'a Animation<'a>,
    cursor: usize,
    started: Timestamp,
}

impl<'a> Playback<'a> {
    /// Start playing `animation` from its first keyframe at `started`
    pub const fn new(animation: &'a Animation<'a>, started: Timestamp) -> Self {
        Self {
            animation,
            cursor: 0,
            started,
        }
    }

    pub const fn animation(&self) -> &'a Animation<'a> {
        self.animation
    }

    /// Index of the keyframe the playback is currently leaving
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    pub const fn started(&self) -> Timestamp {
        self.started
    }

    /// Sample the beak position at `now`
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn sample(&mut self, now: Timestamp) -> Sample {
        let frames = self.animation.keyframes;
        let last = frames.len().saturating_sub(1);
        let elapsed = now.millis_since(self.started);

        while self.cursor < last && elapsed >= u32::from(frames[self.cursor + 1].time_ms) {
            self.cursor += 1;
        }

        if self.cursor >= last {
            return Sample::Finished(frames.get(last).map_or(0, |frame| frame.position));
        }

        let from = frames[self.cursor];
        let to = frames[self.cursor + 1];
        let span = u32::from(to.time_ms.saturating_sub(from.time_ms));
        let progress = if span > 0 {
            elapsed.saturating_sub(u32::from(from.time_ms)) as f32 / span as f32
        } else {
            1.0
        };

        let p0 = f32::from(from.position);
        let p1 = f32::from(to.position);
        Sample::Moving((p0 + progress * (p1 - p0)) as u8)
    }
}
