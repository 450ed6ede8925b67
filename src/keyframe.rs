//! Keyframe tables and the animation registry
//!
//! Animations are authored offline as static tables. They are checked once,
//! when the registry is built, so playback never has to deal with a
//! malformed table.

use core::fmt;

/// One waypoint of a beak animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyframe {
    /// Offset from the animation start, in milliseconds
    pub time_ms: u16,
    /// Target opening, 0 (closed) to 100 (fully open)
    pub position: u8,
}

impl Keyframe {
    pub const fn new(time_ms: u16, position: u8) -> Self {
        Self { time_ms, position }
    }
}

/// Keyframe sequence bound to an audio track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation<'a> {
    /// Audio track number this animation accompanies
    pub id: u8,
    /// Human readable name, used for logging
    pub name: &'static str,
    pub keyframes: &'a [Keyframe],
}

impl<'a> Animation<'a> {
    pub const fn new(id: u8, name: &'static str, keyframes: &'a [Keyframe]) -> Self {
        Self {
            id,
            name,
            keyframes,
        }
    }

    /// Offset of the final keyframe
    pub fn duration_ms(&self) -> u16 {
        self.keyframes.last().map_or(0, |frame| frame.time_ms)
    }

    /// Check the table for authoring errors
    pub fn validate(&self) -> Result<(), AnimationError> {
        if self.keyframes.len() < 2 {
            return Err(AnimationError::TooFewKeyframes { id: self.id });
        }
        for (index, pair) in self.keyframes.windows(2).enumerate() {
            if pair[1].time_ms < pair[0].time_ms {
                return Err(AnimationError::UnorderedKeyframes {
                    id: self.id,
                    index: index + 1,
                });
            }
        }
        Ok(())
    }
}

/// Authoring error found while building a registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationError {
    /// Animation has fewer than two keyframes
    TooFewKeyframes { id: u8 },
    /// Keyframe at `index` starts before its predecessor
    UnorderedKeyframes { id: u8, index: usize },
    /// Two animations share the same id
    DuplicateId { id: u8 },
}

impl fmt::Display for AnimationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewKeyframes { id } => {
                write!(f, "animation {id} needs at least two keyframes")
            }
            Self::UnorderedKeyframes { id, index } => {
                write!(f, "animation {id}: keyframe {index} goes back in time")
            }
            Self::DuplicateId { id } => write!(f, "animation id {id} is used twice"),
        }
    }
}

/// Validated, read-only set of animations
#[derive(Debug, Clone, Copy)]
pub struct AnimationRegistry<'a> {
    animations: &'a [Animation<'a>],
}

impl<'a> AnimationRegistry<'a> {
    /// Build a registry, rejecting malformed tables and duplicate ids
    pub fn new(animations: &'a [Animation<'a>]) -> Result<Self, AnimationError> {
        for (index, animation) in animations.iter().enumerate() {
            animation.validate()?;
            if animations[..index].iter().any(|other| other.id == animation.id) {
                return Err(AnimationError::DuplicateId { id: animation.id });
            }
        }
        Ok(Self { animations })
    }

    /// Find an animation by its track id
    pub fn get(&self, id: u8) -> Option<&'a Animation<'a>> {
        self.animations.iter().find(|animation| animation.id == id)
    }

    /// Get an animation by its position in the table
    pub fn by_index(&self, index: usize) -> Option<&'a Animation<'a>> {
        self.animations.get(index)
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'a, Animation<'a>> {
        self.animations.iter()
    }
}

impl<'a> IntoIterator for &AnimationRegistry<'a> {
    type Item = &'a Animation<'a>;
    type IntoIter = core::slice::Iter<'a, Animation<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
