//! Named per-board deployment profiles
//!
//! Each board revision has its own servo calibration, audio latency and
//! idle policy. A profile bundles those with the track set it ships with.

use core::fmt;

use embassy_time::Duration;

use crate::animator::BeakAnimator;
use crate::config::{BeakConfig, ConfigError, IdlePolicy};
use crate::easing::EasingCurve;
use crate::keyframe::{Animation, AnimationError, AnimationRegistry};
use crate::tracks;

/// Servo calibration, audio latency and animation set for one board
#[derive(Debug, Clone, Copy)]
pub struct BeakProfile {
    pub name: &'static str,
    pub config: BeakConfig,
    pub animations: &'static [Animation<'static>],
}

/// RP2040 board. Detaches the servo between animations.
pub const RP2040: BeakProfile = BeakProfile {
    name: "rp2040",
    config: BeakConfig {
        curve: EasingCurve::new(1250, 1050, 3.0),
        sync_delay: Duration::from_millis(100),
        idle_policy: IdlePolicy::Detach,
    },
    animations: &tracks::TUNED,
};

/// ESP32 board. Keeps the servo powered at all times.
pub const ESP32: BeakProfile = BeakProfile {
    name: "esp32",
    config: BeakConfig {
        curve: EasingCurve::new(1250, 1100, 3.0),
        sync_delay: Duration::from_millis(100),
        idle_policy: IdlePolicy::HoldEnergized,
    },
    animations: &tracks::TUNED,
};

/// Pre-2026 calibration with the wider 1000us opening and the classic
/// keyframes.
pub const CLASSIC: BeakProfile = BeakProfile {
    name: "classic",
    config: BeakConfig {
        curve: EasingCurve::new(1250, 1000, 3.0),
        sync_delay: Duration::from_millis(100),
        idle_policy: IdlePolicy::Detach,
    },
    animations: &tracks::CLASSIC,
};

/// All built-in profiles
pub const PROFILES: [BeakProfile; 3] = [RP2040, ESP32, CLASSIC];

/// Find a built-in profile by name
pub fn by_name(name: &str) -> Option<BeakProfile> {
    PROFILES.into_iter().find(|profile| profile.name == name)
}

/// Profile failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileError {
    Config(ConfigError),
    Animation(AnimationError),
}

impl From<ConfigError> for ProfileError {
    fn from(error: ConfigError) -> Self {
        Self::Config(error)
    }
}

impl From<AnimationError> for ProfileError {
    fn from(error: AnimationError) -> Self {
        Self::Animation(error)
    }
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(error) => write!(f, "invalid config: {error}"),
            Self::Animation(error) => write!(f, "invalid animation: {error}"),
        }
    }
}

impl BeakProfile {
    /// Validate the profile and build an engine for it
    pub fn build(&self) -> Result<BeakAnimator<'static>, ProfileError> {
        self.config.validate()?;
        let registry = AnimationRegistry::new(self.animations)?;
        Ok(BeakAnimator::new(registry, self.config))
    }
}
