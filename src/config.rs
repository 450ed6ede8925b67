//! Engine configuration
//!
//! Configuration is compile-time constant data. It is validated once when an
//! engine is built and never touched by the playback path.

use core::fmt;

use embassy_time::Duration;

use crate::easing::EasingCurve;

/// Shortest pulse width considered safe for a hobby servo, in microseconds
pub const PULSE_MIN_US: u16 = 500;

/// Longest pulse width considered safe for a hobby servo, in microseconds
pub const PULSE_MAX_US: u16 = 2500;

/// What to do with the servo when no animation is playing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdlePolicy {
    /// Stop the servo pulse train. Saves power and removes idle jitter.
    Detach,
    /// Keep holding the last position.
    HoldEnergized,
}

/// Configuration for the beak engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeakConfig {
    /// Servo calibration and easing shape
    pub curve: EasingCurve,
    /// Delay between triggering audio and the audio being audible
    pub sync_delay: Duration,
    /// Servo power policy while idle
    pub idle_policy: IdlePolicy,
}

impl BeakConfig {
    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        let exponent = self.curve.exponent;
        if !exponent.is_finite() || exponent <= 0.0 {
            return Err(ConfigError::InvalidExponent);
        }
        for limit in [self.curve.closed, self.curve.open] {
            if !(PULSE_MIN_US..=PULSE_MAX_US).contains(&limit) {
                return Err(ConfigError::LimitOutOfRange { limit });
            }
        }
        Ok(())
    }
}

/// Invalid configuration value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Easing exponent is not a finite positive number
    InvalidExponent,
    /// Servo limit outside of `PULSE_MIN_US..=PULSE_MAX_US`
    LimitOutOfRange { limit: u16 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidExponent => f.write_str("easing exponent must be finite and positive"),
            Self::LimitOutOfRange { limit } => write!(
                f,
                "servo limit {limit}us is outside {PULSE_MIN_US}..={PULSE_MAX_US}us"
            ),
        }
    }
}
