//! Power-curve easing from beak opening to servo pulse width
//!
//! The beak position is a linear 0-100 value. Servos look mechanical when
//! driven linearly, so positions are remapped through a symmetric
//! ease-in/ease-out curve and scaled between the calibrated closed and open
//! pulse widths. The curve is sampled once into a 101-entry table.

use libm::powf;

/// Number of entries in the lookup table (0..=100 percent)
pub const LUT_SIZE: usize = 101;

/// Highest position the table accepts
pub const MAX_POSITION: u8 = 100;

/// Servo calibration and curve shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EasingCurve {
    /// Pulse width at position 0, in microseconds
    pub closed: u16,
    /// Pulse width at position 100, in microseconds
    pub open: u16,
    /// Curve exponent. 1.0 is linear, larger values flatten the middle and
    /// sharpen the ends.
    pub exponent: f32,
}

impl EasingCurve {
    pub const fn new(closed: u16, open: u16, exponent: f32) -> Self {
        Self {
            closed,
            open,
            exponent,
        }
    }

    /// Eased progress for a normalized input `u` in `[0, 1]`
    pub fn ease(&self, u: f32) -> f32 {
        if u < 0.5 {
            0.5 * powf(2.0 * u, self.exponent)
        } else {
            1.0 - 0.5 * powf(2.0 * (1.0 - u), self.exponent)
        }
    }

    /// Pulse width for a position, computed without the table
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_lossless
    )]
    pub fn pulse_at(&self, position: u8) -> u16 {
        let u = f32::from(position.min(MAX_POSITION)) / 100.0;
        let closed = f32::from(self.closed);
        let span = f32::from(self.open) - closed;
        (closed + self.ease(u) * span) as u16
    }

    /// Sample the curve into a full table
    #[allow(clippy::cast_possible_truncation)]
    pub fn build_table(&self) -> [u16; LUT_SIZE] {
        let mut table = [0; LUT_SIZE];
        for (position, entry) in table.iter_mut().enumerate() {
            *entry = self.pulse_at(position as u8);
        }
        table
    }
}

/// Lazily built easing table, keyed by the curve it was built from
#[derive(Debug, Clone)]
pub struct EasingLut {
    key: Option<EasingCurve>,
    table: [u16; LUT_SIZE],
}

impl EasingLut {
    /// Create an empty table. Nothing is computed until the first lookup.
    pub const fn new() -> Self {
        Self {
            key: None,
            table: [0; LUT_SIZE],
        }
    }

    /// Check whether the table currently holds values for `curve`
    pub fn is_built_for(&self, curve: &EasingCurve) -> bool {
        self.key.as_ref() == Some(curve)
    }

    /// Get the table for `curve`, rebuilding it if the curve changed
    pub fn table(&mut self, curve: &EasingCurve) -> &[u16; LUT_SIZE] {
        if !self.is_built_for(curve) {
            self.table = curve.build_table();
            self.key = Some(*curve);
        }
        &self.table
    }

    /// Pulse width for a position. Positions above 100 are clamped.
    pub fn lookup(&mut self, curve: &EasingCurve, position: u8) -> u16 {
        self.table(curve)[usize::from(position.min(MAX_POSITION))]
    }
}

impl Default for EasingLut {
    fn default() -> Self {
        Self::new()
    }
}
