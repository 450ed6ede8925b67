//! Servo controller and tick pacing
//!
//! Glues a [`BeakAnimator`] to a [`ServoDriver`]. Works without async/await
//! or platform timers: the caller reads the clock, calls
//! [`BeakController::tick`], and sleeps for the returned duration.

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animator::{ActuatorCommand, BeakAnimator};
use crate::clock::Timestamp;
use crate::config::IdlePolicy;
use crate::cue::CueReceiver;
use crate::ServoDriver;

/// Default tick period, matching the 50 Hz servo refresh rate.
pub const DEFAULT_TICK_DURATION: Duration = Duration::from_millis(20);

/// Result of a controller tick.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// Whether a new pulse width was written to the servo.
    pub wrote: bool,
    /// The deadline for the next tick.
    pub next_deadline: Timestamp,
    /// How long to wait until the next tick (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Drives one beak servo from an animator
///
/// # Usage
///
/// ```ignore
/// let mut controller = BeakController::new(animator, servo, CUES.receiver());
///
/// loop {
///     let now = Timestamp::from_millis(millis());
///     let result = controller.tick(now);
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct BeakController<'a, D: ServoDriver, const CUE_CHANNEL_SIZE: usize> {
    driver: D,
    animator: BeakAnimator<'a>,
    cues: CueReceiver<'a, CUE_CHANNEL_SIZE>,
    attached: bool,
    /// Deadline of the next tick, anchored at the first call to `tick`
    next_tick: Option<Timestamp>,
    tick_duration: Duration,
}

impl<'a, D: ServoDriver, const CUE_CHANNEL_SIZE: usize> BeakController<'a, D, CUE_CHANNEL_SIZE> {
    /// Create a controller using [`DEFAULT_TICK_DURATION`].
    ///
    /// The servo is assumed to start detached.
    pub fn new(
        animator: BeakAnimator<'a>,
        driver: D,
        cues: CueReceiver<'a, CUE_CHANNEL_SIZE>,
    ) -> Self {
        Self::with_tick_duration(animator, driver, cues, DEFAULT_TICK_DURATION)
    }

    /// Create a controller with a custom tick period.
    pub fn with_tick_duration(
        animator: BeakAnimator<'a>,
        driver: D,
        cues: CueReceiver<'a, CUE_CHANNEL_SIZE>,
        tick_duration: Duration,
    ) -> Self {
        Self {
            driver,
            animator,
            cues,
            attached: false,
            next_tick: None,
            tick_duration,
        }
    }

    /// Process one cycle and return timing information.
    ///
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Applies queued cues
    /// 3. Updates the animator and forwards the command to the servo
    /// 4. Returns the deadline for the next tick
    pub fn tick(&mut self, now: Timestamp) -> TickResult {
        let mut next_tick = self.next_tick.unwrap_or(now);

        // After a long stall, restart pacing from now instead of bursting
        let max_drift = self.tick_duration.as_millis().saturating_mul(2);
        if now.has_reached(next_tick) && u64::from(now.millis_since(next_tick)) > max_drift {
            next_tick = now;
        }

        self.process_cues();
        let command = self.animator.update(now);
        self.apply(command);

        next_tick = next_tick.wrapping_add(self.tick_duration);
        self.next_tick = Some(next_tick);
        let sleep_duration = if now.has_reached(next_tick) {
            Duration::from_millis(0)
        } else {
            Duration::from_millis(u64::from(next_tick.millis_since(now)))
        };

        TickResult {
            wrote: command.wrote(),
            next_deadline: next_tick,
            sleep_duration,
        }
    }

    /// Apply the newest cue posted since the last tick, dropping older ones
    fn process_cues(&mut self) {
        if let Some(cue) = self.cues.take_latest() {
            let _ = self.animator.queue_animation(cue.track, cue.start);
        }
    }

    fn apply(&mut self, command: ActuatorCommand) {
        match command {
            ActuatorCommand::Write(pulse) => {
                self.driver.write_pulse(pulse);
                if !self.attached {
                    self.driver.attach();
                    self.attached = true;
                }
            }
            ActuatorCommand::Release => {
                if self.animator.config().idle_policy == IdlePolicy::Detach && self.attached {
                    #[cfg(feature = "esp32-log")]
                    println!("[BeakController.apply] detaching servo");
                    self.driver.detach();
                    self.attached = false;
                }
            }
            ActuatorCommand::Unchanged | ActuatorCommand::Idle => {}
        }
    }

    /// Whether the servo is currently receiving pulses
    pub const fn is_attached(&self) -> bool {
        self.attached
    }

    pub const fn animator(&self) -> &BeakAnimator<'a> {
        &self.animator
    }

    pub const fn animator_mut(&mut self) -> &mut BeakAnimator<'a> {
        &mut self.animator
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub const fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}
