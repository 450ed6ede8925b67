//! Terminal preview for beak-animator tracks
//!
//! Plays one track of a built-in profile in real time and draws the servo
//! pulse width as a bar, one line per write.
//!
//! Usage: `beak-preview [profile] [track]`, e.g. `beak-preview esp32 5`.

use std::process::ExitCode;
use std::thread;
use std::time::Instant as StdInstant;

use beak_animator::{
    BeakController, BeakProfile, Cue, CueChannel, ServoDriver, Timestamp, profile,
};

/// Cue channel size
const CUE_CHANNEL_SIZE: usize = 4;

/// Width of the pulse bar in characters
const BAR_WIDTH: usize = 50;

/// Static cue channel, as the audio task would use on the device
static CUES: CueChannel<CUE_CHANNEL_SIZE> = CueChannel::<CUE_CHANNEL_SIZE>::new();

/// Servo that prints every write as a bar between the closed and open limits
struct TerminalServo {
    closed: u16,
    open: u16,
    started: StdInstant,
}

impl TerminalServo {
    fn bar(&self, pulse_us: u16) -> String {
        let span = f32::from(self.open) - f32::from(self.closed);
        let opening = (f32::from(pulse_us) - f32::from(self.closed)) / span;
        let filled = (opening.clamp(0.0, 1.0) * BAR_WIDTH as f32).round() as usize;
        format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
    }
}

impl ServoDriver for TerminalServo {
    fn write_pulse(&mut self, pulse_us: u16) {
        let elapsed = self.started.elapsed().as_millis();
        println!("{elapsed:>6}ms {pulse_us:>5}us |{}|", self.bar(pulse_us));
    }

    fn attach(&mut self) {
        println!("-- servo attached");
    }

    fn detach(&mut self) {
        println!("-- servo detached");
    }
}

fn parse_args() -> Result<(BeakProfile, u8), String> {
    let mut args = std::env::args().skip(1);
    let profile_name = args.next().unwrap_or_else(|| "rp2040".to_string());
    let profile = profile::by_name(&profile_name)
        .ok_or_else(|| format!("unknown profile {profile_name:?}"))?;
    let track = match args.next() {
        Some(raw) => raw.parse().map_err(|_| format!("invalid track {raw:?}"))?,
        None => 1,
    };
    Ok((profile, track))
}

fn main() -> ExitCode {
    let (profile, track) = match parse_args() {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let animator = match profile.build() {
        Ok(animator) => animator,
        Err(error) => {
            eprintln!("profile {}: {error}", profile.name);
            return ExitCode::FAILURE;
        }
    };
    let Some(animation) = animator.registry().get(track) else {
        eprintln!("profile {} has no track {track}", profile.name);
        return ExitCode::FAILURE;
    };
    println!(
        "{} / {} ({}ms, {} keyframes)",
        profile.name,
        animation.name,
        animation.duration_ms(),
        animation.keyframes.len()
    );

    let started = StdInstant::now();
    let servo = TerminalServo {
        closed: profile.config.curve.closed,
        open: profile.config.curve.open,
        started,
    };
    let mut controller = BeakController::new(animator, servo, CUES.receiver());

    let now = || Timestamp::from_millis(started.elapsed().as_millis() as u32);
    CUES.post(Cue::after_sync(track, now(), profile.config.sync_delay));

    loop {
        let result = controller.tick(now());
        if !controller.animator().is_busy() && controller.animator().last_sent().is_none() {
            break;
        }
        thread::sleep(std::time::Duration::from_millis(
            result.sleep_duration.as_millis(),
        ));
    }

    ExitCode::SUCCESS
}
