//! Built-in crow animations
//!
//! Fourteen tracks: seven "scold" clips played when someone walks by and
//! seven "idle" squawks. Two tunings of the same clips exist: [`TUNED`] is
//! the current set, [`CLASSIC`] the earlier one with fewer keyframes.
//! Track ids match the audio file numbers.

use crate::keyframe::{Animation, Keyframe};

const fn kf(time_ms: u16, position: u8) -> Keyframe {
    Keyframe::new(time_ms, position)
}

/// Current keyframes
pub const TUNED: [Animation<'static>; TRACK_COUNT] = tuned::TRACKS;

/// Earlier keyframes
pub const CLASSIC: [Animation<'static>; TRACK_COUNT] = classic::TRACKS;

/// Number of tracks in each set
pub const TRACK_COUNT: usize = 14;

#[rustfmt::skip]
mod tuned {
    use super::{Animation, Keyframe, TRACK_COUNT, kf};

    const SCOLD_1: &[Keyframe] = &[
        kf(0, 0), kf(60, 90), kf(330, 60), kf(440, 75), kf(700, 60), kf(800, 75),
        kf(1050, 60), kf(1230, 75), kf(1460, 50), kf(1700, 85), kf(1950, 0),
    ];
    const SCOLD_2: &[Keyframe] = &[
        kf(0, 0), kf(300, 5), kf(520, 80), kf(620, 95), kf(1100, 40), kf(1700, 40),
        kf(1800, 95), kf(2300, 80), kf(2400, 80), kf(2550, 0),
    ];
    const SCOLD_3: &[Keyframe] = &[
        kf(0, 0), kf(90, 95), kf(500, 65), kf(600, 95), kf(1050, 65), kf(1150, 95),
        kf(1550, 90), kf(1625, 50), kf(1750, 0),
    ];
    const SCOLD_4: &[Keyframe] = &[
        kf(0, 0), kf(225, 95), kf(540, 55), kf(725, 95), kf(1054, 55), kf(1300, 95),
        kf(1650, 55), kf(1950, 95), kf(2300, 55), kf(2650, 95), kf(2800, 90), kf(2970, 40),
        kf(3020, 0),
    ];
    const SCOLD_5: &[Keyframe] = &[
        kf(0, 0), kf(200, 90), kf(320, 35), kf(470, 90), kf(600, 35), kf(780, 80),
        kf(900, 35), kf(1110, 80), kf(1230, 40), kf(1500, 90), kf(1620, 35), kf(2060, 80),
        kf(2185, 40), kf(2560, 80), kf(2670, 40), kf(3200, 60), kf(3320, 0),
    ];
    const SCOLD_6: &[Keyframe] = &[
        kf(0, 0), kf(380, 5), kf(480, 70), kf(730, 55), kf(975, 70), kf(1180, 45),
        kf(1620, 40), kf(1720, 80), kf(1980, 60), kf(2180, 85), kf(2460, 60), kf(2660, 80),
        kf(2930, 50), kf(3190, 70), kf(3340, 65), kf(3440, 0),
    ];
    const SCOLD_7: &[Keyframe] = &[
        kf(0, 0), kf(90, 90), kf(230, 60), kf(440, 80), kf(580, 60), kf(870, 80),
        kf(1030, 60), kf(1370, 80), kf(1520, 60), kf(1930, 80), kf(2060, 50), kf(2770, 80),
        kf(2910, 60), kf(3400, 90), kf(3600, 95), kf(3700, 50), kf(3950, 0),
    ];
    const IDLE_1: &[Keyframe] = &[
        kf(0, 0), kf(193, 30), kf(480, 80), kf(730, 15), kf(1130, 30), kf(1470, 80),
        kf(1700, 30), kf(1820, 0),
    ];
    const IDLE_2: &[Keyframe] = &[
        kf(0, 0), kf(240, 80), kf(420, 50), kf(500, 80), kf(650, 50), kf(740, 80),
        kf(880, 50), kf(970, 80), kf(1110, 50), kf(1200, 80), kf(1340, 50), kf(1440, 80),
        kf(1520, 30), kf(1600, 0),
    ];
    const IDLE_3: &[Keyframe] = &[
        kf(0, 0), kf(350, 60), kf(875, 30), kf(1130, 55), kf(1465, 35), kf(1600, 50),
        kf(1900, 45), kf(2000, 55), kf(2250, 0),
    ];
    const IDLE_4: &[Keyframe] = &[
        kf(0, 0), kf(150, 35), kf(290, 45), kf(510, 75), kf(680, 45), kf(970, 65),
        kf(1150, 0),
    ];
    const IDLE_5: &[Keyframe] = &[
        kf(0, 0), kf(210, 80), kf(350, 40), kf(700, 80), kf(870, 50), kf(1190, 90),
        kf(1360, 50), kf(1730, 90), kf(1900, 40), kf(2330, 80), kf(2510, 45), kf(3860, 45),
        kf(3960, 75), kf(4210, 60), kf(4360, 74), kf(4500, 60), kf(4650, 75), kf(4790, 60),
        kf(5050, 0),
    ];
    const IDLE_6: &[Keyframe] = &[
        kf(0, 0), kf(137, 70), kf(200, 40), kf(500, 10), kf(700, 90), kf(840, 45),
        kf(1000, 0),
    ];
    const IDLE_7: &[Keyframe] = &[
        kf(0, 0), kf(350, 10), kf(425, 70), kf(700, 30), kf(1280, 35), kf(1380, 70),
        kf(1690, 30), kf(2970, 35), kf(3070, 70), kf(3400, 30), kf(4240, 35), kf(4340, 65),
        kf(4610, 60), kf(4710, 30), kf(4780, 0),
    ];

    pub(super) const TRACKS: [Animation<'static>; TRACK_COUNT] = [
        Animation::new(1, "Scold 1", SCOLD_1),
        Animation::new(2, "Scold 2", SCOLD_2),
        Animation::new(3, "Scold 3", SCOLD_3),
        Animation::new(4, "Scold 4", SCOLD_4),
        Animation::new(5, "Scold 5", SCOLD_5),
        Animation::new(6, "Scold 6", SCOLD_6),
        Animation::new(7, "Scold 7", SCOLD_7),
        Animation::new(8, "Idle 1", IDLE_1),
        Animation::new(9, "Idle 2", IDLE_2),
        Animation::new(10, "Idle 3", IDLE_3),
        Animation::new(11, "Idle 4", IDLE_4),
        Animation::new(12, "Idle 5", IDLE_5),
        Animation::new(13, "Idle 6", IDLE_6),
        Animation::new(14, "Idle 7", IDLE_7),
    ];
}

#[rustfmt::skip]
mod classic {
    use super::{Animation, Keyframe, TRACK_COUNT, kf};

    const SCOLD_1: &[Keyframe] = &[
        kf(0, 0), kf(60, 95), kf(330, 60), kf(440, 75), kf(700, 60), kf(800, 75),
        kf(1050, 60), kf(1230, 75), kf(1460, 50), kf(1700, 85), kf(1950, 0),
    ];
    const SCOLD_2: &[Keyframe] = &[
        kf(0, 0), kf(400, 95), kf(1100, 40), kf(1700, 95), kf(2400, 0), kf(2500, 0),
    ];
    const SCOLD_3: &[Keyframe] = &[
        kf(0, 0), kf(90, 95), kf(500, 65), kf(600, 95), kf(1050, 65), kf(1150, 95),
        kf(1650, 0),
    ];
    const SCOLD_4: &[Keyframe] = &[
        kf(0, 0), kf(225, 95), kf(540, 65), kf(725, 95), kf(1054, 65), kf(1300, 95),
        kf(1650, 65), kf(1950, 95), kf(2300, 65), kf(2650, 95), kf(3020, 0),
    ];
    const SCOLD_5: &[Keyframe] = &[
        kf(0, 0), kf(200, 90), kf(320, 30), kf(470, 90), kf(600, 30), kf(780, 80),
        kf(900, 30), kf(1110, 80), kf(1230, 35), kf(1500, 90), kf(1620, 35), kf(2060, 80),
        kf(2185, 35), kf(2560, 80), kf(2670, 35), kf(3200, 60), kf(3320, 0),
    ];
    const SCOLD_6: &[Keyframe] = &[
        kf(0, 0), kf(480, 70), kf(730, 55), kf(975, 70), kf(1180, 45), kf(1720, 90),
        kf(1980, 60), kf(2180, 90), kf(2460, 60), kf(2660, 80), kf(2930, 50), kf(3190, 70),
        kf(3440, 0),
    ];
    const SCOLD_7: &[Keyframe] = &[
        kf(0, 0), kf(90, 90), kf(230, 70), kf(440, 90), kf(580, 70), kf(870, 90),
        kf(1030, 70), kf(1370, 90), kf(1520, 70), kf(1930, 90), kf(2060, 50), kf(2770, 90),
        kf(2910, 70), kf(3400, 90), kf(3800, 0),
    ];
    const IDLE_1: &[Keyframe] = &[
        kf(0, 0), kf(193, 30), kf(480, 80), kf(730, 15), kf(1130, 30), kf(1470, 80),
        kf(1800, 0),
    ];
    const IDLE_2: &[Keyframe] = &[
        kf(0, 0), kf(240, 80), kf(420, 50), kf(500, 80), kf(650, 50), kf(740, 80),
        kf(880, 50), kf(970, 80), kf(1110, 50), kf(1200, 80), kf(1340, 50), kf(1440, 80),
        kf(1600, 0),
    ];
    const IDLE_3: &[Keyframe] = &[
        kf(0, 0), kf(350, 60), kf(875, 30), kf(1130, 55), kf(1465, 35), kf(1600, 50),
        kf(1900, 35), kf(2150, 0),
    ];
    const IDLE_4: &[Keyframe] = &[
        kf(0, 0), kf(150, 35), kf(290, 60), kf(510, 70), kf(680, 60), kf(970, 35),
        kf(1150, 0),
    ];
    const IDLE_5: &[Keyframe] = &[
        kf(0, 0), kf(210, 80), kf(350, 60), kf(700, 80), kf(870, 60), kf(1190, 90),
        kf(1360, 70), kf(1730, 90), kf(1900, 60), kf(2330, 80), kf(2510, 30), kf(3960, 60),
        kf(4210, 40), kf(4360, 60), kf(4500, 40), kf(4650, 60), kf(4790, 40), kf(5030, 0),
    ];
    const IDLE_6: &[Keyframe] = &[
        kf(0, 0), kf(137, 70), kf(200, 40), kf(500, 10), kf(750, 90), kf(840, 45),
        kf(1000, 0),
    ];
    const IDLE_7: &[Keyframe] = &[
        kf(0, 0), kf(425, 70), kf(700, 30), kf(1380, 70), kf(1690, 30), kf(3070, 70),
        kf(3400, 30), kf(4340, 50), kf(4710, 0),
    ];

    pub(super) const TRACKS: [Animation<'static>; TRACK_COUNT] = [
        Animation::new(1, "Scold 1", SCOLD_1),
        Animation::new(2, "Scold 2", SCOLD_2),
        Animation::new(3, "Scold 3", SCOLD_3),
        Animation::new(4, "Scold 4", SCOLD_4),
        Animation::new(5, "Scold 5", SCOLD_5),
        Animation::new(6, "Scold 6", SCOLD_6),
        Animation::new(7, "Scold 7", SCOLD_7),
        Animation::new(8, "Idle 1", IDLE_1),
        Animation::new(9, "Idle 2", IDLE_2),
        Animation::new(10, "Idle 3", IDLE_3),
        Animation::new(11, "Idle 4", IDLE_4),
        Animation::new(12, "Idle 5", IDLE_5),
        Animation::new(13, "Idle 6", IDLE_6),
        Animation::new(14, "Idle 7", IDLE_7),
    ];
}
