//! Where the displayed digits come from.
//!
//! Every source yields six digits, `[H, H, M, M, S, S]`. Layouts with fewer
//! digit segments show the trailing ones (see [`tail_for`]).

use chrono::{Local, Timelike};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

/// Which source the display is driven by
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Local wall-clock time
    #[default]
    WallClock,
    /// Every digit counts 0..9 together, one step per tick
    Cycle,
    /// Independent random digits each tick
    Random,
}

/// Hour, minute and second of a time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    pub hour: u8,   // 0-23
    pub minute: u8, // 0-59
    pub second: u8, // 0-59
}

impl ClockReading {
    pub fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Current local time
    pub fn now() -> Self {
        let now = Local::now();
        // Timelike fields are always below 24 / 60, and a leap second is
        // reported as second 59
        Self::new(now.hour() as u8, now.minute() as u8, now.second().min(59) as u8)
    }

    /// Tens and units of each field
    pub fn digits(&self) -> [u8; 6] {
        [
            self.hour / 10,
            self.hour % 10,
            self.minute / 10,
            self.minute % 10,
            self.second / 10,
            self.second % 10,
        ]
    }
}

pub trait TimeSource: Send + Sync {
    /// Digits to show from now on
    fn digits(&mut self) -> [u8; 6];
}

pub struct WallClock;

impl TimeSource for WallClock {
    fn digits(&mut self) -> [u8; 6] {
        ClockReading::now().digits()
    }
}

/// Demo counter: all digits step 1, 2, ..., 9, 0, 1, ...
#[derive(Debug, Default)]
pub struct CycleSource {
    value: Option<u8>,
}

impl TimeSource for CycleSource {
    fn digits(&mut self) -> [u8; 6] {
        let next = self.value.map_or(1, |v| (v + 1) % 10);
        self.value = Some(next);
        [next; 6]
    }
}

pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_rng(&mut rand::rng()))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for RandomSource {
    fn digits(&mut self) -> [u8; 6] {
        std::array::from_fn(|_| self.rng.random_range(0..10))
    }
}

pub fn source_for(kind: SourceKind) -> Box<dyn TimeSource> {
    match kind {
        SourceKind::WallClock => Box::new(WallClock),
        SourceKind::Cycle => Box::new(CycleSource::default()),
        SourceKind::Random => Box::new(RandomSource::new()),
    }
}

/// The last `count` digits, the ones a smaller layout displays
pub fn tail_for(digits: &[u8; 6], count: usize) -> &[u8] {
    &digits[digits.len().saturating_sub(count)..]
}
