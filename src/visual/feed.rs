use bevy::prelude::Resource;

use crate::error::ClockError;
use crate::layout::Layout;
use crate::time_source::{SourceKind, TimeSource, source_for, tail_for};

/// Pulls digits from a time source and retargets the display with them
#[derive(Resource)]
pub struct DigitFeed {
    source: Box<dyn TimeSource>,
    ticks: u64,
}

impl DigitFeed {
    pub fn new(source: Box<dyn TimeSource>) -> Self {
        Self { source, ticks: 0 }
    }

    pub fn from_kind(kind: SourceKind) -> Self {
        Self::new(source_for(kind))
    }

    /// Successful retargets so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Send the next reading to `layout`. With `blink`, separators fold away
    /// on every second tick.
    pub fn push(&mut self, layout: &mut Layout, blink: bool) -> Result<(), ClockError> {
        let digits = self.source.digits();
        layout.set_all(tail_for(&digits, layout.digit_count()))?;
        self.ticks += 1;

        if blink && self.ticks % 2 == 0 {
            layout.set_separators(false);
        }
        Ok(())
    }
}
