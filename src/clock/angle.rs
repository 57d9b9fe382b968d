//! Hand-motion model: sweeps an hour hand and a minute hand toward their
//! targets at a constant angular speed, always clockwise.

use std::f32::consts::TAU;
use std::time::Duration;

use crate::error::ClockError;

/// A (hour, minute) hand direction pair in radians, 0 pointing up, clockwise
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnglePair {
    pub hour: f32,
    pub minute: f32,
}

impl AnglePair {
    pub const fn new(hour: f32, minute: f32) -> Self {
        Self { hour, minute }
    }

    /// Both angles wrapped into [0, 2π)
    pub fn normalized(self) -> Self {
        Self {
            hour: normalize(self.hour),
            minute: normalize(self.minute),
        }
    }
}

/// Result of advancing both hands
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandsUpdate {
    pub hour: f32,
    pub minute: f32,
    pub changed: bool,
}

/// Current and target angles for one clock face
#[derive(Clone, Debug)]
pub struct AngleState {
    hour: f32,
    minute: f32,
    target: AnglePair,
    /// Radians per second
    angular_speed: f32,
    last_update: Option<Duration>,
}

impl AngleState {
    /// Hands start at 12 o'clock with a 12 o'clock target
    pub fn new(angular_speed: f32) -> Result<Self, ClockError> {
        if !angular_speed.is_finite() || angular_speed <= 0.0 {
            return Err(ClockError::NonPositiveSpeed(angular_speed));
        }
        Ok(AngleState {
            hour: 0.0,
            minute: 0.0,
            target: AnglePair::new(0.0, 0.0),
            angular_speed,
            last_update: None,
        })
    }

    pub fn hour(&self) -> f32 {
        self.hour
    }

    pub fn minute(&self) -> f32 {
        self.minute
    }

    pub fn target(&self) -> AnglePair {
        self.target
    }

    pub fn angular_speed(&self) -> f32 {
        self.angular_speed
    }

    /// Both hands sit exactly on their targets
    pub fn is_settled(&self) -> bool {
        self.hour == self.target.hour && self.minute == self.target.minute
    }

    /// Takes effect on the next advance; a sweep in progress simply continues
    /// toward the new target.
    pub fn set_target(&mut self, target: AnglePair) {
        self.target = target.normalized();
    }

    /// Move both hands by the distance covered in `elapsed`
    pub fn advance(&mut self, elapsed: Duration) -> HandsUpdate {
        let travel = self.angular_speed * elapsed.as_secs_f32();

        let next_hour = step_hand(self.hour, self.target.hour, travel);
        let next_minute = step_hand(self.minute, self.target.minute, travel);
        let changed = next_hour != self.hour || next_minute != self.minute;

        self.hour = next_hour;
        self.minute = next_minute;

        HandsUpdate {
            hour: self.hour,
            minute: self.minute,
            changed,
        }
    }

    /// Advance by the time since the previous tick. The first tick only
    /// records `now`.
    pub fn tick(&mut self, now: Duration) -> HandsUpdate {
        let elapsed = self
            .last_update
            .map_or(Duration::ZERO, |last| now.saturating_sub(last));
        self.last_update = Some(now);
        self.advance(elapsed)
    }
}

/// One hand, one step. Never reverses and lands exactly on `target`.
fn step_hand(current: f32, target: f32, travel: f32) -> f32 {
    if current == target {
        return current;
    }

    let forward_target = if target < current { target + TAU } else { target };
    let next = current + travel;
    if next >= forward_target {
        return target;
    }

    if next >= TAU { next - TAU } else { next }
}

fn normalize(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}
