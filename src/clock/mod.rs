mod angle;
mod face;

pub use angle::{AnglePair, AngleState, HandsUpdate};
pub use face::{ClockFace, HOUR_HAND_LEN, MINUTE_HAND_LEN};
