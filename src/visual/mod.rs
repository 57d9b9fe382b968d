pub mod feed;
pub mod plugin;
pub mod setup;

pub use feed::DigitFeed;
pub use plugin::ClockPlugin;
pub use setup::{Canvas, CanvasSprite, ClockDisplay, ConfigFallback};
