//! A digital clock drawn with a grid of small analog clock faces.
//!
//! Each digit is a 6x4 grid of faces whose hands sweep clockwise into the
//! shape of the numeral. The model (`clock`, `grid`, `glyph`, `layout`) is
//! independent of Bevy's ECS and draws through the `Surface` trait; `visual`
//! and `camera` wire it into a Bevy app.

pub mod camera;
pub mod clock;
pub mod config;
pub mod error;
pub mod glyph;
pub mod grid;
pub mod layout;
pub mod surface;
pub mod time_source;
pub mod visual;
