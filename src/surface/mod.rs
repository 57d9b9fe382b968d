//! Drawing-command boundary between the clock model and whatever paints it.
//!
//! Commands mirror a 2D canvas path API: a path is opened, shapes are added,
//! and `stroke` paints them. Coordinates are canvas pixels with the origin in
//! the top-left corner and y growing downward.

mod raster;
#[cfg(test)]
pub mod recording;

pub use raster::RasterSurface;

use bevy::math::{Rect, Vec2};

pub trait Surface {
    /// Full drawable area
    fn bounds(&self) -> Rect;

    /// Restrict clearing and stroking to `region` until the next call.
    /// `None` lifts the restriction.
    fn set_clip(&mut self, region: Option<Rect>);

    /// Paint `region` with the background
    fn clear_region(&mut self, region: Rect);

    fn begin_path(&mut self);

    fn circle(&mut self, center: Vec2, radius: f32);

    fn line(&mut self, from: Vec2, to: Vec2);

    fn end_path(&mut self);

    /// Paint every shape added since `begin_path`
    fn stroke(&mut self);
}

/// How a frame is repainted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedrawMode {
    /// Only faces whose hands moved are cleared and redrawn
    #[default]
    Incremental,
    /// The whole surface is cleared and every face redrawn each frame
    Full,
}
