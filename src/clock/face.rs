use std::time::Duration;

use bevy::math::{Rect, Vec2};

use super::angle::{AnglePair, AngleState};
use crate::error::ClockError;
use crate::surface::{RedrawMode, Surface};

/// Hour hand length as a fraction of the face radius
pub const HOUR_HAND_LEN: f32 = 0.7;
/// Minute hand length as a fraction of the face radius
pub const MINUTE_HAND_LEN: f32 = 0.9;

/// One analog clock: hand state plus where it sits on the canvas
#[derive(Clone, Debug)]
pub struct ClockFace {
    state: AngleState,
    center: Vec2,
    radius: f32,
    /// Area the face owns: cleared before painting and clipped to
    tile: Rect,
    /// Needs painting even if the hands are still (new or moved face)
    dirty: bool,
}

impl ClockFace {
    /// A face owning the square its circle is inscribed in
    pub fn new(center: Vec2, radius: f32, angular_speed: f32) -> Result<Self, ClockError> {
        Ok(ClockFace {
            state: AngleState::new(angular_speed)?,
            center,
            radius,
            tile: Rect::from_center_half_size(center, Vec2::splat(radius)),
            dirty: true,
        })
    }

    /// Same face, owning `tile` instead
    pub fn with_tile(mut self, tile: Rect) -> Self {
        self.tile = tile;
        self
    }

    pub fn state(&self) -> &AngleState {
        &self.state
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_target(&mut self, target: AnglePair) {
        self.state.set_target(target);
    }

    /// Move the face; it repaints on the next render
    pub fn place(&mut self, center: Vec2, radius: f32, tile: Rect) {
        self.center = center;
        self.radius = radius;
        self.tile = tile;
        self.dirty = true;
    }

    /// Canvas area this face owns. Tiles of one grid never overlap, so
    /// repainting a face cannot touch its neighbours.
    pub fn tile(&self) -> Rect {
        self.tile
    }

    /// End points of the hour and minute hands
    pub fn hand_tips(&self) -> (Vec2, Vec2) {
        (
            self.hand_tip(self.state.hour(), HOUR_HAND_LEN),
            self.hand_tip(self.state.minute(), MINUTE_HAND_LEN),
        )
    }

    fn hand_tip(&self, angle: f32, len: f32) -> Vec2 {
        // y grows downward on the canvas, so "up" is -cos
        self.center + self.radius * len * Vec2::new(angle.sin(), -angle.cos())
    }

    /// Advance the hands to `now` and paint if needed. Returns whether the face
    /// was drawn.
    pub fn render(&mut self, surface: &mut impl Surface, now: Duration, mode: RedrawMode) -> bool {
        let update = self.state.tick(now);

        if mode == RedrawMode::Incremental && !update.changed && !self.dirty {
            return false;
        }

        surface.set_clip(Some(self.tile));
        if mode == RedrawMode::Incremental {
            surface.clear_region(self.tile);
        }

        let (hour_tip, minute_tip) = self.hand_tips();
        surface.begin_path();
        surface.circle(self.center, self.radius);
        surface.line(self.center, hour_tip);
        surface.line(self.center, minute_tip);
        surface.end_path();
        surface.stroke();
        surface.set_clip(None);

        self.dirty = false;
        true
    }
}
