use std::time::Duration;

use bevy::math::{Rect, Vec2};

use super::table::{DIGIT_COLS, DIGIT_ROWS, SEPARATOR, SEPARATOR_COLS, digit_glyph};
use crate::error::ClockError;
use crate::grid::Grid;
use crate::surface::{RedrawMode, Surface};

/// A 6x4 grid that shows one digit
#[derive(Clone, Debug)]
pub struct DigitGlyph {
    grid: Grid,
    value: Option<u8>,
}

impl DigitGlyph {
    pub fn new(bounds: Rect, gap: Vec2, angular_speed: f32) -> Result<Self, ClockError> {
        Ok(DigitGlyph {
            grid: Grid::new(bounds, gap, DIGIT_ROWS, DIGIT_COLS, angular_speed)?,
            value: None,
        })
    }

    /// Retarget every cell to draw `value`
    pub fn set_value(&mut self, value: u8) -> Result<(), ClockError> {
        let glyph = digit_glyph(value)?;
        self.grid.set_targets(glyph)?;
        self.value = Some(value);
        Ok(())
    }

    /// Last digit set, `None` while blank
    pub fn value(&self) -> Option<u8> {
        self.value
    }

    pub fn clear(&mut self) {
        self.grid.clear_all();
        self.value = None;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn render(&mut self, surface: &mut impl Surface, now: Duration, mode: RedrawMode) -> usize {
        self.grid.render(surface, now, mode)
    }
}

/// A 6x2 grid that shows the ':' between fields
#[derive(Clone, Debug)]
pub struct SeparatorGlyph {
    grid: Grid,
    visible: bool,
}

impl SeparatorGlyph {
    pub fn new(bounds: Rect, gap: Vec2, angular_speed: f32) -> Result<Self, ClockError> {
        Ok(SeparatorGlyph {
            grid: Grid::new(bounds, gap, SEPARATOR.len(), SEPARATOR_COLS, angular_speed)?,
            visible: false,
        })
    }

    /// Retarget to the two stacked dots. The grid is built with the
    /// table's own row and column counts, so every face gets a target.
    pub fn pulse(&mut self) {
        for (face, target) in self.grid.faces_mut().iter_mut().zip(SEPARATOR.iter().flatten()) {
            face.set_target(*target);
        }
        self.visible = true;
    }

    /// Fold the dots away
    pub fn blank(&mut self) {
        self.grid.clear_all();
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn render(&mut self, surface: &mut impl Surface, now: Duration, mode: RedrawMode) -> usize {
        self.grid.render(surface, now, mode)
    }
}
