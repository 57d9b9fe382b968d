//! Multi-digit clock display composed from digit and separator glyphs.
//!
//! A `Layout` owns an ordered list of segments and fans a list of digit values
//! out to them. Placement arithmetic lives in `arrange.rs`.

mod arrange;

use std::time::Duration;

use bevy::math::{Rect, Vec2};
use serde::Deserialize;

use crate::config::ClockConfig;
use crate::error::ClockError;
use crate::glyph::{DigitGlyph, SeparatorGlyph, digit_glyph};
use crate::grid::Grid;
use crate::surface::{RedrawMode, Surface};

/// How segments are arranged on screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Arrangement {
    /// `HH:MM:SS` in one row
    #[default]
    Horizontal,
    /// Three rows of two digits, no separators
    Vertical,
    /// One digit
    Single,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentKind {
    Digit,
    Separator,
}

/// Pixel spacing used when laying out segments
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spacing {
    /// Between clock faces inside a segment
    pub gap: f32,
    /// Between neighbouring segments
    pub segment_gap: f32,
}

/// One glyph-sized block of the display
#[derive(Clone, Debug)]
pub enum Segment {
    Digit(DigitGlyph),
    Separator(SeparatorGlyph),
}

impl Segment {
    fn new(kind: SegmentKind, bounds: Rect, gap: Vec2, angular_speed: f32) -> Result<Self, ClockError> {
        Ok(match kind {
            SegmentKind::Digit => Segment::Digit(DigitGlyph::new(bounds, gap, angular_speed)?),
            SegmentKind::Separator => Segment::Separator(SeparatorGlyph::new(bounds, gap, angular_speed)?),
        })
    }

    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::Digit(_) => SegmentKind::Digit,
            Segment::Separator(_) => SegmentKind::Separator,
        }
    }

    pub fn grid(&self) -> &Grid {
        match self {
            Segment::Digit(digit) => digit.grid(),
            Segment::Separator(sep) => sep.grid(),
        }
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        match self {
            Segment::Digit(digit) => digit.grid_mut(),
            Segment::Separator(sep) => sep.grid_mut(),
        }
    }

    pub fn clear(&mut self) {
        match self {
            Segment::Digit(digit) => digit.clear(),
            Segment::Separator(sep) => sep.blank(),
        }
    }

    pub fn render(&mut self, surface: &mut impl Surface, now: Duration, mode: RedrawMode) -> usize {
        match self {
            Segment::Digit(digit) => digit.render(surface, now, mode),
            Segment::Separator(sep) => sep.render(surface, now, mode),
        }
    }
}

/// The full display
#[derive(Clone, Debug)]
pub struct Layout {
    arrangement: Arrangement,
    bounds: Rect,
    spacing: Spacing,
    segments: Vec<Segment>,
}

impl Layout {
    pub fn new(
        arrangement: Arrangement,
        bounds: Rect,
        spacing: Spacing,
        angular_speed: f32,
    ) -> Result<Self, ClockError> {
        let gap = Vec2::splat(spacing.gap);
        let segments = arrange::place(bounds, spacing, arrangement)?
            .into_iter()
            .map(|(kind, rect)| Segment::new(kind, rect, gap, angular_speed))
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "{:?} layout: {} segments in {}x{}",
            arrangement,
            segments.len(),
            bounds.width(),
            bounds.height()
        );

        Ok(Layout {
            arrangement,
            bounds,
            spacing,
            segments,
        })
    }

    /// Six digits with separators: `HH:MM:SS`
    pub fn horizontal(bounds: Rect, spacing: Spacing, angular_speed: f32) -> Result<Self, ClockError> {
        Self::new(Arrangement::Horizontal, bounds, spacing, angular_speed)
    }

    /// `HH` / `MM` / `SS` stacked, for portrait displays
    pub fn vertical(bounds: Rect, spacing: Spacing, angular_speed: f32) -> Result<Self, ClockError> {
        Self::new(Arrangement::Vertical, bounds, spacing, angular_speed)
    }

    pub fn single(bounds: Rect, spacing: Spacing, angular_speed: f32) -> Result<Self, ClockError> {
        Self::new(Arrangement::Single, bounds, spacing, angular_speed)
    }

    /// Layout filling the configured canvas minus its margin
    pub fn from_config(config: &ClockConfig) -> Result<Self, ClockError> {
        Self::new(
            config.layout,
            config.display_area(),
            config.spacing(),
            config.angular_speed,
        )
    }

    pub fn arrangement(&self) -> Arrangement {
        self.arrangement
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of values `set_all` expects
    pub fn digit_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| s.kind() == SegmentKind::Digit)
            .count()
    }

    /// Value shown by each digit segment, in order
    pub fn digits(&self) -> Vec<Option<u8>> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Digit(digit) => Some(digit.value()),
                Segment::Separator(_) => None,
            })
            .collect()
    }

    /// Feed one value to each digit segment in order and pulse every
    /// separator. Nothing changes unless every value is valid.
    pub fn set_all(&mut self, values: &[u8]) -> Result<(), ClockError> {
        let expected = self.digit_count();
        if values.len() != expected {
            return Err(ClockError::ValueCountMismatch {
                expected,
                actual: values.len(),
            });
        }
        for &value in values {
            digit_glyph(value)?;
        }

        let mut values = values.iter();
        for segment in &mut self.segments {
            match segment {
                Segment::Digit(digit) => {
                    if let Some(&value) = values.next() {
                        digit.set_value(value)?;
                    }
                }
                Segment::Separator(sep) => sep.pulse(),
            }
        }
        Ok(())
    }

    /// Show or fold away every separator
    pub fn set_separators(&mut self, visible: bool) {
        for segment in &mut self.segments {
            if let Segment::Separator(sep) = segment {
                if visible {
                    sep.pulse();
                } else {
                    sep.blank();
                }
            }
        }
    }

    /// Fold every segment's hands away
    pub fn blank(&mut self) {
        for segment in &mut self.segments {
            segment.clear();
        }
    }

    /// Render every segment in order. Returns how many faces were drawn.
    pub fn render_all(&mut self, surface: &mut impl Surface, now: Duration, mode: RedrawMode) -> usize {
        if mode == RedrawMode::Full {
            let all = surface.bounds();
            surface.clear_region(all);
        }
        self.segments
            .iter_mut()
            .map(|segment| segment.render(surface, now, mode))
            .sum()
    }

    /// Fit the display into new bounds, keeping every hand where it is
    pub fn resize(&mut self, bounds: Rect) -> Result<(), ClockError> {
        let placed = arrange::place(bounds, self.spacing, self.arrangement)?;
        for (segment, (_, rect)) in self.segments.iter_mut().zip(placed) {
            segment.grid_mut().set_bounds(rect);
        }
        self.bounds = bounds;
        Ok(())
    }
}
