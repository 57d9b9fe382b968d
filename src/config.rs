//! Display configuration, read from JSON.
//!
//! The defaults ship embedded in the binary (`assets/clock.json`). Setting
//! `CLOCK_CONFIG` to a file path replaces them; missing fields fall back to
//! the defaults.

use std::time::Duration;

use bevy::math::Rect;
use bevy::prelude::Resource;
use serde::Deserialize;

use crate::error::ClockError;
use crate::layout::{Arrangement, Spacing};
use crate::surface::RedrawMode;
use crate::time_source::SourceKind;

const DEFAULT_CONFIG_JSON: &str = include_str!("../assets/clock.json");

/// Environment variable naming an alternative config file
pub const CONFIG_ENV: &str = "CLOCK_CONFIG";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Resource, Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClockConfig {
    /// Pixel size of the drawing canvas (and the initial window)
    pub canvas: CanvasSize,
    pub layout: Arrangement,
    /// Empty border around the display, in pixels
    pub margin: f32,
    /// Space between clock faces
    pub gap: f32,
    /// Space between digits and separators
    pub segment_gap: f32,
    /// Hand speed in radians per second
    pub angular_speed: f32,
    pub render_interval_ms: u64,
    pub retarget_interval_ms: u64,
    pub redraw: RedrawMode,
    pub source: SourceKind,
    /// Hide the separators on every other retarget tick
    pub blink_separators: bool,
    pub stroke_width: u32,
    /// RGB
    pub background: [u8; 3],
    /// RGB
    pub ink: [u8; 3],
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasSize {
                width: 1024,
                height: 720,
            },
            layout: Arrangement::Horizontal,
            margin: 24.0,
            gap: 4.0,
            segment_gap: 16.0,
            angular_speed: std::f32::consts::PI,
            render_interval_ms: 33,
            retarget_interval_ms: 1000,
            redraw: RedrawMode::Incremental,
            source: SourceKind::WallClock,
            blink_separators: false,
            stroke_width: 1,
            background: [18, 18, 22],
            ink: [232, 232, 228],
        }
    }
}

impl ClockConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ClockError> {
        let config: ClockConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// The configuration compiled into the binary
    pub fn embedded() -> Result<Self, ClockError> {
        Self::from_json(DEFAULT_CONFIG_JSON)
    }

    /// Read the file named by `CLOCK_CONFIG`, or the embedded defaults
    pub fn load() -> Result<Self, ClockError> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) => {
                let json = std::fs::read_to_string(&path)
                    .map_err(|e| ClockError::Config(format!("{}: {}", path, e)))?;
                Self::from_json(&json)
            }
            Err(_) => Self::embedded(),
        }
    }

    pub fn validate(&self) -> Result<(), ClockError> {
        let fail = |msg: String| Err(ClockError::Config(msg));

        if !self.angular_speed.is_finite() || self.angular_speed <= 0.0 {
            return fail(format!("angular_speed must be positive, got {}", self.angular_speed));
        }
        if self.render_interval_ms == 0 || self.retarget_interval_ms == 0 {
            return fail("tick intervals must be at least 1ms".to_string());
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return fail("canvas must not be empty".to_string());
        }
        if self.stroke_width == 0 {
            return fail("stroke_width must be at least 1".to_string());
        }
        for (name, value) in [
            ("margin", self.margin),
            ("gap", self.gap),
            ("segment_gap", self.segment_gap),
        ] {
            if !value.is_finite() || value < 0.0 {
                return fail(format!("{} must be zero or more, got {}", name, value));
            }
        }
        let min_side = self.canvas.width.min(self.canvas.height) as f32;
        if 2.0 * self.margin >= min_side {
            return fail(format!("margin {} leaves no room on the canvas", self.margin));
        }
        Ok(())
    }

    /// Canvas area available to the layout
    pub fn display_area(&self) -> Rect {
        Rect::new(
            self.margin,
            self.margin,
            self.canvas.width as f32 - self.margin,
            self.canvas.height as f32 - self.margin,
        )
    }

    pub fn spacing(&self) -> Spacing {
        Spacing {
            gap: self.gap,
            segment_gap: self.segment_gap,
        }
    }

    pub fn render_interval(&self) -> Duration {
        Duration::from_millis(self.render_interval_ms)
    }

    pub fn retarget_interval(&self) -> Duration {
        Duration::from_millis(self.retarget_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_embedded_config_matches_defaults() {
        assert_eq!(ClockConfig::embedded().unwrap(), ClockConfig::default());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ClockConfig::from_json(
            r#"{ "layout": "vertical", "source": "cycle", "redraw": "full", "canvas": { "width": 480, "height": 800 } }"#,
        )
        .unwrap();
        assert_eq!(config.layout, Arrangement::Vertical);
        assert_eq!(config.source, SourceKind::Cycle);
        assert_eq!(config.redraw, RedrawMode::Full);
        assert_eq!(config.canvas, CanvasSize { width: 480, height: 800 });
        assert_eq!(config.gap, ClockConfig::default().gap);
        assert_eq!(config.retarget_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_rejects_bad_values() {
        for json in [
            r#"{ "angular_speed": 0.0 }"#,
            r#"{ "angular_speed": -3.0 }"#,
            r#"{ "render_interval_ms": 0 }"#,
            r#"{ "stroke_width": 0 }"#,
            r#"{ "gap": -1.0 }"#,
            r#"{ "margin": 400.0 }"#,
            r#"{ "canvas": { "width": 0, "height": 10 } }"#,
        ] {
            let err = ClockConfig::from_json(json).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Config, "{}", json);
        }
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            ClockConfig::from_json("{ not json"),
            Err(ClockError::Config(_))
        ));
        assert!(ClockConfig::from_json(r#"{ "layout": "diagonal" }"#).is_err());
        assert!(ClockConfig::from_json(r#"{ "colour": [1, 2, 3, 4] }"#).is_err());
    }

    #[test]
    fn test_display_area_and_spacing() {
        let config = ClockConfig::default();
        assert_eq!(config.display_area(), Rect::new(24.0, 24.0, 1000.0, 696.0));
        assert_eq!(
            config.spacing(),
            Spacing {
                gap: 4.0,
                segment_gap: 16.0
            }
        );
    }
}
