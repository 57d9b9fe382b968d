use std::convert::Infallible;

use bevy::math::{Rect, Vec2};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};

use super::Surface;

#[derive(Clone, Copy, Debug, PartialEq)]
enum PathCommand {
    Circle { center: Vec2, radius: f32 },
    Line { from: Vec2, to: Vec2 },
}

/// Software canvas: an opaque RGBA8 pixel buffer drawn with embedded-graphics.
///
/// A pixel belongs to a region when its centre lies inside it, so regions
/// that share an edge never share a pixel.
#[derive(Clone, Debug)]
pub struct RasterSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    background: Rgb888,
    ink: Rgb888,
    stroke_width: u32,
    path: Vec<PathCommand>,
    clip: Option<Rectangle>,
    /// Set by any pixel write, cleared by `take_dirty`
    dirty: bool,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32, background: [u8; 3], ink: [u8; 3], stroke_width: u32) -> Self {
        let [r, g, b] = background;
        let pixels = [r, g, b, u8::MAX]
            .into_iter()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        RasterSurface {
            width,
            height,
            pixels,
            background: Rgb888::new(r, g, b),
            ink: Rgb888::new(ink[0], ink[1], ink[2]),
            stroke_width: stroke_width.max(1),
            path: Vec::new(),
            clip: None,
            dirty: true,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.index(x, y);
        let px = &self.pixels[i..i + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Returns whether pixels changed since the last call, and resets the flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    fn put(&mut self, point: Point, color: Rgb888) {
        if point.x < 0 || point.y < 0 || point.x >= self.width as i32 || point.y >= self.height as i32 {
            return;
        }
        let i = self.index(point.x as u32, point.y as u32);
        self.pixels[i..i + 4].copy_from_slice(&[color.r(), color.g(), color.b(), u8::MAX]);
        self.dirty = true;
    }

    fn paint(&mut self, path: &[PathCommand]) -> Result<(), Infallible> {
        let style = PrimitiveStyle::with_stroke(self.ink, self.stroke_width);
        let clip = self.clip.unwrap_or_else(|| self.bounding_box());
        let mut target = self.clipped(&clip);

        for cmd in path {
            match *cmd {
                PathCommand::Circle { center, radius } => {
                    let diameter = (2.0 * radius).round().max(1.0) as u32;
                    Circle::with_center(to_point(center), diameter)
                        .into_styled(style)
                        .draw(&mut target)?;
                }
                PathCommand::Line { from, to } => {
                    Line::new(to_point(from), to_point(to))
                        .into_styled(style)
                        .draw(&mut target)?;
                }
            }
        }
        Ok(())
    }
}

fn to_point(v: Vec2) -> Point {
    Point::new(v.x.round() as i32, v.y.round() as i32)
}

/// Pixels whose centres fall inside `region`
fn pixel_area(region: Rect) -> Rectangle {
    let x0 = (region.min.x - 0.5).ceil() as i32;
    let y0 = (region.min.y - 0.5).ceil() as i32;
    let x1 = (region.max.x - 0.5).ceil() as i32;
    let y1 = (region.max.y - 0.5).ceil() as i32;
    Rectangle::new(
        Point::new(x0, y0),
        Size::new(x1.saturating_sub(x0).max(0) as u32, y1.saturating_sub(y0).max(0) as u32),
    )
}

impl OriginDimensions for RasterSurface {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for RasterSurface {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.put(point, color);
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        for y in area.rows() {
            for x in area.columns() {
                self.put(Point::new(x, y), color);
            }
        }
        Ok(())
    }
}

impl Surface for RasterSurface {
    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }

    fn set_clip(&mut self, region: Option<Rect>) {
        self.clip = region.map(pixel_area);
    }

    fn clear_region(&mut self, region: Rect) {
        let mut area = pixel_area(region);
        if let Some(clip) = self.clip {
            area = area.intersection(&clip);
        }
        let background = self.background;
        let Ok(()) = self.fill_solid(&area, background);
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn circle(&mut self, center: Vec2, radius: f32) {
        self.path.push(PathCommand::Circle { center, radius });
    }

    fn line(&mut self, from: Vec2, to: Vec2) {
        self.path.push(PathCommand::Line { from, to });
    }

    fn end_path(&mut self) {}

    fn stroke(&mut self) {
        let path = std::mem::take(&mut self.path);
        let Ok(()) = self.paint(&path);
        // Keep the path so a second stroke repaints it, as a canvas would
        self.path = path;
    }
}
