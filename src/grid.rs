//! Rectangular block of clock faces fitted into a bounding box.

use std::time::Duration;

use bevy::math::{Rect, Vec2};

use crate::clock::{AnglePair, ClockFace};
use crate::error::ClockError;
use crate::glyph::BLANK;
use crate::surface::{RedrawMode, Surface};

/// `rows x cols` clock faces of equal size, stored row-major
#[derive(Clone, Debug)]
pub struct Grid {
    faces: Vec<ClockFace>,
    rows: usize,
    cols: usize,
    bounds: Rect,
    /// Horizontal and vertical space between neighbouring cells
    gap: Vec2,
}

impl Grid {
    pub fn new(
        bounds: Rect,
        gap: Vec2,
        rows: usize,
        cols: usize,
        angular_speed: f32,
    ) -> Result<Self, ClockError> {
        if rows == 0 || cols == 0 {
            return Err(ClockError::EmptyGrid { rows, cols });
        }

        let mut grid = Grid {
            faces: Vec::with_capacity(rows * cols),
            rows,
            cols,
            bounds,
            gap,
        };
        let radius = grid.radius();
        for row in 0..rows {
            for col in 0..cols {
                let center = grid.cell_center(row, col);
                let tile = grid.cell_tile(row, col);
                grid.faces
                    .push(ClockFace::new(center, radius, angular_speed)?.with_tile(tile));
            }
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn gap(&self) -> Vec2 {
        self.gap
    }

    /// Width and height of one cell
    pub fn cell_size(&self) -> Vec2 {
        let cols = self.cols as f32;
        let rows = self.rows as f32;
        Vec2::new(
            (self.bounds.width() - self.gap.x * (cols - 1.0)) / cols,
            (self.bounds.height() - self.gap.y * (rows - 1.0)) / rows,
        )
    }

    /// Face radius shared by every cell
    pub fn radius(&self) -> f32 {
        let cell = self.cell_size();
        cell.x.min(cell.y) / 2.0
    }

    pub fn cell_center(&self, row: usize, col: usize) -> Vec2 {
        let cell = self.cell_size();
        Vec2::new(
            self.bounds.min.x + col as f32 * (cell.x + self.gap.x) + cell.x / 2.0,
            self.bounds.min.y + row as f32 * (cell.y + self.gap.y) + cell.y / 2.0,
        )
    }

    /// The cell plus half the gap on each inner side. Tiles cover the
    /// bounds without overlapping; neighbours share one edge value.
    pub fn cell_tile(&self, row: usize, col: usize) -> Rect {
        let cell = self.cell_size();
        let (min_x, max_x) = (
            tile_edge(self.bounds.min.x, self.bounds.max.x, cell.x, self.gap.x, col, self.cols),
            tile_edge(self.bounds.min.x, self.bounds.max.x, cell.x, self.gap.x, col + 1, self.cols),
        );
        let (min_y, max_y) = (
            tile_edge(self.bounds.min.y, self.bounds.max.y, cell.y, self.gap.y, row, self.rows),
            tile_edge(self.bounds.min.y, self.bounds.max.y, cell.y, self.gap.y, row + 1, self.rows),
        );
        Rect {
            min: Vec2::new(min_x, min_y),
            max: Vec2::new(max_x, max_y),
        }
    }

    /// Move the grid; faces keep their hand angles
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        let radius = self.radius();
        for row in 0..self.rows {
            for col in 0..self.cols {
                let center = self.cell_center(row, col);
                let tile = self.cell_tile(row, col);
                self.faces[row * self.cols + col].place(center, radius, tile);
            }
        }
    }

    pub fn face(&self, row: usize, col: usize) -> Option<&ClockFace> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.faces.get(row * self.cols + col)
    }

    pub fn faces(&self) -> &[ClockFace] {
        &self.faces
    }

    pub fn faces_mut(&mut self) -> &mut [ClockFace] {
        &mut self.faces
    }

    /// Retarget every cell from a glyph of the grid's exact shape
    pub fn set_targets<const C: usize>(&mut self, glyph: &[[AnglePair; C]]) -> Result<(), ClockError> {
        if glyph.len() != self.rows || C != self.cols {
            return Err(ClockError::ShapeMismatch {
                expected: (self.rows, self.cols),
                actual: (glyph.len(), C),
            });
        }

        for (face, target) in self.faces.iter_mut().zip(glyph.iter().flatten()) {
            face.set_target(*target);
        }
        Ok(())
    }

    /// Fold every cell's hands together so the grid reads as empty
    pub fn clear_all(&mut self) {
        for face in &mut self.faces {
            face.set_target(BLANK);
        }
    }

    /// Render faces in row-major order. Returns how many were drawn.
    pub fn render(&mut self, surface: &mut impl Surface, now: Duration, mode: RedrawMode) -> usize {
        self.faces
            .iter_mut()
            .map(|face| face.render(surface, now, mode))
            .filter(|&drawn| drawn)
            .count()
    }
}

/// Edge `k` of `count` tiles along one axis: the outer edges are the bounds,
/// inner edges sit in the middle of the gap
fn tile_edge(min: f32, max: f32, cell: f32, gap: f32, k: usize, count: usize) -> f32 {
    if k == 0 {
        min
    } else if k >= count {
        max
    } else {
        min + k as f32 * (cell + gap) - gap / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::{DIGITS, RD, SEPARATOR};
    use crate::surface::recording::RecordingSurface;
    use std::f32::consts::PI;

    fn digit_grid() -> Grid {
        Grid::new(
            Rect::new(0.0, 0.0, 240.0, 360.0),
            Vec2::new(10.0, 10.0),
            6,
            4,
            PI,
        )
        .unwrap()
    }

    #[test]
    fn test_cell_radius() {
        let grid = digit_grid();
        let cell = grid.cell_size();
        assert!((cell.x - 52.5).abs() < 1e-4);
        assert!((cell.y - 310.0 / 6.0).abs() < 1e-4);
        assert!((grid.radius() - 25.8333).abs() < 1e-3);
        assert!(grid.faces().iter().all(|f| f.radius() == grid.radius()));
    }

    #[test]
    fn test_cell_centers() {
        let grid = Grid::new(
            Rect::new(50.0, 50.0, 290.0, 410.0),
            Vec2::new(10.0, 10.0),
            6,
            4,
            PI,
        )
        .unwrap();
        let first = grid.face(0, 0).unwrap().center();
        assert!((first.x - (50.0 + 26.25)).abs() < 1e-4);
        assert!((first.y - (50.0 + 310.0 / 12.0)).abs() < 1e-4);

        let last = grid.face(5, 3).unwrap().center();
        assert!((last.x - (290.0 - 26.25)).abs() < 1e-3);
        assert!((last.y - (410.0 - 310.0 / 12.0)).abs() < 1e-3);
        assert!(grid.face(6, 0).is_none());
        assert!(grid.face(0, 4).is_none());
    }

    #[test]
    fn test_tiles_partition_bounds() {
        let bounds = Rect::new(3.0, 7.0, 243.0, 367.0);
        let grid = Grid::new(bounds, Vec2::new(10.0, 10.0), 6, 4, PI).unwrap();

        for row in 0..6 {
            for col in 0..4 {
                let tile = grid.face(row, col).unwrap().tile();
                assert_eq!(tile, grid.cell_tile(row, col));
                assert!(tile.contains(grid.cell_center(row, col)));
                if col + 1 < 4 {
                    assert_eq!(tile.max.x, grid.cell_tile(row, col + 1).min.x);
                }
                if row + 1 < 6 {
                    assert_eq!(tile.max.y, grid.cell_tile(row + 1, col).min.y);
                }
            }
        }
        assert_eq!(grid.cell_tile(0, 0).min, bounds.min);
        assert_eq!(grid.cell_tile(5, 3).max, bounds.max);
        // Inner edges split the gap: 3 + 52.5 + 5
        assert!((grid.cell_tile(0, 0).max.x - 60.5).abs() < 1e-4);
    }

    #[test]
    fn test_rejects_empty_grid() {
        let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(
            Grid::new(bounds, Vec2::ZERO, 0, 4, PI).unwrap_err(),
            ClockError::EmptyGrid { rows: 0, cols: 4 }
        );
        assert!(Grid::new(bounds, Vec2::ZERO, 2, 2, 0.0).is_err());
    }

    #[test]
    fn test_faces_start_at_twelve() {
        let grid = digit_grid();
        assert_eq!(grid.faces().len(), 24);
        for face in grid.faces() {
            assert_eq!(face.state().hour(), 0.0);
            assert_eq!(face.state().minute(), 0.0);
            assert_eq!(face.state().target(), AnglePair::new(0.0, 0.0));
        }
    }

    #[test]
    fn test_set_targets_row_major() {
        let mut grid = digit_grid();
        grid.set_targets(&DIGITS[7]).unwrap();
        for row in 0..6 {
            for col in 0..4 {
                let face = grid.face(row, col).unwrap();
                assert_eq!(face.state().target(), DIGITS[7][row][col]);
            }
        }
    }

    #[test]
    fn test_set_targets_shape_mismatch() {
        let mut grid = digit_grid();
        assert_eq!(
            grid.set_targets(&SEPARATOR).unwrap_err(),
            ClockError::ShapeMismatch {
                expected: (6, 4),
                actual: (6, 2)
            }
        );
        assert!(grid.set_targets(&[[RD; 4]; 5]).is_err());
        // Nothing was retargeted
        assert!(grid.faces().iter().all(|f| f.state().target() == AnglePair::new(0.0, 0.0)));
    }

    #[test]
    fn test_clear_all() {
        let mut grid = digit_grid();
        grid.set_targets(&DIGITS[3]).unwrap();
        grid.clear_all();
        assert!(grid.faces().iter().all(|f| f.state().target() == BLANK));
    }

    #[test]
    fn test_render_counts_drawn_faces() {
        let mut grid = digit_grid();
        let mut surface = RecordingSurface::new(240.0, 360.0);
        assert_eq!(
            grid.render(&mut surface, Duration::ZERO, RedrawMode::Incremental),
            24
        );
        assert_eq!(
            grid.render(&mut surface, Duration::from_millis(16), RedrawMode::Incremental),
            0
        );
        assert_eq!(
            grid.render(&mut surface, Duration::from_millis(32), RedrawMode::Full),
            24
        );
    }

    #[test]
    fn test_set_bounds_keeps_angles() {
        let mut grid = digit_grid();
        grid.set_targets(&DIGITS[1]).unwrap();
        let mut surface = RecordingSurface::new(1000.0, 1000.0);
        grid.render(&mut surface, Duration::ZERO, RedrawMode::Incremental);
        grid.render(&mut surface, Duration::from_millis(400), RedrawMode::Incremental);
        let before: Vec<f32> = grid.faces().iter().map(|f| f.state().hour()).collect();

        grid.set_bounds(Rect::new(100.0, 100.0, 230.0, 300.0));
        let after: Vec<f32> = grid.faces().iter().map(|f| f.state().hour()).collect();
        assert_eq!(before, after);
        assert!((grid.radius() - 12.5).abs() < 1e-4);
        assert!(grid.face(0, 0).unwrap().center().x > 100.0);
    }
}
