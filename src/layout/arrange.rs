//! Layout arithmetic: where each segment goes inside the display area.

use bevy::math::Rect;

use super::{Arrangement, SegmentKind, Spacing};
use crate::error::ClockError;
use crate::glyph::{DIGIT_COLS, DIGIT_ROWS, SEPARATOR_COLS};

use super::SegmentKind::{Digit as D, Separator as S};

const HORIZONTAL: &[&[SegmentKind]] = &[&[D, D, S, D, D, S, D, D]];
const VERTICAL: &[&[SegmentKind]] = &[&[D, D], &[D, D], &[D, D]];
const SINGLE: &[&[SegmentKind]] = &[&[D]];

/// Segment rows for an arrangement, top to bottom
pub fn pattern(arrangement: Arrangement) -> &'static [&'static [SegmentKind]] {
    match arrangement {
        Arrangement::Horizontal => HORIZONTAL,
        Arrangement::Vertical => VERTICAL,
        Arrangement::Single => SINGLE,
    }
}

fn columns(kind: SegmentKind) -> usize {
    match kind {
        SegmentKind::Digit => DIGIT_COLS,
        SegmentKind::Separator => SEPARATOR_COLS,
    }
}

/// Pixel width of gaps inside and between the segments of one row
fn row_gap_width(row: &[SegmentKind], spacing: Spacing) -> f32 {
    let inner: usize = row.iter().map(|&kind| columns(kind) - 1).sum();
    inner as f32 * spacing.gap + row.len().saturating_sub(1) as f32 * spacing.segment_gap
}

/// Largest whole-pixel square cell that fits every row and the full height
pub fn cell_size(bounds: Rect, spacing: Spacing, rows: &[&[SegmentKind]]) -> Result<f32, ClockError> {
    let too_small = || ClockError::LayoutTooSmall {
        width: bounds.width(),
        height: bounds.height(),
    };

    let per_width = rows
        .iter()
        .map(|row| {
            let units: usize = row.iter().map(|&kind| columns(kind)).sum();
            (bounds.width() - row_gap_width(row, spacing)) / units as f32
        })
        .fold(f32::INFINITY, f32::min);

    let units_high = rows.len() * DIGIT_ROWS;
    let gaps_high = rows.len() * (DIGIT_ROWS - 1);
    let per_height = (bounds.height()
        - gaps_high as f32 * spacing.gap
        - rows.len().saturating_sub(1) as f32 * spacing.segment_gap)
        / units_high as f32;

    let cell = per_width.min(per_height).floor();
    if !cell.is_finite() || cell < 1.0 {
        return Err(too_small());
    }
    Ok(cell)
}

/// Width and height of a segment built from square `cell`s
pub fn segment_size(kind: SegmentKind, cell: f32, spacing: Spacing) -> (f32, f32) {
    let cols = columns(kind) as f32;
    let rows = DIGIT_ROWS as f32;
    (
        cols * cell + (cols - 1.0) * spacing.gap,
        rows * cell + (rows - 1.0) * spacing.gap,
    )
}

/// Bounding box of every segment, in display order, centred in `bounds`
pub fn place(
    bounds: Rect,
    spacing: Spacing,
    arrangement: Arrangement,
) -> Result<Vec<(SegmentKind, Rect)>, ClockError> {
    let rows = pattern(arrangement);
    let cell = cell_size(bounds, spacing, rows)?;
    let (_, segment_h) = segment_size(SegmentKind::Digit, cell, spacing);
    let block_h = rows.len() as f32 * segment_h + rows.len().saturating_sub(1) as f32 * spacing.segment_gap;

    let mut placed = Vec::new();
    let mut y = bounds.min.y + (bounds.height() - block_h) / 2.0;
    for row in rows {
        let row_w: f32 = row
            .iter()
            .map(|&kind| segment_size(kind, cell, spacing).0)
            .sum::<f32>()
            + row.len().saturating_sub(1) as f32 * spacing.segment_gap;

        let mut x = bounds.min.x + (bounds.width() - row_w) / 2.0;
        for &kind in *row {
            let (w, h) = segment_size(kind, cell, spacing);
            placed.push((kind, Rect::new(x, y, x + w, y + h)));
            x += w + spacing.segment_gap;
        }
        y += segment_h + spacing.segment_gap;
    }
    Ok(placed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spacing() -> Spacing {
        Spacing {
            gap: 4.0,
            segment_gap: 16.0,
        }
    }

    #[test]
    fn test_horizontal_cell_size() {
        let bounds = Rect::new(0.0, 0.0, 1000.0, 700.0);
        // 28 columns, 20 cell gaps and 7 segment gaps across
        let expected_w = (1000.0 - 20.0 * 4.0 - 7.0 * 16.0) / 28.0;
        // 6 rows, 5 gaps down
        let expected_h = (700.0 - 5.0 * 4.0) / 6.0;
        let cell = cell_size(bounds, spacing(), pattern(Arrangement::Horizontal)).unwrap();
        assert_eq!(cell, f32::min(expected_w, expected_h).floor());
        assert_eq!(cell, 28.0);
    }

    #[test]
    fn test_vertical_cell_size() {
        let bounds = Rect::new(0.0, 0.0, 400.0, 900.0);
        let expected_w = (400.0 - 6.0 * 4.0 - 16.0) / 8.0;
        let expected_h = (900.0 - 15.0 * 4.0 - 2.0 * 16.0) / 18.0;
        let cell = cell_size(bounds, spacing(), pattern(Arrangement::Vertical)).unwrap();
        assert_eq!(cell, f32::min(expected_w, expected_h).floor());
        assert_eq!(cell, 44.0);
    }

    #[test]
    fn test_too_small() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 20.0);
        assert!(matches!(
            place(bounds, spacing(), Arrangement::Horizontal),
            Err(ClockError::LayoutTooSmall { .. })
        ));
    }

    #[test]
    fn test_horizontal_placement_is_ordered_and_disjoint() {
        let bounds = Rect::new(0.0, 0.0, 1000.0, 700.0);
        let placed = place(bounds, spacing(), Arrangement::Horizontal).unwrap();
        let kinds: Vec<SegmentKind> = placed.iter().map(|(kind, _)| *kind).collect();
        assert_eq!(kinds, vec![D, D, S, D, D, S, D, D]);

        for pair in placed.windows(2) {
            let (a, b) = (pair[0].1, pair[1].1);
            assert!((b.min.x - a.max.x - 16.0).abs() < 1e-3);
            assert_eq!(a.min.y, b.min.y);
        }
        for (_, rect) in &placed {
            assert!(rect.min.x >= bounds.min.x && rect.max.x <= bounds.max.x);
            assert!(rect.min.y >= bounds.min.y && rect.max.y <= bounds.max.y);
        }

        // Centred horizontally
        let left = placed[0].1.min.x - bounds.min.x;
        let right = bounds.max.x - placed[7].1.max.x;
        assert!((left - right).abs() < 1e-3);
    }

    #[test]
    fn test_vertical_placement_rows() {
        let bounds = Rect::new(0.0, 0.0, 400.0, 900.0);
        let placed = place(bounds, spacing(), Arrangement::Vertical).unwrap();
        assert_eq!(placed.len(), 6);
        assert!(placed.iter().all(|(kind, _)| *kind == D));

        // Two per row, rows stacked top to bottom
        assert_eq!(placed[0].1.min.y, placed[1].1.min.y);
        assert!(placed[2].1.min.y > placed[0].1.max.y);
        assert!(placed[4].1.min.y > placed[2].1.max.y);
        assert!(placed[1].1.min.x > placed[0].1.max.x);
    }

    #[test]
    fn test_segment_grid_gets_square_cells() {
        let cell = 28.0;
        let (w, h) = segment_size(SegmentKind::Digit, cell, spacing());
        assert_eq!(w, 4.0 * 28.0 + 3.0 * 4.0);
        assert_eq!(h, 6.0 * 28.0 + 5.0 * 4.0);
        let (w, _) = segment_size(SegmentKind::Separator, cell, spacing());
        assert_eq!(w, 2.0 * 28.0 + 4.0);
    }
}
