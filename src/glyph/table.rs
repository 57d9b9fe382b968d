//! Angle-pair alphabet and the per-cell glyph tables.
//!
//! Each constant names where the two hands point, hour hand first:
//! R = right, D = down, L = left, U = up, X = both hands folded together
//! toward the lower left (reads as an empty cell), Y/X-variants are the
//! diagonals used by the rounded corners of 7 and 8.

use std::f32::consts::PI;

use crate::clock::AnglePair;
use crate::error::ClockError;

pub const RD: AnglePair = AnglePair::new(0.5 * PI, PI);
pub const RL: AnglePair = AnglePair::new(0.5 * PI, 1.5 * PI);
pub const DL: AnglePair = AnglePair::new(PI, 1.5 * PI);
pub const DU: AnglePair = AnglePair::new(PI, 0.0);
pub const RU: AnglePair = AnglePair::new(0.5 * PI, 0.0);
pub const LU: AnglePair = AnglePair::new(1.5 * PI, 0.0);
pub const XX: AnglePair = AnglePair::new(1.25 * PI, 1.25 * PI);
pub const UX: AnglePair = AnglePair::new(0.0, 1.25 * PI);
pub const XD: AnglePair = AnglePair::new(0.25 * PI, PI);
pub const UY: AnglePair = AnglePair::new(0.0, 0.75 * PI);
pub const YD: AnglePair = AnglePair::new(1.75 * PI, PI);

/// Hands of a cell that shows nothing
pub const BLANK: AnglePair = XX;

pub const DIGIT_ROWS: usize = 6;
pub const DIGIT_COLS: usize = 4;
pub const SEPARATOR_COLS: usize = 2;

pub type DigitGlyphTable = [[AnglePair; DIGIT_COLS]; DIGIT_ROWS];
pub type SeparatorGlyphTable = [[AnglePair; SEPARATOR_COLS]; DIGIT_ROWS];

/// Two stacked dots
pub static SEPARATOR: SeparatorGlyphTable = [
    [XX, XX],
    [RD, DL],
    [RU, LU],
    [RD, DL],
    [RU, LU],
    [XX, XX],
];

pub static DIGITS: [DigitGlyphTable; 10] = [
    // 0
    [
        [RD, RL, RL, DL],
        [DU, RD, DL, DU],
        [DU, DU, DU, DU],
        [DU, DU, DU, DU],
        [DU, RU, LU, DU],
        [RU, RL, RL, LU],
    ],
    // 1
    [
        [RD, RL, DL, XX],
        [RU, DL, DU, XX],
        [XX, DU, DU, XX],
        [XX, DU, DU, XX],
        [RD, LU, RU, DL],
        [RU, RL, RL, LU],
    ],
    // 2
    [
        [RD, RL, RL, DL],
        [RU, RL, DL, DU],
        [RD, RL, LU, DU],
        [DU, RD, RL, LU],
        [DU, RU, RL, DL],
        [RU, RL, RL, LU],
    ],
    // 3
    [
        [RD, RL, RL, DL],
        [RU, RL, DL, DU],
        [RD, RL, LU, DU],
        [RU, RL, DL, DU],
        [RD, RL, LU, DU],
        [RU, RL, RL, LU],
    ],
    // 4
    [
        [RD, DL, RD, DL],
        [DU, DU, DU, DU],
        [DU, RU, LU, DU],
        [RU, RL, DL, DU],
        [XX, XX, DU, DU],
        [XX, XX, RU, LU],
    ],
    // 5
    [
        [RD, RL, RL, DL],
        [DU, RD, RL, LU],
        [DU, RU, RL, DL],
        [RU, RL, DL, DU],
        [RD, RL, LU, DU],
        [RU, RL, RL, LU],
    ],
    // 6
    [
        [RD, RL, RL, DL],
        [DU, RD, RL, LU],
        [DU, RU, RL, DL],
        [DU, RD, DL, DU],
        [DU, RU, LU, DU],
        [RU, RL, RL, LU],
    ],
    // 7
    [
        [RD, RL, RL, DL],
        [RU, RL, DL, DU],
        [XX, XX, UX, UX],
        [XX, XD, XD, XX],
        [XX, DU, DU, XX],
        [XX, RU, LU, XX],
    ],
    // 8
    [
        [RD, RL, RL, DL],
        [DU, RD, DL, DU],
        [UY, RU, LU, UX],
        [XD, RD, DL, YD],
        [DU, RU, LU, DU],
        [RU, RL, RL, LU],
    ],
    // 9
    [
        [RD, RL, RL, DL],
        [DU, RD, DL, DU],
        [DU, RU, LU, DU],
        [RU, RL, DL, DU],
        [RD, RL, LU, DU],
        [RU, RL, RL, LU],
    ],
];

/// Look up the glyph for a digit value
pub fn digit_glyph(value: u8) -> Result<&'static DigitGlyphTable, ClockError> {
    DIGITS
        .get(usize::from(value))
        .ok_or(ClockError::InvalidDigit(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    #[test]
    fn test_alphabet_values() {
        assert_eq!(RD, AnglePair::new(0.5 * PI, PI));
        assert_eq!(XX.hour, XX.minute);
        assert_eq!(DU.minute, 0.0);
        assert_eq!(YD, AnglePair::new(1.75 * PI, PI));
    }

    #[test]
    fn test_every_entry_is_normalized() {
        let digit_cells = DIGITS.iter().flatten().flatten();
        let separator_cells = SEPARATOR.iter().flatten();
        for pair in digit_cells.chain(separator_cells) {
            assert!((0.0..TAU).contains(&pair.hour), "{:?}", pair);
            assert!((0.0..TAU).contains(&pair.minute), "{:?}", pair);
        }
    }

    #[test]
    fn test_digit_lookup() {
        assert_eq!(digit_glyph(0).unwrap()[2], [DU, DU, DU, DU]);
        assert_eq!(digit_glyph(8).unwrap()[3], [XD, RD, DL, YD]);
        assert_eq!(digit_glyph(9).unwrap()[5], [RU, RL, RL, LU]);
        assert_eq!(digit_glyph(10), Err(ClockError::InvalidDigit(10)));
        assert_eq!(digit_glyph(255), Err(ClockError::InvalidDigit(255)));
    }

    #[test]
    fn test_glyphs_are_distinct() {
        for a in 0..DIGITS.len() {
            for b in (a + 1)..DIGITS.len() {
                assert_ne!(DIGITS[a], DIGITS[b], "digits {} and {} share a glyph", a, b);
            }
        }
    }

    #[test]
    fn test_separator_shape() {
        assert_eq!(SEPARATOR[0], [BLANK, BLANK]);
        assert_eq!(SEPARATOR[5], [BLANK, BLANK]);
        assert_eq!(SEPARATOR[1], SEPARATOR[3]);
        assert_eq!(SEPARATOR[2], SEPARATOR[4]);
    }
}
