//! Digit and separator glyphs drawn with clock hands.
//!
//! - **Table** (`table.rs`): the angle-pair alphabet and the per-cell glyph data
//! - **Glyphs** (`digit.rs`): `DigitGlyph` and `SeparatorGlyph` grids that apply it

mod digit;
mod table;

pub use digit::{DigitGlyph, SeparatorGlyph};
pub use table::*;
