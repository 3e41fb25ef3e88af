//! Digit glyph table
//!
//! Each decimal digit is drawn as a 3-column by 5-row grid of cells.
//! Glyphs are stored as 15-bit masks, row-major, with bit 14 holding
//! row 0 column 0 and bit 0 holding row 4 column 2.
//!
//! The table is written as '0'/'1' templates and converted to masks
//! during const evaluation, so a malformed template fails the build.

/// Columns per glyph
pub const GLYPH_COLS: usize = 3;

/// Rows per glyph
pub const GLYPH_ROWS: usize = 5;

/// Cells per glyph
pub const GLYPH_CELLS: usize = GLYPH_COLS * GLYPH_ROWS;

/// Row-major templates for digits 0-9 ('1' = filled cell)
pub const TEMPLATES: [&str; 10] = [
    "111101101101111",
    "001001001001001",
    "111001111100111",
    "111001111001111",
    "101101111001001",
    "111100111001111",
    "111100111101111",
    "111001001001001",
    "111101111101111",
    "111101111001111",
];

/// Compiled glyph table, indexed by digit value
pub const GLYPHS: [Glyph; 10] = [
    Glyph::from_template(TEMPLATES[0]),
    Glyph::from_template(TEMPLATES[1]),
    Glyph::from_template(TEMPLATES[2]),
    Glyph::from_template(TEMPLATES[3]),
    Glyph::from_template(TEMPLATES[4]),
    Glyph::from_template(TEMPLATES[5]),
    Glyph::from_template(TEMPLATES[6]),
    Glyph::from_template(TEMPLATES[7]),
    Glyph::from_template(TEMPLATES[8]),
    Glyph::from_template(TEMPLATES[9]),
];

/// A 3x5 cell bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph(u16);

impl Glyph {
    /// Mask covering all 15 cells
    pub const FULL_MASK: u16 = (1 << GLYPH_CELLS) - 1;

    /// Build a glyph from a 15-character '0'/'1' template
    ///
    /// Panics (at compile time when used in a const) if the template
    /// has the wrong length or contains anything besides '0' and '1'.
    pub const fn from_template(template: &str) -> Self {
        let bytes = template.as_bytes();
        assert!(bytes.len() == GLYPH_CELLS, "glyph template must be 15 cells");

        let mut bits = 0u16;
        let mut i = 0;
        while i < GLYPH_CELLS {
            bits <<= 1;
            match bytes[i] {
                b'1' => bits |= 1,
                b'0' => {}
                _ => panic!("glyph template may only contain '0' and '1'"),
            }
            i += 1;
        }
        Self(bits)
    }

    /// Build a glyph from a raw mask, ignoring bits above the 15th
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits & Self::FULL_MASK)
    }

    /// Look up the glyph for a decimal digit
    pub const fn for_digit(digit: u8) -> Option<Glyph> {
        if (digit as usize) < GLYPHS.len() {
            Some(GLYPHS[digit as usize])
        } else {
            None
        }
    }

    /// Raw cell mask
    pub const fn bits(&self) -> u16 {
        self.0
    }

    /// Check whether the cell at `row`, `col` is filled
    ///
    /// Out-of-grid coordinates are never filled.
    pub const fn is_filled(&self, row: usize, col: usize) -> bool {
        if row >= GLYPH_ROWS || col >= GLYPH_COLS {
            return false;
        }
        let index = row * GLYPH_COLS + col;
        self.0 & (1 << (GLYPH_CELLS - 1 - index)) != 0
    }

    /// Number of filled cells
    pub const fn filled_count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate filled cells as `(row, col)` in row-major order
    pub fn filled_cells(self) -> impl Iterator<Item = (usize, usize)> {
        (0..GLYPH_ROWS)
            .flat_map(|row| (0..GLYPH_COLS).map(move |col| (row, col)))
            .filter(move |&(row, col)| self.is_filled(row, col))
    }
}
