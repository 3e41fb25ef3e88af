//! Digit renderer
//!
//! Stamps a glyph onto a surface as 14x14 squares on a 15 pixel pitch,
//! leaving a one pixel gutter between cells. Only filled cells are
//! painted; the caller clears the surface beforehand.

use crate::geometry::{Color, Point, Rect, Size};
use crate::glyph::{Glyph, GLYPH_COLS, GLYPH_ROWS};
use crate::traits::FillSurface;

/// Side length of a filled cell in pixels
pub const CELL_SIZE: u32 = 14;

/// Distance between the top-left corners of adjacent cells
pub const CELL_PITCH: i32 = 15;

/// Width of a glyph's bounding box (3 columns x pitch)
pub const GLYPH_WIDTH: u32 = GLYPH_COLS as u32 * CELL_PITCH as u32;

/// Height of a glyph's bounding box (5 rows x pitch)
pub const GLYPH_HEIGHT: u32 = GLYPH_ROWS as u32 * CELL_PITCH as u32;

/// Errors from rendering a digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError<E> {
    /// Digit outside 0-9
    InvalidDigit(u8),
    /// The surface rejected a fill
    Surface(E),
}

/// Rectangle of the cell at `row`, `col` for a glyph placed at `origin`
pub const fn cell_rect(origin: Point, row: usize, col: usize) -> Rect {
    Rect::new(
        origin.offset(col as i32 * CELL_PITCH, row as i32 * CELL_PITCH),
        Size::new(CELL_SIZE, CELL_SIZE),
    )
}

/// Bounding box of a glyph placed at `origin`
pub const fn glyph_bounds(origin: Point) -> Rect {
    Rect::new(origin, Size::new(GLYPH_WIDTH, GLYPH_HEIGHT))
}

/// Rectangles covering the filled cells of `glyph` placed at `origin`
pub fn glyph_cells(glyph: Glyph, origin: Point) -> impl Iterator<Item = Rect> {
    glyph
        .filled_cells()
        .map(move |(row, col)| cell_rect(origin, row, col))
}

/// Rectangles `render_digit` would fill for `digit` at `origin`
///
/// Returns `None` for digits outside 0-9.
pub fn digit_cells(digit: u8, origin: Point) -> Option<impl Iterator<Item = Rect>> {
    Glyph::for_digit(digit).map(|glyph| glyph_cells(glyph, origin))
}

/// Paint `digit` with its top-left corner at `origin`
///
/// The digit is checked before anything is drawn, so an invalid digit
/// leaves the surface untouched. A surface error stops rendering
/// part-way through the glyph.
pub fn render_digit<S: FillSurface>(
    surface: &mut S,
    digit: u8,
    origin: Point,
    color: Color,
) -> Result<(), RenderError<S::Error>> {
    let cells = digit_cells(digit, origin).ok_or(RenderError::InvalidDigit(digit))?;

    for cell in cells {
        surface.fill_rect(cell, color).map_err(RenderError::Surface)?;
    }

    Ok(())
}
