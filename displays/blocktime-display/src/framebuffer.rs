//! 1-bit framebuffer
//!
//! Sized and packed for 144x168 memory LCDs: one line is 18 bytes, and
//! pixel `x` lives at bit `x % 8` of byte `x / 8` (the panel is clocked
//! LSB first). A set bit is a white pixel.
//!
//! Dirty lines are found by comparing each line with the copy taken at
//! the last `mark_clean`, so only lines whose final contents differ from
//! what the panel shows are sent. Clearing and restamping an unchanged
//! time produces no panel traffic.

use core::convert::Infallible;

use blocktime_core::{Color, FillSurface, Rect, Size};
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Size as EgSize};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::Pixel;

use crate::graphics::{from_binary, from_eg_rect};

/// Display width in pixels
pub const WIDTH: usize = 144;

/// Display height in pixels
pub const HEIGHT: usize = 168;

/// Bytes per display line
pub const LINE_BYTES: usize = WIDTH / 8;

/// Full-screen framebuffer
#[derive(Clone)]
pub struct Framebuffer {
    lines: [[u8; LINE_BYTES]; HEIGHT],
    /// Line contents as of the last `mark_clean`
    sent: [[u8; LINE_BYTES]; HEIGHT],
    /// Lines whose `sent` copy matches the panel
    synced: [bool; HEIGHT],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Whole-screen rectangle
    pub const BOUNDS: Rect = Rect::with_size(Size::new(WIDTH as u32, HEIGHT as u32));

    /// Create a black framebuffer with every line dirty
    pub const fn new() -> Self {
        Self {
            lines: [[0; LINE_BYTES]; HEIGHT],
            sent: [[0; LINE_BYTES]; HEIGHT],
            synced: [false; HEIGHT],
        }
    }

    /// Set a single pixel, ignoring coordinates off the screen
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        let byte = &mut self.lines[y][x / 8];
        match color {
            Color::White => *byte |= 1 << (x % 8),
            Color::Black => *byte &= !(1 << (x % 8)),
        }
    }

    /// Read a single pixel
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= WIDTH || y >= HEIGHT {
            return None;
        }
        if self.lines[y][x / 8] & (1 << (x % 8)) != 0 {
            Some(Color::White)
        } else {
            Some(Color::Black)
        }
    }

    /// Raw bytes of one line
    pub fn line(&self, y: usize) -> Option<&[u8; LINE_BYTES]> {
        self.lines.get(y)
    }

    /// Fill the whole buffer with one color
    pub fn fill(&mut self, color: Color) {
        for y in 0..HEIGHT {
            self.fill_span(y, 0, WIDTH, color);
        }
    }

    /// Fill pixels `x0..x1` of line `y`
    ///
    /// Callers clip beforehand.
    fn fill_span(&mut self, y: usize, x0: usize, x1: usize, color: Color) {
        let value = match color {
            Color::White => 0xFF,
            Color::Black => 0x00,
        };
        let line = &mut self.lines[y];
        let mut x = x0;

        while x < x1 {
            let byte = &mut line[x / 8];
            if x % 8 == 0 && x + 8 <= x1 {
                *byte = value;
                x += 8;
            } else {
                let bit = 1 << (x % 8);
                *byte = (*byte & !bit) | (value & bit);
                x += 1;
            }
        }
    }

    /// Check if line `y` differs from what was last sent
    fn line_dirty(&self, y: usize) -> bool {
        !self.synced[y] || self.lines[y] != self.sent[y]
    }

    /// Indices of lines that differ from the last `mark_clean`
    pub fn dirty_lines(&self) -> impl Iterator<Item = usize> + '_ {
        (0..HEIGHT).filter(|y| self.line_dirty(*y))
    }

    /// Check if any line differs from the last `mark_clean`
    pub fn is_dirty(&self) -> bool {
        (0..HEIGHT).any(|y| self.line_dirty(y))
    }

    /// Record the current contents as sent
    pub fn mark_clean(&mut self) {
        self.sent = self.lines;
        self.synced = [true; HEIGHT];
    }

    /// Force every line to be sent on the next flush
    ///
    /// Needed after the panel memory was cleared behind our back.
    pub fn mark_all_dirty(&mut self) {
        self.synced = [false; HEIGHT];
    }
}

impl FillSurface for Framebuffer {
    type Error = Infallible;

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), Self::Error> {
        let Some(clipped) = Self::BOUNDS.intersection(&rect) else {
            return Ok(());
        };

        let x0 = clipped.origin.x as usize;
        let x1 = clipped.right() as usize;
        for y in clipped.origin.y..clipped.bottom() {
            self.fill_span(y as usize, x0, x1, color);
        }

        Ok(())
    }

    fn bounds(&self) -> Rect {
        Self::BOUNDS
    }
}

impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            self.set_pixel(point.x as usize, point.y as usize, from_binary(color));
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        FillSurface::fill_rect(self, from_eg_rect(area), from_binary(color))
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> EgSize {
        EgSize::new(WIDTH as u32, HEIGHT as u32)
    }
}
