//! Test doubles shared by the unit tests

use crate::geometry::{Color, Rect, Size};
use crate::traits::FillSurface;

/// Surface that records every fill call
pub struct RecordingSurface {
    pub bounds: Rect,
    pub fills: Vec<(Rect, Color)>,
    /// Fail the call at this index (0-based) when set
    pub fail_at: Option<usize>,
}

/// Error returned by a failing `RecordingSurface`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceFault;

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            bounds: Rect::with_size(Size::new(width, height)),
            fills: Vec::new(),
            fail_at: None,
        }
    }

    pub fn failing_at(mut self, index: usize) -> Self {
        self.fail_at = Some(index);
        self
    }

    /// Rectangles filled with `color`, in call order
    pub fn rects_with(&self, color: Color) -> Vec<Rect> {
        self.fills
            .iter()
            .filter(|(_, c)| *c == color)
            .map(|(r, _)| *r)
            .collect()
    }
}

impl FillSurface for RecordingSurface {
    type Error = SurfaceFault;

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), SurfaceFault> {
        if self.fail_at == Some(self.fills.len()) {
            return Err(SurfaceFault);
        }
        self.fills.push((rect, color));
        Ok(())
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
