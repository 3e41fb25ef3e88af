//! Drawing surface trait

use crate::geometry::{Color, Rect};

/// Immediate-mode surface supporting solid rectangle fills
///
/// Filling is the only primitive the face needs. Implementations own
/// clipping: a rectangle that extends past `bounds()` must be drawn
/// partially or not at all, never rejected.
pub trait FillSurface {
    /// Error type for surface operations
    type Error;

    /// Fill an axis-aligned rectangle with a solid color
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), Self::Error>;

    /// Drawable area of the surface
    fn bounds(&self) -> Rect;

    /// Fill the whole surface with one color
    fn clear(&mut self, color: Color) -> Result<(), Self::Error> {
        let bounds = self.bounds();
        self.fill_rect(bounds, color)
    }
}

impl<S: FillSurface + ?Sized> FillSurface for &mut S {
    type Error = S::Error;

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), Self::Error> {
        (**self).fill_rect(rect, color)
    }

    fn bounds(&self) -> Rect {
        (**self).bounds()
    }

    fn clear(&mut self, color: Color) -> Result<(), Self::Error> {
        (**self).clear(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Size};
    use crate::test_support::{RecordingSurface, SurfaceFault};

    fn paint_through<S: FillSurface>(mut surface: S) -> Result<(), S::Error> {
        surface.clear(Color::Black)?;
        surface.fill_rect(Rect::new(Point::new(1, 2), Size::new(3, 4)), Color::White)
    }

    #[test]
    fn test_clear_fills_bounds() {
        let mut surface = RecordingSurface::new(144, 168);
        surface.clear(Color::White).unwrap();
        assert_eq!(
            surface.fills,
            vec![(Rect::with_size(Size::new(144, 168)), Color::White)]
        );
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut surface = RecordingSurface::new(20, 10);
        paint_through(&mut surface).unwrap();

        assert_eq!(surface.fills.len(), 2);
        assert_eq!(surface.fills[0], (surface.bounds(), Color::Black));
        assert_eq!(
            surface.fills[1],
            (Rect::new(Point::new(1, 2), Size::new(3, 4)), Color::White)
        );
        assert_eq!((&mut surface).bounds(), Rect::with_size(Size::new(20, 10)));
    }

    #[test]
    fn test_clear_propagates_errors() {
        let mut surface = RecordingSurface::new(20, 10).failing_at(0);
        assert_eq!(paint_through(&mut surface), Err(SurfaceFault));
        assert!(surface.fills.is_empty());
    }
}
