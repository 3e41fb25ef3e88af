//! embedded-graphics bridge
//!
//! Lets the face draw onto any `DrawTarget`, whether a driver crate's
//! display or a simulator window.

use blocktime_core::{Color, FillSurface, Point, Rect, Size};
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Point as EgPoint, Size as EgSize};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::primitives::Rectangle;

/// Map a face color onto a binary pixel (white is "on")
pub const fn to_binary(color: Color) -> BinaryColor {
    match color {
        Color::White => BinaryColor::On,
        Color::Black => BinaryColor::Off,
    }
}

/// Map a binary pixel back to a face color
pub const fn from_binary(color: BinaryColor) -> Color {
    match color {
        BinaryColor::On => Color::White,
        BinaryColor::Off => Color::Black,
    }
}

/// Convert a face rectangle to an embedded-graphics one
pub fn to_eg_rect(rect: Rect) -> Rectangle {
    Rectangle::new(
        EgPoint::new(rect.origin.x, rect.origin.y),
        EgSize::new(rect.size.width, rect.size.height),
    )
}

/// Convert an embedded-graphics rectangle to a face one
pub fn from_eg_rect(rect: &Rectangle) -> Rect {
    Rect::new(
        Point::new(rect.top_left.x, rect.top_left.y),
        Size::new(rect.size.width, rect.size.height),
    )
}

/// `FillSurface` over any embedded-graphics draw target
///
/// Works with any color type that can be built from `BinaryColor`, so
/// RGB panels render white digits on black too. Fills are clipped to
/// the target's bounding box before they reach the target.
pub struct GraphicsSurface<D> {
    target: D,
}

impl<D> GraphicsSurface<D> {
    /// Wrap a draw target
    pub fn new(target: D) -> Self {
        Self { target }
    }

    /// Borrow the wrapped target
    pub fn target(&self) -> &D {
        &self.target
    }
}

impl<D> FillSurface for GraphicsSurface<D>
where
    D: DrawTarget,
    D::Color: From<BinaryColor>,
{
    type Error = D::Error;

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), Self::Error> {
        let Some(clipped) = self.bounds().intersection(&rect) else {
            return Ok(());
        };
        self.target
            .fill_solid(&to_eg_rect(clipped), to_binary(color).into())
    }

    fn bounds(&self) -> Rect {
        from_eg_rect(&self.target.bounding_box())
    }
}
