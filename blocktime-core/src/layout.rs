//! HH-over-MM digit layout
//!
//! The four digits sit in a two-by-two block around the screen center:
//! hours on the top row, minutes on the bottom. Offsets are fixed and
//! sized for a 144x168 screen, where the block spans x 20..125 and
//! y 2..167.

use crate::geometry::{Point, Rect, Size};
use crate::render::glyph_bounds;
use crate::time::ClockDigits;

/// Left column offset from center
pub const LEFT_DX: i32 = -52;

/// Right column offset from center
pub const RIGHT_DX: i32 = 8;

/// Top (hours) row offset from center
pub const TOP_DY: i32 = -82;

/// Bottom (minutes) row offset from center
pub const BOTTOM_DY: i32 = 8;

/// Position of a digit within the face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitSlot {
    HourTens,
    HourUnits,
    MinuteTens,
    MinuteUnits,
}

impl DigitSlot {
    /// All slots in render order
    pub const ALL: [DigitSlot; 4] = [
        DigitSlot::HourTens,
        DigitSlot::HourUnits,
        DigitSlot::MinuteTens,
        DigitSlot::MinuteUnits,
    ];

    /// Offset of the slot's top-left corner from the center point
    pub const fn offset(self) -> (i32, i32) {
        match self {
            DigitSlot::HourTens => (LEFT_DX, TOP_DY),
            DigitSlot::HourUnits => (RIGHT_DX, TOP_DY),
            DigitSlot::MinuteTens => (LEFT_DX, BOTTOM_DY),
            DigitSlot::MinuteUnits => (RIGHT_DX, BOTTOM_DY),
        }
    }

    /// Pick this slot's digit out of a decomposed time
    pub const fn digit(self, digits: &ClockDigits) -> u8 {
        match self {
            DigitSlot::HourTens => digits.hour_tens,
            DigitSlot::HourUnits => digits.hour_units,
            DigitSlot::MinuteTens => digits.minute_tens,
            DigitSlot::MinuteUnits => digits.minute_units,
        }
    }
}

/// Digit placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Placement {
    pub slot: DigitSlot,
    pub digit: u8,
    pub origin: Point,
}

/// Slot positions relative to a center point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Layout {
    center: Point,
}

impl Layout {
    /// Create a layout around `center`
    pub const fn new(center: Point) -> Self {
        Self { center }
    }

    /// Create a layout centered in `bounds`
    pub const fn centered_in(bounds: Rect) -> Self {
        Self::new(bounds.center())
    }

    /// Center point the layout is anchored on
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Top-left corner of a slot
    pub const fn origin(&self, slot: DigitSlot) -> Point {
        let (dx, dy) = slot.offset();
        self.center.offset(dx, dy)
    }

    /// Bounding box of a slot
    pub const fn slot_bounds(&self, slot: DigitSlot) -> Rect {
        glyph_bounds(self.origin(slot))
    }

    /// Where each digit of `digits` goes, in render order
    pub fn placements(&self, digits: ClockDigits) -> impl Iterator<Item = Placement> + '_ {
        DigitSlot::ALL.into_iter().map(move |slot| Placement {
            slot,
            digit: slot.digit(&digits),
            origin: self.origin(slot),
        })
    }

    /// Bounding box of all four slots
    pub fn block_bounds(&self) -> Rect {
        let top_left = self.origin(DigitSlot::HourTens);
        let bottom_right = self.slot_bounds(DigitSlot::MinuteUnits);
        Rect::new(
            top_left,
            Size::new(
                (bottom_right.right() - top_left.x) as u32,
                (bottom_right.bottom() - top_left.y) as u32,
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::LocalTime;

    fn watch_layout() -> Layout {
        Layout::centered_in(Rect::with_size(Size::new(144, 168)))
    }

    #[test]
    fn test_slot_origins_on_watch_screen() {
        let layout = watch_layout();
        assert_eq!(layout.origin(DigitSlot::HourTens), Point::new(20, 2));
        assert_eq!(layout.origin(DigitSlot::HourUnits), Point::new(80, 2));
        assert_eq!(layout.origin(DigitSlot::MinuteTens), Point::new(20, 92));
        assert_eq!(layout.origin(DigitSlot::MinuteUnits), Point::new(80, 92));
    }

    #[test]
    fn test_slots_never_overlap() {
        let layout = watch_layout();
        for (i, a) in DigitSlot::ALL.iter().enumerate() {
            for b in &DigitSlot::ALL[i + 1..] {
                assert!(
                    !layout.slot_bounds(*a).overlaps(&layout.slot_bounds(*b)),
                    "{:?} overlaps {:?}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_block_fits_watch_screen() {
        let screen = Rect::with_size(Size::new(144, 168));
        let block = watch_layout().block_bounds();
        assert_eq!(block, Rect::new(Point::new(20, 2), Size::new(105, 165)));
        assert_eq!(screen.intersection(&block), Some(block));
    }

    #[test]
    fn test_placements_for_nine_oh_five() {
        let layout = watch_layout();
        let time = LocalTime::new(9, 5).unwrap();
        let placed: Vec<_> = layout
            .placements(time.digits())
            .map(|p| (p.slot, p.digit))
            .collect();
        assert_eq!(
            placed,
            vec![
                (DigitSlot::HourTens, 0),
                (DigitSlot::HourUnits, 9),
                (DigitSlot::MinuteTens, 0),
                (DigitSlot::MinuteUnits, 5),
            ]
        );
    }

    #[test]
    fn test_layout_follows_center() {
        let layout = Layout::new(Point::new(0, 0));
        assert_eq!(layout.origin(DigitSlot::HourTens), Point::new(-52, -82));
        assert_eq!(layout.origin(DigitSlot::MinuteUnits), Point::new(8, 8));
    }
}
