//! Wall-clock time as seen by the face
//!
//! The face only ever needs the local hour and minute. Digits are
//! derived by division and remainder, so a validated `LocalTime`
//! always yields digits in 0-9.

use core::ops::{BitOr, BitOrAssign};

/// Errors constructing a `LocalTime`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeError {
    /// Hour outside 0-23
    InvalidHour(u8),
    /// Minute outside 0-59
    InvalidMinute(u8),
}

/// Local time of day at minute resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LocalTime {
    hour: u8,
    minute: u8,
}

impl LocalTime {
    /// Midnight
    pub const MIDNIGHT: LocalTime = LocalTime { hour: 0, minute: 0 };

    /// Create a validated time of day
    pub const fn new(hour: u8, minute: u8) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::InvalidHour(hour));
        }
        if minute > 59 {
            return Err(TimeError::InvalidMinute(minute));
        }
        Ok(Self { hour, minute })
    }

    /// Hour of day (0-23)
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute of hour (0-59)
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Split into the four displayed digits
    pub const fn digits(&self) -> ClockDigits {
        ClockDigits {
            hour_tens: self.hour / 10,
            hour_units: self.hour % 10,
            minute_tens: self.minute / 10,
            minute_units: self.minute % 10,
        }
    }

    /// Which units changed going from `previous` to `self`
    ///
    /// A backward move of the hour (23:59 -> 00:00) counts as a new day.
    pub fn changed_units(&self, previous: &LocalTime) -> TimeUnits {
        let mut units = TimeUnits::NONE;
        if self.minute != previous.minute {
            units |= TimeUnits::MINUTE;
        }
        if self.hour != previous.hour {
            units |= TimeUnits::HOUR;
        }
        if self.hour < previous.hour {
            units |= TimeUnits::DAY;
        }
        units
    }
}

/// Whole seconds from `second` until the next minute boundary
///
/// Leap seconds (60) are treated as the last second of the minute.
pub const fn seconds_until_next_minute(second: u8) -> u8 {
    let second = if second > 59 { 59 } else { second };
    60 - second
}

/// The four digits of an HH:MM display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockDigits {
    pub hour_tens: u8,
    pub hour_units: u8,
    pub minute_tens: u8,
    pub minute_units: u8,
}

impl ClockDigits {
    /// Digits in display order: HH then MM
    pub const fn as_array(&self) -> [u8; 4] {
        [
            self.hour_tens,
            self.hour_units,
            self.minute_tens,
            self.minute_units,
        ]
    }
}

/// Set of time units that changed between two ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeUnits(u8);

impl TimeUnits {
    pub const NONE: TimeUnits = TimeUnits(0);
    pub const SECOND: TimeUnits = TimeUnits(1 << 0);
    pub const MINUTE: TimeUnits = TimeUnits(1 << 1);
    pub const HOUR: TimeUnits = TimeUnits(1 << 2);
    pub const DAY: TimeUnits = TimeUnits(1 << 3);

    /// Raw bits
    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// Check if no unit is set
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Check if every unit in `other` is set
    pub const fn contains(&self, other: TimeUnits) -> bool {
        self.0 & other.0 == other.0
    }

    /// Check if any unit in `other` is set
    pub const fn intersects(&self, other: TimeUnits) -> bool {
        self.0 & other.0 != 0
    }

    /// This unit and every coarser one
    ///
    /// A subscription to minutes also fires when only the hour or day
    /// is reported as changed.
    pub const fn and_coarser(self) -> TimeUnits {
        let mut bits = self.0;
        let mut shift = 0;
        while shift < 4 {
            if bits & (1 << shift) != 0 {
                bits |= !((1u8 << shift) - 1) & 0x0F;
                break;
            }
            shift += 1;
        }
        TimeUnits(bits)
    }
}

impl BitOr for TimeUnits {
    type Output = TimeUnits;

    fn bitor(self, rhs: TimeUnits) -> TimeUnits {
        TimeUnits(self.0 | rhs.0)
    }
}

impl BitOrAssign for TimeUnits {
    fn bitor_assign(&mut self, rhs: TimeUnits) {
        self.0 |= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(LocalTime::new(24, 0), Err(TimeError::InvalidHour(24)));
        assert_eq!(LocalTime::new(12, 60), Err(TimeError::InvalidMinute(60)));
        assert!(LocalTime::new(23, 59).is_ok());
    }

    #[test]
    fn test_digits_for_nine_oh_five() {
        let time = LocalTime::new(9, 5).unwrap();
        assert_eq!(time.digits().as_array(), [0, 9, 0, 5]);
    }

    #[test]
    fn test_digits_for_late_evening() {
        let time = LocalTime::new(23, 47).unwrap();
        let digits = time.digits();
        assert_eq!(digits.hour_tens, 2);
        assert_eq!(digits.hour_units, 3);
        assert_eq!(digits.minute_tens, 4);
        assert_eq!(digits.minute_units, 7);
    }

    #[test]
    fn test_changed_units() {
        let a = LocalTime::new(10, 59).unwrap();
        let b = LocalTime::new(11, 0).unwrap();
        let units = b.changed_units(&a);
        assert!(units.contains(TimeUnits::MINUTE | TimeUnits::HOUR));
        assert!(!units.intersects(TimeUnits::DAY));

        let same = a.changed_units(&a);
        assert!(same.is_empty());
    }

    #[test]
    fn test_midnight_rollover_is_new_day() {
        let before = LocalTime::new(23, 59).unwrap();
        let after = LocalTime::MIDNIGHT;
        assert!(after.changed_units(&before).contains(TimeUnits::DAY));
    }

    #[test]
    fn test_seconds_until_next_minute() {
        assert_eq!(seconds_until_next_minute(0), 60);
        assert_eq!(seconds_until_next_minute(45), 15);
        assert_eq!(seconds_until_next_minute(59), 1);
        assert_eq!(seconds_until_next_minute(60), 1);
    }

    #[test]
    fn test_and_coarser() {
        let minute = TimeUnits::MINUTE.and_coarser();
        assert!(minute.contains(TimeUnits::MINUTE | TimeUnits::HOUR | TimeUnits::DAY));
        assert!(!minute.intersects(TimeUnits::SECOND));

        assert_eq!(TimeUnits::DAY.and_coarser(), TimeUnits::DAY);
        assert_eq!(TimeUnits::NONE.and_coarser(), TimeUnits::NONE);
    }

    proptest! {
        #[test]
        fn prop_hour_decomposition(hour in 0u8..24, minute in 0u8..60) {
            let digits = LocalTime::new(hour, minute).unwrap().digits();
            prop_assert_eq!(hour, 10 * digits.hour_tens + digits.hour_units);
            prop_assert_eq!(minute, 10 * digits.minute_tens + digits.minute_units);
            for digit in digits.as_array() {
                prop_assert!(digit <= 9);
            }
        }

        #[test]
        fn prop_invalid_times_rejected(hour in 24u8.., minute in 60u8..) {
            prop_assert!(LocalTime::new(hour, 0).is_err());
            prop_assert!(LocalTime::new(0, minute).is_err());
        }
    }
}
