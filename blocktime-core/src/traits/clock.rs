//! Wall clock source

use crate::time::LocalTime;

/// Source of the current local time
///
/// Implemented over an RTC on hardware and over fixed values in tests.
pub trait WallClock {
    /// Error type for clock reads
    type Error;

    /// Read the current local hour and minute
    fn now(&self) -> Result<LocalTime, Self::Error>;
}

/// Wall clock that can be set
pub trait AdjustableClock: WallClock {
    /// Set the current local hour and minute; seconds restart at zero
    fn set(&mut self, time: LocalTime) -> Result<(), Self::Error>;
}

/// Make sure `clock` is counting
///
/// A clock that can't be read (an RTC whose calendar was never set, or
/// was lost with its backup supply) is set to `fallback`. Returns the
/// time it was set to, or `None` if the clock was already running.
pub fn ensure_running<C: AdjustableClock>(
    clock: &mut C,
    fallback: LocalTime,
) -> Result<Option<LocalTime>, C::Error> {
    if clock.now().is_ok() {
        return Ok(None);
    }

    clock.set(fallback)?;
    clock.now().map(Some)
}

/// A clock that always reports the same time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub LocalTime);

impl WallClock for FixedClock {
    type Error = core::convert::Infallible;

    fn now(&self) -> Result<LocalTime, Self::Error> {
        Ok(self.0)
    }
}
