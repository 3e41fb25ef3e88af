//! RTC-backed wall clock
//!
//! Reads local time from the STM32 RTC, which keeps running from the
//! LSE crystal. The RTC holds local time; there is no timezone handling.
//! A calendar lost with the backup domain is restarted from midnight on
//! the RTC epoch date.

use embassy_stm32::rtc::{DateTime, DayOfWeek, Rtc};

use blocktime_core::{AdjustableClock, LocalTime, WallClock};

/// Date written when the calendar has to be restarted (a Saturday)
const EPOCH_YEAR: u16 = 2000;

/// Clock read errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum ClockError {
    /// RTC not running or calendar not initialized
    Rtc,
    /// RTC returned fields outside the valid range
    InvalidTime,
}

/// One RTC reading at second resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub struct Reading {
    pub time: LocalTime,
    pub second: u8,
}

/// Wall clock over the on-chip RTC
///
/// Only the time of day is meaningful; the date is whatever the RTC
/// carries.
pub struct RtcClock {
    rtc: Rtc,
}

impl RtcClock {
    /// Wrap an initialized RTC
    pub fn new(rtc: Rtc) -> Self {
        Self { rtc }
    }

    /// Read hour, minute and second
    pub fn read(&self) -> Result<Reading, ClockError> {
        let now = self.rtc.now().map_err(|_| ClockError::Rtc)?;
        let time =
            LocalTime::new(now.hour(), now.minute()).map_err(|_| ClockError::InvalidTime)?;
        Ok(Reading {
            time,
            second: now.second(),
        })
    }
}

impl WallClock for RtcClock {
    type Error = ClockError;

    fn now(&self) -> Result<LocalTime, Self::Error> {
        self.read().map(|reading| reading.time)
    }
}

impl AdjustableClock for RtcClock {
    fn set(&mut self, time: LocalTime) -> Result<(), Self::Error> {
        let datetime = DateTime::from(
            EPOCH_YEAR,
            1,
            1,
            DayOfWeek::Saturday,
            time.hour(),
            time.minute(),
            0,
            0,
        )
        .map_err(|_| ClockError::InvalidTime)?;
        self.rtc
            .set_datetime(datetime)
            .map_err(|_| ClockError::Rtc)
    }
}
