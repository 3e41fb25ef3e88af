//! Tick task for wall-clock updates
//!
//! Sleeps until just past each minute boundary, reads the RTC and tells
//! the display task which units changed.

use defmt::*;
use embassy_time::{Duration, Timer};

use blocktime_core::{seconds_until_next_minute, LocalTime, TimeUnits};

use crate::channels::TIME_TICK;
use crate::clock::RtcClock;

/// Delay past the boundary so the RTC has rolled over when we read it
pub const TICK_MARGIN_MS: u64 = 20;

/// Retry interval when the RTC can't be read
pub const RETRY_INTERVAL_S: u64 = 60;

/// Tick task - signals once per wall-clock minute
#[embassy_executor::task]
pub async fn tick_task(clock: &'static RtcClock) {
    info!("Tick task started");

    let mut last: Option<LocalTime> = None;

    loop {
        let wait_s = match clock.read() {
            Ok(reading) => {
                if let Some(previous) = last {
                    let units = reading.time.changed_units(&previous);
                    if !units.is_empty() {
                        trace!("Tick at {}:{}", reading.time.hour(), reading.time.minute());
                        TIME_TICK.signal(units);
                    }
                }
                last = Some(reading.time);
                seconds_until_next_minute(reading.second) as u64
            }
            Err(e) => {
                warn!("RTC read failed: {:?}", e);
                // Let the display retry its own read
                TIME_TICK.signal(TimeUnits::MINUTE);
                RETRY_INTERVAL_S
            }
        };

        Timer::after(Duration::from_secs(wait_s) + Duration::from_millis(TICK_MARGIN_MS)).await;
    }
}
