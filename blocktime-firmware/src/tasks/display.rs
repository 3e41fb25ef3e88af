//! Display task
//!
//! Owns the watch face context, the framebuffer and the LCD. Redraws when
//! a tick marks the face dirty and keeps VCOM toggling in between. The
//! panel is (re)initialized by the first flush after boot or a failed
//! init, so a display that comes up late still gets the face.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_stm32::gpio::Output;
use embassy_stm32::mode::Async;
use embassy_stm32::spi::mode::Master;
use embassy_stm32::spi::Spi;
use embassy_time::{Delay, Duration, Ticker};

use blocktime_core::{FaceConfig, RenderError, WallClock, WatchFace};
use blocktime_display::{DisplayError, Framebuffer, SharpLcd};

use crate::board::VCOM_INTERVAL_MS;
use crate::channels::TIME_TICK;
use crate::clock::RtcClock;

/// Concrete LCD driver type on this board
pub type Lcd = SharpLcd<Spi<'static, Async, Master>, Output<'static>, Delay>;

/// Display update task
#[embassy_executor::task]
pub async fn display_task(mut lcd: Lcd, fb: &'static mut Framebuffer, clock: &'static RtcClock) {
    info!("Display task started");

    let mut face = WatchFace::load(Framebuffer::BOUNDS, FaceConfig::DEFAULT);
    let mut vcom = Ticker::every(Duration::from_millis(VCOM_INTERVAL_MS));

    loop {
        if face.is_dirty() {
            render(&mut face, fb, clock);
        }

        // An uninitialized panel has to be flushed even with nothing new
        if fb.is_dirty() || !lcd.is_initialized() {
            match lcd.flush(fb).await {
                Ok(lines) => trace!("Flushed {} lines", lines),
                Err(e) => warn!("LCD flush failed: {:?}", e),
            }
        }

        match select(TIME_TICK.wait(), vcom.next()).await {
            Either::First(units) => {
                if face.handle_tick(units) {
                    trace!("Face marked dirty");
                }
            }
            Either::Second(()) => {
                match lcd.toggle_vcom().await {
                    Ok(()) => {}
                    // Init is retried by the next flush
                    Err(DisplayError::NotInitialized) => {}
                    Err(e) => warn!("VCOM toggle failed: {:?}", e),
                }
            }
        }
    }
}

/// Paint the current time into the framebuffer
///
/// A failed clock read leaves the face dirty; the next VCOM tick retries.
fn render(face: &mut WatchFace, fb: &mut Framebuffer, clock: &RtcClock) {
    let time = match clock.now() {
        Ok(time) => time,
        Err(e) => {
            warn!("Clock read failed: {:?}", e);
            return;
        }
    };

    match face.redraw(fb, time) {
        Ok(_) => debug!("Rendered {}:{}", time.hour(), time.minute()),
        Err(RenderError::InvalidDigit(digit)) => error!("Invalid digit {}", digit),
        Err(RenderError::Surface(never)) => match never {},
    }
}
