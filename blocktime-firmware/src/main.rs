//! Blocktime - Blocky-Digit Watch Face Firmware
//!
//! Main firmware binary for STM32F0 boards with a Sharp memory LCD.
//! Shows the local time as four blocky digits and redraws once a minute.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_stm32::rtc::{Rtc, RtcConfig};
use embassy_stm32::spi::Spi;
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use blocktime_core::{ensure_running, LocalTime};
use blocktime_display::{Framebuffer, SharpLcd};

use crate::clock::RtcClock;

mod board;
mod channels;
mod clock;
mod tasks;

// The clock is shared by the tick and display tasks
static CLOCK: StaticCell<RtcClock> = StaticCell::new();

// Framebuffer plus its last-sent copy, kept out of the task future
static FRAMEBUFFER: StaticCell<Framebuffer> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Blocktime firmware starting...");

    let p = embassy_stm32::init(board::chip_config());
    info!("Peripherals initialized");

    let rtc = Rtc::new(p.RTC, RtcConfig::default());
    let mut clock = RtcClock::new(rtc);
    match ensure_running(&mut clock, LocalTime::MIDNIGHT) {
        Ok(None) => {}
        Ok(Some(_)) => warn!("RTC calendar was not set, starting from 00:00"),
        Err(e) => error!("RTC could not be started: {:?}", e),
    }
    let clock: &'static RtcClock = CLOCK.init(clock);

    match clock.read() {
        Ok(reading) => info!(
            "RTC at {}:{}:{}",
            reading.time.hour(),
            reading.time.minute(),
            reading.second
        ),
        Err(e) => warn!("RTC not readable: {:?}", e),
    }

    // Display: SPI1 TX only, LSB first
    let spi = Spi::new_txonly(p.SPI1, p.PA5, p.PA7, p.DMA1_CH3, board::lcd_spi_config());
    let cs = Output::new(p.PA4, Level::Low, Speed::Low);
    let disp = Output::new(p.PA3, Level::Low, Speed::Low);

    // The display task initializes the panel on its first flush
    let lcd = SharpLcd::new(spi, cs, disp, Delay);
    let fb = FRAMEBUFFER.init(Framebuffer::new());

    spawner.spawn(tasks::tick_task(clock)).unwrap();
    spawner.spawn(tasks::display_task(lcd, fb, clock)).unwrap();

    info!("All tasks spawned");
}
