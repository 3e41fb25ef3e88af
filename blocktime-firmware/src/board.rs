//! Board wiring
//!
//! STM32F072RB driving an LS013B7DH05 144x168 memory LCD over SPI1.
//!
//! | Signal | Pin  | Notes                      |
//! |--------|------|----------------------------|
//! | SCK    | PA5  | SPI1, 1 MHz, LSB first     |
//! | MOSI   | PA7  | SPI1                       |
//! | SCS    | PA4  | chip select, active high   |
//! | DISP   | PA3  | display on                 |
//! | LSE    | PC14/PC15 | 32.768 kHz RTC crystal |

use embassy_stm32::rcc::LsConfig;
use embassy_stm32::spi::{self, BitOrder};
use embassy_stm32::time::Hertz;

/// Memory LCD SPI clock (panel maximum is 1 MHz)
pub const LCD_SPI_HZ: u32 = 1_000_000;

/// Software VCOM inversion period in milliseconds
pub const VCOM_INTERVAL_MS: u64 = 1000;

/// Chip configuration: RTC on the external 32.768 kHz crystal
pub fn chip_config() -> embassy_stm32::Config {
    let mut config = embassy_stm32::Config::default();
    config.rcc.ls = LsConfig::default_lse();
    config
}

/// SPI settings for the memory LCD
pub fn lcd_spi_config() -> spi::Config {
    let mut config = spi::Config::default();
    config.frequency = Hertz(LCD_SPI_HZ);
    config.mode = spi::MODE_0;
    config.bit_order = BitOrder::LsbFirst;
    config
}
