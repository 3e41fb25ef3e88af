//! Sharp Memory LCD Driver
//!
//! Driver for 144x168 LS013B7DH05-class memory LCDs over an async SPI bus.
//! Only lines that differ from what the panel already shows are sent on
//! flush.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::spi::SpiBus;

use crate::framebuffer::Framebuffer;
use crate::memory_lcd::{self, DisplayError, Vcom};

/// Chip-select setup time before the first clock, in microseconds
pub const CS_SETUP_US: u32 = 3;

/// Chip-select hold time after the last clock, in microseconds
pub const CS_HOLD_US: u32 = 1;

/// Sharp memory LCD driver
pub struct SharpLcd<SPI, PIN, DELAY> {
    spi: SPI,
    /// Chip select (active high)
    cs: PIN,
    /// Display enable
    disp: PIN,
    delay: DELAY,
    vcom: Vcom,
    initialized: bool,
}

impl<SPI, PIN, DELAY> SharpLcd<SPI, PIN, DELAY>
where
    SPI: SpiBus,
    PIN: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new driver; the panel stays off until `init`
    pub fn new(spi: SPI, cs: PIN, disp: PIN, delay: DELAY) -> Self {
        Self {
            spi,
            cs,
            disp,
            delay,
            vcom: Vcom::default(),
            initialized: false,
        }
    }

    /// Check if `init` has completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Clear the panel memory and switch the display on
    pub async fn init(&mut self) -> Result<(), DisplayError> {
        self.cs.set_low().map_err(|_| DisplayError::Communication)?;
        self.initialized = true;

        let result = match self.clear().await {
            Ok(()) => self
                .disp
                .set_high()
                .map_err(|_| DisplayError::Communication),
            Err(e) => Err(e),
        };

        if result.is_err() {
            self.initialized = false;
        }
        result
    }

    /// Send one packet framed by chip select
    async fn send(&mut self, packet: &[u8]) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }

        self.cs.set_high().map_err(|_| DisplayError::Communication)?;
        self.delay.delay_us(CS_SETUP_US).await;

        let result = match self.spi.write(packet).await {
            Ok(()) => self.spi.flush().await,
            Err(e) => Err(e),
        };

        self.delay.delay_us(CS_HOLD_US).await;
        self.cs.set_low().map_err(|_| DisplayError::Communication)?;

        result.map_err(|_| DisplayError::Communication)
    }

    /// Clear the panel to white
    pub async fn clear(&mut self) -> Result<(), DisplayError> {
        self.send(&memory_lcd::clear_packet(self.vcom)).await
    }

    /// Send every dirty line of `fb`, then mark it clean
    ///
    /// An uninitialized panel is initialized first and then gets every
    /// line, since `init` wipes its memory. Returns the number of lines
    /// sent. On error the framebuffer keeps its dirty lines so the next
    /// flush resends them.
    pub async fn flush(&mut self, fb: &mut Framebuffer) -> Result<usize, DisplayError> {
        if !self.initialized {
            self.init().await?;
            fb.mark_all_dirty();
        }

        let mut sent = 0;
        for y in fb.dirty_lines() {
            let packet = memory_lcd::encode_line(fb, y, self.vcom)?;
            self.send(&packet).await?;
            sent += 1;
        }
        fb.mark_clean();
        Ok(sent)
    }

    /// Flip VCOM and send it to the panel
    pub async fn toggle_vcom(&mut self) -> Result<(), DisplayError> {
        self.vcom.toggle();
        self.send(&memory_lcd::vcom_packet(self.vcom)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::HEIGHT;
    use crate::memory_lcd::{cmd, LINE_PACKET_LEN};
    use blocktime_core::Color;
    use core::convert::Infallible;
    use embassy_futures::block_on;
    use embedded_hal::digital::ErrorType as PinErrorType;
    use embedded_hal::spi::{Error as SpiError, ErrorKind, ErrorType as SpiErrorType};

    #[derive(Debug)]
    struct BusFault;

    impl SpiError for BusFault {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    /// SPI bus that records every write and can fail the next few
    #[derive(Default)]
    struct MockBus {
        writes: Vec<Vec<u8>>,
        failures: usize,
    }

    impl SpiErrorType for MockBus {
        type Error = BusFault;
    }

    impl SpiBus for MockBus {
        async fn read(&mut self, _words: &mut [u8]) -> Result<(), BusFault> {
            Ok(())
        }

        async fn write(&mut self, words: &[u8]) -> Result<(), BusFault> {
            if self.failures > 0 {
                self.failures -= 1;
                return Err(BusFault);
            }
            self.writes.push(words.to_vec());
            Ok(())
        }

        async fn transfer(&mut self, _read: &mut [u8], write: &[u8]) -> Result<(), BusFault> {
            self.write(write).await
        }

        async fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), BusFault> {
            self.write(words).await
        }

        async fn flush(&mut self) -> Result<(), BusFault> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockPin {
        high: bool,
    }

    impl PinErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            Ok(())
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        async fn delay_ns(&mut self, _ns: u32) {}
    }

    type MockLcd = SharpLcd<MockBus, MockPin, NoDelay>;

    fn lcd() -> MockLcd {
        SharpLcd::new(MockBus::default(), MockPin::default(), MockPin::default(), NoDelay)
    }

    #[test]
    fn test_init_clears_and_enables() {
        let mut lcd = lcd();
        block_on(lcd.init()).unwrap();

        assert!(lcd.is_initialized());
        assert!(lcd.disp.high);
        assert!(!lcd.cs.high);
        assert_eq!(lcd.spi.writes, vec![vec![cmd::CLEAR_ALL, cmd::TRAILER]]);
    }

    #[test]
    fn test_send_requires_init() {
        let mut lcd = lcd();
        assert_eq!(block_on(lcd.toggle_vcom()), Err(DisplayError::NotInitialized));
        assert!(lcd.spi.writes.is_empty());
    }

    #[test]
    fn test_flush_sends_only_dirty_lines() {
        let mut lcd = lcd();
        let mut fb = Framebuffer::new();

        assert_eq!(block_on(lcd.flush(&mut fb)), Ok(HEIGHT));
        assert!(!fb.is_dirty());
        assert_eq!(block_on(lcd.flush(&mut fb)), Ok(0));

        lcd.spi.writes.clear();
        fb.set_pixel(10, 20, Color::White);
        assert_eq!(block_on(lcd.flush(&mut fb)), Ok(1));

        let packet = &lcd.spi.writes[0];
        assert_eq!(packet.len(), LINE_PACKET_LEN);
        assert_eq!(packet[0], cmd::WRITE_LINE);
        assert_eq!(packet[1], 21);
        assert_eq!(packet[2 + 1], 0x04);
    }

    #[test]
    fn test_flush_error_keeps_lines_dirty() {
        let mut lcd = lcd();
        let mut fb = Framebuffer::new();
        block_on(lcd.flush(&mut fb)).unwrap();

        fb.set_pixel(0, 5, Color::White);
        fb.set_pixel(0, 6, Color::White);
        lcd.spi.failures = 1;
        assert_eq!(block_on(lcd.flush(&mut fb)), Err(DisplayError::Communication));
        assert_eq!(fb.dirty_lines().collect::<Vec<_>>(), vec![5, 6]);

        lcd.spi.writes.clear();
        assert_eq!(block_on(lcd.flush(&mut fb)), Ok(2));
        assert_eq!(lcd.spi.writes.len(), 2);
    }

    #[test]
    fn test_flush_retries_failed_init() {
        let mut lcd = lcd();
        let mut fb = Framebuffer::new();
        fb.mark_clean();

        lcd.spi.failures = 1;
        assert_eq!(block_on(lcd.init()), Err(DisplayError::Communication));
        assert!(!lcd.is_initialized());
        assert!(!lcd.disp.high);

        // The panel was wiped by init, so every line goes out again
        assert_eq!(block_on(lcd.flush(&mut fb)), Ok(HEIGHT));
        assert!(lcd.is_initialized());
        assert_eq!(lcd.spi.writes[0], vec![cmd::CLEAR_ALL, cmd::TRAILER]);
        assert_eq!(lcd.spi.writes.len(), 1 + HEIGHT);
    }

    #[test]
    fn test_vcom_alternates() {
        let mut lcd = lcd();
        block_on(lcd.init()).unwrap();
        block_on(lcd.toggle_vcom()).unwrap();
        block_on(lcd.toggle_vcom()).unwrap();

        assert_eq!(lcd.spi.writes[1], vec![cmd::VCOM, cmd::TRAILER]);
        assert_eq!(lcd.spi.writes[2], vec![0x00, cmd::TRAILER]);

        // Line writes carry the current polarity
        block_on(lcd.toggle_vcom()).unwrap();
        let mut fb = Framebuffer::new();
        block_on(lcd.flush(&mut fb)).unwrap();
        assert_eq!(lcd.spi.writes[4][0], cmd::WRITE_LINE | cmd::VCOM);
    }
}
