//! Sharp memory LCD packet encoding
//!
//! Memory LCDs (LS013B7DH05 and friends) take SPI packets clocked LSB
//! first with an active-high chip select. A line update is:
//!
//! ```text
//! ┌─────────┬─────────┬───────────────┬───────┬─────────┐
//! │ command │ address │ 18 data bytes │ dummy │ trailer │
//! │  0x01   │  1-168  │  LSB = x%8=0  │ 0x00  │  0x00   │
//! └─────────┴─────────┴───────────────┴───────┴─────────┘
//! ```
//!
//! The command byte also carries the VCOM polarity bit, which has to be
//! flipped about once a second to keep DC bias off the liquid crystal.

use crate::framebuffer::{Framebuffer, LINE_BYTES};

/// Command bits
pub mod cmd {
    /// Write one or more lines
    pub const WRITE_LINE: u8 = 0x01;
    /// VCOM polarity
    pub const VCOM: u8 = 0x02;
    /// Clear the panel to white
    pub const CLEAR_ALL: u8 = 0x04;
    /// Dummy/trailer byte
    pub const TRAILER: u8 = 0x00;
}

/// Length of a single-line update packet
pub const LINE_PACKET_LEN: usize = 1 + 1 + LINE_BYTES + 1 + 1;

/// Length of a command-only packet (clear or VCOM refresh)
pub const COMMAND_PACKET_LEN: usize = 2;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Line index outside the panel
    InvalidLine(u16),
    /// Display not initialized
    NotInitialized,
}

/// VCOM polarity state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Vcom(bool);

impl Vcom {
    /// Flip the polarity
    pub fn toggle(&mut self) {
        self.0 = !self.0;
    }

    /// Check if the VCOM bit is currently set
    pub const fn is_high(&self) -> bool {
        self.0
    }

    /// Bit to OR into a command byte
    pub const fn bit(&self) -> u8 {
        if self.0 {
            cmd::VCOM
        } else {
            0
        }
    }
}

/// Encode a write of line `y` (0-based) from `fb`
pub fn encode_line(
    fb: &Framebuffer,
    y: usize,
    vcom: Vcom,
) -> Result<[u8; LINE_PACKET_LEN], DisplayError> {
    let line = fb.line(y).ok_or(DisplayError::InvalidLine(y as u16))?;

    let mut packet = [cmd::TRAILER; LINE_PACKET_LEN];
    packet[0] = cmd::WRITE_LINE | vcom.bit();
    // Panel line addresses start at 1
    packet[1] = (y + 1) as u8;
    packet[2..2 + LINE_BYTES].copy_from_slice(line);
    Ok(packet)
}

/// Encode a whole-panel clear
pub const fn clear_packet(vcom: Vcom) -> [u8; COMMAND_PACKET_LEN] {
    [cmd::CLEAR_ALL | vcom.bit(), cmd::TRAILER]
}

/// Encode a display-mode packet that only refreshes VCOM
pub const fn vcom_packet(vcom: Vcom) -> [u8; COMMAND_PACKET_LEN] {
    [vcom.bit(), cmd::TRAILER]
}
