//! Board-agnostic core logic for the Blocktime watch face
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (fill surface, wall clock)
//! - Digit glyph table and the digit renderer
//! - Time-to-digits decomposition
//! - HH-over-MM layout around the screen center
//! - Watch face context (canvas lifecycle, tick handling, redraw)
//! - Compile-time face configuration

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod face;
pub mod geometry;
pub mod glyph;
pub mod layout;
pub mod render;
pub mod time;
pub mod traits;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export key types
pub use config::FaceConfig;
pub use face::{Frame, WatchFace};
pub use geometry::{Color, Point, Rect, Size};
pub use glyph::{Glyph, GLYPHS};
pub use layout::{DigitSlot, Layout};
pub use render::{render_digit, RenderError};
pub use time::{seconds_until_next_minute, ClockDigits, LocalTime, TimeError, TimeUnits};
pub use traits::{ensure_running, AdjustableClock, FillSurface, FixedClock, WallClock};
