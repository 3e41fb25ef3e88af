//! Display-side building blocks for Blocktime
//!
//! This crate provides:
//! - `Framebuffer`, a 144x168 1-bit buffer laid out the way memory LCDs
//!   receive it, usable both as a `FillSurface` and an
//!   `embedded_graphics::DrawTarget`
//! - `GraphicsSurface`, which lets any `DrawTarget` act as a face surface
//! - `memory_lcd`, packet encoding for Sharp memory LCD panels
//! - `SharpLcd`, an async driver that ships changed lines to the panel
//!
//! # Architecture
//!
//! The face in `blocktime-core` only knows how to fill rectangles. This
//! crate turns those fills into pixels and the pixels into SPI packets.
//! The firmware only supplies the bus, the pins and a delay.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod framebuffer;
pub mod graphics;
pub mod memory_lcd;
pub mod sharp;

// Re-export key types
pub use framebuffer::{Framebuffer, HEIGHT, LINE_BYTES, WIDTH};
pub use graphics::GraphicsSurface;
pub use memory_lcd::{DisplayError, Vcom};
pub use sharp::SharpLcd;
