//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod display;
pub mod tick;

pub use display::{display_task, Lcd};
pub use tick::tick_task;
