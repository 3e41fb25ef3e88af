//! Collaborator traits
//!
//! These traits define the interface between the face logic and
//! whatever owns the pixels and the clock.

pub mod clock;
pub mod surface;

pub use clock::{ensure_running, AdjustableClock, FixedClock, WallClock};
pub use surface::FillSurface;
