//! Inter-task communication channels
//!
//! Defines the static signals used for communication between Embassy tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use blocktime_core::TimeUnits;

/// Wall-clock tick, carrying the units that changed since the last one
///
/// A newer tick overwrites an unconsumed older one; the face only cares
/// that something changed.
pub static TIME_TICK: Signal<CriticalSectionRawMutex, TimeUnits> = Signal::new();
