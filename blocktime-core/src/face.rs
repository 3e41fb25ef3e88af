//! Watch face context
//!
//! Holds everything the face needs between redraws: the canvas bounds,
//! the digit layout derived from the window center, the tick
//! subscription and the dirty flag. The context is created when the
//! window loads and consumed when it unloads, so nothing outlives the
//! window.
//!
//! # Redraw cycle
//!
//! 1. The host delivers a tick with the set of changed units
//! 2. `handle_tick` marks the canvas dirty if the subscription matches
//! 3. The host reads the clock and calls `redraw`
//! 4. `redraw` clears to the background and stamps the four digits

use heapless::Vec;

use crate::config::FaceConfig;
use crate::geometry::Rect;
use crate::glyph::GLYPH_CELLS;
use crate::layout::Layout;
use crate::render::{digit_cells, render_digit, RenderError};
use crate::time::{LocalTime, TimeUnits};
use crate::traits::FillSurface;

/// Most cells a frame can contain (four fully lit glyphs)
pub const MAX_FRAME_CELLS: usize = 4 * GLYPH_CELLS;

/// Cell rectangles making up one rendered time
pub type Frame = Vec<Rect, MAX_FRAME_CELLS>;

/// Drawable layer covering the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct CanvasLayer {
    bounds: Rect,
    dirty: bool,
}

/// Watch face state for one loaded window
#[derive(Debug)]
pub struct WatchFace {
    config: FaceConfig,
    layout: Layout,
    canvas: CanvasLayer,
    /// Units that trigger a redraw
    subscription: TimeUnits,
}

impl WatchFace {
    /// Load the face into a window with the given root bounds
    ///
    /// The canvas covers the whole window and starts dirty so the first
    /// pass draws without waiting for a tick.
    pub fn load(root_bounds: Rect, config: FaceConfig) -> Self {
        Self {
            config,
            layout: Layout::centered_in(root_bounds),
            canvas: CanvasLayer {
                bounds: root_bounds,
                dirty: true,
            },
            subscription: config.tick_unit.and_coarser(),
        }
    }

    /// Tear down the face
    ///
    /// Returns the tick units the host should unsubscribe from.
    pub fn unload(self) -> TimeUnits {
        self.subscription
    }

    /// Face configuration
    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    /// Digit layout for this window
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Canvas layer bounds
    pub fn canvas_bounds(&self) -> Rect {
        self.canvas.bounds
    }

    /// Units this face is subscribed to
    pub fn subscription(&self) -> TimeUnits {
        self.subscription
    }

    /// Handle a timer tick
    ///
    /// Returns `true` if the tick marked the canvas dirty.
    pub fn handle_tick(&mut self, units_changed: TimeUnits) -> bool {
        if units_changed.intersects(self.subscription) {
            self.canvas.dirty = true;
            true
        } else {
            false
        }
    }

    /// Force a redraw on the next pass
    pub fn mark_dirty(&mut self) {
        self.canvas.dirty = true;
    }

    /// Check if the canvas needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.canvas.dirty
    }

    /// Cells that a redraw at `time` fills, in paint order
    pub fn frame(&self, time: LocalTime) -> Frame {
        let mut frame = Frame::new();
        for placement in self.layout.placements(time.digits()) {
            if let Some(cells) = digit_cells(placement.digit, placement.origin) {
                for cell in cells {
                    // At most GLYPH_CELLS per digit, so four digits fit
                    let pushed = frame.push(cell);
                    debug_assert!(pushed.is_ok(), "frame over capacity");
                }
            }
        }
        frame
    }

    /// Paint `time` onto `surface` without consulting the dirty flag
    pub fn draw<S: FillSurface>(
        &self,
        surface: &mut S,
        time: LocalTime,
    ) -> Result<(), RenderError<S::Error>> {
        surface
            .fill_rect(self.canvas.bounds, self.config.background)
            .map_err(RenderError::Surface)?;

        for placement in self.layout.placements(time.digits()) {
            render_digit(
                surface,
                placement.digit,
                placement.origin,
                self.config.foreground,
            )?;
        }

        Ok(())
    }

    /// Redraw if dirty
    ///
    /// Returns `Ok(true)` if the surface was painted and `Ok(false)` if
    /// the canvas was already clean. On error the canvas stays dirty so
    /// the next pass retries.
    pub fn redraw<S: FillSurface>(
        &mut self,
        surface: &mut S,
        time: LocalTime,
    ) -> Result<bool, RenderError<S::Error>> {
        if !self.canvas.dirty {
            return Ok(false);
        }

        self.draw(surface, time)?;
        self.canvas.dirty = false;
        Ok(true)
    }
}
