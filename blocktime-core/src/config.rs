//! Face configuration
//!
//! The face has no user settings. These are the compile-time values the
//! firmware builds with, gathered in one place so the host tests and the
//! firmware agree on them.

use crate::geometry::Color;
use crate::time::TimeUnits;

/// Compile-time face settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceConfig {
    /// Window background, painted before every frame
    pub background: Color,
    /// Digit cell color
    pub foreground: Color,
    /// Finest time unit that triggers a redraw
    pub tick_unit: TimeUnits,
}

impl FaceConfig {
    /// White digits on black, redrawn every minute
    pub const DEFAULT: FaceConfig = FaceConfig {
        background: Color::Black,
        foreground: Color::White,
        tick_unit: TimeUnits::MINUTE,
    };

    /// Same layout with the colors swapped
    pub const fn inverted(self) -> Self {
        Self {
            background: self.foreground,
            foreground: self.background,
            tick_unit: self.tick_unit,
        }
    }
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FaceConfig::default();
        assert_eq!(config.background, Color::Black);
        assert_eq!(config.foreground, Color::White);
        assert_eq!(config.tick_unit, TimeUnits::MINUTE);
    }

    #[test]
    fn test_inverted() {
        let config = FaceConfig::DEFAULT.inverted();
        assert_eq!(config.background, Color::White);
        assert_eq!(config.foreground, Color::Black);
        assert_eq!(config.inverted(), FaceConfig::DEFAULT);
    }
}
