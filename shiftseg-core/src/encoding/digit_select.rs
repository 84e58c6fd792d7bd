//! Digit select encoder
//!
//! The digit drivers (PNP transistors) are active low: the selected digit's
//! bit is cleared, every other bit stays set.

use crate::config::MAX_DIGITS;

/// One-hot, active-low digit enable byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitSelect(u8);

impl DigitSelect {
    /// No digit enabled
    pub const NONE: Self = Self(0xFF);

    /// Enable a single digit
    ///
    /// Returns [`DigitSelect::NONE`] for positions outside the display.
    pub const fn select(position: u8, digit_count: u8) -> Self {
        if position < digit_count && (position as usize) < MAX_DIGITS {
            Self(!(1 << position))
        } else {
            Self::NONE
        }
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Position of the enabled digit, if exactly one is enabled
    pub const fn active_position(self) -> Option<u8> {
        let active = !self.0;
        if active.count_ones() == 1 {
            Some(active.trailing_zeros() as u8)
        } else {
            None
        }
    }
}

impl Default for DigitSelect {
    fn default() -> Self {
        Self::NONE
    }
}
