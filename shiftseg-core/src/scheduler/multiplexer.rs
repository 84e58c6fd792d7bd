//! Digit multiplexer state

use super::frame::Frame;
use crate::buffer::DisplayBuffer;
use crate::config::DisplayConfig;
use crate::encoding::{encode, DigitSelect};

/// How a slot period is split for brightness control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SlotTiming {
    /// Time the digit stays lit after a tick
    pub on_us: u32,
    /// Time the display should be blanked before the next tick
    pub off_us: u32,
}

/// Multiplex scheduler
///
/// Owns the refresh index and brightness. The display buffer is passed in
/// on every call, so the same scheduler works with an owned buffer or a
/// snapshot of a shared one.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Multiplexer {
    /// Next position to show
    index: u8,
    /// Brightness (0-100%)
    brightness: u8,
    /// Time each digit is selected
    slot_period_us: u32,
}

impl Multiplexer {
    /// Create a scheduler starting at position 0
    pub fn new(slot_period_us: u32, brightness: u8) -> Self {
        Self {
            index: 0,
            brightness: brightness.min(100),
            slot_period_us,
        }
    }

    pub fn from_config(config: &DisplayConfig) -> Self {
        Self::new(config.slot_period_us, config.brightness)
    }

    /// Position the next frame will show
    pub fn index(&self) -> u8 {
        self.index
    }

    /// Restart the cycle at position 0
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Build the frame for the current position and advance
    ///
    /// At zero brightness the frame is blank but the index still advances.
    pub fn next_frame(&mut self, buffer: &DisplayBuffer) -> Frame {
        let count = buffer.digit_count();
        if self.index >= count {
            self.index = 0;
        }

        let position = self.index;
        self.index = (position + 1) % count;

        if self.brightness == 0 {
            return Frame::OFF;
        }

        let segments =
            encode(buffer.digit(position)).with_decimal_point(buffer.decimal_point(position));

        Frame {
            segments,
            select: DigitSelect::select(position, count),
        }
    }

    /// Set brightness in percent (values above 100 saturate)
    pub fn set_brightness(&mut self, percent: u8) {
        self.brightness = percent.min(100);
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Advisory delay between ticks
    pub fn refresh_delay_us(&self) -> u32 {
        self.slot_period_us
    }

    /// Lit / blanked split of one slot at the current brightness
    pub fn slot_timing(&self) -> SlotTiming {
        let on_us = (self.slot_period_us as u64 * self.brightness as u64 / 100) as u32;
        SlotTiming {
            on_us,
            off_us: self.slot_period_us - on_us,
        }
    }
}

impl Default for Multiplexer {
    fn default() -> Self {
        Self::from_config(&DisplayConfig::default())
    }
}
