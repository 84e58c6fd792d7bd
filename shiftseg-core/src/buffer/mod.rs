//! Display buffer
//!
//! Holds what every position should show. The buffer is fixed at
//! `MAX_DIGITS` entries; only the first `digit_count` are live and the
//! count never changes after construction.

pub mod shared;

pub use shared::SharedDisplay;

use crate::config::MAX_DIGITS;
use crate::encoding::DigitValue;

/// Per-position digit values plus the decimal point mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayBuffer {
    digits: [DigitValue; MAX_DIGITS],
    /// Bit `i` set = decimal point on digit `i`
    decimal_mask: u8,
    digit_count: u8,
}

impl DisplayBuffer {
    /// Create a blank buffer
    ///
    /// `digit_count` is clamped to `1..=MAX_DIGITS`.
    pub const fn new(digit_count: u8) -> Self {
        let digit_count = if digit_count == 0 {
            1
        } else if digit_count as usize > MAX_DIGITS {
            MAX_DIGITS as u8
        } else {
            digit_count
        };

        Self {
            digits: [DigitValue::BLANK; MAX_DIGITS],
            decimal_mask: 0,
            digit_count,
        }
    }

    pub const fn digit_count(&self) -> u8 {
        self.digit_count
    }

    /// Live digits, leftmost first
    pub fn digits(&self) -> &[DigitValue] {
        &self.digits[..self.digit_count as usize]
    }

    /// Digit at a position (blank outside the display)
    pub fn digit(&self, position: u8) -> DigitValue {
        self.digits()
            .get(position as usize)
            .copied()
            .unwrap_or(DigitValue::BLANK)
    }

    /// Set a single digit; out-of-range positions are ignored
    pub fn set_digit(&mut self, position: u8, value: DigitValue) {
        if position < self.digit_count {
            self.digits[position as usize] = value;
        }
    }

    /// Set every live digit to the same value
    pub fn fill(&mut self, value: DigitValue) {
        let count = self.digit_count as usize;
        self.digits[..count].fill(value);
    }

    pub const fn decimal_mask(&self) -> u8 {
        self.decimal_mask
    }

    /// Replace the decimal point mask; bits beyond the display are dropped
    pub fn set_decimal_mask(&mut self, mask: u8) {
        self.decimal_mask = mask & self.live_mask();
    }

    pub fn decimal_point(&self, position: u8) -> bool {
        position < self.digit_count && self.decimal_mask & (1 << position) != 0
    }

    /// Set or clear one decimal point; out-of-range positions are ignored
    pub fn set_decimal_point(&mut self, position: u8, on: bool) {
        if position >= self.digit_count {
            return;
        }
        if on {
            self.decimal_mask |= 1 << position;
        } else {
            self.decimal_mask &= !(1 << position);
        }
    }

    /// Blank every digit and clear all decimal points
    pub fn clear(&mut self) {
        self.fill(DigitValue::BLANK);
        self.decimal_mask = 0;
    }

    fn live_mask(&self) -> u8 {
        // digit_count <= 8, so the shift fits in u16
        ((1u16 << self.digit_count) - 1) as u8
    }
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::new(4)
    }
}
