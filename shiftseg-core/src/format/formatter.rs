//! Number formatter
//!
//! Layout rules (n = digit count):
//!
//! - Integers are right-aligned. Negative values reserve position 0 for the
//!   sign glyph and use the remaining n-1 positions.
//! - `decimal_place = k` lights the decimal point k positions left of the
//!   rightmost digit; 0 means no decimal point.
//! - Leading zero suppression blanks a contiguous run of zeros from the left
//!   and stops at the first non-zero digit, the decimal point digit, or the
//!   last digit.
//! - Temperatures use a window of n-1 positions with one decimal place. The
//!   window starts at position 0 for positive values (last position blank)
//!   and at position 1 for negative values (position 0 is the sign).

use crate::buffer::DisplayBuffer;
use crate::config::{DisplayConfig, SignStyle, MAX_DIGITS};
use crate::encoding::DigitValue;

/// Writes numbers and text into a [`DisplayBuffer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NumberFormatter {
    /// Keep leading zeros instead of blanking them
    pub leading_zeros: bool,
    /// Glyph used in the reserved sign position
    pub sign_style: SignStyle,
}

impl NumberFormatter {
    pub const fn new(leading_zeros: bool, sign_style: SignStyle) -> Self {
        Self {
            leading_zeros,
            sign_style,
        }
    }

    pub fn from_config(config: &DisplayConfig) -> Self {
        Self::new(config.leading_zeros, config.sign_style)
    }

    /// Display an integer, right-aligned
    pub fn set_integer(&self, buf: &mut DisplayBuffer, value: i32, decimal_place: u8) {
        let n = buf.digit_count();
        let negative = value < 0;
        let start = if negative { 1 } else { 0 };
        let width = n - start;
        let magnitude = value.unsigned_abs().min(max_magnitude(width));

        buf.clear();
        if negative {
            buf.set_digit(0, self.sign_glyph());
        }
        write_digits(buf, start, n, magnitude);

        // DP must land inside the digit field, never on the sign
        let dp_position = if decimal_place > 0 && decimal_place < width {
            Some(n - 1 - decimal_place)
        } else {
            None
        };
        if let Some(position) = dp_position {
            buf.set_decimal_point(position, true);
        }

        if !self.leading_zeros {
            blank_leading_zeros(buf, start, dp_position.unwrap_or(n - 1));
        }
    }

    /// Display a float with a fixed number of decimal places
    ///
    /// The value is scaled by `10^decimal_places` and rounded half away from
    /// zero. NaN displays as zero. Places that do not fit the digit field are
    /// dropped from the right, keeping at least one integer digit.
    pub fn set_float(&self, buf: &mut DisplayBuffer, value: f32, decimal_places: u8) {
        let n = buf.digit_count();
        let width = if value < 0.0 { n - 1 } else { n };
        let places = decimal_places
            .min(width.saturating_sub(1))
            .min(MAX_DIGITS as u8 - 1);
        let scale = 10u32.pow(places as u32) as f32;
        let rounded = round_half_away(value * scale);
        let clamped = rounded.clamp(i32::MIN as i64, i32::MAX as i64) as i32;

        self.set_integer(buf, clamped, places);
    }

    /// Display text, left-aligned, one character per digit
    ///
    /// Supports `0-9`, `A-F`, `-` and space. Extra characters are dropped.
    pub fn set_chars(&self, buf: &mut DisplayBuffer, text: &str) {
        buf.clear();
        let count = buf.digit_count() as usize;
        for (position, c) in text.chars().take(count).enumerate() {
            buf.set_digit(position as u8, DigitValue::from_char(c));
        }
    }

    /// Display a temperature given in tenths of a degree (385 = 38.5)
    ///
    /// Displays with fewer than three digits have no room for the
    /// temperature window and show whole degrees instead.
    pub fn set_temperature(&self, buf: &mut DisplayBuffer, tenths: i16) {
        let n = buf.digit_count();
        if n < 3 {
            self.set_integer(buf, i32::from(tenths) / 10, 0);
            return;
        }

        let negative = tenths < 0;
        let start = if negative { 1 } else { 0 };
        let width = n - 1;
        let magnitude = i32::from(tenths).unsigned_abs().min(max_magnitude(width));

        buf.clear();
        if negative {
            buf.set_digit(0, self.sign_glyph());
        }
        write_digits(buf, start, start + width, magnitude);

        // Units digit sits just left of the tenths digit
        let units = start + width - 2;
        buf.set_decimal_point(units, true);

        if !self.leading_zeros {
            blank_leading_zeros(buf, start, units);
        }
    }

    fn sign_glyph(&self) -> DigitValue {
        match self.sign_style {
            SignStyle::Blank => DigitValue::BLANK,
            SignStyle::Dash => DigitValue::DASH,
        }
    }
}

/// Largest magnitude that fits in `width` decimal digits
fn max_magnitude(width: u8) -> u32 {
    match width {
        0 => 0,
        // width <= MAX_DIGITS, 10^8 fits in u32
        w => 10u32.pow(w as u32) - 1,
    }
}

/// Write `magnitude` right-aligned into positions `start..end`
fn write_digits(buf: &mut DisplayBuffer, start: u8, end: u8, magnitude: u32) {
    let mut rest = magnitude;
    for position in (start..end).rev() {
        buf.set_digit(position, DigitValue::new((rest % 10) as u8));
        rest /= 10;
    }
}

/// Blank zeros in `start..stop`, stopping at the first non-zero digit
fn blank_leading_zeros(buf: &mut DisplayBuffer, start: u8, stop: u8) {
    for position in start..stop {
        if buf.digit(position) != DigitValue::ZERO {
            break;
        }
        buf.set_digit(position, DigitValue::BLANK);
    }
}

fn round_half_away(value: f32) -> i64 {
    if value.is_nan() {
        0
    } else if value >= 0.0 {
        (value + 0.5) as i64
    } else {
        (value - 0.5) as i64
    }
}
