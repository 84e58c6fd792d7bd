//! Segment encoder

use super::value::DigitValue;
use crate::config::DisplayPolarity;

/// Segment A (top)
pub const SEG_A: u8 = 1 << 0;
/// Segment B (top right)
pub const SEG_B: u8 = 1 << 1;
/// Segment C (bottom right)
pub const SEG_C: u8 = 1 << 2;
/// Segment D (bottom)
pub const SEG_D: u8 = 1 << 3;
/// Segment E (bottom left)
pub const SEG_E: u8 = 1 << 4;
/// Segment F (top left)
pub const SEG_F: u8 = 1 << 5;
/// Segment G (middle)
pub const SEG_G: u8 = 1 << 6;
/// Decimal point
pub const SEG_DP: u8 = 1 << 7;

/// Canonical patterns indexed by `DigitValue::raw()`
const PATTERNS: [u8; 18] = [
    0b0011_1111, // 0
    0b0000_0110, // 1
    0b0101_1011, // 2
    0b0100_1111, // 3
    0b0110_0110, // 4
    0b0110_1101, // 5
    0b0111_1101, // 6
    0b0000_0111, // 7
    0b0111_1111, // 8
    0b0110_1111, // 9
    0b0111_0111, // A
    0b0111_1100, // b
    0b0011_1001, // C
    0b0101_1110, // d
    0b0111_1001, // E
    0b0111_0001, // F
    0b0000_0000, // blank
    SEG_G,       // dash
];

/// Canonical (active-high) segment pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentPattern(u8);

impl SegmentPattern {
    /// No segments lit
    pub const OFF: Self = Self(0);
    /// Every segment including the decimal point
    pub const ALL: Self = Self(0xFF);

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Set or clear the decimal point
    pub const fn with_decimal_point(self, on: bool) -> Self {
        if on {
            Self(self.0 | SEG_DP)
        } else {
            Self(self.0 & !SEG_DP)
        }
    }

    /// Byte to shift out for the given wiring
    ///
    /// Common anode displays sink segment current, so the pattern is inverted.
    pub const fn to_wire(self, polarity: DisplayPolarity) -> u8 {
        match polarity {
            DisplayPolarity::CommonCathode => self.0,
            DisplayPolarity::CommonAnode => !self.0,
        }
    }
}

/// Encode a digit value into its canonical segment pattern
pub const fn encode(value: DigitValue) -> SegmentPattern {
    let raw = value.raw() as usize;
    if raw < PATTERNS.len() {
        SegmentPattern(PATTERNS[raw])
    } else {
        SegmentPattern::OFF
    }
}
