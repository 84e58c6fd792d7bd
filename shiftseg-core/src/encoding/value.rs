//! Digit values stored in the display buffer

/// Value shown at one display position
///
/// `0..=15` are hexadecimal digits, 16 is blank and 17 is a dash (used for
/// negative signs). Anything else is normalized to blank on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitValue(u8);

impl DigitValue {
    /// All segments off
    pub const BLANK: Self = Self(16);
    /// Segment G only
    pub const DASH: Self = Self(17);
    /// Zero digit
    pub const ZERO: Self = Self(0);

    /// Create a value from a raw table index
    pub const fn new(raw: u8) -> Self {
        if raw <= Self::DASH.0 {
            Self(raw)
        } else {
            Self::BLANK
        }
    }

    /// Raw table index (0-17)
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Hex digit value, if this is a digit
    pub const fn as_digit(self) -> Option<u8> {
        if self.0 < 16 {
            Some(self.0)
        } else {
            None
        }
    }

    pub const fn is_blank(self) -> bool {
        self.0 == Self::BLANK.0
    }

    /// Map a character to a value
    ///
    /// Supports `0-9`, `A-F` (either case), `-` and space. Unsupported
    /// characters map to blank.
    pub fn from_char(c: char) -> Self {
        match c {
            '0'..='9' => Self(c as u8 - b'0'),
            'A'..='F' => Self(c as u8 - b'A' + 10),
            'a'..='f' => Self(c as u8 - b'a' + 10),
            '-' => Self::DASH,
            _ => Self::BLANK,
        }
    }
}

impl Default for DigitValue {
    fn default() -> Self {
        Self::BLANK
    }
}

impl From<u8> for DigitValue {
    fn from(raw: u8) -> Self {
        Self::new(raw)
    }
}
