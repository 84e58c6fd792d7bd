//! One multiplex frame

use crate::config::DisplayPolarity;
use crate::encoding::{DigitSelect, SegmentPattern};

/// Segment pattern and digit select latched together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// Canonical segment pattern (polarity not applied)
    pub segments: SegmentPattern,
    /// Active-low digit enable
    pub select: DigitSelect,
}

impl Frame {
    /// All segments off, no digit selected
    pub const OFF: Self = Self {
        segments: SegmentPattern::OFF,
        select: DigitSelect::NONE,
    };

    /// Bytes in shift order: segment byte first, digit select second
    pub const fn wire_bytes(self, polarity: DisplayPolarity) -> [u8; 2] {
        [self.segments.to_wire(polarity), self.select.bits()]
    }
}
