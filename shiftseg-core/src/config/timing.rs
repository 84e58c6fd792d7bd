//! Serial protocol timing contract
//!
//! The shift registers only care about minimum widths, so the contract is
//! expressed as lower bounds in nanoseconds. The driver picks whatever
//! delay primitive the platform offers to meet them.

/// Minimum clock and strobe high time (HEF4094B / 74HC595 class parts)
pub const MIN_PULSE_NS: u32 = 1_000;

/// Minimum pulse widths for the DATA / CLOCK / STROBE lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseTiming {
    /// Time DATA must be stable before the CLOCK rising edge
    pub data_setup_ns: u32,
    /// CLOCK high time per bit
    pub clock_high_ns: u32,
    /// STROBE high time after all 16 bits are shifted
    pub strobe_high_ns: u32,
}

impl Default for PulseTiming {
    fn default() -> Self {
        Self {
            data_setup_ns: 0,
            clock_high_ns: MIN_PULSE_NS,
            strobe_high_ns: MIN_PULSE_NS,
        }
    }
}

impl PulseTiming {
    /// Check that both pulse widths meet the contract
    pub fn is_valid(&self) -> bool {
        self.clock_high_ns >= MIN_PULSE_NS && self.strobe_high_ns >= MIN_PULSE_NS
    }

    /// Worst-case time spent in delays for one 16-bit transmission
    ///
    /// Saturates at `u32::MAX` for very long configured pulses.
    pub fn frame_delay_ns(&self) -> u32 {
        self.data_setup_ns
            .saturating_add(self.clock_high_ns)
            .saturating_mul(16)
            .saturating_add(self.strobe_high_ns)
    }
}
