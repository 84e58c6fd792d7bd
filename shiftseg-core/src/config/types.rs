//! Display configuration type definitions

use super::timing::PulseTiming;

/// Maximum digits supported by one register pair (one select bit per digit)
pub const MAX_DIGITS: usize = 8;

/// Full-cycle refresh rate below which flicker becomes visible
pub const MIN_REFRESH_HZ: u32 = 50;

/// Default time each digit stays selected (2 ms)
pub const DEFAULT_SLOT_PERIOD_US: u32 = 2_000;

/// Display wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayPolarity {
    /// Segments light when driven high
    CommonCathode,
    /// Segments light when driven low
    #[default]
    CommonAnode,
}

/// How a negative sign is rendered in the reserved leftmost position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SignStyle {
    /// Position stays dark
    #[default]
    Blank,
    /// Segment G only
    Dash,
}

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Digit count outside 1..=MAX_DIGITS
    InvalidDigitCount(u8),
    /// Brightness above 100%
    InvalidBrightness(u8),
    /// Slot period of zero
    ZeroSlotPeriod,
    /// Full refresh cycle slower than MIN_REFRESH_HZ
    RefreshTooSlow {
        /// Length of one full cycle in microseconds
        cycle_us: u32,
    },
    /// Clock or strobe pulse shorter than the timing contract
    PulseTooShort,
}

/// Display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Segment polarity
    pub polarity: DisplayPolarity,
    /// Number of digits on the display (1-8)
    pub digit_count: u8,
    /// Show leading zeros for numeric values
    pub leading_zeros: bool,
    /// Sign rendering for negative values
    pub sign_style: SignStyle,
    /// Initial brightness (0-100%)
    pub brightness: u8,
    /// Time each digit is selected, in microseconds
    pub slot_period_us: u32,
    /// Serial protocol pulse widths
    pub timing: PulseTiming,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            polarity: DisplayPolarity::CommonAnode,
            digit_count: 4,
            leading_zeros: false,
            sign_style: SignStyle::Blank,
            brightness: 100,
            slot_period_us: DEFAULT_SLOT_PERIOD_US,
            timing: PulseTiming::default(),
        }
    }
}

impl DisplayConfig {
    /// Create a configuration with the given wiring and digit count
    ///
    /// Everything else uses defaults.
    pub fn new(polarity: DisplayPolarity, digit_count: u8, leading_zeros: bool) -> Self {
        Self {
            polarity,
            digit_count,
            leading_zeros,
            ..Default::default()
        }
    }

    /// Time for one full pass over all digits, in microseconds
    pub fn cycle_us(&self) -> u32 {
        self.slot_period_us.saturating_mul(self.digit_count as u32)
    }

    /// Full-cycle refresh rate in Hz (0 if the slot period is zero)
    pub fn refresh_rate_hz(&self) -> u32 {
        match self.cycle_us() {
            0 => 0,
            cycle => 1_000_000 / cycle,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.digit_count == 0 || self.digit_count as usize > MAX_DIGITS {
            return Err(ConfigError::InvalidDigitCount(self.digit_count));
        }
        if self.brightness > 100 {
            return Err(ConfigError::InvalidBrightness(self.brightness));
        }
        if self.slot_period_us == 0 {
            return Err(ConfigError::ZeroSlotPeriod);
        }
        if self.refresh_rate_hz() < MIN_REFRESH_HZ {
            return Err(ConfigError::RefreshTooSlow {
                cycle_us: self.cycle_us(),
            });
        }
        if !self.timing.is_valid() {
            return Err(ConfigError::PulseTooShort);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = DisplayConfig::default();
        assert_eq!(config.validate(), Ok(()));
        // 4 digits x 2 ms = 8 ms per cycle
        assert_eq!(config.refresh_rate_hz(), 125);
    }

    #[test]
    fn test_digit_count_bounds() {
        let config = DisplayConfig::new(DisplayPolarity::CommonCathode, 0, false);
        assert_eq!(config.validate(), Err(ConfigError::InvalidDigitCount(0)));

        let config = DisplayConfig::new(DisplayPolarity::CommonCathode, 9, false);
        assert_eq!(config.validate(), Err(ConfigError::InvalidDigitCount(9)));

        let config = DisplayConfig::new(DisplayPolarity::CommonCathode, 8, false);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_brightness_bounds() {
        let config = DisplayConfig {
            brightness: 101,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidBrightness(101)));
    }

    #[test]
    fn test_slow_refresh_rejected() {
        // 8 digits x 5 ms = 40 ms per cycle = 25 Hz
        let config = DisplayConfig {
            digit_count: 8,
            slot_period_us: 5_000,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::RefreshTooSlow { cycle_us: 40_000 })
        );
    }

    #[test]
    fn test_zero_slot_period() {
        let config = DisplayConfig {
            slot_period_us: 0,
            ..Default::default()
        };
        assert_eq!(config.refresh_rate_hz(), 0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroSlotPeriod));
    }
}
