//! Multiplexed seven segment display
//!
//! Owns the digit buffer, the formatter and the refresher. Suitable when
//! one context both writes values and drives the refresh.
//!
//! # Usage
//!
//! `tick()` must be called at a steady cadence, one call per digit slot
//! (`refresh_delay_us()` apart). Each call latches exactly one digit.
//! Below full brightness the digit is blanked after `on_us` for the rest of
//! the slot.
//!
//! ```ignore
//! let chain = ShiftRegisterChain::new(data, clock, strobe, delay, config.timing)?;
//! let mut display = SevenSegmentDisplay::new(config, chain)?;
//! display.set_float(21.5, 1);
//! display.set_brightness(40);
//!
//! loop {
//!     let timing = display.slot_timing();
//!     display.tick()?;
//!     delay.delay_us(timing.on_us);
//!     if timing.off_us > 0 {
//!         display.blank()?;
//!         delay.delay_us(timing.off_us);
//!     }
//! }
//! ```

use shiftseg_core::buffer::DisplayBuffer;
use shiftseg_core::config::{ConfigError, DisplayConfig};
use shiftseg_core::encoding::DigitValue;
use shiftseg_core::format::NumberFormatter;
use shiftseg_core::scheduler::SlotTiming;
use shiftseg_core::traits::FrameOutput;

use super::refresher::DisplayRefresher;

/// Seven segment display behind a pair of shift registers
pub struct SevenSegmentDisplay<O> {
    config: DisplayConfig,
    buffer: DisplayBuffer,
    formatter: NumberFormatter,
    refresher: DisplayRefresher<O>,
}

impl<O: FrameOutput> SevenSegmentDisplay<O> {
    /// Create a display with every digit blank
    ///
    /// Nothing is transmitted until the first `tick()` or `clear()`.
    pub fn new(config: DisplayConfig, output: O) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            buffer: DisplayBuffer::new(config.digit_count),
            formatter: NumberFormatter::from_config(&config),
            refresher: DisplayRefresher::new(output, &config),
        })
    }

    /// Latch the next digit
    pub fn tick(&mut self) -> Result<(), O::Error> {
        self.refresher.tick(&self.buffer)
    }

    /// Turn every segment and digit off until the next tick
    pub fn blank(&mut self) -> Result<(), O::Error> {
        self.refresher.blank()
    }

    /// Show an integer; `decimal_place` counts from the right, 0 for none
    pub fn set_integer(&mut self, value: i32, decimal_place: u8) {
        self.formatter.set_integer(&mut self.buffer, value, decimal_place);
    }

    pub fn set_float(&mut self, value: f32, decimal_places: u8) {
        self.formatter.set_float(&mut self.buffer, value, decimal_places);
    }

    pub fn set_chars(&mut self, text: &str) {
        self.formatter.set_chars(&mut self.buffer, text);
    }

    /// Show a temperature in tenths of a degree
    pub fn set_temperature(&mut self, tenths: i16) {
        self.formatter.set_temperature(&mut self.buffer, tenths);
    }

    pub fn set_digit(&mut self, position: u8, value: DigitValue) {
        self.buffer.set_digit(position, value);
    }

    pub fn set_decimal_point(&mut self, position: u8, on: bool) {
        self.buffer.set_decimal_point(position, on);
    }

    /// Blank the buffer and latch an all-off frame immediately
    pub fn clear(&mut self) -> Result<(), O::Error> {
        self.buffer.clear();
        self.refresher.blank()
    }

    /// Set brightness in percent; values above 100 saturate
    pub fn set_brightness(&mut self, percent: u8) {
        self.refresher.set_brightness(percent);
    }

    pub fn brightness(&self) -> u8 {
        self.refresher.brightness()
    }

    /// Lit and blanked portions of one slot at the current brightness
    pub fn slot_timing(&self) -> SlotTiming {
        self.refresher.slot_timing()
    }

    /// Time between ticks
    pub fn refresh_delay_us(&self) -> u32 {
        self.refresher.refresh_delay_us()
    }

    pub fn buffer(&self) -> &DisplayBuffer {
        &self.buffer
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Give back the frame output
    pub fn release(self) -> O {
        self.refresher.release()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockDelay, MockPin, RecordingOutput, Wire};
    use crate::output::ShiftRegisterChain;
    use core::cell::RefCell;
    use shiftseg_core::config::{DisplayPolarity, SignStyle};
    use shiftseg_core::encoding::{encode, DigitSelect};

    fn display(config: DisplayConfig) -> SevenSegmentDisplay<RecordingOutput> {
        SevenSegmentDisplay::new(config, RecordingOutput::default()).unwrap()
    }

    fn ca4() -> SevenSegmentDisplay<RecordingOutput> {
        display(DisplayConfig::new(DisplayPolarity::CommonAnode, 4, false))
    }

    #[test]
    fn test_new_is_blank_and_silent() {
        let display = ca4();
        assert!(display.buffer().digits().iter().all(|d| d.is_blank()));
        assert_eq!(display.buffer().decimal_mask(), 0);
        assert!(display.release().frames.is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = DisplayConfig::new(DisplayPolarity::CommonCathode, 0, false);
        let result = SevenSegmentDisplay::new(config, RecordingOutput::default());
        assert!(matches!(result, Err(ConfigError::InvalidDigitCount(0))));

        let config = DisplayConfig {
            slot_period_us: 10_000,
            ..Default::default()
        };
        let result = SevenSegmentDisplay::new(config, RecordingOutput::default());
        assert!(matches!(
            result,
            Err(ConfigError::RefreshTooSlow { cycle_us: 40_000 })
        ));
    }

    #[test]
    fn test_common_anode_all_on() {
        let mut display = ca4();
        display.set_digit(0, DigitValue::new(8));
        display.set_decimal_point(0, true);
        display.tick().unwrap();

        let output = display.release();
        assert_eq!(output.frames[0], [0x00, 0b1111_1110]);
    }

    #[test]
    fn test_ticks_cycle_through_digits() {
        let mut display = display(DisplayConfig::new(DisplayPolarity::CommonCathode, 4, true));
        display.set_integer(1234, 0);
        for _ in 0..5 {
            display.tick().unwrap();
        }

        let output = display.release();
        let expected = [(1, 0), (2, 1), (3, 2), (4, 3), (1, 0)];
        for (frame, (digit, position)) in output.frames.iter().zip(expected) {
            assert_eq!(frame[0], encode(DigitValue::new(digit)).bits());
            assert_eq!(frame[1], DigitSelect::select(position, 4).bits());
        }
    }

    #[test]
    fn test_clear_latches_off_frame() {
        let mut display = ca4();
        display.set_integer(42, 1);
        display.tick().unwrap();
        display.clear().unwrap();

        assert!(display.buffer().digits().iter().all(|d| d.is_blank()));
        assert_eq!(display.buffer().decimal_mask(), 0);
        assert_eq!(display.release().frames[1], [0xFF, 0xFF]);
    }

    #[test]
    fn test_zero_brightness_sends_off() {
        let mut display = ca4();
        display.set_integer(8888, 0);
        display.set_brightness(0);
        display.tick().unwrap();
        display.set_brightness(100);
        display.tick().unwrap();

        let output = display.release();
        assert_eq!(output.frames[0], [0xFF, 0xFF]);
        // Index advanced past position 0 while dark
        assert_eq!(output.frames[1][1], DigitSelect::select(1, 4).bits());
    }

    #[test]
    fn test_dimmed_slot_blanks_after_on_time() {
        let mut display = ca4();
        display.set_integer(8, 0);
        display.set_brightness(40);

        let timing = display.slot_timing();
        assert_eq!(timing, SlotTiming { on_us: 800, off_us: 1_200 });

        // One polling slot: show the digit, then blank for the off time
        display.tick().unwrap();
        if timing.off_us > 0 {
            display.blank().unwrap();
        }

        let output = display.release();
        assert_eq!(output.frames.len(), 2);
        assert_eq!(output.frames[0][1], DigitSelect::select(0, 4).bits());
        assert_eq!(output.frames[1], [0xFF, 0xFF]);
    }

    #[test]
    fn test_brightness_saturates() {
        let mut display = ca4();
        display.set_brightness(180);
        assert_eq!(display.brightness(), 100);
        assert_eq!(display.slot_timing(), SlotTiming { on_us: 2_000, off_us: 0 });
        assert_eq!(display.refresh_delay_us(), 2_000);
    }

    #[test]
    fn test_out_of_range_setters_ignored() {
        let mut display = ca4();
        display.set_digit(4, DigitValue::new(1));
        display.set_decimal_point(7, true);
        assert!(display.buffer().digits().iter().all(|d| d.is_blank()));
        assert_eq!(display.buffer().decimal_mask(), 0);
    }

    #[test]
    fn test_formatting_facade() {
        let mut display = ca4();

        display.set_integer(42, 0);
        assert_eq!(
            display.buffer().digits(),
            &[DigitValue::BLANK, DigitValue::BLANK, DigitValue::new(4), DigitValue::new(2)]
        );

        display.set_temperature(385);
        assert_eq!(
            display.buffer().digits(),
            &[DigitValue::new(3), DigitValue::new(8), DigitValue::new(5), DigitValue::BLANK]
        );
        assert_eq!(display.buffer().decimal_mask(), 0b0010);

        display.set_chars("Ab");
        assert_eq!(
            display.buffer().digits(),
            &[DigitValue::new(10), DigitValue::new(11), DigitValue::BLANK, DigitValue::BLANK]
        );
    }

    #[test]
    fn test_dash_sign_from_config() {
        let config = DisplayConfig {
            sign_style: SignStyle::Dash,
            ..Default::default()
        };
        let mut display = display(config);
        display.set_float(-1.5, 1);

        assert_eq!(
            display.buffer().digits(),
            &[DigitValue::DASH, DigitValue::BLANK, DigitValue::new(1), DigitValue::new(5)]
        );
        assert_eq!(display.buffer().decimal_mask(), 0b0100);
    }

    #[test]
    fn test_end_to_end_over_shift_registers() {
        let wire = RefCell::new(Wire::default());
        let (data, clock, strobe) = MockPin::triple(&wire);
        let config = DisplayConfig::new(DisplayPolarity::CommonAnode, 4, false);
        let chain =
            ShiftRegisterChain::new(data, clock, strobe, MockDelay::default(), config.timing)
                .unwrap();
        let mut display = SevenSegmentDisplay::new(config, chain).unwrap();

        display.set_integer(7, 0);
        for _ in 0..4 {
            display.tick().unwrap();
        }

        // Last tick shows position 3, the units digit
        assert_eq!(wire.borrow().far_byte(), !encode(DigitValue::new(7)).bits());
        assert_eq!(wire.borrow().near_byte(), 0b1111_0111);

        display.clear().unwrap();
        assert_eq!(wire.borrow().outputs, 0xFFFF);
        assert_eq!(wire.borrow().strobe_pulses, 5);
    }
}
