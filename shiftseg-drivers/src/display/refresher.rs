//! Display refresher
//!
//! Turns the scheduler's frames into wire bytes and pushes them to the
//! output. The buffer is borrowed per tick, so a refresh task can feed it a
//! snapshot of a [`SharedDisplay`](shiftseg_core::buffer::SharedDisplay).

use shiftseg_core::buffer::DisplayBuffer;
use shiftseg_core::config::{DisplayConfig, DisplayPolarity};
use shiftseg_core::scheduler::{Frame, Multiplexer, SlotTiming};
use shiftseg_core::traits::FrameOutput;

pub struct DisplayRefresher<O> {
    output: O,
    polarity: DisplayPolarity,
    mux: Multiplexer,
}

impl<O: FrameOutput> DisplayRefresher<O> {
    pub fn new(output: O, config: &DisplayConfig) -> Self {
        Self {
            output,
            polarity: config.polarity,
            mux: Multiplexer::from_config(config),
        }
    }

    /// Show the next digit of `buffer`
    pub fn tick(&mut self, buffer: &DisplayBuffer) -> Result<(), O::Error> {
        let frame = self.mux.next_frame(buffer);
        self.send(frame)
    }

    /// Latch an all-off frame without moving the refresh index
    pub fn blank(&mut self) -> Result<(), O::Error> {
        self.send(Frame::OFF)
    }

    fn send(&mut self, frame: Frame) -> Result<(), O::Error> {
        let [segments, select] = frame.wire_bytes(self.polarity);
        self.output.transmit(segments, select)
    }

    pub fn set_brightness(&mut self, percent: u8) {
        self.mux.set_brightness(percent);
    }

    pub fn brightness(&self) -> u8 {
        self.mux.brightness()
    }

    pub fn slot_timing(&self) -> SlotTiming {
        self.mux.slot_timing()
    }

    pub fn refresh_delay_us(&self) -> u32 {
        self.mux.refresh_delay_us()
    }

    /// Position the next tick will show
    pub fn index(&self) -> u8 {
        self.mux.index()
    }

    pub fn polarity(&self) -> DisplayPolarity {
        self.polarity
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn release(self) -> O {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::RecordingOutput;
    use shiftseg_core::encoding::DigitValue;

    fn config(polarity: DisplayPolarity) -> DisplayConfig {
        DisplayConfig::new(polarity, 4, false)
    }

    #[test]
    fn test_tick_applies_polarity_to_segments_only() {
        let mut buf = DisplayBuffer::new(4);
        buf.set_digit(0, DigitValue::new(1));

        let mut cc = DisplayRefresher::new(
            RecordingOutput::default(),
            &config(DisplayPolarity::CommonCathode),
        );
        let mut ca = DisplayRefresher::new(
            RecordingOutput::default(),
            &config(DisplayPolarity::CommonAnode),
        );
        cc.tick(&buf).unwrap();
        ca.tick(&buf).unwrap();

        assert_eq!(cc.output().frames[0], [0b0000_0110, 0b1111_1110]);
        assert_eq!(ca.output().frames[0], [0b1111_1001, 0b1111_1110]);
    }

    #[test]
    fn test_blank_keeps_index() {
        let buf = DisplayBuffer::new(4);
        let mut refresher = DisplayRefresher::new(
            RecordingOutput::default(),
            &config(DisplayPolarity::CommonAnode),
        );

        refresher.tick(&buf).unwrap();
        refresher.blank().unwrap();
        assert_eq!(refresher.index(), 1);

        let output = refresher.release();
        assert_eq!(output.frames[1], [0xFF, 0xFF]);
    }

    #[test]
    fn test_brightness_passthrough() {
        let mut refresher = DisplayRefresher::new(
            RecordingOutput::default(),
            &config(DisplayPolarity::CommonCathode),
        );
        refresher.set_brightness(50);
        assert_eq!(refresher.brightness(), 50);
        assert_eq!(refresher.slot_timing(), SlotTiming { on_us: 1_000, off_us: 1_000 });
        assert_eq!(refresher.refresh_delay_us(), 2_000);
    }
}
