//! Test doubles shared by the driver tests

use core::cell::RefCell;
use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use heapless::Vec;
use shiftseg_core::traits::FrameOutput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Data,
    Clock,
    Strobe,
}

/// Two cascaded 8-bit shift registers with a shared clock and strobe
#[derive(Debug, Default)]
pub struct Wire {
    pub data: bool,
    pub clock: bool,
    pub strobe: bool,
    /// Shift stage; the first bit shifted in ends up at bit 15
    pub shift: u16,
    /// Latched outputs: high byte = far register, low byte = near register
    pub outputs: u16,
    pub clock_pulses: u32,
    pub strobe_pulses: u32,
}

impl Wire {
    fn drive(&mut self, line: Line, high: bool) {
        match line {
            Line::Data => self.data = high,
            Line::Clock => {
                if high && !self.clock {
                    self.shift = (self.shift << 1) | self.data as u16;
                    self.clock_pulses += 1;
                }
                self.clock = high;
            }
            Line::Strobe => {
                if high && !self.strobe {
                    self.outputs = self.shift;
                    self.strobe_pulses += 1;
                }
                self.strobe = high;
            }
        }
    }

    /// Byte latched into the register furthest down the chain
    pub fn far_byte(&self) -> u8 {
        (self.outputs >> 8) as u8
    }

    /// Byte latched into the register nearest the MCU
    pub fn near_byte(&self) -> u8 {
        self.outputs as u8
    }
}

/// GPIO line connected to the mock wire
pub struct MockPin<'a> {
    line: Line,
    wire: &'a RefCell<Wire>,
}

impl<'a> MockPin<'a> {
    pub fn new(line: Line, wire: &'a RefCell<Wire>) -> Self {
        Self { line, wire }
    }

    /// DATA, CLOCK and STROBE pins on one wire
    pub fn triple(wire: &'a RefCell<Wire>) -> (Self, Self, Self) {
        (
            Self::new(Line::Data, wire),
            Self::new(Line::Clock, wire),
            Self::new(Line::Strobe, wire),
        )
    }
}

impl ErrorType for MockPin<'_> {
    type Error = Infallible;
}

impl OutputPin for MockPin<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.wire.borrow_mut().drive(self.line, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.wire.borrow_mut().drive(self.line, true);
        Ok(())
    }
}

/// Delay that only records how long it was asked to wait
#[derive(Debug, Default)]
pub struct MockDelay {
    pub total_ns: u64,
    pub calls: u32,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
        self.calls += 1;
    }
}

/// Frame output that records every transmitted byte pair
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub frames: Vec<[u8; 2], 64>,
}

impl FrameOutput for RecordingOutput {
    type Error = Infallible;

    fn transmit(&mut self, segments: u8, select: u8) -> Result<(), Self::Error> {
        // Tests never send more than the capacity
        let _ = self.frames.push([segments, select]);
        Ok(())
    }
}
