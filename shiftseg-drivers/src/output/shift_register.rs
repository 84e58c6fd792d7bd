//! Bit-banged shift register chain
//!
//! Two 8-bit serial-in / parallel-out registers (HEF4094B, 74HC595 or
//! similar) share CLOCK and STROBE; the first register's serial output feeds
//! the second. Three GPIO lines drive the whole chain:
//!
//! ```text
//!  MCU DATA ──► [ near: digit select ] ──► [ far: segments A-G, DP ]
//!  MCU CLOCK ──────────┴──────────────────────────┘
//!  MCU STROBE ─────────┴──────────────────────────┘
//! ```
//!
//! # Protocol
//!
//! 16 bits, MSB first: the segment byte goes out first so it travels to the
//! far register, then the digit select byte. Each bit is put on DATA and
//! clocked in with a CLOCK high pulse. A single STROBE pulse then copies the
//! shift stage to the outputs, so half-shifted data never reaches the LEDs.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};
use shiftseg_core::config::PulseTiming;
use shiftseg_core::traits::FrameOutput;

/// Cascaded shift register pair driven over three GPIO lines
pub struct ShiftRegisterChain<P, D> {
    data: P,
    clock: P,
    strobe: P,
    delay: D,
    timing: PulseTiming,
}

impl<P: OutputPin, D: DelayNs> ShiftRegisterChain<P, D> {
    /// Take ownership of the three lines and drive them low
    pub fn new(
        mut data: P,
        mut clock: P,
        mut strobe: P,
        delay: D,
        timing: PulseTiming,
    ) -> Result<Self, P::Error> {
        data.set_low()?;
        clock.set_low()?;
        strobe.set_low()?;

        Ok(Self {
            data,
            clock,
            strobe,
            delay,
            timing,
        })
    }

    pub fn timing(&self) -> &PulseTiming {
        &self.timing
    }

    /// Shift one byte into the chain, MSB first (outputs unchanged)
    pub fn shift_byte(&mut self, byte: u8) -> Result<(), P::Error> {
        for bit in (0..8).rev() {
            let high = (byte >> bit) & 1 == 1;
            self.data.set_state(PinState::from(high))?;
            wait(&mut self.delay, self.timing.data_setup_ns);

            self.clock.set_high()?;
            wait(&mut self.delay, self.timing.clock_high_ns);
            self.clock.set_low()?;
        }
        Ok(())
    }

    /// Copy the shift stage to the register outputs
    pub fn latch(&mut self) -> Result<(), P::Error> {
        self.strobe.set_high()?;
        wait(&mut self.delay, self.timing.strobe_high_ns);
        self.strobe.set_low()
    }

    /// Give back the pins and delay
    pub fn release(self) -> (P, P, P, D) {
        (self.data, self.clock, self.strobe, self.delay)
    }
}

impl<P: OutputPin, D: DelayNs> FrameOutput for ShiftRegisterChain<P, D> {
    type Error = P::Error;

    fn transmit(&mut self, segments: u8, select: u8) -> Result<(), Self::Error> {
        self.shift_byte(segments)?;
        self.shift_byte(select)?;
        self.latch()
    }
}

fn wait<D: DelayNs>(delay: &mut D, ns: u32) {
    if ns > 0 {
        delay.delay_ns(ns);
    }
}
