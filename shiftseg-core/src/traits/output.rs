//! Frame output trait

/// Sink for multiplex frames
///
/// Implementations push two bytes into the register chain and latch them
/// onto the outputs together. The bytes are already in wire polarity.
pub trait FrameOutput {
    /// Error raised by the underlying hardware
    type Error;

    /// Shift out the segment byte, then the digit select byte, then latch
    fn transmit(&mut self, segments: u8, select: u8) -> Result<(), Self::Error>;
}

impl<T: FrameOutput + ?Sized> FrameOutput for &mut T {
    type Error = T::Error;

    fn transmit(&mut self, segments: u8, select: u8) -> Result<(), Self::Error> {
        (**self).transmit(segments, select)
    }
}
