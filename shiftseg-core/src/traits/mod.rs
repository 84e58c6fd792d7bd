//! Hardware abstraction traits
//!
//! These traits define the interface between the display logic
//! and hardware-specific implementations.

pub mod output;

pub use output::FrameOutput;
