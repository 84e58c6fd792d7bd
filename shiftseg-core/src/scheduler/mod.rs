//! Multiplex scheduler
//!
//! Produces one frame (segment byte + digit select byte) per refresh tick,
//! cycling through the digits. The scheduler has no timer of its own; the
//! caller decides the cadence and can use the advisory slot timing to
//! approximate brightness.

pub mod frame;
pub mod multiplexer;

pub use frame::Frame;
pub use multiplexer::{Multiplexer, SlotTiming};
