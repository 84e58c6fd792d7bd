//! Display drivers
//!
//! - Refresher: scheduler + polarity + frame output, reads a buffer it does
//!   not own (used with a shared buffer from a periodic task)
//! - Seven segment display: owns buffer, formatter and refresher for
//!   single-context (polling) use

pub mod refresher;
pub mod seven_segment;

pub use refresher::DisplayRefresher;
pub use seven_segment::SevenSegmentDisplay;
