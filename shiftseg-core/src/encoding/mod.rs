//! Pure lookups from display values to register bytes
//!
//! Segment bit order (canonical, active-high):
//!
//! ```text
//!    bit:  7  6 5 4 3 2 1 0
//!    seg: DP  G F E D C B A
//!
//!      AAA
//!     F   B
//!      GGG
//!     E   C
//!      DDD  .DP
//! ```

pub mod digit_select;
pub mod segment;
pub mod value;

pub use digit_select::DigitSelect;
pub use segment::{encode, SegmentPattern};
pub use value::DigitValue;
