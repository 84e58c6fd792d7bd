//! Configuration types
//!
//! Display configuration is set once at initialization and never changes
//! afterwards (brightness is the only runtime knob, and it lives in the
//! scheduler).

pub mod timing;
pub mod types;

pub use timing::{PulseTiming, MIN_PULSE_NS};
pub use types::{
    ConfigError, DisplayConfig, DisplayPolarity, SignStyle, DEFAULT_SLOT_PERIOD_US, MAX_DIGITS,
    MIN_REFRESH_HZ,
};
