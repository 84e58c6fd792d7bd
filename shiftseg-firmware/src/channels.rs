//! State shared between tasks

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use shiftseg_core::buffer::SharedDisplay;

use crate::board::DISPLAY_CONFIG;

/// Digits shown by the refresh task, written by the application
pub static DISPLAY: SharedDisplay<CriticalSectionRawMutex> =
    SharedDisplay::new(DISPLAY_CONFIG.digit_count);
