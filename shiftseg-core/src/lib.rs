//! Board-agnostic core logic for the shift-register display firmware
//!
//! This crate contains all display logic that does not depend on
//! specific hardware implementations:
//!
//! - Segment and digit-select encoding
//! - Display buffer and its interrupt-safe shared wrapper
//! - Number formatting (integer, float, text, temperature)
//! - Multiplex scheduler (one digit per refresh tick)
//! - Configuration type definitions
//! - Frame output trait implemented by hardware drivers

#![no_std]
#![deny(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod encoding;
pub mod format;
pub mod scheduler;
pub mod traits;
