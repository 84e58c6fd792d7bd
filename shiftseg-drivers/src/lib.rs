//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in shiftseg-core:
//!
//! - Bit-banged shift register chain (DATA / CLOCK / STROBE over GPIO)
//! - Display refresher (scheduler + polarity + output)
//! - Seven segment display facade for single-context (polling) use

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod output;

#[cfg(test)]
pub(crate) mod mock;
