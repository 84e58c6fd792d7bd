//! Frame output implementations

pub mod shift_register;

pub use shift_register::ShiftRegisterChain;
