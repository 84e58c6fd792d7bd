//! Number and text formatting into the display buffer
//!
//! All operations saturate instead of failing: values that do not fit are
//! clamped to the largest magnitude the display can show, and characters
//! without a glyph render blank.

pub mod formatter;

pub use formatter::NumberFormatter;
