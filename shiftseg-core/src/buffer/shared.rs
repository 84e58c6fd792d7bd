//! Display buffer shared between execution contexts
//!
//! The application writes the buffer while the refresh loop (a task or a
//! timer interrupt) reads it. Writes happen inside one critical section per
//! update and the refresher works from a copied snapshot, so it never sees
//! a half-written number.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use super::DisplayBuffer;

/// Display buffer behind a blocking mutex
///
/// Use `CriticalSectionRawMutex` when the refresher runs in an interrupt,
/// `NoopRawMutex` when everything runs in one context.
pub struct SharedDisplay<M: RawMutex> {
    inner: Mutex<M, RefCell<DisplayBuffer>>,
}

impl<M: RawMutex> SharedDisplay<M> {
    /// Create a blank shared buffer (usable in a `static`)
    pub const fn new(digit_count: u8) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(DisplayBuffer::new(digit_count))),
        }
    }

    /// Modify the buffer inside a single critical section
    ///
    /// The closure must not call back into this `SharedDisplay`.
    pub fn update<R>(&self, f: impl FnOnce(&mut DisplayBuffer) -> R) -> R {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }

    /// Copy of the complete buffer
    pub fn snapshot(&self) -> DisplayBuffer {
        self.inner.lock(|cell| *cell.borrow())
    }

    pub fn digit_count(&self) -> u8 {
        self.inner.lock(|cell| cell.borrow().digit_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::DigitValue;
    use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, NoopRawMutex};

    static SHARED: SharedDisplay<CriticalSectionRawMutex> = SharedDisplay::new(4);

    #[test]
    fn test_static_update_and_snapshot() {
        SHARED.update(|buf| {
            buf.set_digit(0, DigitValue::new(1));
            buf.set_digit(3, DigitValue::new(9));
            buf.set_decimal_point(2, true);
        });

        let snapshot = SHARED.snapshot();
        assert_eq!(snapshot.digit(0), DigitValue::new(1));
        assert_eq!(snapshot.digit(3), DigitValue::new(9));
        assert!(snapshot.decimal_point(2));
        assert_eq!(SHARED.digit_count(), 4);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let shared: SharedDisplay<NoopRawMutex> = SharedDisplay::new(2);
        let before = shared.snapshot();

        shared.update(|buf| buf.set_digit(1, DigitValue::new(5)));

        assert_eq!(before.digit(1), DigitValue::BLANK);
        assert_eq!(shared.snapshot().digit(1), DigitValue::new(5));
    }

    #[test]
    fn test_update_returns_value() {
        let shared: SharedDisplay<NoopRawMutex> = SharedDisplay::new(3);
        let count = shared.update(|buf| buf.digits().len());
        assert_eq!(count, 3);
    }
}
