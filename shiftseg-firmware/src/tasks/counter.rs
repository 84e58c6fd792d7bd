//! Demo counter task
//!
//! Counts up once per second and wraps after the largest value the
//! display can show.

use defmt::*;
use embassy_time::{Duration, Ticker};
use shiftseg_core::format::NumberFormatter;

use crate::board::DISPLAY_CONFIG;
use crate::channels::DISPLAY;

/// Count interval in milliseconds
pub const COUNT_INTERVAL_MS: u64 = 1000;

#[embassy_executor::task]
pub async fn counter_task() {
    let formatter = NumberFormatter::from_config(&DISPLAY_CONFIG);
    let limit = 10i32.pow(DISPLAY_CONFIG.digit_count as u32);
    info!("Counter task started (0..{})", limit - 1);

    let mut ticker = Ticker::every(Duration::from_millis(COUNT_INTERVAL_MS));
    let mut count = 0;

    loop {
        DISPLAY.update(|buf| formatter.set_integer(buf, count, 0));
        trace!("Count {}", count);

        count = (count + 1) % limit;
        ticker.next().await;
    }
}
