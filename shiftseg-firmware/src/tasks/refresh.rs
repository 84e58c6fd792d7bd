//! Display refresh task
//!
//! Latches one digit per slot period. Below full brightness the digit is
//! blanked for the rest of the slot.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::{Delay, Duration, Ticker, Timer};
use shiftseg_drivers::display::DisplayRefresher;
use shiftseg_drivers::output::ShiftRegisterChain;

use crate::channels::DISPLAY;

/// Shift register chain on three RP2040 outputs
pub type DisplayChain = ShiftRegisterChain<Output<'static>, Delay>;

#[embassy_executor::task]
pub async fn refresh_task(mut refresher: DisplayRefresher<DisplayChain>) {
    let timing = refresher.slot_timing();
    info!(
        "Refresh task started: slot={}us on={}us off={}us",
        refresher.refresh_delay_us(),
        timing.on_us,
        timing.off_us
    );

    let mut ticker = Ticker::every(Duration::from_micros(refresher.refresh_delay_us() as u64));
    let on_time = Duration::from_micros(timing.on_us as u64);

    loop {
        let buffer = DISPLAY.snapshot();
        if let Err(e) = refresher.tick(&buffer) {
            match e {}
        }

        if timing.off_us > 0 {
            Timer::after(on_time).await;
            if let Err(e) = refresher.blank() {
                match e {}
            }
        }

        ticker.next().await;
    }
}
