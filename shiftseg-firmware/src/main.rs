//! Shiftseg - Multiplexed 7-Segment Display Firmware
//!
//! Drives a multi-digit LED display through two cascaded shift registers
//! on an RP2040. Display type, digit count and pins are set in
//! display.toml and checked at build time.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_time::Delay;
use shiftseg_drivers::display::DisplayRefresher;
use shiftseg_drivers::output::ShiftRegisterChain;
use {defmt_rtt as _, panic_probe as _};

#[macro_use]
mod board;
mod channels;
mod tasks;

use board::DISPLAY_CONFIG;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Shiftseg firmware starting...");

    let config = DISPLAY_CONFIG;
    unwrap!(config.validate());
    info!(
        "Display: {} digits, {}, refresh {} Hz",
        config.digit_count,
        config.polarity,
        config.refresh_rate_hz()
    );

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Pin numbers from display.toml
    let (data, clock, strobe) = display_pins!(p);
    let chain = unwrap!(ShiftRegisterChain::new(
        Output::new(data, Level::Low),
        Output::new(clock, Level::Low),
        Output::new(strobe, Level::Low),
        Delay,
        config.timing,
    ));

    let mut refresher = DisplayRefresher::new(chain, &config);
    // Nothing lit until the first refresh
    unwrap!(refresher.blank());
    info!("Shift registers initialized");

    spawner.spawn(tasks::refresh_task(refresher)).unwrap();
    spawner.spawn(tasks::counter_task()).unwrap();

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
