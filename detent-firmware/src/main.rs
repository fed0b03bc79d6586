//! Detent demo firmware
//!
//! Polls a rotary knob (quadrature encoder + push button) on an RP2040
//! and reports the decoded events over defmt. The encoder phases and the
//! button sit on the chip's internal pull-ups; the inputs are expected to
//! be hardware-debounced (RC filter or Schmitt-trigger board).

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::{Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

use detent_drivers::Knob;
use detent_hal::Pull;
use detent_hal_rp2040::RpInput;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // Encoder phases A/B and the switch, all active-low on pull-ups
    let a = RpInput::new(p.PIN_2, Pull::Up);
    let b = RpInput::new(p.PIN_3, Pull::Up);
    let button = RpInput::new(p.PIN_4, Pull::Up);

    let mut knob = Knob::new(a, b, button);

    info!("knob demo up, polling at 1 kHz");

    // Poll faster than the shortest phase pulse a hand-spun encoder
    // produces; 1 ms leaves plenty of margin
    let mut ticker = Ticker::every(Duration::from_millis(1));
    loop {
        ticker.next().await;
        knob.poll();

        let steps = knob.take_steps();
        if steps != 0 {
            info!("encoder: {=i32} steps", steps);
        }
        if knob.take_button_rising() {
            info!("button: pressed");
        }
        if knob.take_button_falling() {
            info!("button: released");
        }
    }
}
