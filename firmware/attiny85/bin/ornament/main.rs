#![no_std]
#![no_main]
#![feature(abi_avr_interrupt)]

use panic_halt as _;

use attiny85_ornament::{Attiny85Power, BusyDelay, Ws2812};
use holo_ornament::{
    ColorSequencer, Mode, ModeCell, NUM_LEDS, Ornament, PowerController, SmartLedsStrip,
};

/// Shared with the pin-change handler. Starts with the light show running.
static MODE: ModeCell = ModeCell::new(Mode::Active);

/// Button edge, pressed or released.
#[avr_device::interrupt(attiny85)]
fn PCINT0() {
    MODE.toggle();
}

#[avr_device::entry]
fn main() -> ! {
    let dp = avr_device::attiny85::Peripherals::take().unwrap();

    let power = PowerController::new(Attiny85Power::new(dp.CPU, dp.EXINT, dp.PORTB), &MODE);

    let strip = SmartLedsStrip::new(Ws2812::new(BusyDelay));
    let sequencer: ColorSequencer<_, _, NUM_LEDS> = ColorSequencer::new(strip, BusyDelay);

    // Interrupts are still masked from reset; the first iteration opens them.
    Ornament::new(power, sequencer).run()
}
