//! ATtiny85 board support for the ornament.
//!
//! Pin map:
//! - PB0: push-button to ground, internal pull-up, pin-change interrupt PCINT0
//! - PB1: WS2812 data out
//! - PB2..PB5: unused, inputs with pull-ups
//!
//! Runs on the 8 MHz internal oscillator with the CKDIV8 fuse cleared.

#![no_std]
#![feature(asm_experimental_arch)]

pub mod delay;
pub mod power;
pub mod ws2812;

pub use delay::BusyDelay;
pub use power::Attiny85Power;
pub use ws2812::Ws2812;

/// Core clock in Hz.
pub const CPU_HZ: u32 = 8_000_000;

/// PORTB bit of the button input.
pub(crate) const BUTTON_PIN: u8 = 0;

/// PORTB bit of the WS2812 data line.
pub(crate) const DATA_PIN: u8 = 1;

/// I/O-space address of PORTB, for `sbi`/`cbi`.
pub(crate) const PORTB_IO: u8 = 0x18;

/// I/O-space address of MCUCR, for `in`/`out`.
pub(crate) const MCUCR_IO: u8 = 0x35;
