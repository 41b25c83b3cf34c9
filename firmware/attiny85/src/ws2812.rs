//! Bit-banged WS2812 output on PB1.
//!
//! At 8 MHz a nominal WS2812 bit is only ten cycles, so each byte is clocked
//! out by a hand-counted assembly loop with interrupts masked for the whole
//! frame.

use crate::{DATA_PIN, PORTB_IO};
use core::arch::asm;
use core::convert::Infallible;
use embedded_hal::delay::DelayNs;
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

/// Low time that makes the strip latch a frame, with margin for newer parts.
const LATCH_US: u32 = 300;

/// WS2812 chain on PB1. PB1 must already be an output.
pub struct Ws2812<D: DelayNs> {
    delay: D,
}

impl<D: DelayNs> Ws2812<D> {
    pub fn new(delay: D) -> Self {
        Self { delay }
    }

    /// Clocks out one byte, MSB first.
    ///
    /// A 0-bit is high for 3 cycles (375 ns), a 1-bit for 7 (875 ns). The
    /// low tail stretches each bit to 13-14 cycles, well inside the reset
    /// threshold.
    #[inline(always)]
    fn write_byte(byte: u8) {
        // SAFETY: touches only PB1 of PORTB; interrupts are masked by the caller.
        unsafe {
            asm!(
                "2:",
                "sbi {port}, {pin}",
                "sbrs {byte}, 7",
                "cbi {port}, {pin}",
                "lsl {byte}",
                "nop",
                "nop",
                "cbi {port}, {pin}",
                "nop",
                "dec {bits}",
                "brne 2b",
                port = const PORTB_IO,
                pin = const DATA_PIN,
                byte = inout(reg) byte => _,
                bits = inout(reg) 8u8 => _,
                options(nostack),
            );
        }
    }
}

impl<D: DelayNs> SmartLedsWrite for Ws2812<D> {
    type Error = Infallible;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        avr_device::interrupt::free(|_| {
            for item in iterator {
                let pixel: RGB8 = item.into();
                // Wire order is green, red, blue
                Self::write_byte(pixel.g);
                Self::write_byte(pixel.r);
                Self::write_byte(pixel.b);
            }
        });

        self.delay.delay_us(LATCH_US);
        Ok(())
    }
}
