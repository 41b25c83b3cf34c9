//! Frame-by-frame driver for the LED strip.
//!
//! Provides [`ColorSequencer`], which owns the strip, the frame delay and one
//! [`LedFade`] per LED, and defines the [`LedStrip`] trait the strip hardware
//! is reached through.

use crate::fade::{LedFade, phase_offset};
use crate::types::{FRAME_DELAY_MS, LedColor};
use embedded_hal::delay::DelayNs;

/// Trait for abstracting the addressable LED strip.
///
/// Implement this for your strip driver to let the sequencer push frames to
/// it. See [`SmartLedsStrip`](crate::strip::SmartLedsStrip) for an adapter
/// over any `smart-leds` driver.
pub trait LedStrip {
    /// Sends one color per LED, in strip order, as a single frame.
    ///
    /// The strip latches only after it has seen the whole slice. Handle any
    /// hardware errors internally - this method cannot fail.
    fn write(&mut self, colors: &[LedColor]);
}

/// Drives `N` LEDs through a phase-shifted hue rotation.
///
/// At construction LED `i` starts at red level
/// `MAX_COMP_VAL / N * i`, heading toward the red corner, so the LEDs chase
/// each other around the color wheel instead of blinking in sync.
///
/// # Type Parameters
/// * `S` - LED strip implementation type
/// * `D` - Blocking delay used between frames
/// * `N` - Number of LEDs on the strip
pub struct ColorSequencer<S: LedStrip, D: DelayNs, const N: usize> {
    strip: S,
    delay: D,
    leds: [LedFade; N],
    frame_delay_ms: u32,
}

impl<S: LedStrip, D: DelayNs, const N: usize> ColorSequencer<S, D, N> {
    /// Creates a sequencer with evenly staggered LEDs and the default frame delay.
    pub fn new(strip: S, delay: D) -> Self {
        Self {
            strip,
            delay,
            leds: core::array::from_fn(|i| LedFade::with_red_offset(phase_offset(i, N))),
            frame_delay_ms: FRAME_DELAY_MS,
        }
    }

    /// Overrides how long each frame is held.
    pub fn with_frame_delay(mut self, millis: u32) -> Self {
        self.frame_delay_ms = millis;
        self
    }

    /// Runs one animation frame.
    ///
    /// Pushes the current colors to the strip, blocks for the frame delay,
    /// then moves every LED one step along its fade. The delay is a busy
    /// wait: nothing else runs until it returns.
    pub fn step(&mut self) {
        let frame = self.colors();
        self.strip.write(&frame);

        self.delay.delay_ms(self.frame_delay_ms);

        self.advance_all();
    }

    #[cfg(feature = "defmt")]
    fn advance_all(&mut self) {
        for (index, led) in self.leds.iter_mut().enumerate() {
            if led.advance() {
                defmt::trace!("led {} now fading toward {}", index, led.target());
            }
        }
    }

    #[cfg(not(feature = "defmt"))]
    fn advance_all(&mut self) {
        for led in self.leds.iter_mut() {
            led.advance();
        }
    }

    /// Current color of every LED, in strip order.
    pub fn colors(&self) -> [LedColor; N] {
        self.leds.map(|led| led.color())
    }

    /// Fade state of every LED, in strip order.
    pub fn leds(&self) -> &[LedFade; N] {
        &self.leds
    }

    /// Frame delay in milliseconds.
    pub fn frame_delay_ms(&self) -> u32 {
        self.frame_delay_ms
    }

    /// Returns a reference to the strip.
    pub fn strip(&self) -> &S {
        &self.strip
    }

    /// Returns a reference to the delay provider.
    pub fn delay(&self) -> &D {
        &self.delay
    }
}
