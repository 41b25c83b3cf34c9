//! Core types shared by the power controller and the color sequencer.

use palette::Srgb;

/// Largest value any color component may hold.
pub const MAX_COMP_VAL: u8 = 128;

/// Number of LEDs on the ornament.
pub const NUM_LEDS: usize = 4;

/// Time each frame is held before the fade advances, in milliseconds.
pub const FRAME_DELAY_MS: u32 = 256;

/// One LED's color. Every component stays within `0..=MAX_COMP_VAL`.
pub type LedColor = Srgb<u8>;

/// All components zero.
pub const LED_OFF: LedColor = Srgb::new(0, 0, 0);

/// Operating mode of the ornament. Starts out [`Mode::Active`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Processor halted until the next button edge.
    Sleeping,

    /// Light show running.
    #[default]
    Active,
}

impl Mode {
    /// Returns the opposite mode.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Mode::Sleeping => Mode::Active,
            Mode::Active => Mode::Sleeping,
        }
    }
}

/// The hue corner an LED's color is currently moving toward.
///
/// Each target raises one component and lowers the one belonging to the
/// previous corner, so at most two components are ever lit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FadeTarget {
    /// Red rises, blue falls.
    #[default]
    Red,

    /// Green rises, red falls.
    Green,

    /// Blue rises, green falls.
    Blue,
}

impl FadeTarget {
    /// Next corner in the Red -> Green -> Blue -> Red cycle.
    #[inline]
    pub fn next(self) -> Self {
        match self {
            FadeTarget::Red => FadeTarget::Green,
            FadeTarget::Green => FadeTarget::Blue,
            FadeTarget::Blue => FadeTarget::Red,
        }
    }
}
