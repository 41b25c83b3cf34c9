#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Mode`**: `Active` (light show running) or `Sleeping` (processor halted)
//! - **`ModeCell`**: Interrupt-safe home of the current mode; the button interrupt only toggles it
//! - **`PowerControl`**: Trait to implement for your microcontroller's interrupt and sleep controls
//! - **`PowerController`**: Masks, reads, and either runs a frame or sleeps, once per loop
//! - **`LedFade`**: One LED's color and the hue corner it is fading toward
//! - **`ColorSequencer`**: Pushes a frame, waits, and advances every LED one fade step
//! - **`LedStrip`**: Trait to implement for your LED strip driver
//! - **`SmartLedsStrip`**: `LedStrip` adapter over any `smart-leds` driver
//! - **`Ornament`**: The main loop tying the two together
//!
//! Colors are `Srgb<u8>` with every component in `0..=MAX_COMP_VAL`.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod types;
pub mod fade;
pub mod sequencer;
pub mod power;
pub mod ornament;
pub mod strip;

pub use fade::{LedFade, phase_offset};
pub use ornament::Ornament;
pub use power::{ModeCell, PowerControl, PowerController};
pub use sequencer::{ColorSequencer, LedStrip};
pub use strip::SmartLedsStrip;
pub use types::{FRAME_DELAY_MS, FadeTarget, LED_OFF, LedColor, MAX_COMP_VAL, Mode, NUM_LEDS};
