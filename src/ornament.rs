//! Main loop tying the power controller to the color sequencer.

use crate::power::{PowerControl, PowerController};
use crate::sequencer::{ColorSequencer, LedStrip};
use crate::types::Mode;
use embedded_hal::delay::DelayNs;

/// The whole ornament: one power controller gating one color sequencer.
///
/// # Type Parameters
/// * `'m` - Lifetime of the shared mode cell
/// * `P` - Power control implementation type
/// * `S` - LED strip implementation type
/// * `D` - Blocking delay used between frames
/// * `N` - Number of LEDs on the strip
pub struct Ornament<'m, P: PowerControl, S: LedStrip, D: DelayNs, const N: usize> {
    power: PowerController<'m, P>,
    sequencer: ColorSequencer<S, D, N>,
    last_mode: Option<Mode>,
}

impl<'m, P: PowerControl, S: LedStrip, D: DelayNs, const N: usize> Ornament<'m, P, S, D, N> {
    /// Creates the ornament from an already configured power controller.
    pub fn new(power: PowerController<'m, P>, sequencer: ColorSequencer<S, D, N>) -> Self {
        Self {
            power,
            sequencer,
            last_mode: None,
        }
    }

    /// Runs one loop iteration and returns the mode it ran in.
    ///
    /// In `Active` mode this is one sequencer frame; in `Sleeping` mode the
    /// call returns only after the processor has been woken.
    pub fn run_once(&mut self) -> Mode {
        let sequencer = &mut self.sequencer;
        let mode = self.power.run_iteration(|| sequencer.step());

        if self.last_mode != Some(mode) {
            #[cfg(feature = "defmt")]
            defmt::info!("mode: {}", mode);
            self.last_mode = Some(mode);
        }

        mode
    }

    /// Runs the loop forever.
    pub fn run(&mut self) -> ! {
        loop {
            self.run_once();
        }
    }

    /// Returns a reference to the power controller.
    pub fn power(&self) -> &PowerController<'m, P> {
        &self.power
    }

    /// Returns a reference to the color sequencer.
    pub fn sequencer(&self) -> &ColorSequencer<S, D, N> {
        &self.sequencer
    }
}
