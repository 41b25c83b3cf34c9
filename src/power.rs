//! Active/sleep power state machine.
//!
//! The mode lives in a [`ModeCell`] shared between the button interrupt and
//! the main loop. The interrupt only ever calls [`ModeCell::toggle`]; every
//! other decision is made by [`PowerController::run_iteration`] in the main
//! loop, with interrupts masked around the read so a button edge cannot slip
//! in between reading `Sleeping` and halting.

use crate::types::Mode;
use core::cell::Cell;
use critical_section::Mutex;

/// Interrupt-safe storage for the current [`Mode`].
///
/// Meant to be placed in a `static` so the interrupt handler and the main
/// loop can both reach it. Every access runs inside a critical section.
pub struct ModeCell {
    mode: Mutex<Cell<Mode>>,
}

impl ModeCell {
    /// Creates a cell holding `initial`.
    pub const fn new(initial: Mode) -> Self {
        Self {
            mode: Mutex::new(Cell::new(initial)),
        }
    }

    /// Reads the current mode.
    pub fn get(&self) -> Mode {
        critical_section::with(|cs| self.mode.borrow(cs).get())
    }

    /// Flips the mode and returns the new value.
    ///
    /// This is the whole job of the button interrupt handler.
    pub fn toggle(&self) -> Mode {
        critical_section::with(|cs| {
            let cell = self.mode.borrow(cs);
            let next = cell.get().toggled();
            cell.set(next);
            next
        })
    }
}

impl Default for ModeCell {
    fn default() -> Self {
        Self::new(Mode::Active)
    }
}

/// Trait for abstracting the processor's interrupt and sleep controls.
///
/// Implement this for your microcontroller. All operations are infallible.
pub trait PowerControl {
    /// One-time setup at startup.
    ///
    /// Selects the lowest-power sleep mode, gates unused peripherals, pulls
    /// up unused pins and the button, and arms the button's level-change
    /// interrupt as a wake source.
    fn configure(&mut self);

    /// Masks interrupts globally. Idempotent.
    fn disable_interrupts(&mut self);

    /// Unmasks interrupts globally. Idempotent.
    fn enable_interrupts(&mut self);

    /// Sets the sleep-enable latch.
    fn arm_sleep(&mut self);

    /// Disables brown-out detection, unmasks interrupts and halts, as one
    /// sequence that cannot be split by an interrupt.
    ///
    /// Interrupts must only be delivered after the halt instruction has
    /// executed, so an edge already pending when this is called wakes the
    /// processor immediately instead of being serviced before the halt and
    /// leaving the processor asleep.
    fn suspend(&mut self);

    /// Clears the sleep-enable latch after waking.
    fn disarm_sleep(&mut self);
}

/// Runs the per-iteration mode decision of the main loop.
pub struct PowerController<'m, P: PowerControl> {
    power: P,
    mode: &'m ModeCell,
}

impl<'m, P: PowerControl> PowerController<'m, P> {
    /// Configures the hardware once and binds it to the shared mode.
    pub fn new(mut power: P, mode: &'m ModeCell) -> Self {
        power.configure();
        Self { power, mode }
    }

    /// Runs one main-loop decision.
    ///
    /// Masks interrupts and reads the mode. When `Active`, interrupts are
    /// unmasked before `on_active` runs. When `Sleeping`, the processor is
    /// armed, suspended until the next button edge, and disarmed on wake.
    /// Interrupts are always unmasked again on the way out.
    ///
    /// Returns the mode that was acted on.
    pub fn run_iteration<F: FnOnce()>(&mut self, on_active: F) -> Mode {
        self.power.disable_interrupts();

        let mode = self.mode.get();
        match mode {
            Mode::Active => {
                self.power.enable_interrupts();
                on_active();
            }
            Mode::Sleeping => self.sleep(),
        }

        self.power.enable_interrupts();
        mode
    }

    /// Halts until a wake interrupt. Interrupts must be masked on entry.
    fn sleep(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::debug!("entering power-down");

        self.power.arm_sleep();
        self.power.suspend();
        self.power.disarm_sleep();

        #[cfg(feature = "defmt")]
        defmt::debug!("woke from power-down");
    }

    /// Current mode, read from the shared cell.
    pub fn mode(&self) -> Mode {
        self.mode.get()
    }

    /// Returns a reference to the hardware controls.
    pub fn hardware(&self) -> &P {
        &self.power
    }
}
