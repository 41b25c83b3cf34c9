//! Interrupt, sleep and power-reduction control for the ATtiny85.

use crate::{BUTTON_PIN, DATA_PIN, MCUCR_IO};
use avr_device::attiny85::{CPU, EXINT, PORTB};
use core::arch::asm;
use holo_ornament::PowerControl;

/// MCUCR sleep enable.
const MCUCR_SE: u8 = 1 << 5;
/// MCUCR sleep mode select bits SM1:SM0.
const MCUCR_SM_MASK: u8 = 0b11 << 3;
/// SM1:SM0 = 10, power-down.
const MCUCR_SM_POWER_DOWN: u8 = 0b10 << 3;

/// GIMSK pin-change interrupt enable.
const GIMSK_PCIE: u8 = 1 << 5;

/// PRR bits for Timer1, Timer0, USI and ADC.
const PRR_ALL_OFF: u8 = 0b1111;

/// The processor's power controls, owning the registers they write.
pub struct Attiny85Power {
    cpu: CPU,
    exint: EXINT,
    portb: PORTB,
}

impl Attiny85Power {
    pub fn new(cpu: CPU, exint: EXINT, portb: PORTB) -> Self {
        Self { cpu, exint, portb }
    }
}

impl PowerControl for Attiny85Power {
    fn configure(&mut self) {
        let data = 1 << DATA_PIN;

        // Data pin drives the strip; everything else is an input. Pull-ups on
        // every input keep floating pins from burning current, and hold the
        // button high until pressed.
        self.portb.ddrb.modify(|r, w| unsafe { w.bits(r.bits() | data) });
        self.portb.portb.modify(|r, w| unsafe { w.bits((r.bits() | !data) & 0x3f) });

        // Button edges in either direction raise PCINT0.
        self.exint
            .pcmsk
            .modify(|r, w| unsafe { w.bits(r.bits() | (1 << BUTTON_PIN)) });
        self.exint
            .gimsk
            .modify(|r, w| unsafe { w.bits(r.bits() | GIMSK_PCIE) });

        // Only an interrupt may end sleep.
        self.cpu.mcucr.modify(|r, w| unsafe {
            w.bits((r.bits() & !MCUCR_SM_MASK) | MCUCR_SM_POWER_DOWN)
        });

        // Nothing here uses the ADC, USI or either timer.
        self.cpu.prr.modify(|r, w| unsafe { w.bits(r.bits() | PRR_ALL_OFF) });
    }

    fn disable_interrupts(&mut self) {
        avr_device::interrupt::disable();
    }

    fn enable_interrupts(&mut self) {
        // SAFETY: the only handler is PCINT0, which touches nothing but the
        // mode cell, and that is guarded by a critical section.
        unsafe { avr_device::interrupt::enable() };
    }

    fn arm_sleep(&mut self) {
        self.cpu.mcucr.modify(|r, w| unsafe { w.bits(r.bits() | MCUCR_SE) });
    }

    fn suspend(&mut self) {
        // BODS must be written within four cycles of setting BODS|BODSE and
        // only lasts three cycles, and `sei` takes effect after the following
        // instruction, so `sleep` always executes before any pending handler.
        unsafe {
            asm!(
                "in {tmp}, {mcucr}",
                "ori {tmp}, 0x84",
                "out {mcucr}, {tmp}",
                "andi {tmp}, 0xfb",
                "out {mcucr}, {tmp}",
                "sei",
                "sleep",
                mcucr = const MCUCR_IO,
                tmp = out(reg_upper) _,
                options(nostack),
            );
        }
    }

    fn disarm_sleep(&mut self) {
        self.cpu.mcucr.modify(|r, w| unsafe { w.bits(r.bits() & !MCUCR_SE) });
    }
}
