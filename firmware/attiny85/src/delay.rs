//! Busy-wait delay for the frame hold and the strip latch.

use crate::CPU_HZ;
use core::arch::asm;
use embedded_hal::delay::DelayNs;

/// Cost of one pass of [`spin`]: `sbiw` (2 cycles) plus a taken `brne` (2 cycles).
const CYCLES_PER_SPIN: u32 = 4;

/// Passes of [`spin`] per millisecond at `CPU_HZ`.
const SPINS_PER_MS: u16 = (CPU_HZ / 1_000 / CYCLES_PER_SPIN) as u16;

/// Nanoseconds covered by one pass of [`spin`].
const NS_PER_SPIN: u32 = 1_000_000_000 / CPU_HZ * CYCLES_PER_SPIN;

// A millisecond must fit one 16-bit countdown and land on whole passes.
const _: () = assert!(CPU_HZ / 1_000 / CYCLES_PER_SPIN <= u16::MAX as u32);
const _: () = assert!(SPINS_PER_MS as u32 * CYCLES_PER_SPIN == CPU_HZ / 1_000);
const _: () = assert!(NS_PER_SPIN as u64 * CPU_HZ as u64 == 1_000_000_000 * CYCLES_PER_SPIN as u64);

/// Counts `spins` down to zero in a register pair, four cycles per pass.
#[inline(always)]
fn spin(spins: u16) {
    // `sbiw` on zero would wrap and spin 65536 times
    if spins == 0 {
        return;
    }
    // SAFETY: touches only the counter register pair and SREG flags.
    unsafe {
        asm!(
            "1:",
            "sbiw {n}, 1",
            "brne 1b",
            n = inout(reg_iw) spins => _,
            options(nomem, nostack),
        );
    }
}

/// Cycle-counting delay. Needs no timer, so both timers can stay gated off.
///
/// Interrupts stay enabled while it spins; a button edge is serviced by its
/// handler and the wait carries on, stretched by the handler's few cycles.
#[derive(Debug, Clone, Copy, Default)]
pub struct BusyDelay;

impl DelayNs for BusyDelay {
    fn delay_ns(&mut self, ns: u32) {
        let mut remaining = ns / NS_PER_SPIN;
        while remaining > 0 {
            let chunk = u16::try_from(remaining).unwrap_or(u16::MAX);
            spin(chunk);
            remaining -= u32::from(chunk);
        }
    }

    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            spin(SPINS_PER_MS);
        }
    }
}
