//! Shared test infrastructure for holo-ornament integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use embedded_hal::delay::DelayNs;
use holo_ornament::{LedColor, LedStrip, ModeCell, PowerControl};

// ============================================================================
// Mock LED Strip
// ============================================================================

/// Mock strip that records every frame it is sent
pub struct MockStrip {
    frames: heapless::Vec<heapless::Vec<LedColor, 8>, 64>,
    writes: usize,
}

impl MockStrip {
    pub fn new() -> Self {
        Self {
            frames: heapless::Vec::new(),
            writes: 0,
        }
    }

    /// Total number of frames written, including ones beyond the history capacity
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// First frames written, oldest first
    pub fn frames(&self) -> &[heapless::Vec<LedColor, 8>] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&[LedColor]> {
        self.frames.last().map(|frame| frame.as_slice())
    }
}

impl LedStrip for MockStrip {
    fn write(&mut self, colors: &[LedColor]) {
        self.writes += 1;
        let mut frame = heapless::Vec::new();
        for color in colors {
            let _ = frame.push(*color);
        }
        let _ = self.frames.push(frame);
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Mock busy-wait that adds up requested time and can fire button edges
/// while it is "waiting"
pub struct MockDelay<'m> {
    total_ms: u64,
    calls: u32,
    mode: Option<&'m ModeCell>,
    edges_during_next_delay: Cell<u32>,
}

impl<'m> MockDelay<'m> {
    pub fn new() -> Self {
        Self {
            total_ms: 0,
            calls: 0,
            mode: None,
            edges_during_next_delay: Cell::new(0),
        }
    }

    /// A delay whose scheduled button edges toggle `mode`, as the real
    /// interrupt handler would while the main loop is busy-waiting
    pub fn with_button(mode: &'m ModeCell) -> Self {
        Self {
            mode: Some(mode),
            ..Self::new()
        }
    }

    pub fn schedule_edge_during_next_delay(&self) {
        self.edges_during_next_delay
            .set(self.edges_during_next_delay.get() + 1);
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ms
    }

    pub fn calls(&self) -> u32 {
        self.calls
    }
}

impl DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ms += u64::from(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.calls += 1;
        self.total_ms += u64::from(ms);

        if let Some(mode) = self.mode {
            for _ in 0..self.edges_during_next_delay.replace(0) {
                mode.toggle();
            }
        }
    }
}

// ============================================================================
// Mock Power Control
// ============================================================================

/// Calls made on the power hardware, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerEvent {
    Configure,
    DisableInterrupts,
    EnableInterrupts,
    ArmSleep,
    Suspend,
    DisarmSleep,
}

/// Mock processor that models interrupt masking, edge latching and
/// wake-from-sleep.
///
/// Button edges that arrive while interrupts are masked stay pending and
/// toggle the mode cell as soon as interrupts are unmasked. `suspend`
/// delivers pending edges only after the halt, the way a combined
/// unmask-and-halt behaves; a suspend with nothing pending and nothing
/// scheduled while asleep would never return on real hardware and is
/// counted as a missed wake.
pub struct MockPower<'m> {
    mode: &'m ModeCell,
    events: heapless::Vec<PowerEvent, 256>,
    masked: bool,
    sleep_armed: bool,
    pending_edges: u32,
    edges_on_arm: Cell<u32>,
    edges_while_asleep: Cell<u32>,
    wakes: u32,
    missed_wakes: u32,
    suspended_while_unmasked: bool,
    suspended_while_disarmed: bool,
}

impl<'m> MockPower<'m> {
    pub fn new(mode: &'m ModeCell) -> Self {
        Self {
            mode,
            events: heapless::Vec::new(),
            masked: false,
            sleep_armed: false,
            pending_edges: 0,
            edges_on_arm: Cell::new(0),
            edges_while_asleep: Cell::new(0),
            wakes: 0,
            missed_wakes: 0,
            suspended_while_unmasked: false,
            suspended_while_disarmed: false,
        }
    }

    /// Schedule a button edge to land after the mode has been read as
    /// `Sleeping` but before the processor halts
    pub fn schedule_edge_before_halt(&self) {
        self.edges_on_arm.set(self.edges_on_arm.get() + 1);
    }

    /// Schedule a button edge to land while the processor is halted
    pub fn schedule_edge_while_asleep(&self) {
        self.edges_while_asleep.set(self.edges_while_asleep.get() + 1);
    }

    pub fn events(&self) -> &[PowerEvent] {
        &self.events
    }

    pub fn count(&self, event: PowerEvent) -> usize {
        self.events.iter().filter(|e| **e == event).count()
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }

    pub fn is_sleep_armed(&self) -> bool {
        self.sleep_armed
    }

    pub fn wakes(&self) -> u32 {
        self.wakes
    }

    pub fn missed_wakes(&self) -> u32 {
        self.missed_wakes
    }

    pub fn suspended_while_unmasked(&self) -> bool {
        self.suspended_while_unmasked
    }

    pub fn suspended_while_disarmed(&self) -> bool {
        self.suspended_while_disarmed
    }

    fn record(&mut self, event: PowerEvent) {
        let _ = self.events.push(event);
    }

    fn deliver_pending(&mut self) {
        for _ in 0..self.pending_edges {
            self.mode.toggle();
        }
        self.pending_edges = 0;
    }
}

impl PowerControl for MockPower<'_> {
    fn configure(&mut self) {
        self.record(PowerEvent::Configure);
    }

    fn disable_interrupts(&mut self) {
        self.masked = true;
        self.record(PowerEvent::DisableInterrupts);
    }

    fn enable_interrupts(&mut self) {
        self.masked = false;
        self.deliver_pending();
        self.record(PowerEvent::EnableInterrupts);
    }

    fn arm_sleep(&mut self) {
        self.sleep_armed = true;
        self.pending_edges += self.edges_on_arm.replace(0);
        self.record(PowerEvent::ArmSleep);
    }

    fn suspend(&mut self) {
        self.record(PowerEvent::Suspend);
        if !self.masked {
            self.suspended_while_unmasked = true;
        }
        if !self.sleep_armed {
            self.suspended_while_disarmed = true;
        }

        // The halt has executed; interrupts are now open.
        self.masked = false;
        self.pending_edges += self.edges_while_asleep.replace(0);

        if self.pending_edges == 0 {
            self.missed_wakes += 1;
        } else {
            self.wakes += 1;
            self.deliver_pending();
        }
    }

    fn disarm_sleep(&mut self) {
        self.sleep_armed = false;
        self.record(PowerEvent::DisarmSleep);
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Number of non-zero components
pub fn lit_components(color: LedColor) -> usize {
    [color.red, color.green, color.blue]
        .iter()
        .filter(|c| **c > 0)
        .count()
}
