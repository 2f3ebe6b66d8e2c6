//! Timer / divider unit.
//!
//! DIV is the upper byte of a free-running 16-bit counter, so it increments
//! once every 256 T-cycles. TIMA runs off its own accumulator while TAC bit 2
//! is set, at the period selected by TAC[1:0]. Time only moves through
//! [`Timer::step`]; the register helpers in `io` never advance it.

mod io;

use crate::interrupts::{Interrupt, InterruptController};
use crate::Cycles;

pub(super) struct Timer {
    /// Hidden system counter; DIV exposes bits 15:8.
    counter: u16,
    /// T-cycles accumulated towards the next TIMA increment.
    tima_acc: u32,
    tima: u8,
    tma: u8,
    /// TAC, lower 3 bits.
    tac: u8,
}

impl Timer {
    pub(super) fn new() -> Self {
        Self {
            counter: 0,
            tima_acc: 0,
            tima: 0,
            tma: 0,
            tac: 0,
        }
    }

    /// State at PC=0x0100 after the boot ROM: DIV reads 0xAB.
    pub(super) fn init_post_boot(&mut self) {
        *self = Self::new();
        self.counter = 0xABCC;
    }

    #[inline]
    fn enabled(&self) -> bool {
        (self.tac & 0x04) != 0
    }

    /// T-cycles per TIMA increment for the current TAC clock select.
    ///
    /// 00 → 4096 Hz, 01 → 262144 Hz, 10 → 65536 Hz, 11 → 16384 Hz.
    #[inline]
    fn period(&self) -> u32 {
        match self.tac & 0x03 {
            0x00 => 1024,
            0x01 => 16,
            0x02 => 64,
            _ => 256,
        }
    }

    pub(super) fn step(&mut self, cycles: Cycles, interrupts: &mut InterruptController) {
        let t = cycles.t();
        self.counter = self.counter.wrapping_add(t as u16);

        if !self.enabled() {
            return;
        }

        self.tima_acc += t;
        let period = self.period();
        while self.tima_acc >= period {
            self.tima_acc -= period;
            self.increment_tima(interrupts);
        }
    }

    /// Overflow reloads from TMA and requests INT $50 in the same step.
    fn increment_tima(&mut self, interrupts: &mut InterruptController) {
        let (next, overflow) = self.tima.overflowing_add(1);
        if overflow {
            self.tima = self.tma;
            interrupts.request_interrupt(Interrupt::Timer);
            log::trace!("timer: TIMA overflow, reloaded 0x{:02X}", self.tma);
        } else {
            self.tima = next;
        }
    }
}
