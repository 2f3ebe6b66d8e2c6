use crate::Cycles;

use super::super::{Bus, Cpu, PowerState};

impl Cpu {
    /// Check `IE & IF` at an instruction boundary.
    ///
    /// - Any pending source wakes a halted or stopped CPU (one M-cycle),
    ///   whether or not IME is set.
    /// - With IME set, the highest-priority source is dispatched (20 cycles).
    ///
    /// Returns `None` when neither happened, so the caller goes on to fetch.
    pub(in crate::cpu) fn handle_interrupts<B: Bus>(&mut self, bus: &mut B) -> Option<Cycles> {
        let interrupt = bus.interrupts().highest_pending()?;

        let mut cycles = Cycles::ZERO;
        if self.power != PowerState::Running {
            log::trace!(
                "GB CPU wake from {:?} on {:?} at PC=0x{:04X}",
                self.power,
                interrupt,
                self.regs.pc
            );
            self.power = PowerState::Running;
            cycles += Cycles::MCYCLE;
        }

        if bus.interrupts().ime() {
            cycles += self.service_interrupt(bus, interrupt);
        }

        (!cycles.is_zero()).then_some(cycles)
    }
}
