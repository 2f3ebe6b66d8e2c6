use crate::interrupts::Interrupt;
use crate::Cycles;

use super::super::{Bus, Cpu};

impl Cpu {
    /// Interrupt entry: clear IME and the IF bit, push PC and jump to the
    /// source's vector. Only one source is serviced per call; the remainder
    /// stay latched in IF for the next boundary.
    pub(in crate::cpu) fn service_interrupt<B: Bus>(
        &mut self,
        bus: &mut B,
        interrupt: Interrupt,
    ) -> Cycles {
        let interrupts = bus.interrupts_mut();
        interrupts.set_ime(false);
        interrupts.reset_interrupt(interrupt);

        let pc = self.regs.pc;
        self.push_u16(bus, pc);
        self.regs.pc = interrupt.vector();

        log::debug!(
            "GB CPU interrupt: {:?} vector=0x{:04X} pc=0x{:04X} sp=0x{:04X} IF=0x{:02X} IE=0x{:02X}",
            interrupt,
            interrupt.vector(),
            pc,
            self.regs.sp,
            bus.interrupts().read_if(),
            bus.interrupts().read_ie(),
        );

        Cycles(20)
    }
}
