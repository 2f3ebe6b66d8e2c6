use crate::cpu::{Bus, Cpu, PowerState};
use crate::Cycles;

impl Cpu {
    pub(super) fn exec_halt<B: Bus>(&mut self, bus: &mut B) -> Cycles {
        let interrupts = bus.interrupts();
        if !interrupts.ime() && interrupts.has_pending() {
            // HALT bug: with IME clear and an interrupt already pending the
            // CPU does not halt, and the next opcode fetch does not
            // increment PC. Halted is never entered, so there is no 4-cycle
            // wake slice either; the next step executes straight away.
            log::trace!("GB CPU HALT bug at PC=0x{:04X}", self.regs.pc);
            self.halt_bug = true;
            return Cycles(4);
        }

        self.power = PowerState::Halted;
        Cycles(4)
    }

    pub(super) fn exec_stop<B: Bus>(&mut self, bus: &mut B) -> Cycles {
        // STOP is officially a 2-byte instruction; the second byte is
        // conventionally 0 and ignored. We always fetch and discard it so
        // that PC matches hardware.
        let _padding = self.fetch8(bus);

        // CGB speed switch: with KEY1's "prepare" latch set, STOP toggles
        // double speed instead of entering the low-power state.
        if bus.speed_switch() {
            self.power = PowerState::Running;
            return Cycles(4);
        }

        self.power = PowerState::Stopped;
        Cycles(4)
    }

    pub(super) fn exec_di<B: Bus>(&mut self, bus: &mut B) -> Cycles {
        bus.interrupts_mut().set_ime(false);
        Cycles(4)
    }

    pub(super) fn exec_ei<B: Bus>(&mut self, bus: &mut B) -> Cycles {
        // IME becomes 1 only after the *next* instruction.
        bus.interrupts_mut().schedule_ime();
        Cycles(4)
    }
}
