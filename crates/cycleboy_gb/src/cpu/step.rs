use crate::Cycles;

use super::{Bus, Cpu, PowerState};

impl Cpu {
    /// Execute one machine step and return the number of T-cycles it took.
    ///
    /// A step is exactly one of:
    /// - nothing, on a hard-locked core (0 cycles);
    /// - a 4-cycle stall while DMA owns the bus (no fetch, no interrupts);
    /// - an interrupt wake and/or dispatch;
    /// - a 4-cycle idle slice while halted or stopped;
    /// - one fetched and executed instruction.
    ///
    /// The caller is responsible for advancing the timer and the other
    /// peripherals by the returned amount.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Cycles {
        if self.locked {
            // CPU has executed an opcode hole. On hardware the CPU is dead
            // until power-off; we report no progress so that driving loops
            // can detect the condition and stop.
            return Cycles::ZERO;
        }

        if bus.cpu_blocked() {
            return Cycles::MCYCLE;
        }

        if let Some(cycles) = self.handle_interrupts(bus) {
            return cycles;
        }

        if self.power != PowerState::Running {
            return Cycles::MCYCLE;
        }

        // EI takes effect here, one instruction after it executed.
        bus.interrupts_mut().activate_pending_ime();

        let opcode = self.fetch8(bus);
        self.exec_opcode(bus, opcode)
    }
}
