use crate::cpu::{Bus, Cpu};
use crate::Cycles;

impl Cpu {
    pub(super) fn exec_push_rr<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Cycles {
        debug_assert!(matches!(opcode, 0xC5 | 0xD5 | 0xE5 | 0xF5));

        let value = match (opcode >> 4) & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl(),
            3 => self.regs.af(),
            _ => unreachable!(),
        };

        self.push_u16(bus, value);
        Cycles(16)
    }

    pub(super) fn exec_pop_rr<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Cycles {
        debug_assert!(matches!(opcode, 0xC1 | 0xD1 | 0xE1 | 0xF1));

        let value = self.pop_u16(bus);
        match (opcode >> 4) & 0x03 {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.regs.set_hl(value),
            // POP AF goes through the masking setter.
            3 => self.regs.set_af(value),
            _ => unreachable!(),
        }

        Cycles(12)
    }

    pub(super) fn exec_rst<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Cycles {
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = (opcode & 0x38) as u16;
        Cycles(16)
    }

    pub(super) fn exec_ret<B: Bus>(&mut self, bus: &mut B) -> Cycles {
        self.regs.pc = self.pop_u16(bus);
        Cycles(16)
    }

    /// RETI enables IME immediately, without the EI delay.
    pub(super) fn exec_reti<B: Bus>(&mut self, bus: &mut B) -> Cycles {
        self.regs.pc = self.pop_u16(bus);
        bus.interrupts_mut().set_ime(true);
        Cycles(16)
    }
}
