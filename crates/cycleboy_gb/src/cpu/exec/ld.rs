use crate::cpu::helpers::HL_INDIRECT;
use crate::cpu::{Bus, Cpu};
use crate::Cycles;

impl Cpu {
    pub(super) fn exec_ld_rr_d16<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Cycles {
        debug_assert!(matches!(opcode, 0x01 | 0x11 | 0x21 | 0x31));

        let value = self.fetch16(bus);
        self.write_rp((opcode >> 4) & 0x03, value);
        Cycles(12)
    }

    pub(super) fn exec_ld_r_d8<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Cycles {
        let reg = (opcode >> 3) & 0x07;
        let value = self.fetch8(bus);
        self.write_reg8(bus, reg, value);

        if reg == HL_INDIRECT {
            Cycles(12)
        } else {
            Cycles(8)
        }
    }

    pub(super) fn exec_ld_a16_sp<B: Bus>(&mut self, bus: &mut B) -> Cycles {
        let addr = self.fetch16(bus);
        bus.write16(addr, self.regs.sp);
        Cycles(20)
    }

    pub(super) fn exec_ldh_a8<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Cycles {
        debug_assert!(matches!(opcode, 0xE0 | 0xF0));

        let offset = self.fetch8(bus) as u16;
        let addr = 0xFF00 | offset;
        match opcode {
            0xE0 => bus.write8(addr, self.regs.a),
            0xF0 => self.regs.a = bus.read8(addr),
            _ => unreachable!(),
        }
        Cycles(12)
    }

    pub(super) fn exec_ldh_c<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Cycles {
        debug_assert!(matches!(opcode, 0xE2 | 0xF2));

        let addr = 0xFF00 | self.regs.c as u16;
        match opcode {
            0xE2 => bus.write8(addr, self.regs.a),
            0xF2 => self.regs.a = bus.read8(addr),
            _ => unreachable!(),
        }
        Cycles(8)
    }

    pub(super) fn exec_ld_a16_a<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Cycles {
        debug_assert!(matches!(opcode, 0xEA | 0xFA));

        let addr = self.fetch16(bus);
        match opcode {
            0xEA => bus.write8(addr, self.regs.a),
            0xFA => self.regs.a = bus.read8(addr),
            _ => unreachable!(),
        }
        Cycles(16)
    }

    /// Address operand of `LD (rr),A` / `LD A,(rr)`; the HL forms step HL.
    fn indirect_addr(&mut self, opcode: u8) -> u16 {
        match (opcode >> 4) & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hli(),
            3 => self.regs.hld(),
            _ => unreachable!(),
        }
    }

    pub(super) fn exec_ld_indirect_a<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Cycles {
        debug_assert!(matches!(opcode, 0x02 | 0x12 | 0x22 | 0x32));

        let addr = self.indirect_addr(opcode);
        bus.write8(addr, self.regs.a);
        Cycles(8)
    }

    pub(super) fn exec_ld_a_indirect<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Cycles {
        debug_assert!(matches!(opcode, 0x0A | 0x1A | 0x2A | 0x3A));

        let addr = self.indirect_addr(opcode);
        self.regs.a = bus.read8(addr);
        Cycles(8)
    }

    pub(super) fn exec_ld_r_r<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Cycles {
        debug_assert!((0x40..=0x7F).contains(&opcode) && opcode != 0x76);

        let dst = (opcode >> 3) & 0x07;
        let src = opcode & 0x07;
        let value = self.read_reg8(bus, src);
        self.write_reg8(bus, dst, value);

        if dst == HL_INDIRECT || src == HL_INDIRECT {
            Cycles(8)
        } else {
            Cycles(4)
        }
    }

    pub(super) fn exec_ld_sp_hl(&mut self) -> Cycles {
        self.regs.sp = self.regs.hl();
        Cycles(8)
    }
}
