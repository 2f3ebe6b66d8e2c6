use crate::cpu::helpers::HL_INDIRECT;
use crate::cpu::{Bus, Cpu, Flag};
use crate::Cycles;

impl Cpu {
    pub(super) fn exec_alu_reg_group<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Cycles {
        debug_assert!((0x80..=0xBF).contains(&opcode));
        let operation = (opcode >> 3) & 0x07;
        let src = opcode & 0x07;
        let value = self.read_reg8(bus, src);

        self.alu_dispatch(operation, value);

        // A memory operand costs one extra bus access over a register.
        if src == HL_INDIRECT {
            Cycles(8)
        } else {
            Cycles(4)
        }
    }

    pub(super) fn exec_alu_imm<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Cycles {
        debug_assert!(matches!(
            opcode,
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE
        ));
        let value = self.fetch8(bus);
        self.alu_dispatch((opcode >> 3) & 0x07, value);
        Cycles(8)
    }

    fn alu_dispatch(&mut self, operation: u8, value: u8) {
        match operation {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            7 => self.alu_cp(value),
            _ => unreachable!(),
        }
    }

    /// RLCA/RRCA/RLA/RRA.
    ///
    /// Same rotation as the CB-prefixed forms, but Z is always cleared.
    pub(super) fn exec_rotate_a(&mut self, opcode: u8) -> Cycles {
        let a = self.regs.a;
        self.regs.a = match opcode {
            0x07 => self.alu_rlc(a),
            0x0F => self.alu_rrc(a),
            0x17 => self.alu_rl(a),
            0x1F => self.alu_rr(a),
            _ => unreachable!(),
        };
        self.set_flag(Flag::Z, false);
        Cycles(4)
    }

    pub(super) fn exec_add_hl_rr(&mut self, opcode: u8) -> Cycles {
        debug_assert!(matches!(opcode, 0x09 | 0x19 | 0x29 | 0x39));
        let value = self.read_rp((opcode >> 4) & 0x03);
        self.alu_add16_hl(value);
        Cycles(8)
    }

    pub(super) fn exec_add_sp_r8<B: Bus>(&mut self, bus: &mut B) -> Cycles {
        let imm = self.fetch8(bus);
        self.regs.sp = self.alu_add16_signed(self.regs.sp, imm);
        Cycles(16)
    }

    pub(super) fn exec_ld_hl_sp_r8<B: Bus>(&mut self, bus: &mut B) -> Cycles {
        let imm = self.fetch8(bus);
        let result = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.set_hl(result);
        Cycles(12)
    }

    pub(super) fn exec_daa(&mut self) -> Cycles {
        self.alu_daa();
        Cycles(4)
    }

    pub(super) fn exec_cpl(&mut self) -> Cycles {
        self.alu_cpl();
        Cycles(4)
    }

    pub(super) fn exec_scf(&mut self) -> Cycles {
        self.alu_scf();
        Cycles(4)
    }

    pub(super) fn exec_ccf(&mut self) -> Cycles {
        self.alu_ccf();
        Cycles(4)
    }
}
