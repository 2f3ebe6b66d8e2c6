use crate::Cycles;

use super::helpers::HL_INDIRECT;
use super::{Bus, Cpu};

impl Cpu {
    /// Handle CB-prefixed instructions (bit operations, shifts, and rotates).
    ///
    /// Returns the cost of the operation alone; `exec_opcode` adds the 4
    /// cycles of the prefix fetch. Totals are 8 for a register operand, 16
    /// for (HL) and 12 for `BIT b,(HL)`, which does not write back.
    pub(super) fn step_cb<B: Bus>(&mut self, bus: &mut B) -> Cycles {
        let cb = self.fetch8(bus);
        let x = cb >> 6;
        let y = (cb >> 3) & 0x07;
        let z = cb & 0x07;

        let value = self.read_reg8(bus, z);
        let result = match x {
            // Rotates and shifts.
            0 => match y {
                0 => self.alu_rlc(value),
                1 => self.alu_rrc(value),
                2 => self.alu_rl(value),
                3 => self.alu_rr(value),
                4 => self.alu_sla(value),
                5 => self.alu_sra(value),
                6 => self.alu_swap(value),
                7 => self.alu_srl(value),
                _ => unreachable!(),
            },
            // BIT b, r
            1 => {
                self.alu_bit(y, value);
                return if z == HL_INDIRECT {
                    Cycles(8)
                } else {
                    Cycles(4)
                };
            }
            // RES b, r
            2 => value & !(1 << y),
            // SET b, r
            3 => value | (1 << y),
            _ => unreachable!(),
        };

        self.write_reg8(bus, z, result);
        if z == HL_INDIRECT {
            Cycles(12)
        } else {
            Cycles(4)
        }
    }
}
