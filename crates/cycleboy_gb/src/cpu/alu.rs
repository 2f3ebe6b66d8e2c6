use super::{Cpu, Flag};

/// Half-carry out of bit 3 and carry out of bit 7 for `a + b + carry`.
#[inline]
fn add_carries(a: u8, b: u8, carry: u8) -> (u8, bool, bool) {
    let (partial, c1) = a.overflowing_add(b);
    let (sum, c2) = partial.overflowing_add(carry);
    let half = (a & 0x0F) + (b & 0x0F) + carry > 0x0F;
    (sum, half, c1 || c2)
}

/// Borrow out of bit 4 and bit 8 for `a - b - carry`.
#[inline]
fn sub_borrows(a: u8, b: u8, carry: u8) -> (u8, bool, bool) {
    let (partial, b1) = a.overflowing_sub(b);
    let (diff, b2) = partial.overflowing_sub(carry);
    let half = (a & 0x0F) < (b & 0x0F) + carry;
    (diff, half, b1 || b2)
}

impl Cpu {
    /// Replace all four flags at once.
    #[inline]
    fn write_flags(&mut self, z: bool, n: bool, h: bool, c: bool) {
        let f = (u8::from(z) << 7) | (u8::from(n) << 6) | (u8::from(h) << 5) | (u8::from(c) << 4);
        self.regs.set_f(f);
    }

    #[inline]
    fn carry_bit(&self) -> u8 {
        u8::from(self.get_flag(Flag::C))
    }

    /// ADD (`with_carry == false`) or ADC into A.
    pub(super) fn alu_add(&mut self, value: u8, with_carry: bool) {
        let carry = if with_carry { self.carry_bit() } else { 0 };
        let (sum, half, full) = add_carries(self.regs.a, value, carry);
        self.regs.a = sum;
        self.write_flags(sum == 0, false, half, full);
    }

    /// SUB (`with_carry == false`) or SBC into A.
    pub(super) fn alu_sub(&mut self, value: u8, with_carry: bool) {
        self.regs.a = self.subtract(value, with_carry);
    }

    /// Flags of `A - value`; A is left alone.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        self.subtract(value, false);
    }

    fn subtract(&mut self, value: u8, with_carry: bool) -> u8 {
        let carry = if with_carry { self.carry_bit() } else { 0 };
        let (diff, half, borrow) = sub_borrows(self.regs.a, value, carry);
        self.write_flags(diff == 0, true, half, borrow);
        diff
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        self.regs.a &= value;
        self.write_flags(self.regs.a == 0, false, true, false);
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        self.regs.a |= value;
        self.write_flags(self.regs.a == 0, false, false, false);
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        self.regs.a ^= value;
        self.write_flags(self.regs.a == 0, false, false, false);
    }

    /// BCD correction of A after an add or subtract.
    ///
    /// N is kept, H always ends clear and C can only be set, never cleared.
    pub(super) fn alu_daa(&mut self) {
        let subtract = self.get_flag(Flag::N);
        let mut carry = self.get_flag(Flag::C);
        let half = self.get_flag(Flag::H);
        let a = self.regs.a;

        let mut correction = 0u8;
        if half || (!subtract && a & 0x0F > 0x09) {
            correction |= 0x06;
        }
        if carry || (!subtract && a > 0x99) {
            correction |= 0x60;
            carry = true;
        }

        let a = if subtract {
            a.wrapping_sub(correction)
        } else {
            a.wrapping_add(correction)
        };
        self.regs.a = a;
        self.write_flags(a == 0, subtract, false, carry);
    }

    pub(super) fn alu_cpl(&mut self) {
        self.regs.a = !self.regs.a;
        let (z, c) = (self.get_flag(Flag::Z), self.get_flag(Flag::C));
        self.write_flags(z, true, true, c);
    }

    pub(super) fn alu_scf(&mut self) {
        let z = self.get_flag(Flag::Z);
        self.write_flags(z, false, false, true);
    }

    pub(super) fn alu_ccf(&mut self) {
        let (z, c) = (self.get_flag(Flag::Z), self.get_flag(Flag::C));
        self.write_flags(z, false, false, !c);
    }

    /// INC r / INC (HL). C is preserved.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        let c = self.get_flag(Flag::C);
        self.write_flags(result == 0, false, value & 0x0F == 0x0F, c);
        result
    }

    /// DEC r / DEC (HL). C is preserved.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        let c = self.get_flag(Flag::C);
        self.write_flags(result == 0, true, value & 0x0F == 0, c);
        result
    }

    /// ADD HL,rr: Z preserved, H and C out of bits 11 and 15.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let (sum, carry) = hl.overflowing_add(value);
        let half = (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF;
        let z = self.get_flag(Flag::Z);
        self.write_flags(z, false, half, carry);
        self.regs.set_hl(sum);
    }

    /// `base + (imm8 as i8)` for ADD SP,r8 and LD HL,SP+r8.
    ///
    /// H and C come from the unsigned low-byte addition; Z and N end clear.
    #[inline]
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let (_, half, carry) = add_carries(base as u8, imm8, 0);
        self.write_flags(false, false, half, carry);
        base.wrapping_add_signed(i16::from(imm8 as i8))
    }

    #[inline]
    fn shifted(&mut self, result: u8, carry_out: bool) -> u8 {
        self.write_flags(result == 0, false, false, carry_out);
        result
    }

    pub(super) fn alu_rlc(&mut self, value: u8) -> u8 {
        self.shifted(value.rotate_left(1), value & 0x80 != 0)
    }

    pub(super) fn alu_rrc(&mut self, value: u8) -> u8 {
        self.shifted(value.rotate_right(1), value & 0x01 != 0)
    }

    /// Rotate left through carry.
    pub(super) fn alu_rl(&mut self, value: u8) -> u8 {
        let result = (value << 1) | self.carry_bit();
        self.shifted(result, value & 0x80 != 0)
    }

    /// Rotate right through carry.
    pub(super) fn alu_rr(&mut self, value: u8) -> u8 {
        let result = (value >> 1) | (self.carry_bit() << 7);
        self.shifted(result, value & 0x01 != 0)
    }

    pub(super) fn alu_sla(&mut self, value: u8) -> u8 {
        self.shifted(value << 1, value & 0x80 != 0)
    }

    pub(super) fn alu_sra(&mut self, value: u8) -> u8 {
        self.shifted(((value as i8) >> 1) as u8, value & 0x01 != 0)
    }

    pub(super) fn alu_srl(&mut self, value: u8) -> u8 {
        self.shifted(value >> 1, value & 0x01 != 0)
    }

    pub(super) fn alu_swap(&mut self, value: u8) -> u8 {
        self.shifted(value.rotate_left(4), false)
    }

    /// BIT b,r: C preserved.
    pub(super) fn alu_bit(&mut self, bit: u8, value: u8) {
        let c = self.get_flag(Flag::C);
        self.write_flags(value & (1 << bit) == 0, false, true, c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_for_add_and_sub() {
        assert_eq!(add_carries(0x0F, 0x01, 0), (0x10, true, false));
        assert_eq!(add_carries(0xFF, 0x00, 1), (0x00, true, true));
        assert_eq!(sub_borrows(0x10, 0x01, 0), (0x0F, true, false));
        assert_eq!(sub_borrows(0x00, 0x00, 1), (0xFF, true, true));
    }

    #[test]
    fn daa_after_bcd_add() {
        let mut cpu = Cpu::default();
        cpu.regs.a = 0x45;
        cpu.alu_add(0x38, false);
        cpu.alu_daa();
        assert_eq!(cpu.regs.a, 0x83);
        assert!(!cpu.get_flag(Flag::C));

        cpu.regs.a = 0x99;
        cpu.alu_add(0x01, false);
        cpu.alu_daa();
        assert_eq!(cpu.regs.a, 0x00);
        assert!(cpu.get_flag(Flag::Z));
        assert!(cpu.get_flag(Flag::C));
    }

    #[test]
    fn daa_after_bcd_sub() {
        let mut cpu = Cpu::default();
        cpu.regs.a = 0x42;
        cpu.alu_sub(0x15, false);
        cpu.alu_daa();
        assert_eq!(cpu.regs.a, 0x27);
        assert!(cpu.get_flag(Flag::N));
        assert!(!cpu.get_flag(Flag::H));
    }

    #[test]
    fn sra_keeps_sign_bit() {
        let mut cpu = Cpu::default();
        assert_eq!(cpu.alu_sra(0x81), 0xC0);
        assert!(cpu.get_flag(Flag::C));
    }

    #[test]
    fn signed_add_uses_low_byte_carries() {
        let mut cpu = Cpu::default();
        assert_eq!(cpu.alu_add16_signed(0xFFF8, 0x08), 0x0000);
        assert!(cpu.get_flag(Flag::H));
        assert!(cpu.get_flag(Flag::C));
        assert_eq!(cpu.alu_add16_signed(0x0000, 0xFF), 0xFFFF);
        assert!(!cpu.get_flag(Flag::H));
        assert!(!cpu.get_flag(Flag::C));
    }
}
