use super::*;
use crate::interrupts::{Interrupt, InterruptController};
use crate::Cycles;

struct TestBus {
    memory: Box<[u8; 0x10000]>,
    interrupts: InterruptController,
    blocked: bool,
}

impl Default for TestBus {
    fn default() -> Self {
        Self {
            memory: Box::new([0; 0x10000]),
            interrupts: InterruptController::new(),
            blocked: false,
        }
    }
}

impl TestBus {
    /// Place `program` at `addr`.
    fn load(&mut self, addr: u16, program: &[u8]) {
        let start = addr as usize;
        self.memory[start..start + program.len()].copy_from_slice(program);
    }
}

impl Bus for TestBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }

    fn interrupts(&self) -> &InterruptController {
        &self.interrupts
    }

    fn interrupts_mut(&mut self) -> &mut InterruptController {
        &mut self.interrupts
    }

    fn cpu_blocked(&self) -> bool {
        self.blocked
    }
}

fn cpu_at(pc: u16) -> Cpu {
    let mut cpu = Cpu::new();
    cpu.regs.pc = pc;
    cpu.regs.sp = 0xFFFE;
    cpu
}

#[test]
fn nop_advances_pc() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();
    bus.load(0x0000, &[0x00]);

    let cycles = cpu.step(&mut bus);

    assert_eq!(cpu.regs.pc, 0x0001);
    assert_eq!(cycles, Cycles(4));
}

#[test]
fn call_and_ret_round_trip() {
    let mut cpu = cpu_at(0x0153);
    let mut bus = TestBus::default();
    // 0x0153: CALL 0x0157
    // 0x0157: RET
    bus.load(0x0153, &[0xCD, 0x57, 0x01]);
    bus.load(0x0157, &[0xC9]);

    let cycles = cpu.step(&mut bus);
    assert_eq!(cycles, Cycles(24));
    assert_eq!(cpu.regs.pc, 0x0157);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    // Return address 0x0156, high byte on top.
    assert_eq!(bus.memory[0xFFFD], 0x01);
    assert_eq!(bus.memory[0xFFFC], 0x56);

    let cycles = cpu.step(&mut bus);
    assert_eq!(cycles, Cycles(16));
    assert_eq!(cpu.regs.pc, 0x0156);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn conditional_branches_cost_less_when_not_taken() {
    let mut cpu = cpu_at(0x0100);
    let mut bus = TestBus::default();
    // JR NZ,+2 ; JP Z,0x0000 ; CALL Z,0x0000 ; RET Z
    bus.load(0x0100, &[0x20, 0x02, 0x00, 0x00]);
    bus.load(0x0104, &[0xCA, 0x00, 0x00, 0xCC, 0x00, 0x00, 0xC8]);

    assert_eq!(cpu.step(&mut bus), Cycles(12));
    assert_eq!(cpu.regs.pc, 0x0104);
    assert_eq!(cpu.step(&mut bus), Cycles(12));
    assert_eq!(cpu.step(&mut bus), Cycles(12));
    assert_eq!(cpu.step(&mut bus), Cycles(8));
    assert_eq!(cpu.regs.pc, 0x010B);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn daa_after_add_and_sub() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();
    // ADD A,B ; DAA ; SUB B ; DAA
    bus.load(0x0000, &[0x80, 0x27, 0x90, 0x27]);
    cpu.regs.a = 0x45;
    cpu.regs.b = 0x38;

    cpu.step(&mut bus);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x83);
    assert_eq!(cpu.regs.f(), 0x00);

    cpu.step(&mut bus);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x45);
    assert_eq!(cpu.regs.f(), Flag::N.mask());
}

#[test]
fn push_and_pop_af_masks_low_flags() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();
    // PUSH BC ; POP DE ; POP AF
    bus.load(0x0000, &[0xC5, 0xD1, 0xF1]);
    cpu.regs.set_bc(0x1234);

    assert_eq!(cpu.step(&mut bus), Cycles(16));
    assert_eq!(cpu.regs.sp, 0xFFFC);
    assert_eq!(cpu.step(&mut bus), Cycles(12));
    assert_eq!(cpu.regs.de(), 0x1234);

    cpu.regs.sp = 0xFFFC;
    bus.memory[0xFFFC] = 0x3F;
    bus.memory[0xFFFD] = 0x12;
    assert_eq!(cpu.step(&mut bus), Cycles(12));
    assert_eq!(cpu.regs.a, 0x12);
    assert_eq!(cpu.regs.f(), 0x30);
}

#[test]
fn interrupt_dispatch_prefers_vblank() {
    let mut cpu = cpu_at(0x0200);
    let mut bus = TestBus::default();
    bus.interrupts.write_ie(0x1F);
    bus.interrupts.set_ime(true);
    bus.interrupts.request_interrupt(Interrupt::Joypad);
    bus.interrupts.request_interrupt(Interrupt::VBlank);

    let cycles = cpu.step(&mut bus);

    assert_eq!(cycles, Cycles(20));
    assert_eq!(cpu.regs.pc, 0x0040);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    assert_eq!(bus.read16(0xFFFC), 0x0200);
    assert!(!bus.interrupts.ime());
    assert_eq!(bus.interrupts.requested(), Interrupt::Joypad.flag());
}

#[test]
fn ei_takes_effect_after_next_instruction() {
    let mut cpu = cpu_at(0x0100);
    let mut bus = TestBus::default();
    // EI ; NOP ; NOP
    bus.load(0x0100, &[0xFB, 0x00, 0x00]);
    bus.interrupts.write_ie(0x04);
    bus.interrupts.request_interrupt(Interrupt::Timer);

    cpu.step(&mut bus);
    assert!(!bus.interrupts.ime());

    // The instruction after EI still runs.
    assert_eq!(cpu.step(&mut bus), Cycles(4));
    assert_eq!(cpu.regs.pc, 0x0102);

    assert_eq!(cpu.step(&mut bus), Cycles(20));
    assert_eq!(cpu.regs.pc, Interrupt::Timer.vector());
    assert_eq!(bus.read16(cpu.regs.sp), 0x0102);
}

#[test]
fn di_cancels_pending_ei() {
    let mut cpu = cpu_at(0x0100);
    let mut bus = TestBus::default();
    // EI ; DI ; NOP
    bus.load(0x0100, &[0xFB, 0xF3, 0x00]);
    bus.interrupts.write_ie(0x01);
    bus.interrupts.request_interrupt(Interrupt::VBlank);

    cpu.step(&mut bus);
    cpu.step(&mut bus);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0103);
    assert!(!bus.interrupts.ime());
}

#[test]
fn reti_enables_interrupts_immediately() {
    let mut cpu = cpu_at(0x0050);
    let mut bus = TestBus::default();
    bus.load(0x0050, &[0xD9]);
    cpu.regs.sp = 0xFFFC;
    bus.write16(0xFFFC, 0x1234);

    assert_eq!(cpu.step(&mut bus), Cycles(16));
    assert_eq!(cpu.regs.pc, 0x1234);
    assert!(bus.interrupts.ime());
}

#[test]
fn halt_bug_executes_next_byte_twice() {
    let mut cpu = cpu_at(0x0100);
    let mut bus = TestBus::default();
    // HALT ; INC A ; NOP
    bus.load(0x0100, &[0x76, 0x3C, 0x00]);
    bus.interrupts.write_ie(0x01);
    bus.interrupts.request_interrupt(Interrupt::VBlank);

    assert_eq!(cpu.step(&mut bus), Cycles(4));
    assert!(!cpu.is_halted());
    assert!(cpu.halt_bug_armed());

    // No wake slice: INC A runs on the very next step.
    assert_eq!(cpu.step(&mut bus), Cycles(4));
    assert_eq!(cpu.regs.pc, 0x0101);
    assert_eq!(cpu.regs.a, 1);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0102);
    assert_eq!(cpu.regs.a, 2);
}

#[test]
fn halt_wakes_without_dispatch_when_ime_clear() {
    let mut cpu = cpu_at(0x0100);
    let mut bus = TestBus::default();
    // HALT ; INC A
    bus.load(0x0100, &[0x76, 0x3C]);
    bus.interrupts.write_ie(0x04);

    cpu.step(&mut bus);
    assert!(cpu.is_halted());
    for _ in 0..10 {
        assert_eq!(cpu.step(&mut bus), Cycles(4));
        assert_eq!(cpu.regs.pc, 0x0101);
    }

    bus.interrupts.request_interrupt(Interrupt::Timer);
    assert_eq!(cpu.step(&mut bus), Cycles(4));
    assert!(!cpu.is_halted());
    assert_eq!(cpu.regs.pc, 0x0101);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 1);
    // IF is left for the program to acknowledge.
    assert!(bus.interrupts.requested().contains(Interrupt::Timer.flag()));
}

#[test]
fn halt_wakes_and_dispatches_when_ime_set() {
    let mut cpu = cpu_at(0x0100);
    let mut bus = TestBus::default();
    bus.load(0x0100, &[0x76]);
    bus.interrupts.write_ie(0x08);
    bus.interrupts.set_ime(true);

    cpu.step(&mut bus);
    assert!(cpu.is_halted());

    bus.interrupts.request_interrupt(Interrupt::Serial);
    assert_eq!(cpu.step(&mut bus), Cycles(24));
    assert_eq!(cpu.regs.pc, Interrupt::Serial.vector());
    assert_eq!(bus.read16(cpu.regs.sp), 0x0101);
}

#[test]
fn stop_without_speed_switch_enters_stopped() {
    let mut cpu = cpu_at(0x0100);
    let mut bus = TestBus::default();
    bus.load(0x0100, &[0x10, 0x00]);
    bus.interrupts.write_ie(0x10);

    assert_eq!(cpu.step(&mut bus), Cycles(4));
    assert!(cpu.is_stopped());
    assert_eq!(cpu.regs.pc, 0x0102);

    bus.interrupts.request_interrupt(Interrupt::Joypad);
    cpu.step(&mut bus);
    assert_eq!(cpu.power_state(), PowerState::Running);
}

#[test]
fn blocked_bus_stalls_without_fetch_or_dispatch() {
    let mut cpu = cpu_at(0x0100);
    let mut bus = TestBus::default();
    bus.load(0x0100, &[0x3C]);
    bus.interrupts.write_ie(0x01);
    bus.interrupts.set_ime(true);
    bus.interrupts.request_interrupt(Interrupt::VBlank);
    bus.blocked = true;

    for _ in 0..4 {
        assert_eq!(cpu.step(&mut bus), Cycles(4));
    }
    assert_eq!(cpu.regs.pc, 0x0100);
    assert_eq!(cpu.regs.a, 0);
    assert!(bus.interrupts.ime());
}

#[test]
fn opcode_hole_locks_cpu() {
    let mut cpu = cpu_at(0x0100);
    let mut bus = TestBus::default();
    bus.load(0x0100, &[0xD3, 0x00]);

    assert_eq!(cpu.step(&mut bus), Cycles::ZERO);
    assert!(cpu.is_locked());
    assert_eq!(cpu.step(&mut bus), Cycles::ZERO);
    assert_eq!(cpu.regs.pc, 0x0101);

    cpu.reset();
    assert!(!cpu.is_locked());
}

#[test]
fn cb_prefixed_costs() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();
    // RLC B ; RLC (HL) ; BIT 0,(HL) ; SET 7,(HL) ; RES 7,A
    bus.load(0x0000, &[0xCB, 0x00, 0xCB, 0x06, 0xCB, 0x46, 0xCB, 0xFE, 0xCB, 0xBF]);
    cpu.regs.set_hl(0xC000);
    cpu.regs.a = 0xFF;

    assert_eq!(cpu.step(&mut bus), Cycles(8));
    assert_eq!(cpu.step(&mut bus), Cycles(16));
    assert_eq!(cpu.step(&mut bus), Cycles(12));
    assert!(cpu.get_flag(Flag::Z));
    assert_eq!(cpu.step(&mut bus), Cycles(16));
    assert_eq!(bus.memory[0xC000], 0x80);
    assert_eq!(cpu.step(&mut bus), Cycles(8));
    assert_eq!(cpu.regs.a, 0x7F);
}

#[test]
fn bit_preserves_carry() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();
    // SCF ; BIT 7,A
    bus.load(0x0000, &[0x37, 0xCB, 0x7F]);
    cpu.regs.a = 0x80;

    cpu.step(&mut bus);
    cpu.step(&mut bus);
    assert!(!cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::H));
    assert!(cpu.get_flag(Flag::C));
}

#[test]
fn rotate_a_always_clears_zero() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();
    // RLCA with A=0 ; RLC A with A=0
    bus.load(0x0000, &[0x07, 0xCB, 0x07]);
    cpu.regs.a = 0x00;

    cpu.step(&mut bus);
    assert!(!cpu.get_flag(Flag::Z));
    cpu.step(&mut bus);
    assert!(cpu.get_flag(Flag::Z));
}

#[test]
fn rlc_eight_times_is_identity() {
    let mut cpu = Cpu::new();
    for value in 0..=u8::MAX {
        let mut result = value;
        for _ in 0..8 {
            result = cpu.alu_rlc(result);
        }
        assert_eq!(result, value);
        // The last bit rotated out is bit 0 of the original.
        assert_eq!(cpu.get_flag(Flag::C), (value & 0x01) != 0);
    }
}

#[test]
fn inc_then_dec_restores_value() {
    let mut cpu = Cpu::new();
    for value in 0..=u8::MAX {
        let incremented = cpu.alu_inc8(value);
        let result = cpu.alu_dec8(incremented);
        assert_eq!(result, value);
        assert_eq!(cpu.get_flag(Flag::Z), value == 0);
        assert_eq!(cpu.get_flag(Flag::H), (value & 0x0F) == 0x0F);
        assert!(cpu.get_flag(Flag::N));
    }
}

#[test]
fn inc_dec_preserve_carry() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();
    // INC B ; DEC B
    bus.load(0x0000, &[0x04, 0x05]);
    cpu.regs.b = 0x0F;
    cpu.set_flag(Flag::C, true);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.b, 0x10);
    assert!(cpu.get_flag(Flag::H));
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.b, 0x0F);
    assert!(cpu.get_flag(Flag::C));
}

#[test]
fn alu_ops_keep_low_nibble_of_f_clear() {
    let mut cpu = Cpu::new();
    for value in [0x00, 0x0F, 0x10, 0x7F, 0x80, 0xFF] {
        cpu.regs.a = 0x8F;
        cpu.alu_add(value, true);
        cpu.alu_sub(value, true);
        cpu.alu_and(value);
        cpu.alu_or(value);
        cpu.alu_xor(value);
        cpu.alu_cp(value);
        cpu.alu_daa();
        cpu.alu_swap(value);
        cpu.alu_sra(value);
        cpu.alu_add16_hl(value as u16 * 0x101);
        cpu.alu_add16_signed(0xFFF8, value);
        assert_eq!(cpu.regs.f() & 0x0F, 0);
    }
}

#[test]
fn add_sp_r8_uses_low_byte_flags() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();
    // ADD SP,-1 ; LD HL,SP+1
    bus.load(0x0000, &[0xE8, 0xFF, 0xF8, 0x01]);
    cpu.regs.sp = 0x0001;

    assert_eq!(cpu.step(&mut bus), Cycles(16));
    assert_eq!(cpu.regs.sp, 0x0000);
    assert!(cpu.get_flag(Flag::H));
    assert!(cpu.get_flag(Flag::C));
    assert!(!cpu.get_flag(Flag::Z));

    assert_eq!(cpu.step(&mut bus), Cycles(12));
    assert_eq!(cpu.regs.hl(), 0x0001);
    assert!(!cpu.get_flag(Flag::C));
}

#[test]
fn ld_a16_sp_stores_little_endian() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();
    bus.load(0x0000, &[0x08, 0x00, 0xC0]);
    cpu.regs.sp = 0xBEEF;

    assert_eq!(cpu.step(&mut bus), Cycles(20));
    assert_eq!(bus.memory[0xC000], 0xEF);
    assert_eq!(bus.memory[0xC001], 0xBE);
}

#[test]
fn skip_boot_rom_loads_post_boot_registers() {
    let mut cpu = Cpu::new();
    cpu.skip_boot_rom(crate::machine::Model::Dmg);
    assert_eq!(cpu.regs.af(), 0x01B0);
    assert_eq!(cpu.regs.hl(), 0x014D);
    assert_eq!(cpu.regs.sp, 0xFFFE);
    assert_eq!(cpu.regs.pc, 0x0100);

    cpu.skip_boot_rom(crate::machine::Model::Cgb);
    assert_eq!(cpu.regs.a, 0x11);
    assert_eq!(cpu.regs.de(), 0xFF56);
}

#[test]
fn cpl_sets_n_and_h_and_keeps_z_c() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();
    // CPL ; CPL
    bus.load(0x0000, &[0x2F, 0x2F]);
    cpu.regs.a = 0x35;
    cpu.regs.set_f(0x90);

    assert_eq!(cpu.step(&mut bus), Cycles(4));
    assert_eq!(cpu.regs.a, 0xCA);
    assert_eq!(cpu.regs.f(), 0xF0);

    cpu.regs.set_f(0x00);
    assert_eq!(cpu.step(&mut bus), Cycles(4));
    assert_eq!(cpu.regs.a, 0x35);
    assert_eq!(cpu.regs.f(), 0x60);
}

#[test]
fn scf_and_ccf_clear_n_h_and_keep_z() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();
    // SCF ; CCF ; CCF
    bus.load(0x0000, &[0x37, 0x3F, 0x3F]);
    cpu.regs.set_f(0xE0);

    assert_eq!(cpu.step(&mut bus), Cycles(4));
    assert_eq!(cpu.regs.f(), 0x90);
    assert_eq!(cpu.step(&mut bus), Cycles(4));
    assert_eq!(cpu.regs.f(), 0x80);
    assert_eq!(cpu.step(&mut bus), Cycles(4));
    assert_eq!(cpu.regs.f(), 0x90);
}

#[test]
fn and_sets_half_carry_or_xor_clear_it() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();
    // AND B ; OR B ; XOR A ; AND 0x3C
    bus.load(0x0000, &[0xA0, 0xB0, 0xAF, 0xE6, 0x3C]);
    cpu.regs.a = 0xF0;
    cpu.regs.b = 0x0F;
    cpu.regs.set_f(0x50);

    assert_eq!(cpu.step(&mut bus), Cycles(4));
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.regs.f(), 0xA0);

    cpu.regs.set_f(0x70);
    assert_eq!(cpu.step(&mut bus), Cycles(4));
    assert_eq!(cpu.regs.a, 0x0F);
    assert_eq!(cpu.regs.f(), 0x00);

    cpu.regs.set_f(0x70);
    assert_eq!(cpu.step(&mut bus), Cycles(4));
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.regs.f(), 0x80);

    cpu.regs.a = 0xF0;
    assert_eq!(cpu.step(&mut bus), Cycles(8));
    assert_eq!(cpu.regs.a, 0x30);
    assert_eq!(cpu.regs.f(), 0x20);
}

#[test]
fn cb_shifts_rotates_and_swap() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();
    // SLA B ; SRL B ; SRL B ; RL B ; RR B ; RR B ; SWAP B ; SWAP A
    bus.load(
        0x0000,
        &[
            0xCB, 0x20, 0xCB, 0x38, 0xCB, 0x38, 0xCB, 0x10, 0xCB, 0x18, 0xCB, 0x18, 0xCB, 0x30,
            0xCB, 0x37,
        ],
    );
    cpu.regs.b = 0x81;
    cpu.regs.set_f(0x60);

    let mut expect = |cpu: &mut Cpu, b: u8, f: u8| {
        assert_eq!(cpu.step(&mut bus), Cycles(8));
        assert_eq!((cpu.regs.b, cpu.regs.f()), (b, f));
    };
    expect(&mut cpu, 0x02, 0x10); // SLA: bit 7 out
    expect(&mut cpu, 0x01, 0x00); // SRL
    expect(&mut cpu, 0x00, 0x90); // SRL: bit 0 out, zero
    expect(&mut cpu, 0x01, 0x00); // RL: carry in
    expect(&mut cpu, 0x00, 0x90); // RR: bit 0 out
    expect(&mut cpu, 0x80, 0x00); // RR: carry in to bit 7
    expect(&mut cpu, 0x08, 0x00); // SWAP B

    cpu.regs.a = 0x00;
    cpu.set_flag(Flag::C, true);
    assert_eq!(cpu.step(&mut bus), Cycles(8));
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.regs.f(), 0x80);
}

#[test]
fn add_hl_takes_carries_from_bits_11_and_15() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();
    // ADD HL,BC ; ADD HL,DE
    bus.load(0x0000, &[0x09, 0x19]);
    cpu.regs.set_hl(0x0FFF);
    cpu.regs.set_bc(0x0001);
    cpu.regs.set_de(0xF000);
    cpu.regs.set_f(0xC0);

    assert_eq!(cpu.step(&mut bus), Cycles(8));
    assert_eq!(cpu.regs.hl(), 0x1000);
    assert_eq!(cpu.regs.f(), 0xA0);

    assert_eq!(cpu.step(&mut bus), Cycles(8));
    assert_eq!(cpu.regs.hl(), 0x0000);
    assert_eq!(cpu.regs.f(), 0x90);
}

#[test]
fn inc_dec_rr_leave_flags_alone() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();
    // INC BC ; DEC DE
    bus.load(0x0000, &[0x03, 0x1B]);
    cpu.regs.set_bc(0xFFFF);
    cpu.regs.set_de(0x0000);
    cpu.regs.set_f(0xF0);

    assert_eq!(cpu.step(&mut bus), Cycles(8));
    assert_eq!(cpu.regs.bc(), 0x0000);
    assert_eq!(cpu.regs.f(), 0xF0);

    cpu.regs.set_f(0x00);
    assert_eq!(cpu.step(&mut bus), Cycles(8));
    assert_eq!(cpu.regs.de(), 0xFFFF);
    assert_eq!(cpu.regs.f(), 0x00);
}

#[test]
fn adc_and_sbc_fold_carry_into_half_carry() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();
    // ADC A,0x01 ; SBC A,0x00 ; ADC A,B
    bus.load(0x0000, &[0xCE, 0x01, 0xDE, 0x00, 0x88]);
    cpu.regs.a = 0x0E;
    cpu.set_flag(Flag::C, true);

    assert_eq!(cpu.step(&mut bus), Cycles(8));
    assert_eq!(cpu.regs.a, 0x10);
    assert_eq!(cpu.regs.f(), 0x20);

    cpu.set_flag(Flag::C, true);
    assert_eq!(cpu.step(&mut bus), Cycles(8));
    assert_eq!(cpu.regs.a, 0x0F);
    assert_eq!(cpu.regs.f(), 0x60);

    cpu.regs.a = 0xFF;
    cpu.regs.b = 0x00;
    cpu.set_flag(Flag::C, true);
    assert_eq!(cpu.step(&mut bus), Cycles(4));
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.regs.f(), 0xB0);
}

#[test]
fn hl_increment_and_decrement_loads() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();
    // LD (HL+),A ; LD A,(HL-) ; LD (HL-),A ; LD A,(HL+)
    bus.load(0x0000, &[0x22, 0x3A, 0x32, 0x2A]);
    bus.memory[0xC001] = 0x99;
    bus.memory[0xBFFF] = 0x11;
    cpu.regs.a = 0x42;
    cpu.regs.set_hl(0xC000);
    cpu.regs.set_f(0x50);

    assert_eq!(cpu.step(&mut bus), Cycles(8));
    assert_eq!(bus.memory[0xC000], 0x42);
    assert_eq!(cpu.regs.hl(), 0xC001);

    assert_eq!(cpu.step(&mut bus), Cycles(8));
    assert_eq!(cpu.regs.a, 0x99);
    assert_eq!(cpu.regs.hl(), 0xC000);

    assert_eq!(cpu.step(&mut bus), Cycles(8));
    assert_eq!(bus.memory[0xC000], 0x99);
    assert_eq!(cpu.regs.hl(), 0xBFFF);

    assert_eq!(cpu.step(&mut bus), Cycles(8));
    assert_eq!(cpu.regs.a, 0x11);
    assert_eq!(cpu.regs.hl(), 0xC000);
    assert_eq!(cpu.regs.f(), 0x50);
}

#[test]
fn rst_pushes_pc_and_jp_hl_is_one_mcycle() {
    let mut cpu = cpu_at(0x0200);
    let mut bus = TestBus::default();
    // 0x0200: RST 38 ; 0x0038: JP (HL)
    bus.load(0x0200, &[0xFF]);
    bus.load(0x0038, &[0xE9]);
    cpu.regs.set_hl(0x1234);

    assert_eq!(cpu.step(&mut bus), Cycles(16));
    assert_eq!(cpu.regs.pc, 0x0038);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    assert_eq!(bus.memory[0xFFFC], 0x01);
    assert_eq!(bus.memory[0xFFFD], 0x02);

    assert_eq!(cpu.step(&mut bus), Cycles(4));
    assert_eq!(cpu.regs.pc, 0x1234);
    assert_eq!(cpu.regs.f(), 0x00);
}
