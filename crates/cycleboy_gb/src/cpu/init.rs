use crate::machine::Model;

use super::{Cpu, PowerState};

impl Cpu {
    /// CPU in its power-on state: every register zero, execution starting at
    /// 0x0000 where the boot ROM is mapped.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the CPU to its power-on state without reallocating.
    pub fn reset(&mut self) {
        self.regs.clear();
        self.power = PowerState::Running;
        self.halt_bug = false;
        self.locked = false;
    }

    /// Load the register values the boot ROM leaves behind when it hands
    /// control to cartridge code at 0x0100.
    ///
    /// Values follow Pan Docs "Power Up Sequence".
    pub fn skip_boot_rom(&mut self, model: Model) {
        self.reset();
        match model {
            Model::Dmg => {
                self.regs.set_af(0x01B0);
                self.regs.set_bc(0x0013);
                self.regs.set_de(0x00D8);
                self.regs.set_hl(0x014D);
            }
            Model::Cgb => {
                self.regs.set_af(0x1180);
                self.regs.set_bc(0x0000);
                self.regs.set_de(0xFF56);
                self.regs.set_hl(0x000D);
            }
        }
        self.regs.sp = 0xFFFE;
        self.regs.pc = 0x0100;
    }
}
