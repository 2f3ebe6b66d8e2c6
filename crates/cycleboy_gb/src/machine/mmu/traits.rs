use crate::cpu::Bus;
use crate::interrupts::InterruptController;

use super::Mmu;

impl Bus for Mmu {
    fn read8(&mut self, addr: u16) -> u8 {
        self.read_byte(addr)
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.write_byte(addr, value);
    }

    fn interrupts(&self) -> &InterruptController {
        &self.interrupts
    }

    fn interrupts_mut(&mut self) -> &mut InterruptController {
        &mut self.interrupts
    }

    fn cpu_blocked(&self) -> bool {
        self.oam_dma.is_active() || self.cpu_stall > 0 || self.stall_requested > 0
    }

    fn speed_switch(&mut self) -> bool {
        self.try_speed_switch()
    }
}
