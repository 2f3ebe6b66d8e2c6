use super::Mmu;

/// CPU pause after a speed switch: 2050 M-cycles.
const SPEED_SWITCH_STALL: u32 = 8_200;

impl Mmu {
    #[inline]
    pub fn is_double_speed(&self) -> bool {
        self.double_speed
    }

    /// KEY1: bit 7 current speed, bit 0 switch armed.
    pub(super) fn read_key1(&self) -> u8 {
        let speed = if self.double_speed { 0x80 } else { 0x00 };
        0x7E | speed | u8::from(self.key1_armed)
    }

    pub(super) fn write_key1(&mut self, value: u8) {
        self.key1_armed = (value & 0x01) != 0;
    }

    pub(super) fn read_vbk(&self) -> u8 {
        0xFE | self.vram_bank
    }

    pub(super) fn write_vbk(&mut self, value: u8) {
        self.vram_bank = value & 0x01;
    }

    pub(super) fn read_svbk(&self) -> u8 {
        0xF8 | self.wram_bank
    }

    /// Bank 0 cannot be mapped at 0xD000; selecting it maps bank 1.
    pub(super) fn write_svbk(&mut self, value: u8) {
        self.wram_bank = (value & 0x07).max(1);
    }

    /// STOP with KEY1 armed: toggle the CPU clock instead of stopping.
    pub(super) fn try_speed_switch(&mut self) -> bool {
        if !self.model.is_cgb() || !self.key1_armed {
            return false;
        }
        self.key1_armed = false;
        self.double_speed = !self.double_speed;
        self.stall_requested += SPEED_SWITCH_STALL;
        log::debug!(
            "speed switch: now {} speed",
            if self.double_speed { "double" } else { "single" }
        );
        true
    }
}
