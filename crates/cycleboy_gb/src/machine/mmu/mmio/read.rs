use super::super::Mmu;

impl Mmu {
    /// Address decoder for reads.
    ///
    /// Every 16-bit address falls in exactly one arm; there is no fallback.
    pub(super) fn dispatch_read(&self, addr: u16) -> u8 {
        match addr {
            // Boot ROM overlay while mapped, cartridge otherwise.
            0x0000..=0x00FF => self
                .boot_rom_byte(addr)
                .unwrap_or_else(|| self.cartridge.read_rom(addr)),

            // Cartridge ROM. The CGB boot image also covers 0x0200-0x08FF.
            0x0100..=0x7FFF => self
                .boot_rom_byte(addr)
                .unwrap_or_else(|| self.cartridge.read_rom(addr)),

            0x8000..=0x9FFF => self.vram[self.vram_index(addr)],

            // Absent cartridge RAM reads 0xFF; that is the cartridge's call.
            0xA000..=0xBFFF => self.cartridge.read_ram(addr),

            0xC000..=0xDFFF => self.wram[self.wram_index(addr)],

            // Echo RAM mirrors 0xC000-0xDDFF.
            0xE000..=0xFDFF => self.wram[self.wram_index(addr - 0x2000)],

            0xFE00..=0xFE9F => self.oam[(addr - 0xFE00) as usize],

            // Unusable area.
            0xFEA0..=0xFEFF => 0x00,

            0xFF00 => self.joypad.read(),
            0xFF01 => self.serial.read_sb(),
            0xFF02 => self.serial.read_sc(),
            0xFF04..=0xFF07 => self.timer.read_register(addr),
            0xFF0F => self.interrupts.read_if(),
            0xFF10..=0xFF3F => self.audio.read(addr),

            0xFF40..=0xFF45 | 0xFF47..=0xFF4B => self.video.read_register(addr),
            0xFF46 => self.oam_dma.register(),

            0xFF4D => self.cgb_read(Self::read_key1),
            0xFF4F => self.cgb_read(Self::read_vbk),
            0xFF50 => 0xFF,
            // HDMA1-4 are write-only.
            0xFF51..=0xFF54 => 0xFF,
            0xFF55 => self.cgb_read(|mmu| mmu.hdma.read_hdma5()),
            0xFF68..=0xFF6B => self.cgb_read(|mmu| mmu.video.read_register(addr)),
            0xFF70 => self.cgb_read(Self::read_svbk),

            0xFF80..=0xFFFE => self.hram[(addr - 0xFF80) as usize],
            0xFFFF => self.interrupts.read_ie(),

            // Unmapped I/O.
            0xFF03
            | 0xFF08..=0xFF0E
            | 0xFF4C
            | 0xFF4E
            | 0xFF56..=0xFF67
            | 0xFF6C..=0xFF6F
            | 0xFF71..=0xFF7F => 0xFF,
        }
    }
}
