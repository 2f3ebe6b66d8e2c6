use super::super::Mmu;

impl Mmu {
    /// Address decoder for writes. Mirrors `dispatch_read` arm for arm.
    pub(super) fn dispatch_write(&mut self, addr: u16, value: u8) {
        match addr {
            // ROM-area writes are mapper control, boot ROM mapped or not.
            0x0000..=0x7FFF => self.cartridge.write_rom(addr, value),

            0x8000..=0x9FFF => {
                let index = self.vram_index(addr);
                self.vram[index] = value;
            }

            0xA000..=0xBFFF => self.cartridge.write_ram(addr, value),

            0xC000..=0xDFFF => {
                let index = self.wram_index(addr);
                self.wram[index] = value;
            }

            0xE000..=0xFDFF => {
                let index = self.wram_index(addr - 0x2000);
                self.wram[index] = value;
            }

            0xFE00..=0xFE9F => self.oam[(addr - 0xFE00) as usize] = value,

            0xFEA0..=0xFEFF => {
                log::debug!("ignored write 0x{value:02X} to unusable 0x{addr:04X}");
            }

            0xFF00 => self.joypad.write(value),
            0xFF01 => self.serial.write_sb(value),
            0xFF02 => self.serial.write_sc(value, &mut self.interrupts),
            0xFF04..=0xFF07 => self.timer.write_register(addr, value),
            0xFF0F => self.interrupts.write_if(value),
            0xFF10..=0xFF3F => self.audio.write(addr, value),

            // LY belongs to the video unit alone.
            0xFF44 => log::debug!("rejected write 0x{value:02X} to LY"),
            0xFF40..=0xFF43 | 0xFF45 | 0xFF47..=0xFF4B => {
                self.video.write_register(addr, value)
            }
            0xFF46 => self.start_oam_dma(value),

            0xFF4D => {
                if self.model.is_cgb() {
                    self.write_key1(value);
                }
            }
            0xFF4F => {
                if self.model.is_cgb() {
                    self.write_vbk(value);
                }
            }
            0xFF50 => {
                if value != 0 {
                    self.unmap_boot_rom();
                }
            }
            0xFF51..=0xFF54 => {
                if self.model.is_cgb() {
                    self.hdma.write_register(addr, value);
                }
            }
            0xFF55 => {
                if self.model.is_cgb() {
                    self.write_hdma5(value);
                }
            }
            0xFF68..=0xFF6B => {
                if self.model.is_cgb() {
                    self.video.write_register(addr, value);
                }
            }
            0xFF70 => {
                if self.model.is_cgb() {
                    self.write_svbk(value);
                }
            }

            0xFF80..=0xFFFE => self.hram[(addr - 0xFF80) as usize] = value,
            0xFFFF => self.interrupts.write_ie(value),

            0xFF03
            | 0xFF08..=0xFF0E
            | 0xFF4C
            | 0xFF4E
            | 0xFF56..=0xFF67
            | 0xFF6C..=0xFF6F
            | 0xFF71..=0xFF7F => {}
        }
    }
}
