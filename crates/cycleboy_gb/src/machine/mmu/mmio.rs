mod read;
mod write;

use crate::Cycles;

use super::Mmu;

impl Mmu {
    /// Read one byte as the CPU sees it.
    pub fn read_byte(&self, addr: u16) -> u8 {
        self.dispatch_read(addr)
    }

    /// Write one byte. Every bus write costs one machine cycle.
    pub fn write_byte(&mut self, addr: u16, value: u8) -> Cycles {
        self.dispatch_write(addr, value);
        Cycles::MCYCLE
    }

    /// Little-endian word read composed of two byte reads.
    pub fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read_byte(addr);
        let hi = self.read_byte(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    /// Little-endian word write; costs the sum of both byte writes.
    pub fn write_word(&mut self, addr: u16, value: u16) -> Cycles {
        let [lo, hi] = value.to_le_bytes();
        self.write_byte(addr, lo) + self.write_byte(addr.wrapping_add(1), hi)
    }

    /// Evaluate `read` for CGB-only registers; DMG sees open bus.
    #[inline]
    fn cgb_read(&self, read: impl FnOnce(&Self) -> u8) -> u8 {
        if self.model.is_cgb() {
            read(self)
        } else {
            0xFF
        }
    }
}
