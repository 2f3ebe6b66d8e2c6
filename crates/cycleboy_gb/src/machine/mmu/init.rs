use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use super::Mmu;

/// Sound register values left behind by the boot ROM, NR10..NR51.
const POST_BOOT_AUDIO: [(u16, u8); 20] = [
    (0xFF10, 0x80),
    (0xFF11, 0xBF),
    (0xFF12, 0xF3),
    (0xFF13, 0xFF),
    (0xFF14, 0xBF),
    (0xFF16, 0x3F),
    (0xFF17, 0x00),
    (0xFF18, 0xFF),
    (0xFF19, 0xBF),
    (0xFF1A, 0x7F),
    (0xFF1B, 0xFF),
    (0xFF1C, 0x9F),
    (0xFF1D, 0xFF),
    (0xFF1E, 0xBF),
    (0xFF20, 0xFF),
    (0xFF21, 0x00),
    (0xFF22, 0x00),
    (0xFF23, 0xBF),
    (0xFF24, 0x77),
    (0xFF25, 0xF3),
];

impl Mmu {
    /// Load the I/O state the boot ROM leaves at PC=0x0100 and unmap it.
    ///
    /// Values follow Pan Docs "Power Up Sequence".
    pub(in super::super) fn apply_post_boot_state(&mut self) {
        self.unmap_boot_rom();

        self.joypad.write(0x30);
        self.timer.init_post_boot();

        // IF has the VBlank request pending at hand-off.
        self.interrupts.write_if(0x01);
        self.interrupts.write_ie(0x00);

        self.audio.write(0xFF26, 0x80);
        for (addr, value) in POST_BOOT_AUDIO {
            self.audio.write(addr, value);
        }

        self.video.write_register(0xFF40, 0x91);
        self.video.write_register(0xFF42, 0x00);
        self.video.write_register(0xFF43, 0x00);
        self.video.write_register(0xFF45, 0x00);
        self.video.write_register(0xFF47, 0xFC);
        self.video.write_register(0xFF4A, 0x00);
        self.video.write_register(0xFF4B, 0x00);
        self.oam_dma.set_register(0xFF);
    }

    /// Seed WRAM and HRAM. On hardware they power up holding garbage; a
    /// seeded generator keeps runs reproducible while discouraging code from
    /// relying on zeroed memory.
    pub(super) fn fill_power_on_ram(&mut self, seed: Option<u64>) {
        match seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                rng.fill_bytes(&mut self.wram);
                rng.fill_bytes(&mut self.hram);
            }
            None => {
                self.wram.fill(0);
                self.hram.fill(0);
            }
        }
    }
}
