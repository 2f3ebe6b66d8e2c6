use crate::Cycles;

/// Sound unit as seen by the bus: 0xFF10–0xFF3F plus a clock input.
pub trait Audio {
    /// Advance by `cycles` (already halved in CGB double speed).
    fn step(&mut self, cycles: Cycles);
    fn read(&self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, value: u8);
    fn reset(&mut self);
}

const BASE: u16 = 0xFF10;
const NR52: u16 = 0xFF26;
const WAVE_RAM: u16 = 0xFF30;

/// Headless sound register file.
///
/// Stores the register block and wave RAM and honours the NR52 master
/// switch; no samples are produced.
pub struct RegisterAudio {
    regs: [u8; 0x30],
}

impl Default for RegisterAudio {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterAudio {
    pub fn new() -> Self {
        Self { regs: [0; 0x30] }
    }

    /// Controlled by NR52 bit 7 ("Audio on/off").
    #[inline]
    pub fn powered(&self) -> bool {
        (self.regs[(NR52 - BASE) as usize] & 0x80) != 0
    }

    fn write_nr52(&mut self, value: u8) {
        let was_on = self.powered();
        let now_on = (value & 0x80) != 0;

        if was_on && !now_on {
            // Powering off clears every channel and global register.
            for reg in &mut self.regs[..(NR52 - BASE) as usize] {
                *reg = 0;
            }
            log::debug!("audio: powered off");
        }

        // Only bit 7 is writable.
        let nr52 = &mut self.regs[(NR52 - BASE) as usize];
        *nr52 = (*nr52 & 0x7F) | (value & 0x80);
        if !now_on {
            *nr52 = 0;
        }
    }
}

impl Audio for RegisterAudio {
    fn step(&mut self, _cycles: Cycles) {}

    fn read(&self, addr: u16) -> u8 {
        let value = self.regs[(addr - BASE) as usize];
        match addr {
            // Bits 4-6 of NR52 are unused and read back as 1.
            NR52 => value | 0x70,
            0xFF27..=0xFF2F => 0xFF,
            _ => value,
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        match addr {
            NR52 => self.write_nr52(value),
            // Wave RAM stays writable with the unit switched off.
            WAVE_RAM..=0xFF3F => self.regs[(addr - BASE) as usize] = value,
            0xFF27..=0xFF2F => {}
            _ => {
                // Everything else is read-only until NR52 turns the unit on.
                if self.powered() {
                    self.regs[(addr - BASE) as usize] = value;
                }
            }
        }
    }

    fn reset(&mut self) {
        self.regs = [0; 0x30];
    }
}
