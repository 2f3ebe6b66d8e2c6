/// Cartridge seen from the bus.
///
/// Mapper chips live behind this trait; the core only routes 0x0000–0x7FFF
/// and 0xA000–0xBFFF here.
pub trait Cartridge {
    fn read_rom(&self, addr: u16) -> u8;
    /// ROM-area writes are mapper control (bank selects etc.).
    fn write_rom(&mut self, addr: u16, value: u8);
    fn read_ram(&self, addr: u16) -> u8;
    fn write_ram(&mut self, addr: u16, value: u8);

    fn title(&self) -> String {
        String::new()
    }
}

const RAM_SIZE: usize = 0x2000;

/// Cartridge without a mapper: up to 32 KiB of ROM and an optional 8 KiB of
/// RAM, as declared by the RAM size code in the header (0x0149).
pub struct RomOnlyCartridge {
    rom: Vec<u8>,
    ram: Option<Box<[u8; RAM_SIZE]>>,
}

impl RomOnlyCartridge {
    pub fn new(rom: &[u8]) -> Self {
        let ram_code = rom.get(0x0149).copied().unwrap_or(0);
        let ram = (ram_code != 0).then(|| Box::new([0u8; RAM_SIZE]));
        Self {
            rom: rom.to_vec(),
            ram,
        }
    }

    pub fn has_ram(&self) -> bool {
        self.ram.is_some()
    }
}

impl Cartridge for RomOnlyCartridge {
    fn read_rom(&self, addr: u16) -> u8 {
        // Short images read as an open bus.
        self.rom.get(addr as usize).copied().unwrap_or(0xFF)
    }

    fn write_rom(&mut self, _addr: u16, _value: u8) {
        // No MBC present: CPU writes have no effect.
    }

    fn read_ram(&self, addr: u16) -> u8 {
        match &self.ram {
            Some(ram) => ram[(addr as usize - 0xA000) & (RAM_SIZE - 1)],
            None => 0xFF,
        }
    }

    fn write_ram(&mut self, addr: u16, value: u8) {
        if let Some(ram) = self.ram.as_mut() {
            ram[(addr as usize - 0xA000) & (RAM_SIZE - 1)] = value;
        }
    }

    /// Title from the header at 0x0134–0x0143, up to the first NUL.
    fn title(&self) -> String {
        let bytes = self.rom.get(0x0134..0x0144).unwrap_or(&[]);
        bytes
            .iter()
            .take_while(|&&b| b != 0)
            .filter(|b| b.is_ascii_graphic() || **b == b' ')
            .map(|&b| b as char)
            .collect()
    }
}
