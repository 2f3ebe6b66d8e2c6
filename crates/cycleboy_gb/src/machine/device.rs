use anyhow::{ensure, Result};

use crate::cpu::Cpu;
use crate::Cycles;

use super::audio::{Audio, RegisterAudio};
use super::cartridge::{Cartridge, RomOnlyCartridge};
use super::config::DeviceConfig;
use super::joypad::Button;
use super::mmu::Mmu;
use super::video::{RegisterVideo, Video};
use super::Model;

const DMG_BOOT_ROM_SIZE: usize = 0x100;
const CGB_BOOT_ROM_SIZE: usize = 0x900;

/// A complete machine: CPU plus the bus and everything hanging off it.
///
/// `step` is the only clock. Each call runs one CPU step and feeds its cost
/// to every bus-clocked component before returning.
pub struct Device {
    pub cpu: Cpu,
    mmu: Mmu,
    config: DeviceConfig,
    total_cycles: u64,
}

impl Device {
    /// Machine with a mapper-less cartridge built from `rom` and the headless
    /// video and audio units.
    pub fn new(config: DeviceConfig, rom: &[u8]) -> Self {
        Self::with_parts(
            config,
            Box::new(RomOnlyCartridge::new(rom)),
            Box::new(RegisterVideo::new()),
            Box::new(RegisterAudio::new()),
        )
    }

    pub fn with_parts(
        config: DeviceConfig,
        cartridge: Box<dyn Cartridge>,
        video: Box<dyn Video>,
        audio: Box<dyn Audio>,
    ) -> Self {
        let title = cartridge.title();
        let mmu = Mmu::new(config.model, cartridge, video, audio);
        let mut device = Self {
            cpu: Cpu::new(),
            mmu,
            config,
            total_cycles: 0,
        };
        device.reset();
        log::info!("{:?} device ready, cartridge \"{title}\"", device.config.model);
        device
    }

    /// Map a boot ROM and restart from 0x0000 in the power-on state.
    ///
    /// DMG images are 0x100 bytes; CGB images are 0x900 bytes and only valid
    /// on a CGB device.
    pub fn load_boot_rom(&mut self, image: Vec<u8>) -> Result<()> {
        let len = image.len();
        match self.config.model {
            Model::Dmg => ensure!(
                len == DMG_BOOT_ROM_SIZE,
                "DMG boot ROM must be {DMG_BOOT_ROM_SIZE:#x} bytes, got {len:#x}"
            ),
            Model::Cgb => ensure!(
                len == DMG_BOOT_ROM_SIZE || len == CGB_BOOT_ROM_SIZE,
                "CGB boot ROM must be {DMG_BOOT_ROM_SIZE:#x} or {CGB_BOOT_ROM_SIZE:#x} bytes, got {len:#x}"
            ),
        }

        self.mmu.install_boot_rom(image);
        self.power_on();
        log::debug!("boot ROM of {len:#x} bytes mapped");
        Ok(())
    }

    /// Jump straight to cartridge code with post-boot register and I/O state.
    pub fn skip_boot_rom(&mut self) {
        self.cpu.skip_boot_rom(self.config.model);
        self.mmu.apply_post_boot_state();
    }

    /// Run one CPU step and advance the rest of the machine by its cost.
    pub fn step(&mut self) -> Cycles {
        let cycles = self.cpu.step(&mut self.mmu);
        self.mmu.advance(cycles);
        self.total_cycles += u64::from(cycles);
        cycles
    }

    /// Run whole steps until at least `budget` T-cycles have elapsed or the
    /// CPU locks up. Returns the cycles actually run.
    pub fn step_cycles(&mut self, budget: u64) -> u64 {
        let mut elapsed = 0u64;
        while elapsed < budget {
            let cycles = self.step();
            if cycles.is_zero() {
                break;
            }
            elapsed += u64::from(cycles);
        }
        elapsed
    }

    /// Reinitialise every component in place.
    ///
    /// With a boot ROM installed execution restarts at 0x0000; otherwise the
    /// configuration decides whether post-boot state is applied.
    pub fn reset(&mut self) {
        self.power_on();
        if !self.mmu.boot_rom_mapped() && self.config.skip_boot_rom {
            self.skip_boot_rom();
        }
    }

    fn power_on(&mut self) {
        self.cpu.reset();
        self.mmu.reset(self.config.ram_seed);
        self.total_cycles = 0;
    }

    pub fn mmu(&self) -> &Mmu {
        &self.mmu
    }

    pub fn mmu_mut(&mut self) -> &mut Mmu {
        &mut self.mmu
    }

    /// Everything written out through the serial port so far.
    pub fn serial_output(&self) -> &[u8] {
        self.mmu.serial_output()
    }

    pub fn set_button(&mut self, button: Button, pressed: bool) {
        self.mmu.set_button(button, pressed);
    }

    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }

    pub fn model(&self) -> Model {
        self.config.model
    }
}
