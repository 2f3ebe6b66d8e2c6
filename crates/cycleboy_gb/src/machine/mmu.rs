//! System bus: address decoding, on-board memories and the peripherals that
//! live directly on it.

mod cgb;
mod dma;
mod hdma;
mod init;
mod mmio;
mod traits;

pub use dma::DmaState;

use crate::interrupts::{Interrupt, InterruptController};
use crate::Cycles;

use super::audio::Audio;
use super::cartridge::Cartridge;
use super::joypad::{Button, Joypad};
use super::serial::Serial;
use super::timer::Timer;
use super::video::Video;
use super::Model;
use dma::OamDma;
use hdma::Hdma;

const VRAM_BANK_SIZE: usize = 0x2000;
const WRAM_BANK_SIZE: usize = 0x1000;

pub struct Mmu {
    model: Model,
    boot_rom: Option<Vec<u8>>,
    /// Cleared for good by the first nonzero write to 0xFF50.
    boot_rom_mapped: bool,
    cartridge: Box<dyn Cartridge>,
    vram: Vec<u8>,
    vram_bank: u8,
    wram: Vec<u8>,
    /// Bank mapped at 0xD000–0xDFFF, 1..=7. Always 1 on DMG.
    wram_bank: u8,
    oam: [u8; 0xA0],
    hram: [u8; 0x7F],
    interrupts: InterruptController,
    timer: Timer,
    serial: Serial,
    joypad: Joypad,
    oam_dma: OamDma,
    hdma: Hdma,
    video: Box<dyn Video>,
    audio: Box<dyn Audio>,
    key1_armed: bool,
    double_speed: bool,
    /// Odd T-cycle carried over when halving the video clock.
    video_subcycle: u32,
    /// T-cycles the CPU still has to sit out (HDMA, speed switch).
    cpu_stall: u32,
    /// Stall raised during the current step; it starts counting with the
    /// next step so the triggering instruction's own cycles are not deducted.
    stall_requested: u32,
}

impl Mmu {
    pub fn new(
        model: Model,
        cartridge: Box<dyn Cartridge>,
        video: Box<dyn Video>,
        audio: Box<dyn Audio>,
    ) -> Self {
        let vram_banks = if model.is_cgb() { 2 } else { 1 };
        let wram_banks = if model.is_cgb() { 8 } else { 2 };
        Self {
            model,
            boot_rom: None,
            boot_rom_mapped: false,
            cartridge,
            vram: vec![0; VRAM_BANK_SIZE * vram_banks],
            vram_bank: 0,
            wram: vec![0; WRAM_BANK_SIZE * wram_banks],
            wram_bank: 1,
            oam: [0; 0xA0],
            hram: [0; 0x7F],
            interrupts: InterruptController::new(),
            timer: Timer::new(),
            serial: Serial::default(),
            joypad: Joypad::new(),
            oam_dma: OamDma::new(),
            hdma: Hdma::new(),
            video,
            audio,
            key1_armed: false,
            double_speed: false,
            video_subcycle: 0,
            cpu_stall: 0,
            stall_requested: 0,
        }
    }

    #[inline]
    pub fn model(&self) -> Model {
        self.model
    }

    /// Advance every bus-clocked component by the cycles one CPU step took.
    ///
    /// The timer runs on the CPU clock, so it always sees `cycles` unchanged.
    /// Video and audio run at a fixed rate and get half of it in CGB double
    /// speed.
    pub fn advance(&mut self, cycles: Cycles) {
        if cycles.is_zero() {
            return;
        }

        self.timer.step(cycles, &mut self.interrupts);
        self.step_oam_dma(cycles);

        let video_cycles = self.video_cycles(cycles);
        self.video.step(video_cycles, &mut self.interrupts);
        self.audio.step(video_cycles);
        if self.video.take_hblank_edge() {
            self.step_hblank_dma();
        }

        let requested = std::mem::take(&mut self.stall_requested);
        self.cpu_stall = self.cpu_stall.saturating_sub(cycles.t()) + requested;
    }

    fn video_cycles(&mut self, cycles: Cycles) -> Cycles {
        if self.double_speed {
            let total = self.video_subcycle + cycles.t();
            self.video_subcycle = total & 1;
            Cycles(total / 2)
        } else {
            self.video_subcycle = 0;
            cycles
        }
    }

    #[inline]
    pub fn interrupts(&self) -> &InterruptController {
        &self.interrupts
    }

    #[inline]
    pub fn interrupts_mut(&mut self) -> &mut InterruptController {
        &mut self.interrupts
    }

    pub fn serial_output(&self) -> &[u8] {
        self.serial.output()
    }

    pub fn set_button(&mut self, button: Button, pressed: bool) {
        if self.joypad.set_button(button, pressed) {
            self.interrupts.request_interrupt(Interrupt::Joypad);
        }
    }

    pub fn cartridge(&self) -> &dyn Cartridge {
        self.cartridge.as_ref()
    }

    pub fn boot_rom_mapped(&self) -> bool {
        self.boot_rom_mapped
    }

    /// Install a boot image and map it over the cartridge.
    pub(super) fn install_boot_rom(&mut self, image: Vec<u8>) {
        self.boot_rom = Some(image);
        self.boot_rom_mapped = true;
    }

    pub(super) fn unmap_boot_rom(&mut self) {
        if self.boot_rom_mapped {
            log::debug!("boot ROM unmapped");
        }
        self.boot_rom_mapped = false;
    }

    /// Boot ROM byte overlaying `addr`, if any.
    ///
    /// A 0x900-byte CGB image covers 0x0000–0x00FF and 0x0200–0x08FF; the
    /// cartridge header at 0x0100–0x01FF always shows through.
    fn boot_rom_byte(&self, addr: u16) -> Option<u8> {
        if !self.boot_rom_mapped {
            return None;
        }
        let image = self.boot_rom.as_ref()?;
        match addr {
            0x0000..=0x00FF | 0x0200..=0x08FF => image.get(addr as usize).copied(),
            _ => None,
        }
    }

    #[inline]
    fn vram_index(&self, addr: u16) -> usize {
        self.vram_bank as usize * VRAM_BANK_SIZE + (addr as usize - 0x8000)
    }

    #[inline]
    fn wram_index(&self, addr: u16) -> usize {
        match addr {
            0xC000..=0xCFFF => addr as usize - 0xC000,
            _ => self.wram_bank as usize * WRAM_BANK_SIZE + (addr as usize - 0xD000),
        }
    }

    /// T-cycles left before the CPU may run again.
    pub fn cpu_stall(&self) -> u32 {
        self.cpu_stall + self.stall_requested
    }

    pub(super) fn reset(&mut self, ram_seed: Option<u64>) {
        self.boot_rom_mapped = self.boot_rom.is_some();
        self.vram.fill(0);
        self.vram_bank = 0;
        self.wram_bank = 1;
        self.oam = [0; 0xA0];
        self.interrupts.clear();
        self.timer = Timer::new();
        self.serial.reset();
        self.joypad = Joypad::new();
        self.oam_dma = OamDma::new();
        self.hdma = Hdma::new();
        self.video.reset();
        self.audio.reset();
        self.key1_armed = false;
        self.double_speed = false;
        self.video_subcycle = 0;
        self.cpu_stall = 0;
        self.stall_requested = 0;
        self.fill_power_on_ram(ram_seed);
    }
}
