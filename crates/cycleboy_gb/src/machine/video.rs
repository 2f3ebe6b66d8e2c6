use crate::interrupts::{Interrupt, InterruptController};
use crate::Cycles;

/// LCD controller as seen by the rest of the machine.
///
/// Pixel output is not part of this contract: the bus only needs the register
/// block at 0xFF40–0xFF4B (minus DMA at 0xFF46), the CGB palette ports at
/// 0xFF68–0xFF6B and a way to advance scanline timing. Implementations raise
/// VBlank and STAT interrupts themselves.
pub trait Video {
    /// Advance by `cycles` video cycles (already halved in CGB double speed).
    fn step(&mut self, cycles: Cycles, interrupts: &mut InterruptController);

    fn read_register(&self, addr: u16) -> u8;

    /// LY (0xFF44) is never routed here; the bus rejects those writes.
    fn write_register(&mut self, addr: u16, value: u8);

    /// Returns `true` once after the controller entered HBlank (mode 0) on a
    /// visible line. Drives HBlank HDMA.
    fn take_hblank_edge(&mut self) -> bool {
        false
    }

    /// Back to the power-on state.
    fn reset(&mut self);
}

const DOTS_PER_LINE: u32 = 456;
const LINES_PER_FRAME: u32 = 154;
const FRAME_DOTS: u32 = DOTS_PER_LINE * LINES_PER_FRAME;
const VBLANK_LINE: u8 = 144;
const OAM_SCAN_DOTS: u32 = 80;
const TRANSFER_DOTS: u32 = 172;

const LCDC_ENABLE: u8 = 0x80;
const STAT_LYC_INT: u8 = 0x40;
const STAT_MODE2_INT: u8 = 0x20;
const STAT_MODE1_INT: u8 = 0x10;
const STAT_MODE0_INT: u8 = 0x08;
const STAT_COINCIDENCE: u8 = 0x04;

/// Headless LCD register model.
///
/// Keeps the register block and CGB palette RAM and runs the LY/mode timing
/// (456 cycles per line, 154 lines, VBlank from line 144). Nothing is drawn.
pub struct RegisterVideo {
    lcdc: u8,
    /// Bits 3..6 as written; bits 0..2 are recomputed from timing.
    stat: u8,
    scy: u8,
    scx: u8,
    ly: u8,
    lyc: u8,
    bgp: u8,
    obp0: u8,
    obp1: u8,
    wy: u8,
    wx: u8,
    /// Position within the frame in dots.
    dot: u32,
    /// Logical OR of all enabled STAT sources; interrupts fire on its rising edge.
    stat_line: bool,
    /// Rising edge caused by a register write, delivered on the next `step`.
    stat_edge_pending: bool,
    hblank_edge: bool,
    bg_palette_index: u8,
    bg_palette: [u8; 64],
    obj_palette_index: u8,
    obj_palette: [u8; 64],
}

impl Default for RegisterVideo {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterVideo {
    pub fn new() -> Self {
        Self {
            lcdc: 0,
            stat: 0,
            scy: 0,
            scx: 0,
            ly: 0,
            lyc: 0,
            bgp: 0,
            obp0: 0,
            obp1: 0,
            wy: 0,
            wx: 0,
            dot: 0,
            stat_line: false,
            stat_edge_pending: false,
            hblank_edge: false,
            bg_palette_index: 0,
            bg_palette: [0xFF; 64],
            obj_palette_index: 0,
            obj_palette: [0xFF; 64],
        }
    }

    #[inline]
    fn lcd_enabled(&self) -> bool {
        (self.lcdc & LCDC_ENABLE) != 0
    }

    /// Current mode (0..=3) derived from LY and the dot within the line.
    fn mode(&self) -> u8 {
        if !self.lcd_enabled() {
            0
        } else if self.ly >= VBLANK_LINE {
            1
        } else {
            let line_dot = self.dot % DOTS_PER_LINE;
            if line_dot < OAM_SCAN_DOTS {
                2
            } else if line_dot < OAM_SCAN_DOTS + TRANSFER_DOTS {
                3
            } else {
                0
            }
        }
    }

    /// Recompute the STAT line. Returns `true` on a rising edge.
    fn refresh_stat_line(&mut self) -> bool {
        if !self.lcd_enabled() {
            self.stat_line = false;
            return false;
        }

        let mode = self.mode();
        let line = (self.stat & STAT_LYC_INT != 0 && self.ly == self.lyc)
            || (self.stat & STAT_MODE2_INT != 0 && mode == 2)
            || (self.stat & STAT_MODE1_INT != 0 && mode == 1)
            || (self.stat & STAT_MODE0_INT != 0 && mode == 0);

        let rising = line && !self.stat_line;
        self.stat_line = line;
        rising
    }

    fn tick(&mut self, interrupts: &mut InterruptController) {
        let old_ly = self.ly;
        let old_mode = self.mode();

        self.dot = (self.dot + 1) % FRAME_DOTS;
        self.ly = (self.dot / DOTS_PER_LINE) as u8;

        if old_ly < VBLANK_LINE && self.ly >= VBLANK_LINE {
            interrupts.request_interrupt(Interrupt::VBlank);
            log::trace!("video: VBlank edge (LY {old_ly}->{})", self.ly);
        }

        let mode = self.mode();
        if mode == 0 && old_mode == 3 {
            self.hblank_edge = true;
        }

        if self.refresh_stat_line() {
            interrupts.request_interrupt(Interrupt::LcdStat);
        }
    }

    fn write_lcdc(&mut self, value: u8) {
        let was_enabled = self.lcd_enabled();
        self.lcdc = value;
        if was_enabled != self.lcd_enabled() {
            // Both switching off and back on restart the frame at LY=0.
            self.dot = 0;
            self.ly = 0;
            self.stat_line = false;
            self.hblank_edge = false;
        }
        self.stat_edge_pending |= self.refresh_stat_line();
    }

    fn read_palette_data(palette: &[u8; 64], index: u8) -> u8 {
        palette[(index & 0x3F) as usize]
    }

    /// Store through a palette index register and apply auto-increment (bit 7).
    fn write_palette_data(palette: &mut [u8; 64], index: &mut u8, value: u8) {
        palette[(*index & 0x3F) as usize] = value;
        if (*index & 0x80) != 0 {
            *index = 0x80 | ((*index + 1) & 0x3F);
        }
    }
}

impl Video for RegisterVideo {
    fn step(&mut self, cycles: Cycles, interrupts: &mut InterruptController) {
        if std::mem::take(&mut self.stat_edge_pending) {
            interrupts.request_interrupt(Interrupt::LcdStat);
        }
        if !self.lcd_enabled() {
            return;
        }
        for _ in 0..cycles.t() {
            self.tick(interrupts);
        }
    }

    fn read_register(&self, addr: u16) -> u8 {
        match addr {
            0xFF40 => self.lcdc,
            0xFF41 => {
                let coincidence = if self.ly == self.lyc { STAT_COINCIDENCE } else { 0 };
                0x80 | (self.stat & 0x78) | coincidence | self.mode()
            }
            0xFF42 => self.scy,
            0xFF43 => self.scx,
            0xFF44 => self.ly,
            0xFF45 => self.lyc,
            0xFF47 => self.bgp,
            0xFF48 => self.obp0,
            0xFF49 => self.obp1,
            0xFF4A => self.wy,
            0xFF4B => self.wx,
            0xFF68 => self.bg_palette_index | 0x40,
            0xFF69 => Self::read_palette_data(&self.bg_palette, self.bg_palette_index),
            0xFF6A => self.obj_palette_index | 0x40,
            0xFF6B => Self::read_palette_data(&self.obj_palette, self.obj_palette_index),
            _ => 0xFF,
        }
    }

    fn write_register(&mut self, addr: u16, value: u8) {
        match addr {
            0xFF40 => self.write_lcdc(value),
            0xFF41 => {
                self.stat = value & 0x78;
                self.stat_edge_pending |= self.refresh_stat_line();
            }
            0xFF42 => self.scy = value,
            0xFF43 => self.scx = value,
            0xFF45 => {
                self.lyc = value;
                self.stat_edge_pending |= self.refresh_stat_line();
            }
            0xFF47 => self.bgp = value,
            0xFF48 => self.obp0 = value,
            0xFF49 => self.obp1 = value,
            0xFF4A => self.wy = value,
            0xFF4B => self.wx = value,
            0xFF68 => self.bg_palette_index = value & 0xBF,
            0xFF69 => {
                Self::write_palette_data(&mut self.bg_palette, &mut self.bg_palette_index, value)
            }
            0xFF6A => self.obj_palette_index = value & 0xBF,
            0xFF6B => {
                Self::write_palette_data(&mut self.obj_palette, &mut self.obj_palette_index, value)
            }
            _ => {}
        }
    }

    fn take_hblank_edge(&mut self) -> bool {
        std::mem::take(&mut self.hblank_edge)
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
