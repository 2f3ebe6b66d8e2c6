use super::Mmu;

const BLOCK_SIZE: u16 = 0x10;
/// Single-speed T-cycles the CPU is held per 16-byte block.
const BLOCK_STALL: u32 = 32;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum HdmaMode {
    Idle,
    /// Copies one block per HBlank edge.
    HBlank,
}

/// CGB VRAM DMA (0xFF51–0xFF55).
pub(super) struct Hdma {
    source: u16,
    /// Offset inside VRAM (0x0000–0x1FF0).
    dest: u16,
    mode: HdmaMode,
    /// Blocks left, minus one, as reported in HDMA5 bits 0-6.
    remaining: u8,
    /// Set once a transfer finished or was cancelled; HDMA5 bit 7.
    finished: bool,
}

impl Hdma {
    pub(super) fn new() -> Self {
        Self {
            source: 0,
            dest: 0,
            mode: HdmaMode::Idle,
            remaining: 0x7F,
            finished: true,
        }
    }

    pub(super) fn is_hblank_active(&self) -> bool {
        self.mode == HdmaMode::HBlank
    }

    pub(super) fn read_hdma5(&self) -> u8 {
        let done = if self.finished { 0x80 } else { 0x00 };
        done | (self.remaining & 0x7F)
    }

    pub(super) fn write_register(&mut self, addr: u16, value: u8) {
        match addr {
            0xFF51 => self.source = (self.source & 0x00FF) | ((value as u16) << 8),
            0xFF52 => self.source = (self.source & 0xFF00) | (value & 0xF0) as u16,
            0xFF53 => self.dest = (self.dest & 0x00FF) | (((value & 0x1F) as u16) << 8),
            0xFF54 => self.dest = (self.dest & 0xFF00) | (value & 0xF0) as u16,
            _ => {}
        }
    }
}

impl Mmu {
    /// Write to HDMA5: start, or cancel an HBlank transfer.
    pub(super) fn write_hdma5(&mut self, value: u8) {
        let blocks = value & 0x7F;

        if self.hdma.is_hblank_active() && (value & 0x80) == 0 {
            self.hdma.mode = HdmaMode::Idle;
            self.hdma.finished = true;
            log::debug!("HDMA: HBlank transfer cancelled");
            return;
        }

        self.hdma.remaining = blocks;
        self.hdma.finished = false;

        if (value & 0x80) != 0 {
            self.hdma.mode = HdmaMode::HBlank;
            log::debug!(
                "HDMA: HBlank transfer of {} blocks 0x{:04X} -> 0x{:04X}",
                blocks as u32 + 1,
                self.hdma.source,
                0x8000 | self.hdma.dest
            );
            return;
        }

        log::debug!(
            "HDMA: general transfer of {} blocks 0x{:04X} -> 0x{:04X}",
            blocks as u32 + 1,
            self.hdma.source,
            0x8000 | self.hdma.dest
        );
        for _ in 0..=blocks {
            self.copy_hdma_block();
        }
        self.hdma.mode = HdmaMode::Idle;
    }

    /// One block per HBlank while an HBlank transfer is active.
    pub(super) fn step_hblank_dma(&mut self) {
        if self.hdma.is_hblank_active() {
            self.copy_hdma_block();
        }
    }

    fn copy_hdma_block(&mut self) {
        for offset in 0..BLOCK_SIZE {
            let byte = self.read_byte(self.hdma.source.wrapping_add(offset));
            let dest = 0x8000 | ((self.hdma.dest + offset) & 0x1FFF);
            let index = self.vram_index(dest);
            self.vram[index] = byte;
        }
        self.hdma.source = self.hdma.source.wrapping_add(BLOCK_SIZE);
        self.hdma.dest = (self.hdma.dest + BLOCK_SIZE) & 0x1FF0;

        let stall = if self.double_speed { BLOCK_STALL * 2 } else { BLOCK_STALL };
        self.stall_requested += stall;

        if self.hdma.remaining == 0 {
            self.hdma.remaining = 0x7F;
            self.hdma.finished = true;
            self.hdma.mode = HdmaMode::Idle;
        } else {
            self.hdma.remaining -= 1;
        }
    }
}
