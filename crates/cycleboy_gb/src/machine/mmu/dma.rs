use crate::Cycles;

use super::Mmu;

const OAM_SIZE: u8 = 0xA0;

/// Progress of an OAM DMA transfer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DmaState {
    Idle,
    /// 0xFF46 was written during the current CPU step.
    Requested,
    /// One machine cycle of start-up latency; no bytes move yet.
    Pending,
    /// Byte `index` is copied on the next machine cycle.
    Transferring { index: u8 },
}

pub(super) struct OamDma {
    state: DmaState,
    /// Last value written to 0xFF46.
    register: u8,
    /// Page the running transfer copies from.
    source: u8,
    /// New source page latched by a write during an active transfer.
    restart: Option<u8>,
}

impl OamDma {
    pub(super) fn new() -> Self {
        Self {
            state: DmaState::Idle,
            register: 0xFF,
            source: 0xFF,
            restart: None,
        }
    }

    #[inline]
    pub(super) fn is_active(&self) -> bool {
        self.state != DmaState::Idle
    }

    #[inline]
    pub(super) fn register(&self) -> u8 {
        self.register
    }

    pub(super) fn set_register(&mut self, value: u8) {
        self.register = value;
    }

    fn trigger(&mut self, page: u8) {
        self.register = page;
        match self.state {
            DmaState::Idle => {
                self.source = page;
                self.state = DmaState::Requested;
            }
            DmaState::Requested | DmaState::Pending => self.source = page,
            DmaState::Transferring { .. } => self.restart = Some(page),
        }
    }
}

impl Mmu {
    pub fn dma_state(&self) -> DmaState {
        self.oam_dma.state
    }

    /// Write to 0xFF46.
    pub(super) fn start_oam_dma(&mut self, page: u8) {
        let restarting = matches!(self.oam_dma.state, DmaState::Transferring { .. });
        self.oam_dma.trigger(page);
        if restarting {
            log::debug!("OAM DMA restart from 0x{page:02X}00");
        } else {
            log::debug!("OAM DMA start from 0x{page:02X}00");
        }
    }

    /// Run the transfer for the machine cycles of one step.
    ///
    /// A request made during the step itself only becomes Pending here; the
    /// transfer clock starts with the next step.
    pub(super) fn step_oam_dma(&mut self, cycles: Cycles) {
        if self.oam_dma.state == DmaState::Requested {
            self.oam_dma.state = DmaState::Pending;
            return;
        }
        for _ in 0..cycles.mcycles() {
            if !self.oam_dma.is_active() {
                break;
            }
            self.tick_oam_dma();
        }
    }

    fn tick_oam_dma(&mut self) {
        self.oam_dma.state = match self.oam_dma.state {
            DmaState::Idle | DmaState::Requested => self.oam_dma.state,
            DmaState::Pending => DmaState::Transferring { index: 0 },
            DmaState::Transferring { index } => {
                let src = u16::from_be_bytes([self.oam_dma.source, index]);
                self.oam[index as usize] = self.dma_source_read(src);

                if let Some(page) = self.oam_dma.restart.take() {
                    // The byte in flight above still used the old source.
                    self.oam_dma.source = page;
                    DmaState::Transferring { index: 0 }
                } else if index + 1 == OAM_SIZE {
                    DmaState::Idle
                } else {
                    DmaState::Transferring { index: index + 1 }
                }
            }
        };
    }

    /// DMA sees the bus without the CPU's OAM/echo special cases: pages
    /// 0xE0–0xFF read work RAM through the echo mapping.
    fn dma_source_read(&self, addr: u16) -> u8 {
        match addr {
            0xE000..=0xFFFF => self.wram[self.wram_index(addr - 0x2000)],
            _ => self.read_byte(addr),
        }
    }
}
