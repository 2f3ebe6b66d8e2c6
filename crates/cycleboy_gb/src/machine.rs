mod audio;
mod cartridge;
mod config;
mod device;
mod joypad;
mod mmu;
mod serial;
mod timer;
mod video;

pub use audio::{Audio, RegisterAudio};
pub use cartridge::{Cartridge, RomOnlyCartridge};
pub use config::DeviceConfig;
pub use device::Device;
pub use joypad::Button;
pub use mmu::{DmaState, Mmu};
pub use video::{RegisterVideo, Video};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum Model {
    #[default]
    Dmg,
    /// CGB hardware running in CGB mode: VRAM/WRAM banking, palettes,
    /// HDMA and the KEY1 speed switch become visible on the bus.
    Cgb,
}

impl Model {
    #[inline]
    pub fn is_cgb(self) -> bool {
        matches!(self, Model::Cgb)
    }
}
