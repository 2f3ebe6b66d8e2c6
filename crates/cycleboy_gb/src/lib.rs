pub mod cpu;
mod cycles;
pub mod interrupts;
pub mod machine;

pub use cpu::{Bus, Cpu, Flag, Registers};
pub use cycles::Cycles;
pub use interrupts::{Interrupt, InterruptController, InterruptFlags};
pub use machine::{
    Audio, Button, Cartridge, Device, DeviceConfig, Model, RegisterAudio, RegisterVideo,
    RomOnlyCartridge, Video,
};

/// CPU clock of the DMG in T-cycles per second (single speed).
pub const CPU_CLOCK_HZ: u32 = 4_194_304;
/// T-cycles in one full LCD frame (154 lines of 456 cycles).
pub const CYCLES_PER_FRAME: u32 = 70_224;
