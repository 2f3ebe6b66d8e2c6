use crate::interrupts::InterruptController;

/// Abstraction over the Game Boy bus as seen by the CPU.
///
/// The system bus (`Mmu`) implements this for real execution; CPU unit tests
/// use a flat 64 KiB memory instead. Timing is not advanced here: the caller
/// of `Cpu::step` feeds the returned cycle count to the rest of the machine.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    fn interrupts(&self) -> &InterruptController;
    fn interrupts_mut(&mut self) -> &mut InterruptController;

    /// Returns `true` while a DMA transfer (or a post-speed-switch pause)
    /// owns the bus. The CPU neither fetches nor dispatches interrupts then.
    fn cpu_blocked(&self) -> bool {
        false
    }

    /// Handle the CGB "speed switch" mechanism (KEY1 + STOP).
    ///
    /// When the "prepare speed switch" latch is set, executing `STOP`
    /// toggles double speed and returns without entering the STOP state.
    ///
    /// Returns `true` if a speed switch occurred.
    fn speed_switch(&mut self) -> bool {
        false
    }

    fn read16(&mut self, addr: u16) -> u16 {
        let lo = self.read8(addr);
        let hi = self.read8(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    fn write16(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write8(addr, lo);
        self.write8(addr.wrapping_add(1), hi);
    }
}
