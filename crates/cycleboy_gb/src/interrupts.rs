//! Interrupt enable/request registers and the interrupt master enable.
//!
//! Producers (timer, serial, joypad, video) only ever OR bits into IF through
//! `request_interrupt`; the CPU's dispatch sequence is the only caller of
//! `reset_interrupt`.

use bitflags::bitflags;

bitflags! {
    /// Interrupt bits as laid out in IF ($FF0F) and IE ($FFFF).
    ///
    /// Bit order doubles as priority order: VBlank is serviced first.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct InterruptFlags: u8 {
        const VBLANK = 1 << 0;
        const LCD_STAT = 1 << 1;
        const TIMER = 1 << 2;
        const SERIAL = 1 << 3;
        const JOYPAD = 1 << 4;
    }
}

/// One of the five interrupt sources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Interrupt {
    VBlank = 0,
    LcdStat = 1,
    Timer = 2,
    Serial = 3,
    Joypad = 4,
}

impl Interrupt {
    /// All sources in priority order.
    pub const ALL: [Interrupt; 5] = [
        Interrupt::VBlank,
        Interrupt::LcdStat,
        Interrupt::Timer,
        Interrupt::Serial,
        Interrupt::Joypad,
    ];

    #[inline]
    pub fn flag(self) -> InterruptFlags {
        InterruptFlags::from_bits_retain(1 << self as u8)
    }

    /// Fixed handler address: $40, $48, $50, $58, $60.
    #[inline]
    pub fn vector(self) -> u16 {
        0x0040 + (self as u16) * 8
    }
}

#[derive(Clone, Debug, Default)]
pub struct InterruptController {
    /// IE keeps all eight bits; only the low five select sources.
    ie: u8,
    iflag: InterruptFlags,
    ime: bool,
    /// Set by EI; promoted to `ime` one instruction later.
    ime_pending: bool,
}

impl InterruptController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to power-on state: nothing enabled, nothing requested, IME off.
    pub fn clear(&mut self) {
        self.ie = 0;
        self.iflag = InterruptFlags::empty();
        self.ime = false;
        self.ime_pending = false;
    }

    #[inline]
    pub fn request_interrupt(&mut self, interrupt: Interrupt) {
        self.iflag |= interrupt.flag();
    }

    #[inline]
    pub fn reset_interrupt(&mut self, interrupt: Interrupt) {
        self.iflag &= !interrupt.flag();
    }

    /// IE as seen on the bus at $FFFF.
    #[inline]
    pub fn read_ie(&self) -> u8 {
        self.ie
    }

    #[inline]
    pub fn write_ie(&mut self, value: u8) {
        self.ie = value;
    }

    /// IF as seen on the bus at $FF0F. The upper three bits read back as 1.
    #[inline]
    pub fn read_if(&self) -> u8 {
        self.iflag.bits() | 0b1110_0000
    }

    #[inline]
    pub fn write_if(&mut self, value: u8) {
        self.iflag = InterruptFlags::from_bits_truncate(value);
    }

    #[inline]
    pub fn requested(&self) -> InterruptFlags {
        self.iflag
    }

    #[inline]
    pub fn enabled(&self) -> InterruptFlags {
        InterruptFlags::from_bits_truncate(self.ie)
    }

    /// Sources that are both enabled and requested (`IE & IF`).
    #[inline]
    pub fn pending(&self) -> InterruptFlags {
        self.enabled() & self.iflag
    }

    #[inline]
    pub fn has_pending(&self) -> bool {
        !self.pending().is_empty()
    }

    /// Highest-priority source in `IE & IF`, if any.
    pub fn highest_pending(&self) -> Option<Interrupt> {
        let pending = self.pending();
        Interrupt::ALL
            .into_iter()
            .find(|interrupt| pending.contains(interrupt.flag()))
    }

    #[inline]
    pub fn ime(&self) -> bool {
        self.ime
    }

    /// Set or clear IME immediately. Clearing also drops a pending EI.
    #[inline]
    pub fn set_ime(&mut self, enabled: bool) {
        self.ime = enabled;
        if !enabled {
            self.ime_pending = false;
        }
    }

    /// Arm the deferred enable performed by EI.
    #[inline]
    pub fn schedule_ime(&mut self) {
        self.ime_pending = true;
    }

    #[inline]
    pub fn ime_pending(&self) -> bool {
        self.ime_pending
    }

    /// Promote a pending EI to IME. Returns `true` if IME was switched on.
    #[inline]
    pub fn activate_pending_ime(&mut self) -> bool {
        if self.ime_pending {
            self.ime_pending = false;
            self.ime = true;
            true
        } else {
            false
        }
    }
}
