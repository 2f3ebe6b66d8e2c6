mod alu;
mod bus;
mod cb;
mod exec;
mod helpers;
mod init;
mod interrupts;
mod regs;
mod step;

pub use bus::Bus;
pub use regs::{Flag, Registers};

/// Power state of the CPU core.
///
/// Low-power states are plain data: `Cpu::step` keeps returning a 4-cycle
/// idle slice until an enabled interrupt is requested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PowerState {
    #[default]
    Running,
    /// Entered by HALT. Woken by any `IE & IF` bit, even with IME clear.
    Halted,
    /// Entered by STOP when no speed switch was requested.
    Stopped,
}

/// Game Boy CPU core (Sharp LR35902).
///
/// The CPU owns only its register file and its own control state; IE/IF and
/// IME live in the `InterruptController` reached through the `Bus`.
#[derive(Clone, Debug, Default)]
pub struct Cpu {
    pub regs: Registers,
    power: PowerState,
    /// Set by HALT when IME is clear and an interrupt is already pending. The
    /// next opcode fetch then does not advance PC.
    halt_bug: bool,
    /// When true, the CPU has executed an opcode hole, which hard-locks the
    /// machine on real hardware. `step()` returns 0 cycles until reset.
    locked: bool,
}

impl Cpu {
    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        self.regs.flag(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.regs.set_flag(flag, value);
    }

    #[inline]
    pub fn power_state(&self) -> PowerState {
        self.power
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.power == PowerState::Halted
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.power == PowerState::Stopped
    }

    #[inline]
    pub fn halt_bug_armed(&self) -> bool {
        self.halt_bug
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

#[cfg(test)]
mod tests;
