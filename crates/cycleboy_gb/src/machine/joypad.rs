/// One of the eight DMG inputs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    Right,
    Left,
    Up,
    Down,
    A,
    B,
    Select,
    Start,
}

impl Button {
    /// `(is_dpad, bit)` within the P1 lower nibble.
    fn line(self) -> (bool, u8) {
        match self {
            Button::Right => (true, 0),
            Button::Left => (true, 1),
            Button::Up => (true, 2),
            Button::Down => (true, 3),
            Button::A => (false, 0),
            Button::B => (false, 1),
            Button::Select => (false, 2),
            Button::Start => (false, 3),
        }
    }
}

/// P1/JOYP (0xFF00).
///
/// Pressed masks use bit=1 for "pressed"; the register inverts them.
pub(super) struct Joypad {
    select: u8,
    buttons: u8,
    dpad: u8,
}

impl Joypad {
    pub(super) fn new() -> Self {
        Self {
            // No group selected.
            select: 0x30,
            buttons: 0,
            dpad: 0,
        }
    }

    pub(super) fn read(&self) -> u8 {
        let mut low = 0x0F;
        if (self.select & 0x10) == 0 {
            low &= !self.dpad;
        }
        if (self.select & 0x20) == 0 {
            low &= !self.buttons;
        }
        // Bits 7-6 always read as 1.
        0xC0 | self.select | (low & 0x0F)
    }

    /// Only the select bits are writable.
    pub(super) fn write(&mut self, value: u8) {
        self.select = value & 0x30;
    }

    /// Update one input. Returns `true` on a press edge, which the caller
    /// turns into a Joypad interrupt request.
    pub(super) fn set_button(&mut self, button: Button, pressed: bool) -> bool {
        let (is_dpad, bit) = button.line();
        let mask = 1u8 << bit;
        let group = if is_dpad { &mut self.dpad } else { &mut self.buttons };
        let was_pressed = (*group & mask) != 0;
        if pressed {
            *group |= mask;
        } else {
            *group &= !mask;
        }
        pressed && !was_pressed
    }
}
