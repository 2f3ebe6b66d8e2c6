use super::Timer;

impl Timer {
    /// Read one of DIV/TIMA/TMA/TAC (0xFF04–0xFF07).
    pub(in super::super) fn read_register(&self, addr: u16) -> u8 {
        match addr {
            0xFF04 => (self.counter >> 8) as u8,
            0xFF05 => self.tima,
            0xFF06 => self.tma,
            0xFF07 => self.tac | 0b1111_1000,
            _ => 0xFF,
        }
    }

    pub(in super::super) fn write_register(&mut self, addr: u16, value: u8) {
        match addr {
            // Any write clears the whole divider, whatever the value.
            0xFF04 => self.counter = 0,
            0xFF05 => self.tima = value,
            0xFF06 => self.tma = value,
            0xFF07 => self.write_tac(value),
            _ => {}
        }
    }

    fn write_tac(&mut self, value: u8) {
        let was_enabled = self.enabled();
        let old_period = self.period();
        self.tac = value & 0x07;
        if (!was_enabled && self.enabled()) || self.period() != old_period {
            // Counting starts from a fresh period.
            self.tima_acc = 0;
        }
    }
}
