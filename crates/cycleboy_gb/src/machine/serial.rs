use crate::interrupts::{Interrupt, InterruptController};

/// Serial port modelled through SB/SC only.
///
/// No link partner exists. A transfer started with the internal clock
/// (SC bits 7 and 0 set) completes at once: SB is appended to `output`,
/// the shifted-in value is 0xFF, the start bit clears and the Serial
/// interrupt is requested. Test ROMs report their results this way.
#[derive(Default)]
pub(super) struct Serial {
    sb: u8,
    sc: u8,
    output: Vec<u8>,
}

impl Serial {
    pub(super) fn read_sb(&self) -> u8 {
        self.sb
    }

    pub(super) fn write_sb(&mut self, value: u8) {
        self.sb = value;
    }

    /// Unused SC bits read back as 1.
    pub(super) fn read_sc(&self) -> u8 {
        self.sc | 0x7E
    }

    pub(super) fn write_sc(&mut self, value: u8, interrupts: &mut InterruptController) {
        self.sc = value & 0x81;
        if (self.sc & 0x81) == 0x81 {
            self.output.push(self.sb);
            self.sb = 0xFF;
            self.sc &= !0x80;
            interrupts.request_interrupt(Interrupt::Serial);
        }
    }

    pub(super) fn output(&self) -> &[u8] {
        &self.output
    }

    pub(super) fn reset(&mut self) {
        self.sb = 0;
        self.sc = 0;
        self.output.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_clock_transfer_completes_immediately() {
        let mut serial = Serial::default();
        let mut ic = InterruptController::new();
        serial.write_sb(b'P');
        serial.write_sc(0x81, &mut ic);

        assert_eq!(serial.output(), b"P");
        assert_eq!(serial.read_sb(), 0xFF);
        assert_eq!(serial.read_sc(), 0x7F);
        assert!(ic.requested().contains(Interrupt::Serial.flag()));
    }

    #[test]
    fn external_clock_waits_forever() {
        let mut serial = Serial::default();
        let mut ic = InterruptController::new();
        serial.write_sb(0x42);
        serial.write_sc(0x80, &mut ic);

        assert!(serial.output().is_empty());
        assert_eq!(serial.read_sc(), 0xFE);
        assert!(ic.requested().is_empty());
    }
}
