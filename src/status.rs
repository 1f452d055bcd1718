//! # Processor Status Register
//!
//! The 6502 status register packs eight single-bit flags into one byte
//! (NV-BDIZC). Bit 5 has no function and reads as 1 whenever the register is
//! pushed to the stack. The Break bit only exists in pushed copies on real
//! hardware; here it is kept in the live register so that pushes and pulls
//! remain bit-exact.

use bitflags::bitflags;

bitflags! {
    /// Status register flags.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::Status;
    ///
    /// let status = Status::from_bits_retain(0b1010_0001);
    /// assert!(status.contains(Status::NEGATIVE | Status::UNUSED | Status::CARRY));
    /// assert!(!status.contains(Status::ZERO));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        /// Carry (unsigned overflow / no borrow)
        const CARRY = 0b0000_0001;
        /// Zero result
        const ZERO = 0b0000_0010;
        /// Interrupt disable (masks IRQ, not NMI)
        const INTERRUPT_DISABLE = 0b0000_0100;
        /// Decimal mode; stored but never alters arithmetic
        const DECIMAL = 0b0000_1000;
        /// Break, set in status copies pushed by BRK and PHP
        const BREAK = 0b0001_0000;
        /// Unused bit 5
        const UNUSED = 0b0010_0000;
        /// Signed overflow
        const OVERFLOW = 0b0100_0000;
        /// Negative (bit 7 of result)
        const NEGATIVE = 0b1000_0000;
    }
}

impl Status {
    /// Updates Zero and Negative from a result byte.
    pub fn set_zn(&mut self, value: u8) {
        self.set(Status::ZERO, value == 0);
        self.set(Status::NEGATIVE, value & 0x80 != 0);
    }

    /// Status as pushed by BRK and PHP: Break and Unused forced on.
    pub fn pushed_by_software(self) -> u8 {
        (self | Status::BREAK | Status::UNUSED).bits()
    }
}

impl Default for Status {
    /// Power-on / reset value: only the Unused bit.
    fn default() -> Self {
        Status::UNUSED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_zn() {
        let mut status = Status::empty();

        status.set_zn(0x00);
        assert!(status.contains(Status::ZERO));
        assert!(!status.contains(Status::NEGATIVE));

        status.set_zn(0x80);
        assert!(!status.contains(Status::ZERO));
        assert!(status.contains(Status::NEGATIVE));

        status.set_zn(0x7F);
        assert!(status.is_empty());
    }

    #[test]
    fn test_software_push_forces_break_and_unused() {
        let status = Status::CARRY;
        assert_eq!(status.pushed_by_software(), 0b0011_0001);

        // The live value is a copy and stays as it was
        assert_eq!(status, Status::CARRY);
    }

    #[test]
    fn test_default_is_unused_only() {
        assert_eq!(Status::default().bits(), 0x20);
    }
}
