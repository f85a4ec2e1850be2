//! # Status Register Flags
//!
//! Bit constants for the 6502 status register and the flag helpers shared by
//! the instruction handlers.
//!
//! Bit layout (NV-BDIZC):
//! - Bit 7: N (Negative)
//! - Bit 6: V (Overflow)
//! - Bit 5: unused, always 1
//! - Bit 4: B (Break)
//! - Bit 3: D (Decimal — stored, never consulted by arithmetic)
//! - Bit 2: I (Interrupt disable)
//! - Bit 1: Z (Zero)
//! - Bit 0: C (Carry)
//!
//! Most handlers only touch Zero and Negative via [`CPU::update_zn`]; Carry
//! and Overflow are assigned only by the handlers that define them (shifts,
//! ADC/SBC, compares, BIT).

use crate::{MemoryBus, CPU};

/// Carry flag (bit 0).
pub const CARRY: u8 = 0b0000_0001;

/// Zero flag (bit 1).
pub const ZERO: u8 = 0b0000_0010;

/// Interrupt disable flag (bit 2).
pub const INTERRUPT_DISABLE: u8 = 0b0000_0100;

/// Decimal mode flag (bit 3). Stored only; BCD arithmetic is not emulated.
pub const DECIMAL: u8 = 0b0000_1000;

/// Break flag (bit 4).
pub const BREAK: u8 = 0b0001_0000;

/// Unused flag (bit 5). Held at 1 on every status write.
pub const UNUSED: u8 = 0b0010_0000;

/// Overflow flag (bit 6).
pub const OVERFLOW: u8 = 0b0100_0000;

/// Negative flag (bit 7).
pub const NEGATIVE: u8 = 0b1000_0000;

impl<M: MemoryBus> CPU<M> {
    /// Returns true if all bits of `mask` are set in the status register.
    pub fn is_flag_set(&self, mask: u8) -> bool {
        self.status & mask != 0
    }

    /// Sets or clears the status bits in `mask` based on `value`.
    ///
    /// The unused bit stays forced to 1 regardless of the mask.
    pub fn assign_flag(&mut self, mask: u8, value: bool) {
        if value {
            self.status |= mask;
        } else {
            self.status &= !mask;
        }
        self.status |= UNUSED;
    }

    /// Generic Zero/Negative update applied by most handlers:
    /// Zero = (result == 0), Negative = bit 7 of result.
    pub fn update_zn(&mut self, result: u8) {
        self.assign_flag(ZERO, result == 0);
        self.assign_flag(NEGATIVE, result & 0x80 != 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SystemMemory;

    fn cpu() -> CPU<SystemMemory> {
        CPU::new(SystemMemory::new())
    }

    #[test]
    fn test_assign_flag_set_and_clear() {
        let mut cpu = cpu();

        cpu.assign_flag(CARRY, true);
        assert!(cpu.is_flag_set(CARRY));

        cpu.assign_flag(CARRY, false);
        assert!(!cpu.is_flag_set(CARRY));
    }

    #[test]
    fn test_unused_bit_survives_every_flag_write() {
        let mut cpu = cpu();

        cpu.assign_flag(CARRY | ZERO | NEGATIVE, false);
        assert!(cpu.is_flag_set(UNUSED));

        cpu.set_status(0x00);
        assert!(cpu.is_flag_set(UNUSED));
    }

    #[test]
    fn test_update_zn_zero_result() {
        let mut cpu = cpu();

        cpu.update_zn(0x00);
        assert!(cpu.is_flag_set(ZERO));
        assert!(!cpu.is_flag_set(NEGATIVE));
    }

    #[test]
    fn test_update_zn_negative_result() {
        let mut cpu = cpu();

        cpu.update_zn(0x80);
        assert!(!cpu.is_flag_set(ZERO));
        assert!(cpu.is_flag_set(NEGATIVE));
    }

    #[test]
    fn test_update_zn_positive_result() {
        let mut cpu = cpu();

        cpu.update_zn(0x7F);
        assert!(!cpu.is_flag_set(ZERO));
        assert!(!cpu.is_flag_set(NEGATIVE));
    }
}
