//! # Stack Discipline
//!
//! The 6502 stack lives in the fixed page `0x0100-0x01FF` and grows
//! downward. The stack pointer is an 8-bit offset into that page; overflow
//! and underflow wrap silently at the page boundary, exactly as the hardware
//! does — wrapping is not an error.
//!
//! 16-bit pushes (JSR, and the return path of RTS/RTI) are two byte
//! operations with the high byte pushed first, so the low byte pops first.

use crate::{MemoryBus, MemoryError, CPU};

/// Base address of the stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Power-on/reset value of the stack pointer.
pub const STACK_RESET: u8 = 0xFF;

impl<M: MemoryBus> CPU<M> {
    /// Pushes a byte: writes at `0x0100 + SP`, then decrements SP with
    /// wraparound.
    pub fn push(&mut self, value: u8) -> Result<(), MemoryError> {
        self.write(STACK_BASE + self.sp as u16, value)?;
        self.sp = self.sp.wrapping_sub(1);
        Ok(())
    }

    /// Pulls a byte: increments SP with wraparound, then reads at
    /// `0x0100 + SP`.
    pub fn pull(&mut self) -> Result<u8, MemoryError> {
        self.sp = self.sp.wrapping_add(1);
        self.read(STACK_BASE + self.sp as u16)
    }

    /// Pushes a word, high byte first.
    pub fn push_u16(&mut self, value: u16) -> Result<(), MemoryError> {
        self.push((value >> 8) as u8)?;
        self.push((value & 0xFF) as u8)
    }

    /// Pulls a word: low byte first, then high byte.
    pub fn pull_u16(&mut self) -> Result<u16, MemoryError> {
        let lo = self.pull()? as u16;
        let hi = self.pull()? as u16;
        Ok((hi << 8) | lo)
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
    fn test_push_pull_round_trip() {
        let mut cpu = cpu();
        let sp_before = cpu.sp();

        cpu.push(0x42).unwrap();
        assert_eq!(cpu.sp(), sp_before.wrapping_sub(1));

        assert_eq!(cpu.pull().unwrap(), 0x42);
        assert_eq!(cpu.sp(), sp_before);
    }

    #[test]
    fn test_push_writes_into_stack_page() {
        let mut cpu = cpu();

        cpu.push(0x99).unwrap();
        assert_eq!(cpu.read(0x01FF).unwrap(), 0x99);
    }

    #[test]
    fn test_push_wraps_at_zero() {
        let mut cpu = cpu();
        cpu.set_sp(0x00);

        cpu.push(0x11).unwrap();

        assert_eq!(cpu.read(0x0100).unwrap(), 0x11);
        assert_eq!(cpu.sp(), 0xFF);
    }

    #[test]
    fn test_pull_wraps_at_page_top() {
        let mut cpu = cpu();
        cpu.set_sp(0xFF);
        cpu.write(0x0100, 0x77).unwrap();

        assert_eq!(cpu.pull().unwrap(), 0x77);
        assert_eq!(cpu.sp(), 0x00);
    }

    #[test]
    fn test_u16_push_order_high_then_low() {
        let mut cpu = cpu();

        cpu.push_u16(0x1234).unwrap();

        // High byte lands at the higher address
        assert_eq!(cpu.read(0x01FF).unwrap(), 0x12);
        assert_eq!(cpu.read(0x01FE).unwrap(), 0x34);

        assert_eq!(cpu.pull_u16().unwrap(), 0x1234);
    }
}
