//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from a
//! specific memory map, plus the `SystemMemory` implementation that models the
//! emulated machine's address space:
//!
//! - `0x0000-0x1FFF`: internal RAM, 2KB of physical storage mirrored every
//!   0x0800 bytes (effective address = addr & 0x07FF)
//! - `0x2000-0x3FFF`: stub I/O window mirrored every 8 bytes (mask 0x2007);
//!   reads return 0 and writes are ignored — no peripheral exists
//! - everything else: flat RAM with no side effects
//!
//! ## Design Principles
//!
//! Every access is modeled as fallible even though `SystemMemory` covers the
//! full 16-bit address space and can never actually fail. The `Result`
//! signatures keep the contract explicit for alternative bus implementations
//! (partial maps, ROM windows) and let handlers propagate faults with `?`.

use std::fmt;

/// A memory access that could not be completed.
///
/// Carries the address that faulted. For the provided `SystemMemory` this is
/// unreachable; custom `MemoryBus` implementations with partial coverage may
/// return it from either access direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryError {
    /// The address whose access failed.
    pub addr: u16,
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "memory access failed at 0x{:04X}", self.addr)
    }
}

impl std::error::Error for MemoryError {}

/// Memory bus trait for CPU byte accesses.
///
/// Implementations provide the memory backend for the CPU. All CPU memory
/// traffic (program fetches, operand reads, stack, stores) goes through this
/// abstraction.
///
/// # Design
///
/// - `read(&self)`: immutable reference allows shared reads
/// - `write(&mut self)`: mutable reference makes side effects explicit
/// - Both return `Result`: accesses are bounds-checked and fallible, though
///   a full-coverage implementation never fails in practice
///
/// # Examples
///
/// ```
/// use emu6502::{MemoryBus, SystemMemory};
///
/// let mut mem = SystemMemory::new();
/// mem.write(0x1234, 0x42).unwrap();
/// assert_eq!(mem.read(0x1234).unwrap(), 0x42);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    fn read(&self, addr: u16) -> Result<u8, MemoryError>;

    /// Writes a byte to the specified 16-bit address.
    fn write(&mut self, addr: u16, value: u8) -> Result<(), MemoryError>;

    /// Reads a 16-bit little-endian word: low byte at `addr`, high byte at
    /// `addr + 1` (wrapping).
    fn read_u16(&self, addr: u16) -> Result<u16, MemoryError> {
        let lo = self.read(addr)? as u16;
        let hi = self.read(addr.wrapping_add(1))? as u16;
        Ok((hi << 8) | lo)
    }

    /// Writes a 16-bit word little-endian: low byte first.
    fn write_u16(&mut self, addr: u16, value: u16) -> Result<(), MemoryError> {
        self.write(addr, (value & 0xFF) as u8)?;
        self.write(addr.wrapping_add(1), (value >> 8) as u8)
    }
}

/// Size of the physical RAM behind the mirrored low region.
const RAM_SIZE: usize = 0x0800;

/// Last address of the mirrored RAM window.
const RAM_MIRROR_END: u16 = 0x1FFF;

/// Last address of the stub I/O window.
const IO_MIRROR_END: u16 = 0x3FFF;

/// The 2KB internal RAM mirrored across `0x0000-0x1FFF`.
///
/// Physical storage is 2KB; the 8KB window maps onto it by masking the
/// address with `0x07FF`, so e.g. `0x0005`, `0x0805`, `0x1005` and `0x1805`
/// all name the same cell.
pub struct Ram {
    data: Box<[u8; RAM_SIZE]>,
}

impl Ram {
    pub fn new() -> Self {
        Self {
            data: Box::new([0; RAM_SIZE]),
        }
    }

    /// Reads through the mirror mask.
    pub fn read(&self, addr: u16) -> u8 {
        self.data[(addr & 0x07FF) as usize]
    }

    /// Writes through the mirror mask.
    pub fn write(&mut self, addr: u16, value: u8) {
        self.data[(addr & 0x07FF) as usize] = value;
    }
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}

/// Full 64KB address space for the emulated machine.
///
/// The low 8KB window delegates to the mirrored [`Ram`]; the `0x2000-0x3FFF`
/// window is a deliberately unimplemented I/O stub (reads 0, writes dropped);
/// all remaining addresses map directly into a flat array.
///
/// # Examples
///
/// ```
/// use emu6502::{MemoryBus, SystemMemory};
///
/// let mut mem = SystemMemory::new();
///
/// // 0x0005 and 0x0805 are mirrors of the same RAM cell
/// mem.write(0x0005, 0x99).unwrap();
/// assert_eq!(mem.read(0x0805).unwrap(), 0x99);
///
/// // The I/O window is a stub
/// mem.write(0x2001, 0x55).unwrap();
/// assert_eq!(mem.read(0x2001).unwrap(), 0x00);
/// ```
pub struct SystemMemory {
    ram: Ram,
    /// Flat storage for everything above the mirrored windows.
    data: Box<[u8; 0x10000]>,
}

impl SystemMemory {
    /// Creates a zero-filled address space.
    pub fn new() -> Self {
        Self {
            ram: Ram::new(),
            data: Box::new([0; 0x10000]),
        }
    }
}

impl Default for SystemMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for SystemMemory {
    fn read(&self, addr: u16) -> Result<u8, MemoryError> {
        match addr {
            0..=RAM_MIRROR_END => Ok(self.ram.read(addr)),
            // Stub I/O register, mirrored every 8 bytes (mask 0x2007).
            // No peripheral is mapped here.
            0x2000..=IO_MIRROR_END => Ok(0),
            _ => Ok(self.data[addr as usize]),
        }
    }

    fn write(&mut self, addr: u16, value: u8) -> Result<(), MemoryError> {
        match addr {
            0..=RAM_MIRROR_END => {
                self.ram.write(addr, value);
                Ok(())
            }
            0x2000..=IO_MIRROR_END => Ok(()),
            _ => {
                self.data[addr as usize] = value;
                Ok(())
            }
        }
    }
}
